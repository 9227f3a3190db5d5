pub mod constants;
pub mod content;
pub mod cursor;
pub mod hover;
pub mod images;
pub mod particles;
pub mod scrollspy;
pub mod spring;
pub mod typewriter;
pub mod visuals;

pub use constants::*;
pub use content::*;
pub use cursor::*;
pub use hover::*;
pub use images::*;
pub use particles::*;
pub use scrollspy::*;
pub use spring::*;
pub use typewriter::*;
pub use visuals::*;
