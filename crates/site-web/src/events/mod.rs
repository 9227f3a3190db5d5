pub mod pointer;
pub mod scroll;

pub use pointer::wire_pointer_handlers;
pub use scroll::wire_scroll_handlers;
