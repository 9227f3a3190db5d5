//! Immutable display data for every page section.
//!
//! These tables are read once while the page DOM is built and never mutated
//! afterwards. Anchors in `NAV_ITEMS` and `SECTION_IDS` are the sole contract
//! between the navigation bar and the sections it targets.

/// Section ids in document order; scroll-spy resolves against this order.
pub const SECTION_IDS: [&str; 5] = ["home", "about", "projects", "blog", "contact"];

#[derive(Clone, Copy, Debug)]
pub struct NavItem {
    pub name: &'static str,
    pub anchor: &'static str,
    pub glyph: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        name: "Home",
        anchor: "home",
        glyph: "~/",
    },
    NavItem {
        name: "About",
        anchor: "about",
        glyph: "</>",
    },
    NavItem {
        name: "Projects",
        anchor: "projects",
        glyph: "{}",
    },
    NavItem {
        name: "Blog",
        anchor: "blog",
        glyph: "[]",
    },
    NavItem {
        name: "Contact",
        anchor: "contact",
        glyph: ">_",
    },
];

// Hero
pub const BRAND_TAG: &str = "<FardinMahadi />";
pub const HERO_WINDOW_TITLE: &str = "~/portfolio/dev.ts";
pub const TYPEWRITER_TEXT: &str = "FardinMahadi";
pub const HERO_TAGLINE: &str = "Building interactive web experiences with MERN & beyond.";

// About
pub const ABOUT_LEAD: &str = "I'm a full-stack developer passionate about creating seamless web \
     experiences. With expertise in the MERN stack and modern frameworks like Next.js, I \
     transform ideas into robust, scalable applications.";
pub const ABOUT_FOLLOWUP: &str = "My approach combines clean code architecture with cutting-edge \
     technologies, ensuring every project is performant, maintainable, and user-focused.";
pub const AVAILABILITY_NOTE: &str = "Available for new projects";

#[derive(Clone, Copy, Debug)]
pub struct TechEntry {
    pub name: &'static str,
    pub icon: &'static str,
    /// Accent token; the stylesheet maps it to the tile's hover gradient.
    pub accent: &'static str,
}

pub const TECH_STACK: [TechEntry; 8] = [
    TechEntry {
        name: "React",
        icon: "/Icons/reactjs.png",
        accent: "cyan-blue",
    },
    TechEntry {
        name: "Node.js",
        icon: "/Icons/nodejs.png",
        accent: "green-emerald",
    },
    TechEntry {
        name: "MongoDB",
        icon: "/Icons/mongodb.png",
        accent: "green-deep",
    },
    TechEntry {
        name: "Express",
        icon: "/Icons/express.png",
        accent: "gray",
    },
    TechEntry {
        name: "Next.js",
        icon: "/Icons/nextjs.png",
        accent: "slate",
    },
    TechEntry {
        name: "TypeScript",
        icon: "/Icons/ts.png",
        accent: "blue",
    },
    TechEntry {
        name: "TailwindCSS",
        icon: "/Icons/tailwind.png",
        accent: "cyan-teal",
    },
    TechEntry {
        name: "PostgreSQL",
        icon: "/Icons/PostgreSQL.png",
        accent: "blue-deep",
    },
];

// Projects
pub const PROJECTS_INTRO: &str = "A collection of projects showcasing my expertise in full-stack \
     development, from concept to deployment.";

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: [&'static str; 4],
    pub image_url: &'static str,
    pub image_width: u32,
    pub image_height: u32,
    pub live_url: &'static str,
    pub code_url: &'static str,
}

impl Project {
    /// Terminal-chrome path shown above the card, e.g. `~/e-commerce-platform`.
    pub fn terminal_path(&self) -> String {
        let slug: String = self
            .title
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        format!("~/{slug}")
    }
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "E-Commerce Platform",
        description: "Full-stack shopping platform with real-time inventory, payment integration, \
             and admin dashboard.",
        tags: ["React", "Node.js", "MongoDB", "Stripe"],
        image_url: "https://images.unsplash.com/photo-1759752394397-3c745feb24e0?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxlLWNvbW1lcmNlJTIwaW50ZXJmYWNlfGVufDF8fHx8MTc2MTA1MDI2NXww&ixlib=rb-4.1.0&q=80&w=1080",
        image_width: 1080,
        image_height: 720,
        live_url: "#",
        code_url: "#",
    },
    Project {
        title: "Analytics Dashboard",
        description: "Data visualization dashboard with real-time metrics, custom charts, and \
             export functionality.",
        tags: ["Next.js", "TypeScript", "PostgreSQL", "D3.js"],
        image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxkYXNoYm9hcmQlMjBhbmFseXRpY3N8ZW58MXx8fHwxNzYxMDQxNDk4fDA&ixlib=rb-4.1.0&q=80&w=1080",
        image_width: 1080,
        image_height: 720,
        live_url: "#",
        code_url: "#",
    },
    Project {
        title: "Task Management App",
        description: "Collaborative task manager with drag-and-drop, real-time updates, and team \
             workspaces.",
        tags: ["React", "Express", "Socket.io", "TailwindCSS"],
        image_url: "https://images.unsplash.com/photo-1603985585179-3d71c35a537c?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHx3ZWIlMjBkZXZlbG9wbWVudCUyMHdvcmtzcGFjZXxlbnwxfHx8fDE3NjEwMjEyNzJ8MA&ixlib=rb-4.1.0&q=80&w=1080",
        image_width: 1080,
        image_height: 720,
        live_url: "#",
        code_url: "#",
    },
    Project {
        title: "Mobile Banking UI",
        description: "Modern banking interface with transaction history, card management, and \
             biometric authentication.",
        tags: ["React Native", "TypeScript", "Node.js", "JWT"],
        image_url: "https://images.unsplash.com/photo-1609921212029-bb5a28e60960?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxtb2JpbGUlMjBhcHAlMjBkZXNpZ258ZW58MXx8fHwxNzYwOTg0NzQ4fDA&ixlib=rb-4.1.0&q=80&w=1080",
        image_width: 1080,
        image_height: 720,
        live_url: "#",
        code_url: "#",
    },
];

// Blog
pub const BLOG_INTRO: &str = "Sharing insights on web development, best practices, and lessons \
     learned from building production applications.";

#[derive(Clone, Copy, Debug)]
pub struct BlogPost {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
}

pub const BLOG_POSTS: [BlogPost; 4] = [
    BlogPost {
        title: "Building Scalable APIs with Node.js and Express",
        excerpt: "Best practices for designing RESTful APIs that scale, including middleware \
             patterns, error handling, and security considerations.",
        date: "Oct 15, 2024",
        read_time: "8 min read",
        category: "Backend",
    },
    BlogPost {
        title: "State Management in React: Context vs Redux",
        excerpt: "A comprehensive comparison of state management solutions, when to use each, and \
             performance optimization techniques.",
        date: "Sep 28, 2024",
        read_time: "12 min read",
        category: "React",
    },
    BlogPost {
        title: "TypeScript Tips for Better Code Quality",
        excerpt: "Advanced TypeScript patterns and utilities that improve type safety, code \
             maintainability, and developer experience.",
        date: "Sep 10, 2024",
        read_time: "6 min read",
        category: "TypeScript",
    },
    BlogPost {
        title: "Optimizing Next.js for Production",
        excerpt: "Performance optimization strategies including image optimization, code \
             splitting, and server-side rendering best practices.",
        date: "Aug 22, 2024",
        read_time: "10 min read",
        category: "Next.js",
    },
];

// Contact
pub const CONTACT_INTRO: &str = "Have a project in mind or want to discuss opportunities? I'm \
     always open to new challenges and collaborations.";
pub const CONTACT_FORM_TITLE: &str = "contact-form.tsx";

#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub name: &'static str,
    pub username: &'static str,
    pub url: &'static str,
    pub accent: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "GitHub",
        username: "FardinMahadi",
        url: "https://github.com/FardinMahadi/",
        accent: "slate",
    },
    SocialLink {
        name: "LinkedIn",
        username: "mahadi-hasan-fardin",
        url: "https://www.linkedin.com/in/mahadi-hasan-fardin",
        accent: "blue",
    },
    SocialLink {
        name: "Email",
        username: "mahadihasanfardin",
        url: "mailto:mahadihasanfardin2015@gmail.com",
        accent: "cyan",
    },
];

/// `$ cat status.txt` panel: (label, value, label accent token).
pub const CONTACT_STATUS_LINES: [(&str, &str, &str); 3] = [
    ("Location:", "Remote / Dhaka / Cumilla", "cyan"),
    ("Availability:", "Open to opportunities", "violet"),
    ("Response Time:", "< 24 hours", "pink"),
];

// Footer
pub const FOOTER_CREDIT: &str = "Built with \u{2764} using Rust, WebAssembly & web-sys";
pub const FOOTER_OWNER: &str = "FardinMahadi";

// Mobile menu terminal prompt
pub const WHOAMI_COMMAND: &str = "$ whoami";
pub const WHOAMI_ANSWER: &str = "Fardin - MERN Developer";
