// Shared interaction/visual tuning constants used by the web frontend and the
// host-side tests.

// Cursor position spring (matches the ring's eased follow behavior).
// Overdamped: critical damping for these values is ~17.9, so the displayed
// position approaches the target without overshoot.
pub const CURSOR_SPRING_STIFFNESS: f32 = 200.0;
pub const CURSOR_SPRING_DAMPING: f32 = 25.0;
pub const CURSOR_SPRING_MASS: f32 = 0.4;

// Integration substep cap; rAF gaps can stretch to seconds in background
// tabs and the spring update is only stable for small steps.
pub const SPRING_MAX_STEP_SECS: f32 = 1.0 / 120.0;
pub const FRAME_DT_CLAMP_SECS: f32 = 0.25;

// Resting position before the first pointer sample arrives.
pub const CURSOR_PARKED: [f32; 2] = [-100.0, -100.0];

// Particle trail
pub const PARTICLE_SPAWN_GATE: f32 = 0.85; // spawn when a uniform draw exceeds this
pub const PARTICLE_WINDOW: usize = 9; // most recent entries retained (8 previous + 1 new)
pub const PARTICLE_EVICT_DELAY_MS: i32 = 500; // oldest-entry removal timer
pub const PARTICLE_FADE_MS: u32 = 600; // visual fade-out; does not drive data eviction
pub const PARTICLE_SCALE_MIN: f32 = 0.5;
pub const PARTICLE_SCALE_SPAN: f32 = 0.5;
pub const PARTICLE_OPACITY_MIN: f32 = 0.3;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.5;

// Cursor render variants per interaction mode
pub const RING_SCALE_IDLE: f32 = 1.0;
pub const RING_SCALE_HOVER: f32 = 1.5;
pub const RING_SCALE_CLICK: f32 = 0.8;
pub const RING_OPACITY_IDLE: f32 = 0.5;
pub const RING_OPACITY_HOVER: f32 = 0.8;
pub const DOT_SCALE_IDLE: f32 = 1.0;
pub const DOT_SCALE_CLICK: f32 = 0.5;
pub const GLOW_SCALE_IDLE: f32 = 1.0;
pub const GLOW_SCALE_HOVER: f32 = 1.3;
pub const GLOW_SCALE_CLICK: f32 = 1.2;
pub const RIPPLE_DURATION_MS: u32 = 500; // one-shot expanding ring

// Navigation / scroll-spy
pub const NAV_SCROLLED_AFTER_PX: f64 = 50.0; // navbar switches to its scrolled treatment
pub const SCROLLSPY_PROBE_PX: f32 = 100.0; // viewport offset a section must cross to be active
pub const REVEAL_TRIGGER_FRACTION: f32 = 0.85; // section reveals once its top rises above this share of the viewport

// Hero typewriter
pub const TYPEWRITER_STEP_MS: i32 = 100;
