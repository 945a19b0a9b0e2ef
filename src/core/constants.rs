// Shared tuning constants for the page effects.

// Loading sequence
pub const LOADER_TICK_MS: i32 = 100;
pub const LOADER_MAX_INCREMENT: f64 = 15.0;
pub const LOADER_COMPLETE: f64 = 100.0;
pub const LOADER_FADE_DELAY_MS: i32 = 500; // full bar -> fade
pub const LOADER_HIDE_DELAY_MS: i32 = 500; // fade -> display:none

// Reveal-on-scroll
pub const REVEAL_DISTANCE_PX: f64 = 30.0;
pub const REVEAL_IN_VIEW_FRACTION: f64 = 0.5; // strictly greater flips in-view
pub const REVEAL_THRESHOLDS: [f64; 4] = [0.0, 0.1, 0.5, 1.0];
pub const REVEAL_ROOT_MARGIN: &str = "-50px 0px";
pub const REVEAL_TRANSITION: &str =
    "opacity 0.8s cubic-bezier(0.4, 0, 0.2, 1), transform 0.8s cubic-bezier(0.4, 0, 0.2, 1)";

// Statistic counters
pub const COUNTER_FRAMES: u32 = 60;
pub const COUNTER_FRAME_MS: i32 = 16;
pub const COUNTER_TRIGGER_FRACTION: f64 = 0.5;

// Pointer tilt
pub const TILT_DIVISOR: f64 = 10.0; // px of offset per degree
pub const TILT_MAX_DEG: f64 = 15.0;
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;
pub const TILT_LIFT_PX: f64 = 20.0;
pub const TILT_SCALE: f64 = 1.02;
pub const TILT_SHADOW_GAIN: f64 = 2.0;
pub const TILT_REST_SHADOW: &str = "var(--shadow-medium)";

// Smooth scroll
pub const SCROLL_DURATION_MS: f64 = 800.0;
pub const HEADER_OFFSET_PX: f64 = 100.0; // fixed navbar height correction

// Scroll-driven chrome
pub const ACTIVE_PROBE_Y: f64 = 150.0;
pub const NAV_SOLID_AFTER_PX: f64 = 50.0;
pub const HERO_PARALLAX_RATE: f64 = -0.3;
pub const CARD_PARALLAX_STEP: f64 = 0.1;
pub const GLASS_BLUR_BASE_PX: f64 = 20.0;
pub const GLASS_BLUR_SPAN_PX: f64 = 20.0;
pub const GLASS_BLUR_MAX_PX: f64 = 40.0;

// Quick navigation
pub const QUICK_NAV_TIMEOUT_MS: i32 = 10_000;
pub const QUICK_NAV_FADE_MS: i32 = 200;

// Ambient particles
pub const PARTICLE_INITIAL_COUNT: u32 = 20;
pub const PARTICLE_STAGGER_MS: i32 = 200;
pub const PARTICLE_INTERVAL_MS: i32 = 3000;

// Cursor trail and ripple
pub const TRAIL_SIZE_PX: f64 = 6.0;
pub const TRAIL_LIFETIME_MS: i32 = 800;
pub const RIPPLE_LIFETIME_MS: i32 = 600;

// Theme
pub const THEME_TRANSITION: &str = "all 0.5s cubic-bezier(0.4, 0, 0.2, 1)";
pub const THEME_TRANSITION_MS: i32 = 500;

// Layout
pub const DESKTOP_MIN_WIDTH_PX: f64 = 768.0; // trail and menu reset only above this
pub const RESIZE_DEBOUNCE_MS: i32 = 150;
