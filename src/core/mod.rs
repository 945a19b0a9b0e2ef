pub mod constants;
pub mod counter;
pub mod easing;
pub mod error;
pub mod keys;
pub mod loader;
pub mod particles;
pub mod quicknav;
pub mod reveal;
pub mod scroll;
pub mod sections;
pub mod state;
pub mod theme;
pub mod tilt;
pub mod visual;

pub use counter::{parse_count, CounterAnimation, CounterBoard};
pub use easing::{ease_in_out_cubic, ScrollSample, SmoothScroll};
pub use error::FxError;
pub use keys::{command_for_key, KeyCommand, Modifiers};
pub use loader::{random_increment, LoadStep, LoadingProgress};
pub use particles::{ParticleSpec, Ripple, TrailDot};
pub use quicknav::{DismissTrigger, Dismissal, QuickNav};
pub use reveal::RevealStyle;
pub use scroll::{section_at_probe, GlassBlur, NavBackground, Parallax, SectionSpan};
pub use sections::Section;
pub use state::{FxParams, FxState};
pub use theme::Theme;
pub use tilt::{Bounds, Tilt};
pub use visual::{StyleDecls, VisualState};
