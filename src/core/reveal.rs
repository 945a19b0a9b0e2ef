use super::constants::{REVEAL_DISTANCE_PX, REVEAL_IN_VIEW_FRACTION, REVEAL_TRANSITION};
use super::visual::{translate_y, StyleDecls, VisualState};
use smallvec::smallvec;

/// Presentation of a section given how much of it is inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    pub offset_px: f64,
    pub in_view: bool,
}

impl RevealStyle {
    /// `opacity = f`, `offset = (1 - f) * 30`, in-view iff `f > 0.5`.
    ///
    /// The in-view flag is a plain threshold: an element hovering around
    /// half visibility flips on every notification.
    pub fn from_fraction(fraction: f64) -> Self {
        let f = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        Self {
            opacity: f,
            offset_px: (1.0 - f) * REVEAL_DISTANCE_PX,
            in_view: f > REVEAL_IN_VIEW_FRACTION,
        }
    }

    /// Fully hidden state applied before the first notification.
    pub fn hidden() -> Self {
        Self::from_fraction(0.0)
    }

    /// Whether opacity/offset should be written. A zero fraction keeps the
    /// element where it was.
    pub fn writes_motion(&self) -> bool {
        self.opacity > 0.0
    }

    /// Declarations for the initial hidden state including the transition.
    pub fn initial_decls() -> StyleDecls {
        let mut decls = Self::hidden().decls();
        decls.push(("transition", REVEAL_TRANSITION.to_string()));
        decls
    }
}

impl VisualState for RevealStyle {
    fn decls(&self) -> StyleDecls {
        smallvec![
            ("opacity", format!("{}", self.opacity)),
            ("transform", translate_y(self.offset_px)),
        ]
    }
}
