use super::constants::{
    TILT_DIVISOR, TILT_LIFT_PX, TILT_MAX_DEG, TILT_PERSPECTIVE_PX, TILT_REST_SHADOW, TILT_SCALE,
    TILT_SHADOW_GAIN,
};
use super::visual::{deg, px, StyleDecls, VisualState};
use glam::DVec2;
use smallvec::smallvec;

/// Client-space bounding box of an element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// 3D tilt of a card following the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    /// Clamped rotation about X in degrees.
    pub rotate_x: f64,
    /// Clamped rotation about Y in degrees.
    pub rotate_y: f64,
    // unclamped, drives the shadow direction
    raw_x: f64,
    raw_y: f64,
    lifted: bool,
}

impl Tilt {
    /// Tilt for a pointer sample. Pointer below center tips the top edge
    /// away (positive X), pointer right of center turns the card right
    /// (negative Y).
    pub fn from_pointer(pointer: DVec2, bounds: Bounds) -> Self {
        let c = bounds.center();
        let raw_x = (pointer.y - c.y) / TILT_DIVISOR;
        let raw_y = (c.x - pointer.x) / TILT_DIVISOR;
        Self {
            rotate_x: raw_x.clamp(-TILT_MAX_DEG, TILT_MAX_DEG),
            rotate_y: raw_y.clamp(-TILT_MAX_DEG, TILT_MAX_DEG),
            raw_x,
            raw_y,
            lifted: true,
        }
    }

    /// Identity transform with the default shadow.
    pub fn rest() -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
            raw_x: 0.0,
            raw_y: 0.0,
            lifted: false,
        }
    }

    pub fn is_rest(&self) -> bool {
        !self.lifted
    }

    pub fn transform_css(&self) -> String {
        let (lift, scale) = if self.lifted {
            (TILT_LIFT_PX, TILT_SCALE)
        } else {
            (0.0, 1.0)
        };
        format!(
            "perspective({}) rotateX({}) rotateY({}) translateZ({}) scale({})",
            px(TILT_PERSPECTIVE_PX),
            deg(self.rotate_x),
            deg(self.rotate_y),
            px(lift),
            scale
        )
    }

    pub fn shadow_css(&self) -> String {
        if !self.lifted {
            return TILT_REST_SHADOW.to_string();
        }
        format!(
            "{} {} 40px rgba(0, 0, 0, 0.4), inset 0 1px 0 rgba(255, 255, 255, 0.1)",
            px(self.raw_y * TILT_SHADOW_GAIN),
            px(self.raw_x * TILT_SHADOW_GAIN)
        )
    }
}

impl VisualState for Tilt {
    fn decls(&self) -> StyleDecls {
        smallvec![
            ("transform", self.transform_css()),
            ("box-shadow", self.shadow_css()),
        ]
    }
}
