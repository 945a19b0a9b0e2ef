use super::constants::{
    CARD_PARALLAX_STEP, GLASS_BLUR_BASE_PX, GLASS_BLUR_MAX_PX, GLASS_BLUR_SPAN_PX,
    HERO_PARALLAX_RATE, NAV_SOLID_AFTER_PX,
};
use super::tilt::Bounds;
use super::visual::{px, translate_y, StyleDecls, VisualState};
use smallvec::smallvec;

/// Vertical extent of a `section[id]` in client coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

/// Section under the probe line. When spans overlap the last one in
/// document order wins; no match yields an empty id.
pub fn section_at_probe(spans: &[SectionSpan], probe_y: f64) -> &str {
    spans
        .iter()
        .rev()
        .find(|s| s.top <= probe_y && s.bottom >= probe_y)
        .map(|s| s.id.as_str())
        .unwrap_or("")
}

/// Navigation bar backdrop depending on scroll depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavBackground {
    Translucent,
    Solid,
}

impl NavBackground {
    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > NAV_SOLID_AFTER_PX {
            NavBackground::Solid
        } else {
            NavBackground::Translucent
        }
    }
}

impl VisualState for NavBackground {
    fn decls(&self) -> StyleDecls {
        let (bg, border) = match self {
            NavBackground::Solid => ("rgba(10, 10, 10, 0.95)", "rgba(255, 255, 255, 0.15)"),
            NavBackground::Translucent => ("rgba(10, 10, 10, 0.8)", "var(--glass-border)"),
        };
        smallvec![
            ("background", bg.to_string()),
            ("border-color", border.to_string()),
        ]
    }
}

/// Vertical translation used for parallax layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub offset_px: f64,
}

impl Parallax {
    pub fn hero(scroll_y: f64) -> Self {
        Self {
            offset_px: scroll_y * HERO_PARALLAX_RATE,
        }
    }

    /// Floating card `index` drifts faster the later it appears.
    pub fn floating_card(scroll_y: f64, index: usize) -> Self {
        Self {
            offset_px: scroll_y * (index as f64 + 1.0) * CARD_PARALLAX_STEP,
        }
    }
}

impl VisualState for Parallax {
    fn decls(&self) -> StyleDecls {
        smallvec![("transform", translate_y(self.offset_px))]
    }
}

/// Backdrop blur that grows as an element moves away from the viewport
/// centre, within `[20, 40]` px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlassBlur {
    pub blur_px: f64,
}

impl GlassBlur {
    pub fn for_bounds(bounds: Bounds, viewport_height: f64) -> Self {
        let half = viewport_height / 2.0;
        if half <= 0.0 {
            return Self {
                blur_px: GLASS_BLUR_MAX_PX,
            };
        }
        let distance = (half - bounds.center().y).abs();
        let blur = (distance / half) * GLASS_BLUR_SPAN_PX + GLASS_BLUR_BASE_PX;
        Self {
            blur_px: blur.min(GLASS_BLUR_MAX_PX),
        }
    }
}

impl VisualState for GlassBlur {
    fn decls(&self) -> StyleDecls {
        let filter = format!("blur({})", px(self.blur_px));
        smallvec![
            ("backdrop-filter", filter.clone()),
            ("-webkit-backdrop-filter", filter),
        ]
    }
}
