// Host-side tests for scroll-driven effects: active section probe, navbar
// backdrop, parallax and glass blur.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod visual {
        include!("../src/core/visual.rs");
    }
    pub mod tilt {
        include!("../src/core/tilt.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
}

use crate::core::scroll::*;
use crate::core::tilt::Bounds;
use crate::core::visual::VisualState;

fn span(id: &str, top: f64, bottom: f64) -> SectionSpan {
    SectionSpan {
        id: id.to_string(),
        top,
        bottom,
    }
}

#[test]
fn probe_picks_the_section_under_the_line() {
    let spans = vec![
        span("home", -600.0, 100.0),
        span("features", 100.0, 900.0),
        span("team", 900.0, 1500.0),
    ];
    assert_eq!(section_at_probe(&spans, 150.0), "features");
}

#[test]
fn probe_prefers_the_later_section_on_overlap() {
    let spans = vec![span("home", 0.0, 150.0), span("features", 150.0, 800.0)];
    assert_eq!(section_at_probe(&spans, 150.0), "features");
}

#[test]
fn probe_with_no_match_clears_the_section() {
    let spans = vec![span("home", 300.0, 900.0)];
    assert_eq!(section_at_probe(&spans, 150.0), "");
    assert_eq!(section_at_probe(&[], 150.0), "");
}

#[test]
fn navbar_turns_solid_past_fifty_pixels() {
    assert_eq!(NavBackground::for_scroll(0.0), NavBackground::Translucent);
    assert_eq!(NavBackground::for_scroll(50.0), NavBackground::Translucent);
    assert_eq!(NavBackground::for_scroll(50.5), NavBackground::Solid);

    let solid = NavBackground::Solid.decls();
    assert_eq!(solid[0], ("background", "rgba(10, 10, 10, 0.95)".to_string()));
    let clear = NavBackground::Translucent.decls();
    assert_eq!(clear[1], ("border-color", "var(--glass-border)".to_string()));
}

#[test]
fn parallax_rates() {
    assert!((Parallax::hero(100.0).offset_px + 30.0).abs() < 1e-9);
    assert!((Parallax::floating_card(100.0, 0).offset_px - 10.0).abs() < 1e-9);
    assert!((Parallax::floating_card(100.0, 2).offset_px - 30.0).abs() < 1e-9);
    assert_eq!(
        Parallax::hero(100.0).decls()[0],
        ("transform", "translateY(-30px)".to_string())
    );
}

#[test]
fn blur_grows_with_distance_from_centre() {
    let vh = 800.0;
    // centred element
    let centred = GlassBlur::for_bounds(Bounds::new(0.0, 300.0, 100.0, 200.0), vh);
    assert_eq!(centred.blur_px, 20.0);
    // centre at the top edge: one half-viewport away
    let edge = GlassBlur::for_bounds(Bounds::new(0.0, -100.0, 100.0, 200.0), vh);
    assert_eq!(edge.blur_px, 40.0);
    // far away is capped
    let far = GlassBlur::for_bounds(Bounds::new(0.0, 5000.0, 100.0, 200.0), vh);
    assert_eq!(far.blur_px, 40.0);
    let mid = GlassBlur::for_bounds(Bounds::new(0.0, 100.0, 100.0, 200.0), vh);
    assert_eq!(mid.blur_px, 30.0);
    assert_eq!(mid.decls()[0], ("backdrop-filter", "blur(30px)".to_string()));
}

#[test]
fn blur_with_zero_viewport_is_capped() {
    let b = GlassBlur::for_bounds(Bounds::new(0.0, 0.0, 10.0, 10.0), 0.0);
    assert_eq!(b.blur_px, 40.0);
}
