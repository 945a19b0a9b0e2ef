// Host-side tests for reveal-on-scroll styling.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod visual {
        include!("../src/core/visual.rs");
    }
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
}

use crate::core::reveal::RevealStyle;
use crate::core::visual::VisualState;

#[test]
fn opacity_and_offset_follow_fraction() {
    for i in 0..=100 {
        let f = i as f64 / 100.0;
        let s = RevealStyle::from_fraction(f);
        assert!((s.opacity - f).abs() < 1e-12);
        assert!((s.offset_px - (1.0 - f) * 30.0).abs() < 1e-9, "f={f}");
        assert_eq!(s.in_view, f > 0.5, "f={f}");
    }
}

#[test]
fn in_view_is_a_strict_threshold() {
    assert!(!RevealStyle::from_fraction(0.5).in_view);
    assert!(RevealStyle::from_fraction(0.5001).in_view);
    assert!(!RevealStyle::from_fraction(0.4999).in_view);
}

#[test]
fn in_view_toggles_repeatedly_near_the_boundary() {
    let fractions = [0.49, 0.51, 0.49, 0.51, 0.49];
    let flags: Vec<bool> = fractions
        .iter()
        .map(|f| RevealStyle::from_fraction(*f).in_view)
        .collect();
    assert_eq!(flags, vec![false, true, false, true, false]);
}

#[test]
fn out_of_range_fractions_are_clamped() {
    assert_eq!(RevealStyle::from_fraction(-0.3), RevealStyle::hidden());
    let full = RevealStyle::from_fraction(1.7);
    assert_eq!(full.opacity, 1.0);
    assert_eq!(full.offset_px, 0.0);
    assert_eq!(RevealStyle::from_fraction(f64::NAN), RevealStyle::hidden());
}

#[test]
fn zero_fraction_leaves_motion_alone() {
    assert!(!RevealStyle::from_fraction(0.0).writes_motion());
    assert!(RevealStyle::from_fraction(0.1).writes_motion());
}

#[test]
fn declarations_render_css() {
    let decls = RevealStyle::from_fraction(0.5).decls();
    assert_eq!(decls[0], ("opacity", "0.5".to_string()));
    assert_eq!(decls[1], ("transform", "translateY(15px)".to_string()));

    let full = RevealStyle::from_fraction(1.0).decls();
    assert_eq!(full[1].1, "translateY(0px)");
}

#[test]
fn initial_state_is_hidden_with_transition() {
    let decls = RevealStyle::initial_decls();
    assert_eq!(decls[0], ("opacity", "0".to_string()));
    assert_eq!(decls[1], ("transform", "translateY(30px)".to_string()));
    assert_eq!(decls[2].0, "transition");
    assert!(decls[2].1.contains("opacity 0.8s"));
}
