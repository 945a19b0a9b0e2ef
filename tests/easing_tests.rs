// Host-side tests for the cubic easing curve and smooth scroll sampling.

#![allow(dead_code)]
mod core {
    pub mod easing {
        include!("../src/core/easing.rs");
    }
}

use crate::core::easing::*;

#[test]
fn curve_hits_endpoints_and_midpoint() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert_eq!(ease_in_out_cubic(1.0), 1.0);
    assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-12);
}

#[test]
fn first_half_is_cubic_ease_in() {
    for i in 0..50 {
        let t = i as f64 / 100.0;
        assert!((ease_in_out_cubic(t) - 4.0 * t * t * t).abs() < 1e-12, "t={t}");
    }
}

#[test]
fn curve_is_point_symmetric() {
    for i in 0..=100 {
        let t = i as f64 / 100.0;
        let a = ease_in_out_cubic(t);
        let b = ease_in_out_cubic(1.0 - t);
        assert!((a + b - 1.0).abs() < 1e-12, "t={t}: {a} + {b}");
    }
}

#[test]
fn curve_is_monotonic_and_clamped() {
    let mut prev = ease_in_out_cubic(0.0);
    for i in 1..=1000 {
        let v = ease_in_out_cubic(i as f64 / 1000.0);
        assert!(v >= prev);
        prev = v;
    }
    assert_eq!(ease_in_out_cubic(-1.0), 0.0);
    assert_eq!(ease_in_out_cubic(2.0), 1.0);
}

#[test]
fn span_form_matches_classic_formula() {
    // t /= d/2; t<1: c/2*t^3 + b; else t-=2: c/2*(t^3+2) + b
    let classic = |t: f64, b: f64, c: f64, d: f64| {
        let mut t = t / (d / 2.0);
        if t < 1.0 {
            return c / 2.0 * t * t * t + b;
        }
        t -= 2.0;
        c / 2.0 * (t * t * t + 2.0) + b
    };
    for i in 0..=80 {
        let t = i as f64 * 10.0;
        let ours = ease_in_out_cubic_span(t, 120.0, -900.0, 800.0);
        assert!((ours - classic(t, 120.0, -900.0, 800.0)).abs() < 1e-9, "t={t}");
    }
    assert_eq!(ease_in_out_cubic_span(5.0, 10.0, 20.0, 0.0), 30.0);
}

#[test]
fn smooth_scroll_latches_start_on_first_frame() {
    let mut run = SmoothScroll::new(0.0, 1000.0, 800.0);
    let first = run.sample(5_000.0);
    assert_eq!(first.position, 0.0);
    assert!(!first.done);

    let mid = run.sample(5_400.0);
    assert!((mid.position - 500.0).abs() < 1e-9);
    assert!(!mid.done);
}

#[test]
fn smooth_scroll_lands_exactly_on_target() {
    let mut run = SmoothScroll::new(2400.0, 300.0, 800.0);
    let mut now = 0.0;
    let mut last = run.sample(now);
    let mut frames = 1;
    while !last.done {
        now += 16.7;
        last = run.sample(now);
        frames += 1;
        assert!(frames < 1000);
    }
    assert_eq!(last.position, 300.0);
    assert_eq!(run.target(), 300.0);
    // ~48 frames at 60Hz for 800ms
    assert!((45..=52).contains(&frames), "frames={frames}");
}

#[test]
fn smooth_scroll_upward_moves_monotonically() {
    let mut run = SmoothScroll::new(1000.0, 0.0, 800.0);
    let mut prev = f64::INFINITY;
    for i in 0..=50 {
        let s = run.sample(i as f64 * 16.0);
        assert!(s.position <= prev);
        prev = s.position;
    }
}
