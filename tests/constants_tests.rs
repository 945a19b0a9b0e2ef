// Host-side checks on the tuning constants and how they relate.
// The main crate is wasm-only, so the pure modules are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive() {
    assert!(LOADER_TICK_MS > 0);
    assert!(COUNTER_FRAME_MS > 0);
    assert!(SCROLL_DURATION_MS > 0.0);
    assert!(QUICK_NAV_FADE_MS > 0);
    assert!(PARTICLE_INTERVAL_MS > 0);
    assert!(RESIZE_DEBOUNCE_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn quick_nav_fade_is_shorter_than_its_timeout() {
    assert!(QUICK_NAV_FADE_MS < QUICK_NAV_TIMEOUT_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn startup_particles_are_seeded_before_the_first_interval_spawn() {
    let last = (PARTICLE_INITIAL_COUNT as i32 - 1) * PARTICLE_STAGGER_MS;
    assert!(last > 0);
    assert!(PARTICLE_STAGGER_MS < PARTICLE_INTERVAL_MS);
}

#[test]
fn reveal_thresholds_are_sorted_and_include_the_in_view_edge() {
    assert!(REVEAL_THRESHOLDS.windows(2).all(|w| w[0] < w[1]));
    assert!(REVEAL_THRESHOLDS.contains(&REVEAL_IN_VIEW_FRACTION));
    assert!(REVEAL_THRESHOLDS.contains(&COUNTER_TRIGGER_FRACTION));
    assert_eq!(REVEAL_THRESHOLDS[0], 0.0);
    assert_eq!(REVEAL_THRESHOLDS[REVEAL_THRESHOLDS.len() - 1], 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn blur_range_is_consistent() {
    assert_eq!(GLASS_BLUR_BASE_PX + GLASS_BLUR_SPAN_PX, GLASS_BLUR_MAX_PX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tilt_reaches_its_limit_inside_a_card() {
    // a 300px card reaches the clamp at the edge
    assert!(TILT_MAX_DEG * TILT_DIVISOR <= 150.0);
    assert!(TILT_SCALE > 1.0);
}
