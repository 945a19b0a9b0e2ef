// Host-side tests for the loading progress sequence.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod loader {
        include!("../src/core/loader.rs");
    }
}

use crate::core::loader::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn progress_is_monotonic_and_completes_exactly_once() {
    for seed in 0..50u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut progress = LoadingProgress::new();
        let mut prev = 0.0;
        let mut completions = 0;
        for _ in 0..10_000 {
            match progress.advance(random_increment(&mut rng)) {
                LoadStep::Progress(v) => {
                    assert!(v >= prev, "seed {seed}: {v} < {prev}");
                    assert!(v < 100.0);
                    prev = v;
                }
                LoadStep::Complete => completions += 1,
                LoadStep::Finished => break,
            }
        }
        assert_eq!(completions, 1, "seed {seed}");
        assert_eq!(progress.value(), 100.0);
        assert!(progress.is_complete());
    }
}

#[test]
fn overshoot_clamps_to_one_hundred() {
    let mut progress = LoadingProgress::new();
    assert_eq!(progress.advance(95.0), LoadStep::Progress(95.0));
    assert_eq!(progress.advance(14.0), LoadStep::Complete);
    assert_eq!(progress.value(), 100.0);
    assert_eq!(progress.width_css(), "100%");
}

#[test]
fn ticks_after_completion_change_nothing() {
    let mut progress = LoadingProgress::new();
    assert_eq!(progress.advance(100.0), LoadStep::Complete);
    assert_eq!(progress.advance(10.0), LoadStep::Finished);
    assert_eq!(progress.advance(0.0), LoadStep::Finished);
    assert_eq!(progress.value(), 100.0);
}

#[test]
fn negative_and_nan_increments_do_not_move_backwards() {
    let mut progress = LoadingProgress::new();
    progress.advance(40.0);
    assert_eq!(progress.advance(-10.0), LoadStep::Progress(40.0));
    assert_eq!(progress.advance(f64::NAN), LoadStep::Progress(40.0));
    assert_eq!(progress.value(), 40.0);
}

#[test]
fn random_increment_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let step = random_increment(&mut rng);
        assert!((0.0..15.0).contains(&step), "step {step} out of range");
    }
}
