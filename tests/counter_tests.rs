// Host-side tests for statistic counters.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod counter {
        include!("../src/core/counter.rs");
    }
}

use crate::core::counter::*;
use crate::core::error::FxError;

fn run_to_end(anim: &mut CounterAnimation) -> Vec<u32> {
    let mut shown = Vec::new();
    loop {
        let (v, done) = anim.tick();
        shown.push(v);
        if done {
            return shown;
        }
    }
}

#[test]
fn counts_to_exact_target_in_sixty_frames() {
    let mut anim = CounterAnimation::new(500);
    let shown = run_to_end(&mut anim);
    assert_eq!(shown.len(), 60);
    assert_eq!(*shown.last().unwrap(), 500);
    // 60 frames at 16ms is just under a second
    assert!((shown.len() as i32 * 16 - 1000).abs() <= 50);
}

#[test]
fn displayed_values_are_floored_and_non_decreasing() {
    let mut anim = CounterAnimation::new(24);
    let shown = run_to_end(&mut anim);
    for (k, v) in shown.iter().enumerate() {
        let expected = (24.0 * (k as f64 + 1.0) / 60.0).floor() as u32;
        assert_eq!(*v, expected, "frame {}", k + 1);
    }
    assert!(shown.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn ticks_after_done_hold_the_target() {
    let mut anim = CounterAnimation::with_frames(50, 3);
    run_to_end(&mut anim);
    assert!(anim.is_done());
    assert_eq!(anim.tick(), (50, true));
}

#[test]
fn zero_target_shows_zero() {
    let mut anim = CounterAnimation::new(0);
    assert!(run_to_end(&mut anim).iter().all(|v| *v == 0));
}

#[test]
fn board_triggers_once_at_majority_visibility() {
    let mut board = CounterBoard::new();
    board.register(0, 500);
    board.register(1, 50);
    assert_eq!(board.len(), 2);

    assert!(board.on_visibility(0, 0.3).is_none());
    assert!(board.is_armed(0));

    let anim = board.on_visibility(0, 0.5).expect("armed counter should fire");
    assert_eq!(anim.target(), 500);
    assert!(!board.is_armed(0));

    // scrolling away and back does not restart it
    assert!(board.on_visibility(0, 0.0).is_none());
    assert!(board.on_visibility(0, 1.0).is_none());

    // other counters are independent
    assert!(board.is_armed(1));
    assert_eq!(board.on_visibility(1, 0.9).map(|a| a.target()), Some(50));
}

#[test]
fn board_ignores_unknown_counters_and_nan() {
    let mut board = CounterBoard::new();
    assert!(board.is_empty());
    assert!(board.on_visibility(3, 1.0).is_none());
    board.register(3, 10);
    assert!(board.on_visibility(3, f64::NAN).is_none());
    assert!(board.is_armed(3));
}

#[test]
fn parse_count_accepts_integers_only() {
    assert_eq!(parse_count(Some("500")), Ok(500));
    assert_eq!(parse_count(Some(" 24 ")), Ok(24));
    assert_eq!(parse_count(None), Err(FxError::MissingCount));
    assert_eq!(
        parse_count(Some("5k")),
        Err(FxError::InvalidCount("5k".to_string()))
    );
    assert!(parse_count(Some("-3")).is_err());
    assert!(parse_count(Some("")).is_err());
}

#[test]
fn errors_have_readable_messages() {
    assert_eq!(
        FxError::MissingCount.to_string(),
        "counter element has no data-count attribute"
    );
    assert!(FxError::InvalidCount("x".into()).to_string().contains("\"x\""));
}
