/// Symmetric cubic ease-in-out over normalized time.
///
/// `t` is clamped to `[0, 1]`. The first half follows `4t³`, the second
/// half mirrors it so the curve is point-symmetric around `(0.5, 0.5)`.
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = 2.0 * t - 2.0;
        0.5 * u * u * u + 1.0
    }
}

/// Classic `(t, b, c, d)` form: elapsed time, start value, change,
/// duration.
#[inline]
pub fn ease_in_out_cubic_span(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if d <= 0.0 {
        return b + c;
    }
    b + c * ease_in_out_cubic(t / d)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub position: f64,
    pub done: bool,
}

/// One eased scroll from `start` to `target`, sampled per animation frame.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    start: f64,
    distance: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl SmoothScroll {
    pub fn new(start: f64, target: f64, duration_ms: f64) -> Self {
        Self {
            start,
            distance: target - start,
            duration_ms,
            started_at: None,
        }
    }

    pub fn target(&self) -> f64 {
        self.start + self.distance
    }

    /// Position for a frame timestamp. The first call latches the start
    /// time; once the duration has elapsed the sample sits on the target.
    pub fn sample(&mut self, now_ms: f64) -> ScrollSample {
        let t0 = *self.started_at.get_or_insert(now_ms);
        let elapsed = (now_ms - t0).max(0.0);
        if elapsed >= self.duration_ms {
            return ScrollSample {
                position: self.target(),
                done: true,
            };
        }
        ScrollSample {
            position: ease_in_out_cubic_span(elapsed, self.start, self.distance, self.duration_ms),
            done: false,
        }
    }
}
