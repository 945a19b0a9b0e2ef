use super::constants::{TRAIL_LIFETIME_MS, TRAIL_SIZE_PX};
use super::tilt::Bounds;
use rand::Rng;

/// Randomised parameters of one floating background particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSpec {
    pub size_px: f64,
    pub opacity: f64,
    pub left_vw: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl ParticleSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size_px: rng.gen_range(1.0..5.0),
            opacity: rng.gen_range(0.02..0.12),
            left_vw: rng.gen_range(0.0..100.0),
            duration_s: rng.gen_range(15.0..35.0),
            delay_s: rng.gen_range(0.0..5.0),
        }
    }

    /// Milliseconds until the float animation has finished and the element
    /// can be removed.
    pub fn lifetime_ms(&self) -> i32 {
        ((self.duration_s + self.delay_s) * 1000.0).ceil() as i32
    }

    pub fn css_text(&self) -> String {
        format!(
            "position: fixed; width: {size}px; height: {size}px; \
             background: radial-gradient(circle, rgba(255, 255, 255, {op}) 0%, transparent 70%); \
             border-radius: 50%; pointer-events: none; left: {left}vw; top: 100vh; z-index: -1; \
             animation: particleFloat {dur}s linear {delay}s forwards;",
            size = self.size_px,
            op = self.opacity,
            left = self.left_vw,
            dur = self.duration_s,
            delay = self.delay_s,
        )
    }
}

/// Delay before the `i`th startup particle is spawned.
#[inline]
pub fn stagger_delay_ms(index: u32, stagger_ms: i32) -> i32 {
    index as i32 * stagger_ms
}

/// Fading dot left behind the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailDot {
    pub left: f64,
    pub top: f64,
}

impl TrailDot {
    /// Centre the dot on the pointer.
    pub fn at(x: f64, y: f64) -> Self {
        let half = TRAIL_SIZE_PX / 2.0;
        Self {
            left: x - half,
            top: y - half,
        }
    }

    pub fn lifetime_ms(&self) -> i32 {
        TRAIL_LIFETIME_MS
    }

    pub fn css_text(&self) -> String {
        format!(
            "position: fixed; width: {s}px; height: {s}px; \
             background: radial-gradient(circle, rgba(0, 122, 255, 0.6) 0%, transparent 70%); \
             border-radius: 50%; pointer-events: none; left: {l}px; top: {t}px; z-index: 9999; \
             animation: cursorTrail 0.8s ease-out forwards;",
            s = TRAIL_SIZE_PX,
            l = self.left,
            t = self.top,
        )
    }
}

/// Expanding circle on a navigation link, centred on the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    pub fn new(bounds: Bounds, pointer_x: f64, pointer_y: f64) -> Self {
        let size = bounds.width.max(bounds.height);
        Self {
            size,
            left: pointer_x - bounds.left - size / 2.0,
            top: pointer_y - bounds.top - size / 2.0,
        }
    }

    pub fn css_text(&self) -> String {
        format!(
            "position: absolute; width: {s}px; height: {s}px; left: {l}px; top: {t}px; \
             background: radial-gradient(circle, rgba(255, 255, 255, 0.3) 0%, transparent 70%); \
             border-radius: 50%; transform: scale(0); \
             animation: ripple 0.6s cubic-bezier(0.4, 0, 0.2, 1); pointer-events: none; z-index: 1;",
            s = self.size,
            l = self.left,
            t = self.top,
        )
    }
}
