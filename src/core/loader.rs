use super::constants::{LOADER_COMPLETE, LOADER_MAX_INCREMENT};
use rand::Rng;

/// Outcome of one loader tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadStep {
    /// Still filling; carries the value to display.
    Progress(f64),
    /// Reached 100 on this tick. Reported once.
    Complete,
    /// Already complete; nothing left to do.
    Finished,
}

/// Simulated loading bar.
///
/// The displayed value never decreases and lands on exactly 100. The
/// transition out of the loading screen is signalled by the single
/// `Complete` step.
#[derive(Debug, Clone, Default)]
pub struct LoadingProgress {
    value: f64,
    complete: bool,
}

impl LoadingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn advance(&mut self, increment: f64) -> LoadStep {
        if self.complete {
            return LoadStep::Finished;
        }
        // NaN and negative steps would break monotonicity
        let step = if increment.is_finite() && increment > 0.0 {
            increment
        } else {
            0.0
        };
        self.value += step;
        if self.value >= LOADER_COMPLETE {
            self.value = LOADER_COMPLETE;
            self.complete = true;
            return LoadStep::Complete;
        }
        LoadStep::Progress(self.value)
    }

    /// Width for the progress bar element.
    pub fn width_css(&self) -> String {
        format!("{}%", self.value)
    }
}

/// Random increment in `[0, 15)`.
pub fn random_increment<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(0.0..LOADER_MAX_INCREMENT)
}
