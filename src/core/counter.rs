use super::constants::{COUNTER_FRAMES, COUNTER_TRIGGER_FRACTION};
use super::error::FxError;
use fnv::FnvHashMap;

/// Parse a stat element's `data-count` attribute.
pub fn parse_count(attr: Option<&str>) -> Result<u32, FxError> {
    let raw = attr.ok_or(FxError::MissingCount)?;
    raw.trim()
        .parse::<u32>()
        .map_err(|_| FxError::InvalidCount(raw.to_string()))
}

/// Count-up from 0 to `target` over a fixed number of frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u32,
    frame: u32,
    frames: u32,
}

impl CounterAnimation {
    pub fn new(target: u32) -> Self {
        Self::with_frames(target, COUNTER_FRAMES)
    }

    pub fn with_frames(target: u32, frames: u32) -> Self {
        Self {
            target,
            frame: 0,
            frames: frames.max(1),
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn is_done(&self) -> bool {
        self.frame >= self.frames
    }

    /// Advance one frame. Returns the value to display and whether this was
    /// the last frame. Frame `k` shows `floor(target * k / frames)`, so the
    /// final frame shows the target exactly.
    pub fn tick(&mut self) -> (u32, bool) {
        if self.frame < self.frames {
            self.frame += 1;
        }
        let shown = (self.target as u64 * self.frame as u64 / self.frames as u64) as u32;
        (shown, self.is_done())
    }
}

#[derive(Debug, Clone)]
struct CounterSlot {
    target: u32,
    armed: bool,
}

/// One-shot triggers for every stat counter on the page, keyed by the
/// element's index in document order.
#[derive(Debug, Default)]
pub struct CounterBoard {
    slots: FnvHashMap<usize, CounterSlot>,
}

impl CounterBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, index: usize, target: u32) {
        self.slots.insert(
            index,
            CounterSlot {
                target,
                armed: true,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_armed(&self, index: usize) -> bool {
        self.slots.get(&index).map(|s| s.armed).unwrap_or(false)
    }

    /// Visibility notification for a counter. Yields the animation the first
    /// time the counter is at least half visible and disarms it.
    pub fn on_visibility(&mut self, index: usize, fraction: f64) -> Option<CounterAnimation> {
        let slot = self.slots.get_mut(&index)?;
        if !slot.armed || fraction.is_nan() || fraction < COUNTER_TRIGGER_FRACTION {
            return None;
        }
        slot.armed = false;
        Some(CounterAnimation::new(slot.target))
    }
}
