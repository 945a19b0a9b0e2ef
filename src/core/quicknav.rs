use super::sections::Section;

/// Everything that can dismiss the quick navigation overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    CloseButton,
    Select(Section),
    Escape,
    OutsideClick,
    Timeout,
}

/// Result of a dismissal that actually closed the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dismissal {
    pub trigger: DismissTrigger,
    /// Generation of the overlay that was closed.
    pub generation: u32,
}

impl Dismissal {
    /// Section to scroll to, for item selection.
    pub fn scroll_target(&self) -> Option<Section> {
        match self.trigger {
            DismissTrigger::Select(s) => Some(s),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuickNavPhase {
    #[default]
    Closed,
    Open {
        generation: u32,
    },
}

/// Open/closed state of the quick navigation overlay.
///
/// Each open gets a fresh generation so a stale auto-close timer armed for
/// an earlier overlay cannot close a newer one.
#[derive(Debug, Clone, Default)]
pub struct QuickNav {
    phase: QuickNavPhase,
    next_generation: u32,
}

impl QuickNav {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> QuickNavPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, QuickNavPhase::Open { .. })
    }

    /// Closed -> open. `None` when an overlay is already showing.
    pub fn open(&mut self) -> Option<u32> {
        if self.is_open() {
            return None;
        }
        let generation = self.next_generation;
        self.next_generation = self.next_generation.wrapping_add(1);
        self.phase = QuickNavPhase::Open { generation };
        Some(generation)
    }

    /// Open -> closed. `None` when nothing was open.
    pub fn dismiss(&mut self, trigger: DismissTrigger) -> Option<Dismissal> {
        match self.phase {
            QuickNavPhase::Open { generation } => {
                self.phase = QuickNavPhase::Closed;
                Some(Dismissal {
                    trigger,
                    generation,
                })
            }
            QuickNavPhase::Closed => None,
        }
    }

    /// Auto-close for the overlay opened as `generation`.
    pub fn expire(&mut self, generation: u32) -> Option<Dismissal> {
        match self.phase {
            QuickNavPhase::Open { generation: g } if g == generation => {
                self.dismiss(DismissTrigger::Timeout)
            }
            _ => None,
        }
    }
}
