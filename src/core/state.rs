use super::constants::*;
use super::quicknav::{DismissTrigger, Dismissal, QuickNav};
use super::sections::Section;
use super::theme::Theme;

/// Runtime knobs read by the page controller.
#[derive(Debug, Clone, PartialEq)]
pub struct FxParams {
    pub scroll_duration_ms: f64,
    pub header_offset_px: f64,
    pub quick_nav_timeout_ms: i32,
    pub particle_initial_count: u32,
    pub particle_stagger_ms: i32,
    pub particle_interval_ms: i32,
    pub desktop_min_width_px: f64,
    pub resize_debounce_ms: i32,
}

impl Default for FxParams {
    fn default() -> Self {
        Self {
            scroll_duration_ms: SCROLL_DURATION_MS,
            header_offset_px: HEADER_OFFSET_PX,
            quick_nav_timeout_ms: QUICK_NAV_TIMEOUT_MS,
            particle_initial_count: PARTICLE_INITIAL_COUNT,
            particle_stagger_ms: PARTICLE_STAGGER_MS,
            particle_interval_ms: PARTICLE_INTERVAL_MS,
            desktop_min_width_px: DESKTOP_MIN_WIDTH_PX,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
        }
    }
}

impl FxParams {
    /// Scroll offset that puts `element_top` just below the fixed header.
    #[inline]
    pub fn scroll_target_for(&self, element_top: f64) -> f64 {
        element_top - self.header_offset_px
    }

    /// Desktop-only effects (cursor trail, menu reset) need a viewport
    /// strictly wider than the breakpoint.
    #[inline]
    pub fn is_desktop(&self, viewport_width: f64) -> bool {
        viewport_width > self.desktop_min_width_px
    }
}

/// The only mutable page state shared between effects.
#[derive(Debug, Clone)]
pub struct FxState {
    loaded: bool,
    active_section: String,
    theme: Theme,
    pub quick_nav: QuickNav,
}

impl Default for FxState {
    fn default() -> Self {
        Self {
            loaded: false,
            active_section: Section::Home.id().to_string(),
            theme: Theme::Dark,
            quick_nav: QuickNav::new(),
        }
    }
}

impl FxState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Set the load flag. `true` only on the first call; the flag never
    /// resets.
    pub fn mark_loaded(&mut self) -> bool {
        !std::mem::replace(&mut self.loaded, true)
    }

    pub fn active_section(&self) -> &str {
        &self.active_section
    }

    /// Returns whether the active section changed.
    pub fn set_active_section(&mut self, id: &str) -> bool {
        if self.active_section == id {
            return false;
        }
        self.active_section = id.to_string();
        true
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Close the quick navigation overlay. Selecting an item also makes its
    /// section the active one; the caller scrolls to
    /// [`Dismissal::scroll_target`].
    pub fn dismiss_quick_nav(&mut self, trigger: DismissTrigger) -> Option<Dismissal> {
        let dismissal = self.quick_nav.dismiss(trigger)?;
        if let Some(section) = dismissal.scroll_target() {
            self.set_active_section(section.id());
        }
        Some(dismissal)
    }
}
