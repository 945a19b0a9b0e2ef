use crate::core::{DismissTrigger, FxParams, FxState, Section};
use crate::overlay::{self, QuickNavClick, QuickNavView};
use crate::timer::{Debounce, Timeout};
use crate::{dom, frame, palette, render};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Everything the page effects share, owned by the controller and cloned
/// into each event handler.
#[derive(Clone)]
pub struct FxContext {
    pub document: web::Document,
    pub params: Rc<FxParams>,
    pub state: Rc<RefCell<FxState>>,
    pub scroll_generation: Rc<Cell<u32>>,
    pub quick_nav: Rc<RefCell<Option<QuickNavView>>>,
    pub theme_transition: Rc<Debounce>,
    pub resize: Rc<Debounce>,
}

impl FxContext {
    pub fn new(document: web::Document, params: FxParams) -> Self {
        Self {
            document,
            params: Rc::new(params),
            state: Rc::new(RefCell::new(FxState::new())),
            scroll_generation: Rc::new(Cell::new(0)),
            quick_nav: Rc::new(RefCell::new(None)),
            theme_transition: Rc::new(Debounce::new()),
            resize: Rc::new(Debounce::new()),
        }
    }

    /// Highlight the nav link pointing at `id`. No-op if already active.
    pub fn set_active_section(&self, id: &str) {
        let changed = self.state.borrow_mut().set_active_section(id);
        if changed {
            self.render_active_links();
        }
    }

    pub fn render_active_links(&self) {
        let active = format!("#{}", self.state.borrow().active_section());
        for link in dom::query_all(&self.document, ".nav-link") {
            let is_active = link.get_attribute("href").as_deref() == Some(active.as_str());
            render::set_class(&link, "active", is_active);
        }
    }

    pub fn smooth_scroll_to(&self, id: &str) {
        frame::smooth_scroll_to(
            &self.document,
            id,
            &self.params,
            &self.scroll_generation,
        );
    }

    /// Scroll to a section and make it the active one.
    pub fn navigate_to(&self, id: &str) {
        self.smooth_scroll_to(id);
        self.set_active_section(id);
    }

    // ---------------- Quick navigation ----------------

    pub fn quick_nav_open(&self) -> bool {
        self.state.borrow().quick_nav.is_open()
    }

    pub fn open_quick_nav(&self) {
        let Some(generation) = self.state.borrow_mut().quick_nav.open() else {
            return;
        };
        let ctx = self.clone();
        let view = QuickNavView::mount(&self.document, move |click| match click {
            QuickNavClick::Item(section) => ctx.dismiss_quick_nav(DismissTrigger::Select(section)),
            QuickNavClick::Close => ctx.dismiss_quick_nav(DismissTrigger::CloseButton),
            QuickNavClick::Backdrop => ctx.dismiss_quick_nav(DismissTrigger::OutsideClick),
            QuickNavClick::Inside => {}
        });
        let Some(mut view) = view else {
            log::warn!("[quicknav] could not mount overlay");
            _ = self.state.borrow_mut().quick_nav.dismiss(DismissTrigger::CloseButton);
            return;
        };
        let ctx = self.clone();
        view.arm_auto_close(Timeout::schedule(self.params.quick_nav_timeout_ms, move || {
            ctx.expire_quick_nav(generation);
        }));
        *self.quick_nav.borrow_mut() = Some(view);
        log::info!("[quicknav] open (generation {})", generation);
    }

    pub fn dismiss_quick_nav(&self, trigger: DismissTrigger) {
        let dismissal = self.state.borrow_mut().dismiss_quick_nav(trigger);
        let Some(dismissal) = dismissal else {
            return;
        };
        self.close_quick_nav_view();
        log::info!("[quicknav] closed by {:?}", dismissal.trigger);
        if let Some(section) = dismissal.scroll_target() {
            self.smooth_scroll_to(section.id());
            self.render_active_links();
        }
    }

    fn expire_quick_nav(&self, generation: u32) {
        let expired = self.state.borrow_mut().quick_nav.expire(generation);
        if expired.is_some() {
            self.close_quick_nav_view();
            log::info!("[quicknav] auto-closed");
        }
    }

    fn close_quick_nav_view(&self) {
        let view = self.quick_nav.borrow_mut().take();
        if let Some(view) = view {
            view.fade_out();
        }
    }

    /// Digit shortcut: picks the overlay item when it is open, otherwise
    /// jumps straight to the section.
    pub fn jump_to(&self, section: Section) {
        if self.quick_nav_open() {
            self.dismiss_quick_nav(DismissTrigger::Select(section));
        } else {
            self.navigate_to(section.id());
        }
    }

    /// Escape: close the demo modal and the quick navigation overlay.
    pub fn dismiss_all(&self) {
        overlay::close_active_modal(&self.document);
        self.dismiss_quick_nav(DismissTrigger::Escape);
    }

    // ---------------- Theme ----------------

    pub fn toggle_theme(&self) {
        let theme = self.state.borrow_mut().toggle_theme();
        palette::apply(&self.document, theme, &self.theme_transition);
        log::info!("[theme] {}", theme.as_str());
    }
}
