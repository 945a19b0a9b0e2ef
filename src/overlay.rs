use crate::core::constants::QUICK_NAV_FADE_MS;
use crate::core::Section;
use crate::dom;
use crate::styles::QUICK_NAV_CSS;
use crate::timer::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// ---------------- Demo modal ----------------

#[inline]
pub fn open_modal(modal: &web::Element) {
    _ = modal.class_list().add_1("active");
    if let Some(body) = dom::body() {
        _ = body.style().set_property("overflow", "hidden");
    }
}

#[inline]
pub fn close_modal(modal: &web::Element) {
    _ = modal.class_list().remove_1("active");
    if let Some(body) = dom::body() {
        _ = body.style().set_property("overflow", "auto");
    }
}

/// Close whichever modal overlay is showing.
pub fn close_active_modal(document: &web::Document) {
    if let Ok(Some(modal)) = document.query_selector(".modal-overlay.active") {
        close_modal(&modal);
    }
}

// ---------------- Quick navigation ----------------

/// What a click inside the quick navigation overlay means.
pub enum QuickNavClick {
    Item(Section),
    Close,
    Backdrop,
    Inside,
}

fn quick_nav_markup() -> String {
    let items: String = Section::ALL
        .iter()
        .map(|s| {
            format!(
                r#"<div class="quick-nav-item" data-section="{id}"><span class="nav-key">{key}</span><span class="nav-label">{label}</span></div>"#,
                id = s.id(),
                key = s.digit(),
                label = s.label()
            )
        })
        .collect();
    format!(
        r#"<div class="quick-nav-content"><button class="quick-nav-close" aria-label="Close">&times;</button><div class="quick-nav-header"><h3>Quick Navigation</h3><span class="quick-nav-hint">Press number keys or click</span></div><div class="quick-nav-items">{items}</div></div>"#
    )
}

/// Classify a click on the overlay by its target.
pub fn classify_click(root: &web::Element, ev: &web::MouseEvent) -> QuickNavClick {
    let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
        return QuickNavClick::Inside;
    };
    if &target == root {
        return QuickNavClick::Backdrop;
    }
    if let Ok(Some(_)) = target.closest(".quick-nav-close") {
        return QuickNavClick::Close;
    }
    if let Ok(Some(item)) = target.closest(".quick-nav-item") {
        if let Some(section) = item
            .get_attribute("data-section")
            .and_then(|id| Section::from_id(&id))
        {
            return QuickNavClick::Item(section);
        }
    }
    QuickNavClick::Inside
}

/// Live DOM for an open quick navigation overlay. Owns its click listener,
/// its stylesheet and the auto-close timer.
pub struct QuickNavView {
    root: web::Element,
    sheet: Option<web::Element>,
    auto_close: Option<Timeout>,
    _on_click: Closure<dyn FnMut(web::MouseEvent)>,
}

impl QuickNavView {
    /// Build and attach the overlay. `on_click` receives every click inside
    /// it, already classified.
    pub fn mount(
        document: &web::Document,
        mut on_click: impl FnMut(QuickNavClick) + 'static,
    ) -> Option<Self> {
        let body = document.body()?;
        let root = document.create_element("div").ok()?;
        root.set_class_name("quick-nav-overlay");
        root.set_inner_html(&quick_nav_markup());
        let sheet = dom::inject_style(document, QUICK_NAV_CSS);
        body.append_child(&root).ok()?;

        let root_for_click = root.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            on_click(classify_click(&root_for_click, &ev));
        }) as Box<dyn FnMut(_)>);
        _ = root.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());

        Some(Self {
            root,
            sheet,
            auto_close: None,
            _on_click: closure,
        })
    }

    pub fn arm_auto_close(&mut self, timeout: Option<Timeout>) {
        self.auto_close = timeout;
    }

    /// Fade out and detach. The auto-close timer is cleared right away; the
    /// nodes and listener are released once the fade has played.
    pub fn fade_out(self) {
        if let Some(t) = &self.auto_close {
            t.clear();
        }
        if let Some(el) = self.root.dyn_ref::<web::HtmlElement>() {
            _ = el
                .style()
                .set_property("animation", "fadeOut 0.2s ease forwards");
        }
        dom::after(QUICK_NAV_FADE_MS, move || {
            if self.root.parent_node().is_some() {
                self.root.remove();
            }
            if let Some(sheet) = &self.sheet {
                if sheet.parent_node().is_some() {
                    sheet.remove();
                }
            }
            // whole view moves in so the listener outlives the fade
            drop(self);
        });
    }
}
