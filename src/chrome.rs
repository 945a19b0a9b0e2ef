use crate::context::FxContext;
use crate::{dom, overlay, render};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Nav links, theme toggle, mobile menu, demo modal and resize handling.
pub fn wire_page_chrome(ctx: &FxContext) {
    wire_nav_links(ctx);
    wire_theme_toggle(ctx);
    wire_mobile_menu(&ctx.document);
    wire_demo_modal(&ctx.document);
    wire_resize(ctx);
}

fn wire_nav_links(ctx: &FxContext) {
    for link in dom::query_all(&ctx.document, ".nav-link") {
        let ctx = ctx.clone();
        let l = link.clone();
        dom::listen(&link, "click", move |ev: web::MouseEvent| {
            let Some(href) = l.get_attribute("href") else {
                return;
            };
            let Some(id) = href.strip_prefix('#') else {
                // external link, let the browser follow it
                return;
            };
            ev.prevent_default();
            ctx.navigate_to(id);
        });
    }
}

fn wire_theme_toggle(ctx: &FxContext) {
    let c = ctx.clone();
    dom::add_click_listener(&ctx.document, "themeToggle", move |_| c.toggle_theme());
}

fn set_mobile_menu(document: &web::Document, open: Option<bool>) {
    let menu = dom::query_one(document, ".nav-menu");
    let toggle = dom::query_one(document, ".menu-toggle");
    for (el, class) in [(menu, "mobile-active"), (toggle, "active")] {
        let Some(el) = el else { continue };
        match open {
            Some(on) => render::set_class(&el, class, on),
            None => {
                _ = el.class_list().toggle(class);
            }
        }
    }
}

fn wire_mobile_menu(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, "menuToggle", move |_| set_mobile_menu(&doc, None));
}

fn wire_demo_modal(document: &web::Document) {
    let Some(modal) = document.get_element_by_id("demoModal") else {
        return;
    };
    let m = modal.clone();
    dom::add_click_listener(document, "watchDemo", move |_| overlay::open_modal(&m));

    let m = modal.clone();
    dom::add_click_listener(document, "modalClose", move |_| overlay::close_modal(&m));

    let m = modal.clone();
    dom::listen(&modal, "click", move |ev: web::MouseEvent| {
        let on_backdrop = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .is_some_and(|t| t == m);
        if on_backdrop {
            overlay::close_modal(&m);
        }
    });
}

fn wire_resize(ctx: &FxContext) {
    let Some(window) = web::window() else {
        return;
    };
    let debounce = ctx.resize.clone();
    let delay = ctx.params.resize_debounce_ms;
    let params = ctx.params.clone();
    let doc = ctx.document.clone();
    dom::listen(&window, "resize", move |_: web::Event| {
        let doc = doc.clone();
        let params = params.clone();
        debounce.schedule(delay, move || {
            // desktop layout has no use for the collapsed menu
            if params.is_desktop(dom::viewport_width()) {
                set_mobile_menu(&doc, Some(false));
            }
        });
    });
}
