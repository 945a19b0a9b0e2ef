use crate::context::FxContext;
use crate::core::constants::ACTIVE_PROBE_Y;
use crate::core::{section_at_probe, GlassBlur, NavBackground, Parallax, SectionSpan};
use crate::{dom, render};
use web_sys as web;

const GLASS_PANELS: &str = ".feature-card, .team-card, .main-contact, .nav-container";

fn on_window_scroll(handler: impl FnMut(web::Event) + 'static) {
    if let Some(window) = web::window() {
        dom::listen::<web::Event, _>(&window, "scroll", handler);
    }
}

/// Nav highlighting and navbar backdrop; active from page start.
pub fn wire_navigation(ctx: &FxContext) {
    let ctx = ctx.clone();
    on_window_scroll(move |_| {
        update_active_navigation(&ctx);
        update_navigation_background(&ctx.document);
    });
}

fn update_active_navigation(ctx: &FxContext) {
    let spans: Vec<SectionSpan> = dom::query_all(&ctx.document, "section[id]")
        .iter()
        .map(|s| {
            let b = dom::bounds_of(s);
            SectionSpan {
                id: s.id(),
                top: b.top,
                bottom: b.bottom(),
            }
        })
        .collect();
    let current = section_at_probe(&spans, ACTIVE_PROBE_Y);
    ctx.set_active_section(current);
}

fn update_navigation_background(document: &web::Document) {
    if let Some(nav) = dom::query_one(document, ".nav-container") {
        render::apply(&nav, &NavBackground::for_scroll(dom::scroll_y()));
    }
}

/// Hero and floating-card parallax. Wired once the page has loaded.
pub fn wire_parallax(document: &web::Document) {
    let hero = dom::query_one(document, ".hero");
    let cards = dom::query_all(document, ".floating-card");
    on_window_scroll(move |_| {
        let y = dom::scroll_y();
        if let Some(hero) = &hero {
            render::apply(hero, &Parallax::hero(y));
        }
        for (i, card) in cards.iter().enumerate() {
            render::apply(card, &Parallax::floating_card(y, i));
        }
    });
}

/// Backdrop blur by distance from the viewport centre. Wired once the page
/// has loaded.
pub fn wire_glass_blur(document: &web::Document) {
    let panels = dom::query_all(document, GLASS_PANELS);
    if panels.is_empty() {
        return;
    }
    on_window_scroll(move |_| {
        let vh = dom::viewport_height();
        for panel in &panels {
            render::apply(panel, &GlassBlur::for_bounds(dom::bounds_of(panel), vh));
        }
    });
}
