use crate::context::FxContext;
use crate::core::constants::RIPPLE_LIFETIME_MS;
use crate::core::{Ripple, Tilt, TrailDot};
use crate::{dom, render};
use glam::DVec2;
use web_sys as web;

const TILT_CARDS: &str = ".feature-card, .team-card, .main-contact, .floating-card";

pub fn wire_input_handlers(ctx: &FxContext) {
    wire_card_tilt(ctx);
    wire_cursor_trail(ctx);
    wire_nav_ripple(ctx);
}

#[inline]
fn tilt_toward(card: &web::HtmlElement, client_x: i32, client_y: i32) {
    let pointer = DVec2::new(client_x as f64, client_y as f64);
    let tilt = Tilt::from_pointer(pointer, dom::bounds_of(card));
    render::apply(card, &tilt);
}

fn wire_card_tilt(ctx: &FxContext) {
    for card in dom::query_all(&ctx.document, TILT_CARDS) {
        let c = card.clone();
        dom::listen(&card, "mousemove", move |ev: web::MouseEvent| {
            tilt_toward(&c, ev.client_x(), ev.client_y());
        });

        let c = card.clone();
        dom::listen(&card, "mouseleave", move |_: web::MouseEvent| {
            render::apply(&c, &Tilt::rest());
        });

        // a single sample on touch; no continuous tracking
        let c = card.clone();
        dom::listen(&card, "touchstart", move |ev: web::TouchEvent| {
            if let Some(touch) = ev.touches().get(0) {
                tilt_toward(&c, touch.client_x(), touch.client_y());
            }
        });

        let c = card.clone();
        dom::listen(&card, "touchend", move |_: web::TouchEvent| {
            render::apply(&c, &Tilt::rest());
        });
    }
}

fn wire_cursor_trail(ctx: &FxContext) {
    let params = ctx.params.clone();
    let target = ctx.document.clone();
    dom::listen(&target, "mousemove", move |ev: web::MouseEvent| {
        if !params.is_desktop(dom::viewport_width()) {
            return;
        }
        let Some(body) = dom::body() else {
            return;
        };
        let dot = TrailDot::at(ev.client_x() as f64, ev.client_y() as f64);
        dom::spawn_transient(&body, &dot.css_text(), dot.lifetime_ms());
    });
}

fn wire_nav_ripple(ctx: &FxContext) {
    for link in dom::query_all(&ctx.document, ".nav-link") {
        let l = link.clone();
        dom::listen(&link, "mouseenter", move |ev: web::MouseEvent| {
            let ripple = Ripple::new(
                dom::bounds_of(&l),
                ev.client_x() as f64,
                ev.client_y() as f64,
            );
            render::set_style(&l, "position", "relative");
            render::set_style(&l, "overflow", "hidden");
            dom::spawn_transient(&l, &ripple.css_text(), RIPPLE_LIFETIME_MS);
        });
    }
}
