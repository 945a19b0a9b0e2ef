use crate::core::constants::{
    COUNTER_FRAME_MS, COUNTER_TRIGGER_FRACTION, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLDS,
};
use crate::core::{parse_count, CounterAnimation, CounterBoard, RevealStyle};
use crate::timer::Interval;
use crate::{dom, render};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const COUNTER_INDEX_ATTR: &str = "data-fx-counter";

type ObserverCallback = Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

fn observer(
    thresholds: &[f64],
    root_margin: Option<&str>,
    mut on_entry: impl FnMut(&web::IntersectionObserverEntry, &web::IntersectionObserver) + 'static,
) -> Option<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, obs: web::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    on_entry(&entry, &obs);
                }
            }
        },
    ) as ObserverCallback);

    let init = web::IntersectionObserverInit::new();
    let list: js_sys::Array = thresholds.iter().map(|t| JsValue::from_f64(*t)).collect();
    init.set_threshold(&list);
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let obs = web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init);
    // observers live for the page
    callback.forget();
    match obs {
        Ok(o) => Some(o),
        Err(e) => {
            log::warn!("IntersectionObserver unavailable: {:?}", e);
            None
        }
    }
}

/// Fade and lift every `<section>` with its visible fraction.
pub fn wire_reveal(document: &web::Document) {
    let Some(obs) = observer(
        &REVEAL_THRESHOLDS,
        Some(REVEAL_ROOT_MARGIN),
        |entry, _| {
            let Ok(el) = entry.target().dyn_into::<web::HtmlElement>() else {
                return;
            };
            let style = RevealStyle::from_fraction(entry.intersection_ratio());
            if style.writes_motion() {
                render::apply(&el, &style);
            }
            render::set_class(&el, "in-view", style.in_view);
        },
    ) else {
        return;
    };

    let initial = RevealStyle::initial_decls();
    for section in dom::query_all(document, "section") {
        let css = section.style();
        for (prop, value) in &initial {
            _ = css.set_property(prop, value);
        }
        obs.observe(&section);
    }
}

/// Count stat numbers up from zero the first time each is half visible.
pub fn wire_counters(document: &web::Document) {
    let stats = dom::query_all(document, ".stat-number[data-count]");
    if stats.is_empty() {
        return;
    }
    let board = Rc::new(RefCell::new(CounterBoard::new()));
    let mut watched = Vec::new();
    for (i, el) in stats.into_iter().enumerate() {
        match parse_count(el.get_attribute("data-count").as_deref()) {
            Ok(target) => {
                board.borrow_mut().register(i, target);
                _ = el.set_attribute(COUNTER_INDEX_ATTR, &i.to_string());
                watched.push(el);
            }
            Err(e) => log::warn!("[counter] skipping #{}: {}", i, e),
        }
    }

    let Some(obs) = observer(&[COUNTER_TRIGGER_FRACTION], None, move |entry, obs| {
        if !entry.is_intersecting() {
            return;
        }
        let target = entry.target();
        let Some(index) = target
            .get_attribute(COUNTER_INDEX_ATTR)
            .and_then(|v| v.parse::<usize>().ok())
        else {
            return;
        };
        let anim = board
            .borrow_mut()
            .on_visibility(index, entry.intersection_ratio());
        if let Some(anim) = anim {
            obs.unobserve(&target);
            animate(target, anim);
        }
    }) else {
        return;
    };
    for el in &watched {
        obs.observe(el);
    }
}

fn animate(el: web::Element, mut anim: CounterAnimation) {
    let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let slot_tick = slot.clone();
    let interval = Interval::every(COUNTER_FRAME_MS, move || {
        let (shown, done) = anim.tick();
        el.set_text_content(Some(&shown.to_string()));
        if done {
            let _ = slot_tick.borrow_mut().take();
        }
    });
    *slot.borrow_mut() = interval;
}
