use crate::core::constants::{LOADER_FADE_DELAY_MS, LOADER_HIDE_DELAY_MS, LOADER_TICK_MS};
use crate::core::{random_increment, LoadStep, LoadingProgress};
use crate::timer::Interval;
use crate::{dom, render};
use std::cell::RefCell;
use std::rc::Rc;

/// Drive the fake progress bar, then fade the loading screen and call
/// `on_ready` exactly once.
pub fn run(document: &web_sys::Document, on_ready: impl FnOnce() + 'static) {
    let Some(screen) = dom::by_id(document, "loadingScreen") else {
        log::info!("[loader] no loading screen, starting effects");
        on_ready();
        return;
    };
    let bar = dom::query_one(document, ".loading-progress");

    let mut progress = LoadingProgress::new();
    let mut rng = rand::thread_rng();
    let mut on_ready = Some(on_ready);
    let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let slot_tick = slot.clone();

    let interval = Interval::every(LOADER_TICK_MS, move || {
        let step = progress.advance(random_increment(&mut rng));
        if let Some(bar) = &bar {
            render::set_style(bar, "width", &progress.width_css());
        }
        if step != LoadStep::Complete {
            return;
        }
        // stop ticking; the closure itself is released after this call
        let _ = slot_tick.borrow_mut().take();
        log::info!("[loader] complete");

        let screen = screen.clone();
        let ready = on_ready.take();
        dom::after(LOADER_FADE_DELAY_MS, move || {
            render::set_style(&screen, "opacity", "0");
            dom::after(LOADER_HIDE_DELAY_MS, move || {
                render::set_style(&screen, "display", "none");
                if let Some(ready) = ready {
                    ready();
                }
            });
        });
    });
    if interval.is_none() {
        log::warn!("[loader] could not start progress timer");
    }
    *slot.borrow_mut() = interval;
}
