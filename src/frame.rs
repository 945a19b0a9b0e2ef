use crate::core::{FxParams, SmoothScroll};
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Smooth-scroll the window so `target_id` sits below the fixed header.
///
/// Each call bumps `generation`; a loop whose generation is no longer
/// current stops on its next frame, so a newer scroll supersedes an older
/// one instead of fighting it.
pub fn smooth_scroll_to(
    document: &web::Document,
    target_id: &str,
    params: &FxParams,
    generation: &Rc<Cell<u32>>,
) {
    let Some(target) = dom::by_id(document, target_id) else {
        log::debug!("[scroll] no element #{}", target_id);
        return;
    };
    let start = dom::scroll_y();
    let dest = params.scroll_target_for(target.offset_top() as f64);
    let mine = generation.get().wrapping_add(1);
    generation.set(mine);
    start_loop(SmoothScroll::new(start, dest, params.scroll_duration_ms), generation.clone(), mine);
}

fn start_loop(mut run: SmoothScroll, current: Rc<Cell<u32>>, mine: u32) {
    let tick: FrameSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        if current.get() != mine {
            let _ = tick_clone.borrow_mut().take();
            return;
        }
        let sample = run.sample(now);
        if let Some(w) = web::window() {
            w.scroll_to_with_x_and_y(0.0, sample.position);
            if !sample.done {
                request_frame(&w, &tick_clone);
                return;
            }
        }
        // finished: release the loop closure once this frame returns
        let _ = tick_clone.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = web::window() {
        request_frame(&w, &tick);
    }
}

#[inline]
fn request_frame(w: &web::Window, slot: &FrameSlot) {
    if let Some(cb) = slot.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
