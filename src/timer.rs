use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A pending `setTimeout`. Dropping it clears the browser timer.
pub struct Timeout {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn schedule(delay_ms: i32, f: impl FnOnce() + 'static) -> Option<Self> {
        let window = web::window()?;
        let mut f = Some(f);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(f) = f.take() {
                f();
            }
        }) as Box<dyn FnMut()>);
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms,
            )
            .ok()?;
        Some(Self {
            handle,
            _closure: closure,
        })
    }

    /// Clear the browser timer but keep the callback alive; for cancelling
    /// from inside a callback that is still running.
    #[inline]
    pub fn clear(&self) {
        if let Some(w) = web::window() {
            w.clear_timeout_with_handle(self.handle);
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.clear();
    }
}

/// A running `setInterval`. Dropping it clears the browser timer.
pub struct Interval {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn every(period_ms: i32, f: impl FnMut() + 'static) -> Option<Self> {
        let window = web::window()?;
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms,
            )
            .ok()?;
        Some(Self {
            handle,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.handle);
        }
    }
}

/// Trailing-edge debounce: each `schedule` replaces the pending call.
#[derive(Default)]
pub struct Debounce {
    pending: RefCell<Option<Timeout>>,
}

impl Debounce {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&self, delay_ms: i32, f: impl FnOnce() + 'static) {
        // drop the previous timeout first so its handle is cleared
        let prior = self.pending.borrow_mut().take();
        drop(prior);
        *self.pending.borrow_mut() = Timeout::schedule(delay_ms, f);
    }
}
