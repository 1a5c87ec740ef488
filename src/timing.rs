//! Rate limiting for reactive handlers, and layout settling.
//!
//! Everything here runs on the browser's single-threaded event loop, so
//! shared state is plain `Rc` + `Cell`/`RefCell` with no locking.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Date;

/// Trailing-edge debounce: a burst of calls collapses into one invocation
/// `delay_ms` after the burst goes quiet. Each call inside the window
/// cancels the pending timer.
pub fn debounce(f: impl Fn() + 'static, delay_ms: u32) -> impl Fn() {
    let f = Rc::new(f);
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    move || {
        if let Some(timer) = pending.borrow_mut().take() {
            timer.cancel();
        }
        let f = Rc::clone(&f);
        let slot = Rc::clone(&pending);
        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || {
            slot.borrow_mut().take();
            f();
        }));
    }
}

/// At most one invocation per `interval_ms`. Calls landing mid-interval
/// schedule a trailing catch-up, so the final state always reflects the
/// last trigger.
pub fn throttle(f: impl Fn() + 'static, interval_ms: u32) -> impl Fn() {
    let f = Rc::new(f);
    let last_run = Rc::new(Cell::new(f64::NEG_INFINITY));
    let trailing: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    move || {
        let now = Date::now();
        let elapsed = now - last_run.get();
        if elapsed >= interval_ms as f64 {
            last_run.set(now);
            f();
        } else {
            if let Some(timer) = trailing.borrow_mut().take() {
                timer.cancel();
            }
            let wait = (interval_ms as f64 - elapsed).ceil() as u32;
            let f = Rc::clone(&f);
            let last_run = Rc::clone(&last_run);
            let slot = Rc::clone(&trailing);
            *trailing.borrow_mut() = Some(Timeout::new(wait, move || {
                slot.borrow_mut().take();
                last_run.set(Date::now());
                f();
            }));
        }
    }
}

/// Defers `f` across two animation frames so the browser has completed a
/// layout pass before `f` reads measured geometry.
pub fn after_layout_settles(f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let inner_window = window.clone();
    let inner = Closure::once_into_js(f);
    let outer = Closure::once_into_js(move || {
        let _ = inner_window.request_animation_frame(inner.unchecked_ref());
    });
    let _ = window.request_animation_frame(outer.unchecked_ref());
}
