//! One-shot reveal-on-scroll via `IntersectionObserver`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::config;
use crate::context::{query_all, PageContext};

/// Observes every `[data-reveal]` element; each one becomes visible once
/// enough of it intersects the viewport and is then left alone for good.
pub fn attach(ctx: &PageContext) {
    let elements = query_all::<Element>(ctx.document(), "[data-reveal]");
    if elements.is_empty() {
        return;
    }

    if !supports_intersection_observer(ctx) {
        // No observer support: show everything up front.
        for element in &elements {
            let _ = element.class_list().add_1("is-visible");
        }
        return;
    }

    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1("is-visible");
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    let Ok(observer) =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    on_intersect.forget();

    for element in &elements {
        observer.observe(element);
    }
}

fn supports_intersection_observer(ctx: &PageContext) -> bool {
    js_sys::Reflect::has(ctx.window().as_ref(), &JsValue::from_str("IntersectionObserver"))
        .unwrap_or(false)
}
