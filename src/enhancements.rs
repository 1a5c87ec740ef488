//! Small one-shot page embellishments: loader fade-out, load-time hash
//! positioning, mailto targets, price-hover card blur.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior};

use crate::config;
use crate::context::{query_all, PageContext};
use crate::events::listen;
use crate::metrics::scroll_to_element;
use crate::timing::after_layout_settles;

pub fn attach(ctx: &Rc<PageContext>) {
    attach_loader(ctx);
    attach_hash_fix(ctx);
    attach_card_blur(ctx);

    // Mailto rewiring wants the full DOM; defer while still parsing.
    if ctx.document().ready_state() == "loading" {
        let deferred = {
            let ctx = Rc::clone(ctx);
            move |_| wire_mailto_links(&ctx)
        };
        listen(ctx.document(), "DOMContentLoaded", deferred);
    } else {
        wire_mailto_links(ctx);
    }
}

/// Fades `#loader` out on load, then drops it from flow.
fn attach_loader(ctx: &Rc<PageContext>) {
    let on_load = {
        let ctx = Rc::clone(ctx);
        move |_| {
            let Some(loader) = ctx
                .document()
                .get_element_by_id("loader")
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            let style = loader.style();
            let _ = style.set_property("transition", "opacity .3s ease");
            let _ = style.set_property("opacity", "0");
            Timeout::new(config::LOADER_FADE_MS, move || {
                let _ = loader.style().set_property("display", "none");
            })
            .forget();
        }
    };
    listen(ctx.window(), "load", on_load);
}

/// A page loaded with `#fragment` would sit under the fixed header;
/// re-position instantly with the offset once layout settles.
fn attach_hash_fix(ctx: &Rc<PageContext>) {
    let on_load = {
        let ctx = Rc::clone(ctx);
        move |_| {
            let hash = ctx.window().location().hash().unwrap_or_default();
            let id = hash.trim_start_matches('#');
            if id.is_empty() {
                return;
            }
            let Some(target) = ctx.document().get_element_by_id(id) else {
                return;
            };
            let ctx = Rc::clone(&ctx);
            after_layout_settles(move || {
                scroll_to_element(&ctx, &target, ScrollBehavior::Instant);
            });
        }
    };
    listen(ctx.window(), "load", on_load);
}

/// Forces mailto links into a new tab. Safari and some mobile browsers
/// ignore `target` on mailto, hence the explicit `window.open` fallback.
fn wire_mailto_links(ctx: &PageContext) {
    for link in query_all::<Element>(ctx.document(), r#"a[href^="mailto:"]"#) {
        let _ = link.set_attribute("target", "_blank");
        let _ = link.set_attribute("rel", "noopener noreferrer");
        let href = link.get_attribute("href");
        listen(&link, "click", move |event| {
            let Some(href) = href.as_deref() else {
                return;
            };
            event.prevent_default();
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target_and_features(
                    href,
                    "_blank",
                    "noopener,noreferrer",
                );
            }
        });
    }
}

/// Hovering a price control blurs the rest of its model card.
fn attach_card_blur(ctx: &PageContext) {
    for trigger in query_all::<Element>(ctx.document(), ".model-card__price") {
        let Ok(Some(card)) = trigger.closest(".model-card") else {
            continue;
        };
        let entered = card.clone();
        listen(&trigger, "mouseenter", move |_| {
            let _ = entered.class_list().add_1("blur-content");
        });
        listen(&trigger, "mouseleave", move |_| {
            let _ = card.class_list().remove_1("blur-content");
        });
    }
}
