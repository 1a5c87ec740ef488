//! Modal dialogs: per-modal show/hide, backdrop clicks, Escape closes all.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent, Node};

use crate::context::{query_all, PageContext};
use crate::events::listen;

/// Shows the modal with `id`. The triggering event, when given, is stopped
/// so the opening click cannot double as an outside click.
pub fn show(id: &str, event: Option<&Event>) {
    if let Some(event) = event {
        event.stop_propagation();
    }
    let Some(modal) = modal_by_id(id) else {
        return;
    };
    let _ = modal.class_list().add_1("show");
    set_body_scroll_lock(true);
}

/// Hides the modal with `id`.
///
/// The scroll lock is released on every close, even when another modal is
/// still showing; kept as the site has always behaved.
/// TODO: count open modals before unlocking so stacked modals keep the lock.
pub fn hide(id: &str) {
    let Some(modal) = modal_by_id(id) else {
        return;
    };
    let _ = modal.class_list().remove_1("show");
    set_body_scroll_lock(false);
}

pub fn attach(ctx: &Rc<PageContext>) {
    // Escape closes every open modal in the same pass.
    let on_key = {
        let ctx = Rc::clone(ctx);
        move |event: Event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if key_event.key() != "Escape" {
                return;
            }
            for modal in query_all::<Element>(ctx.document(), ".modal.show") {
                let _ = modal.class_list().remove_1("show");
            }
            set_body_scroll_lock(false);
        }
    };
    listen(ctx.document(), "keydown", on_key);

    // A click landing exactly on a modal's backdrop (not its content)
    // closes that modal.
    for modal in query_all::<Element>(ctx.document(), ".modal") {
        let backdrop = modal.clone();
        listen(&modal, "click", move |event: Event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let on_backdrop = target
                .as_ref()
                .map(|node| backdrop.is_same_node(Some(node)))
                .unwrap_or(false);
            if on_backdrop {
                let _ = backdrop.class_list().remove_1("show");
                set_body_scroll_lock(false);
            }
        });
    }
}

fn set_body_scroll_lock(locked: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    let _ = body.style().set_property("overflow", value);
}

fn modal_by_id(id: &str) -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}
