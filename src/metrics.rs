//! Header offset management and offset-compensated scrolling.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config;
use crate::context::PageContext;
use crate::events::listen;
use crate::timing::debounce;

/// Pushes page content below the fixed header: body padding plus the root
/// scroll-padding, so native anchor jumps also land clear of it.
pub fn apply_header_offset(ctx: &PageContext) {
    let px = format!("{}px", ctx.header_height());
    if let Some(body) = ctx.document().body() {
        let _ = body.style().set_property("padding-top", &px);
    }
    if let Some(root) = ctx.document().document_element() {
        if let Some(root) = root.dyn_ref::<HtmlElement>() {
            let _ = root.style().set_property("scroll-padding-top", &px);
        }
    }
}

/// Scrolls so `target`'s top sits just below the header, with the same
/// lookahead buffer the section tracker uses.
pub fn scroll_to_element(ctx: &PageContext, target: &Element, behavior: ScrollBehavior) {
    let top = target.get_bounding_client_rect().top() + ctx.scroll_y()
        - ctx.header_height()
        - config::SCROLL_LOOKAHEAD_PX;
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(behavior);
    ctx.window().scroll_to_with_scroll_to_options(&options);
}

/// Applies the offset now and keeps it current across load and resizes.
pub fn attach(ctx: &Rc<PageContext>) {
    apply_header_offset(ctx);

    let on_load = {
        let ctx = Rc::clone(ctx);
        move |_| apply_header_offset(&ctx)
    };
    listen(ctx.window(), "load", on_load);

    let resized = {
        let ctx = Rc::clone(ctx);
        debounce(move || apply_header_offset(&ctx), config::HEADER_OFFSET_DEBOUNCE_MS)
    };
    listen(ctx.window(), "resize", move |_| resized());
}
