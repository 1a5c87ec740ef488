//! Behavior layer for the static marketing site.
//!
//! The markup is server-rendered; this crate only reacts to events: header
//! offset management, mobile navigation, active-section tracking, language
//! switching, reveal-on-scroll, and modal dialogs. Every component is a
//! defensive no-op when its DOM targets are missing; a page without them
//! simply stays static.

use std::rc::Rc;

use log::{info, Level};
use wasm_bindgen::prelude::*;

pub mod config;
pub mod context;
pub mod enhancements;
pub mod events;
pub mod gallery;
pub mod lang;
pub mod menu;
pub mod metrics;
pub mod modal;
pub mod reveal;
pub mod timing;
pub mod tracker;

use context::PageContext;
use menu::MobileMenu;
use tracker::SectionTracker;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    let Some(ctx) = PageContext::new().map(Rc::new) else {
        return;
    };
    info!("wiring site behavior");

    metrics::attach(&ctx);
    let tracker = SectionTracker::new(Rc::clone(&ctx));
    if let Some(tracker) = &tracker {
        tracker.attach();
    }
    if let Some(menu) = MobileMenu::new(Rc::clone(&ctx), tracker.clone()) {
        menu.attach();
    }
    lang::attach(&ctx);
    reveal::attach(&ctx);
    modal::attach(&ctx);
    enhancements::attach(&ctx);
}

/// Redirects to the `code` version of the current page. Exposed for the
/// inline language buttons.
#[wasm_bindgen]
pub fn switch_language(code: &str) {
    lang::switch_language(code);
}

/// Opens the modal with `id`; `event` is the triggering click, stopped so
/// it cannot double as an outside click.
#[wasm_bindgen]
pub fn open_modal(id: &str, event: Option<web_sys::Event>) {
    modal::show(id, event.as_ref());
}

/// Closes the modal with `id`.
#[wasm_bindgen]
pub fn close_modal(id: &str) {
    modal::hide(id);
}

/// Advances the showcase gallery image by one.
#[wasm_bindgen]
pub fn next_gallery_image() {
    gallery::next_image();
}
