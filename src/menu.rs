//! Burger-driven mobile navigation: open/close state, dismissal paths, and
//! offset-compensated anchor scrolling.

use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent, MediaQueryListEvent, ScrollBehavior};

use crate::context::PageContext;
use crate::events::listen;
use crate::metrics::{apply_header_offset, scroll_to_element};
use crate::timing::after_layout_settles;
use crate::tracker::SectionTracker;

pub struct MobileMenu {
    ctx: Rc<PageContext>,
    nav: HtmlElement,
    burger: HtmlElement,
    tracker: Option<Rc<SectionTracker>>,
}

impl MobileMenu {
    /// Inert (`None`) when the page has no burger control or nav panel.
    pub fn new(
        ctx: Rc<PageContext>,
        tracker: Option<Rc<SectionTracker>>,
    ) -> Option<Rc<MobileMenu>> {
        let burger = html_element_by_id(&ctx, "burgerBtn")?;
        let nav = html_element_by_id(&ctx, "mainNav")?;
        let _ = burger.set_attribute("aria-controls", "mainNav");
        let _ = burger.set_attribute("aria-expanded", "false");
        Some(Rc::new(MobileMenu { ctx, nav, burger, tracker }))
    }

    pub fn is_open(&self) -> bool {
        self.nav.class_list().contains("active")
    }

    pub fn open(&self) {
        debug!("opening mobile menu");
        let _ = self.nav.class_list().add_1("active");
        self.ctx.set_nav_open(true);
        let _ = self.burger.set_attribute("aria-expanded", "true");
        let ctx = Rc::clone(&self.ctx);
        after_layout_settles(move || apply_header_offset(&ctx));
    }

    /// Closing re-derives the header offset and then runs one fresh tracker
    /// pass, reconciling any scrolling that happened while frozen.
    pub fn close(&self) {
        debug!("closing mobile menu");
        let _ = self.nav.class_list().remove_1("active");
        self.ctx.set_nav_open(false);
        let _ = self.burger.set_attribute("aria-expanded", "false");
        let ctx = Rc::clone(&self.ctx);
        let tracker = self.tracker.clone();
        after_layout_settles(move || {
            apply_header_offset(&ctx);
            if let Some(tracker) = tracker {
                tracker.recompute();
            }
        });
    }

    pub fn attach(self: &Rc<Self>) {
        let toggled = {
            let menu = Rc::clone(self);
            move |_| {
                if menu.is_open() {
                    menu.close();
                } else {
                    menu.open();
                }
            }
        };
        listen(&self.burger, "click", toggled);

        let on_key = {
            let menu = Rc::clone(self);
            move |event: Event| {
                let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if key_event.key() == "Escape" && menu.is_open() {
                    menu.close();
                }
            }
        };
        listen(self.ctx.document(), "keydown", on_key);

        // A click outside the nav region dismisses, mobile only.
        let on_document_click = {
            let menu = Rc::clone(self);
            move |event: Event| {
                if !menu.ctx.is_mobile() || !menu.is_open() {
                    return;
                }
                let inside = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .and_then(|el| el.closest("#mainNav, #burgerBtn").ok().flatten());
                if inside.is_none() {
                    menu.close();
                }
            }
        };
        listen(self.ctx.document(), "click", on_document_click);

        // Leaving the mobile breakpoint closes the panel.
        if let Some(query) = self.ctx.mobile_query() {
            let menu = Rc::clone(self);
            listen(query, "change", move |event: Event| {
                let Some(change) = event.dyn_ref::<MediaQueryListEvent>() else {
                    return;
                };
                if !change.matches() && menu.is_open() {
                    menu.close();
                }
            });
        }

        // Anchor clicks inside the nav: close first (on mobile), then scroll
        // with the header offset once layout is stable.
        let on_nav_click = {
            let menu = Rc::clone(self);
            move |event: Event| {
                let Some(anchor) = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .and_then(|el| el.closest("a[href^='#']").ok().flatten())
                else {
                    return;
                };
                let Some(href) = anchor.get_attribute("href") else {
                    return;
                };
                let id = href.trim_start_matches('#').to_owned();
                let Some(target) = menu.ctx.document().get_element_by_id(&id) else {
                    return;
                };

                event.prevent_default();
                if menu.ctx.is_mobile() {
                    menu.close();
                }

                let ctx = Rc::clone(&menu.ctx);
                let tracker = menu.tracker.clone();
                after_layout_settles(move || {
                    scroll_to_element(&ctx, &target, ScrollBehavior::Smooth);
                    // Optimistic highlight, ahead of the tracker's next pass.
                    if let Some(tracker) = tracker {
                        tracker.mark_active(&id);
                    }
                });
            }
        };
        listen(&self.nav, "click", on_nav_click);
    }
}

fn html_element_by_id(ctx: &PageContext, id: &str) -> Option<HtmlElement> {
    ctx.document()
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}
