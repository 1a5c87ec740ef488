//! Active-section tracking: decides which top-level section is "current"
//! for the scroll position and reflects that into the nav highlighting.

use std::rc::Rc;

use web_sys::{Element, HtmlElement};

use crate::config;
use crate::context::{query_all, PageContext};
use crate::events::{listen, listen_passive};
use crate::timing::{debounce, throttle};

pub struct SectionTracker {
    ctx: Rc<PageContext>,
    sections: Vec<HtmlElement>,
    links: Vec<Element>,
}

impl SectionTracker {
    /// `None` when the page carries no tracked sections; the component is
    /// inert in that case.
    pub fn new(ctx: Rc<PageContext>) -> Option<Rc<SectionTracker>> {
        // Only top-level sections: inner section[id] elements must not
        // steal the highlight.
        let sections = query_all::<HtmlElement>(ctx.document(), "main > section[id]");
        if sections.is_empty() {
            return None;
        }
        let links = query_all::<Element>(ctx.document(), ".main-nav a[href^='#']");
        Some(Rc::new(SectionTracker { ctx, sections, links }))
    }

    /// Recomputes the active section from live scroll state.
    ///
    /// Skipped entirely while the mobile menu holds the nav-open flag;
    /// nothing is queued, and the next unfrozen trigger reads current
    /// scroll position and reconciles on its own.
    pub fn recompute(&self) {
        if self.ctx.nav_open() {
            return;
        }
        let top_line =
            self.ctx.scroll_y() + self.ctx.header_height() + config::SCROLL_LOOKAHEAD_PX;
        let tops: Vec<f64> = self.sections.iter().map(|s| s.offset_top() as f64).collect();
        let index = active_index(&tops, top_line);
        self.mark_active(&self.sections[index].id());
    }

    /// Marks the link pointing at `#id` active and clears every other one,
    /// keeping the single-active invariant.
    pub fn mark_active(&self, id: &str) {
        let href = format!("#{id}");
        for link in &self.links {
            let is_current = link.get_attribute("href").as_deref() == Some(href.as_str());
            let _ = link.class_list().toggle_with_force("active", is_current);
            if is_current {
                let _ = link.set_attribute("aria-current", "true");
            } else {
                let _ = link.remove_attribute("aria-current");
            }
        }
    }

    pub fn attach(self: &Rc<Self>) {
        let on_load = {
            let tracker = Rc::clone(self);
            move |_| tracker.recompute()
        };
        listen(self.ctx.window(), "load", on_load);

        let on_scroll = {
            let tracker = Rc::clone(self);
            throttle(move || tracker.recompute(), config::SCROLL_THROTTLE_MS)
        };
        listen_passive(self.ctx.window(), "scroll", move |_| on_scroll());

        let on_resize = {
            let tracker = Rc::clone(self);
            debounce(move || tracker.recompute(), config::TRACKER_RESIZE_DEBOUNCE_MS)
        };
        listen(self.ctx.window(), "resize", move |_| on_resize());

        // The wasm module may instantiate after `load` has already fired.
        self.recompute();
    }
}

/// Index of the last section whose top has scrolled above `top_line`; the
/// first section when none has.
fn active_index(tops: &[f64], top_line: f64) -> usize {
    let mut current = 0;
    for (index, top) in tops.iter().enumerate() {
        if *top <= top_line {
            current = index;
        } else {
            break;
        }
    }
    current
}
