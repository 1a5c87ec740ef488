//! Language switching with sub-path, query and fragment preservation.
//!
//! URL contract: `/{lang}/{rest...}` with lang in {en, lv, ru}. The rewrite
//! itself is pure; only the redirect touches the browser.

use std::rc::Rc;

use log::info;
use web_sys::Element;

use crate::context::{query_all, PageContext};
use crate::events::listen;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lang {
    En,
    Lv,
    Ru,
}

impl Lang {
    pub const DEFAULT: Lang = Lang::En;

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Lv => "lv",
            Lang::Ru => "ru",
        }
    }

    pub fn parse(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "lv" => Some(Lang::Lv),
            "ru" => Some(Lang::Ru),
            _ => None,
        }
    }
}

/// Language prefix of `path`, when it carries one.
pub fn current_lang(path: &str) -> Option<Lang> {
    path.split('/').find(|seg| !seg.is_empty()).and_then(Lang::parse)
}

/// Path remainder with the language prefix dropped, a trailing `index.html`
/// stripped, and a trailing slash kept while a sub-path remains.
fn remainder_path(path: &str) -> String {
    let mut segments: Vec<&str> = path.split('/').filter(|seg| !seg.is_empty()).collect();
    if segments.first().copied().and_then(Lang::parse).is_some() {
        segments.remove(0);
    }
    if segments
        .last()
        .map(|seg| seg.eq_ignore_ascii_case("index.html"))
        .unwrap_or(false)
    {
        segments.pop();
    }
    if segments.is_empty() {
        String::new()
    } else {
        format!("{}/", segments.join("/"))
    }
}

/// Replacement URL for switching to `to`, or `None` when the switch is a
/// no-op (already on that language). Query and fragment pass through
/// verbatim.
pub fn switch_target(path: &str, search: &str, hash: &str, to: Lang) -> Option<String> {
    let current = current_lang(path).unwrap_or(Lang::DEFAULT);
    if to == current {
        return None;
    }
    Some(format!("/{}/{}{}{}", to.code(), remainder_path(path), search, hash))
}

/// Redirects to `code`'s version of the current page, replacing the history
/// entry so back/forward stays clean. Unknown codes and the current
/// language are no-ops.
pub fn switch_language(code: &str) {
    let Some(to) = Lang::parse(code) else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    let hash = location.hash().unwrap_or_default();
    if let Some(target) = switch_target(&path, &search, &hash, to) {
        info!("switching language to {}", to.code());
        let _ = location.replace(&target);
    }
}

/// Wires every `.language-switch button[data-lang]` (header and mobile
/// panel alike) and marks the current language's buttons active.
pub fn attach(ctx: &Rc<PageContext>) {
    let buttons = query_all::<Element>(ctx.document(), ".language-switch button[data-lang]");
    if buttons.is_empty() {
        return;
    }

    for button in &buttons {
        let Some(code) = button.get_attribute("data-lang") else {
            continue;
        };
        listen(button, "click", move |event| {
            event.prevent_default();
            switch_language(&code);
        });
    }

    let path = ctx.window().location().pathname().unwrap_or_default();
    mark_active_buttons(&buttons, current_lang(&path).unwrap_or(Lang::DEFAULT));
}

fn mark_active_buttons(buttons: &[Element], current: Lang) {
    for button in buttons {
        let is_current = button.get_attribute("data-lang").as_deref() == Some(current.code());
        let _ = button.class_list().toggle_with_force("is-active", is_current);
        let _ = button.set_attribute("aria-current", if is_current { "true" } else { "false" });
    }
}
