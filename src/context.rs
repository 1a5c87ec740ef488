use std::cell::Cell;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MediaQueryList, Window};

use crate::config;

/// Shared handles to the DOM bindings every component works against.
///
/// Constructed once at startup and passed around as `Rc<PageContext>`;
/// replaces module-level element caches and makes the nav-open flag an
/// explicit single-writer/single-reader cell instead of a body-class probe.
pub struct PageContext {
    window: Window,
    document: Document,
    header: Option<HtmlElement>,
    mobile_query: Option<MediaQueryList>,
    nav_open: Cell<bool>,
}

impl PageContext {
    /// `None` outside a browsing context (no window or document).
    pub fn new() -> Option<PageContext> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let header = document
            .query_selector(".site-header")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let mobile_query = window.match_media(config::MOBILE_MEDIA_QUERY).ok().flatten();
        Some(PageContext {
            window,
            document,
            header,
            mobile_query,
            nav_open: Cell::new(false),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    /// Rendered header height, falling back to the `--header-h` custom
    /// property before first layout settles.
    pub fn header_height(&self) -> f64 {
        let rendered = self
            .header
            .as_ref()
            .map(|header| header.offset_height() as f64)
            .unwrap_or(0.0);
        if rendered > 0.0 {
            return rendered;
        }
        self.header_height_fallback()
    }

    fn header_height_fallback(&self) -> f64 {
        let Some(root) = self.document.document_element() else {
            return 0.0;
        };
        let Ok(Some(style)) = self.window.get_computed_style(&root) else {
            return 0.0;
        };
        parse_px(&style.get_property_value(config::HEADER_HEIGHT_VAR).unwrap_or_default())
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile_query.as_ref().map(|query| query.matches()).unwrap_or(false)
    }

    pub fn mobile_query(&self) -> Option<&MediaQueryList> {
        self.mobile_query.as_ref()
    }

    /// Read by the section tracker to decide whether it is frozen.
    pub fn nav_open(&self) -> bool {
        self.nav_open.get()
    }

    /// Single writer: the mobile menu controller. The `nav-open` body class
    /// mirrors the flag for styling.
    pub fn set_nav_open(&self, open: bool) {
        self.nav_open.set(open);
        if let Some(body) = self.document.body() {
            let classes = body.class_list();
            let _ = if open {
                classes.add_1("nav-open")
            } else {
                classes.remove_1("nav-open")
            };
        }
    }
}

/// Every element matching `selector` that casts to `T`, in document order.
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

fn parse_px(value: &str) -> f64 {
    let value = value.trim();
    let value = value.strip_suffix("px").unwrap_or(value).trim();
    value.parse().unwrap_or(0.0)
}
