//! Browser-side behavior tests.
//!
//! Run with `wasm-pack test --headless --chrome` (or `--firefox`).

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Document, HtmlElement, KeyboardEvent, KeyboardEventInit, Window};

use site_behavior::context::PageContext;
use site_behavior::menu::MobileMenu;
use site_behavior::tracker::SectionTracker;
use site_behavior::{lang, modal, reveal, timing};

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = r##"
    <header class="site-header" style="height: 50px;"></header>
    <button id="burgerBtn"></button>
    <nav class="main-nav" id="mainNav">
        <a href="#one">One</a>
        <a href="#two">Two</a>
    </nav>
    <main>
        <section id="one" style="height: 1200px;"></section>
        <section id="two" style="height: 1200px;"></section>
    </main>
"##;

fn window() -> Window {
    web_sys::window().unwrap()
}

fn document() -> Document {
    window().document().unwrap()
}

fn set_fixture(html: &str) {
    document().body().unwrap().set_inner_html(html);
    window().scroll_to_with_x_and_y(0.0, 0.0);
    let _ = document().body().unwrap().style().set_property("overflow", "");
}

fn page_context() -> Rc<PageContext> {
    Rc::new(PageContext::new().unwrap())
}

fn active_hrefs() -> Vec<String> {
    let list = document().query_selector_all(".main-nav a.active").unwrap();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .filter_map(|el| el.get_attribute("href"))
        .collect()
}

fn section_top(id: &str) -> f64 {
    document()
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .offset_top() as f64
}

#[wasm_bindgen_test]
fn tracker_marks_exactly_one_link_active() {
    set_fixture(PAGE);
    let ctx = page_context();
    let tracker = SectionTracker::new(ctx).unwrap();

    tracker.recompute();
    assert_eq!(active_hrefs(), vec!["#one".to_string()]);

    window().scroll_to_with_x_and_y(0.0, section_top("two") + 20.0);
    tracker.recompute();
    assert_eq!(active_hrefs(), vec!["#two".to_string()]);

    let two = document().query_selector(".main-nav a[href='#two']").unwrap().unwrap();
    assert_eq!(two.get_attribute("aria-current").as_deref(), Some("true"));
    let one = document().query_selector(".main-nav a[href='#one']").unwrap().unwrap();
    assert_eq!(one.get_attribute("aria-current"), None);
}

#[wasm_bindgen_test]
fn tracker_freezes_while_nav_is_open() {
    set_fixture(PAGE);
    let ctx = page_context();
    let tracker = SectionTracker::new(Rc::clone(&ctx)).unwrap();

    tracker.recompute();
    assert_eq!(active_hrefs(), vec!["#one".to_string()]);

    ctx.set_nav_open(true);
    window().scroll_to_with_x_and_y(0.0, section_top("two") + 20.0);
    // Repeated triggers while frozen must not move the highlight.
    tracker.recompute();
    tracker.recompute();
    assert_eq!(active_hrefs(), vec!["#one".to_string()]);

    // The first unfrozen trigger reconciles against live scroll state.
    ctx.set_nav_open(false);
    tracker.recompute();
    assert_eq!(active_hrefs(), vec!["#two".to_string()]);
}

#[wasm_bindgen_test]
async fn closing_the_menu_reconciles_the_tracker() {
    set_fixture(PAGE);
    let ctx = page_context();
    let tracker = SectionTracker::new(Rc::clone(&ctx)).unwrap();
    let menu = MobileMenu::new(Rc::clone(&ctx), Some(Rc::clone(&tracker))).unwrap();

    tracker.recompute();
    assert_eq!(active_hrefs(), vec!["#one".to_string()]);

    menu.open();
    assert!(ctx.nav_open());
    let burger = document().get_element_by_id("burgerBtn").unwrap();
    assert_eq!(burger.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert!(document().body().unwrap().class_list().contains("nav-open"));

    // Scrolling while open stays frozen.
    window().scroll_to_with_x_and_y(0.0, section_top("two") + 20.0);
    tracker.recompute();
    assert_eq!(active_hrefs(), vec!["#one".to_string()]);

    menu.close();
    assert!(!ctx.nav_open());
    assert_eq!(burger.get_attribute("aria-expanded").as_deref(), Some("false"));

    // The fresh pass runs after layout settles (two animation frames).
    TimeoutFuture::new(150).await;
    assert_eq!(active_hrefs(), vec!["#two".to_string()]);
}

#[wasm_bindgen_test]
fn escape_closes_every_open_modal_in_one_pass() {
    set_fixture(
        r#"
        <div class="modal" id="m1"><div class="modal-content"></div></div>
        <div class="modal" id="m2"><div class="modal-content"></div></div>
        "#,
    );
    let ctx = page_context();
    modal::attach(&ctx);

    modal::show("m1", None);
    modal::show("m2", None);
    let body = document().body().unwrap();
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "hidden");

    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let escape = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document().dispatch_event(&escape).unwrap();

    let m1 = document().get_element_by_id("m1").unwrap();
    let m2 = document().get_element_by_id("m2").unwrap();
    assert!(!m1.class_list().contains("show"));
    assert!(!m2.class_list().contains("show"));
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "");
}

#[wasm_bindgen_test]
fn closing_one_modal_unlocks_scroll_even_with_another_open() {
    // Pins the long-standing per-close unlock; see the TODO at modal::hide.
    set_fixture(
        r#"
        <div class="modal" id="m1"></div>
        <div class="modal" id="m2"></div>
        "#,
    );

    modal::show("m1", None);
    modal::show("m2", None);
    modal::hide("m1");

    let body = document().body().unwrap();
    let m2 = document().get_element_by_id("m2").unwrap();
    assert!(m2.class_list().contains("show"));
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "");
}

#[wasm_bindgen_test]
async fn debounce_fires_once_after_the_burst_goes_quiet() {
    let count = Rc::new(Cell::new(0));
    let debounced = timing::debounce(
        {
            let count = Rc::clone(&count);
            move || count.set(count.get() + 1)
        },
        120,
    );

    for _ in 0..5 {
        debounced();
        TimeoutFuture::new(50).await;
    }
    assert_eq!(count.get(), 0);

    TimeoutFuture::new(200).await;
    assert_eq!(count.get(), 1);

    TimeoutFuture::new(200).await;
    assert_eq!(count.get(), 1);
}

#[wasm_bindgen_test]
async fn throttle_runs_leading_and_trailing_edges() {
    let count = Rc::new(Cell::new(0));
    let throttled = timing::throttle(
        {
            let count = Rc::clone(&count);
            move || count.set(count.get() + 1)
        },
        100,
    );

    throttled();
    assert_eq!(count.get(), 1);

    // Mid-interval calls coalesce into one trailing catch-up.
    throttled();
    throttled();
    assert_eq!(count.get(), 1);

    TimeoutFuture::new(180).await;
    assert_eq!(count.get(), 2);
}

#[wasm_bindgen_test]
async fn reveal_shows_a_visible_element_exactly_once() {
    set_fixture(r#"<div data-reveal id="hero" style="height: 40px;"></div>"#);
    let ctx = page_context();
    reveal::attach(&ctx);

    TimeoutFuture::new(100).await;
    let hero = document().get_element_by_id("hero").unwrap();
    assert!(hero.class_list().contains("is-visible"));

    // Once revealed the element is unobserved; nothing hides it again.
    TimeoutFuture::new(100).await;
    assert!(hero.class_list().contains("is-visible"));
}

#[wasm_bindgen_test]
fn reveal_shows_everything_when_observer_support_is_missing() {
    set_fixture(
        r#"
        <div data-reveal id="a"></div>
        <div data-reveal id="b"></div>
        "#,
    );
    let ctx = page_context();
    let _ = js_sys::Reflect::delete_property(
        window().unchecked_ref(),
        &JsValue::from_str("IntersectionObserver"),
    );
    reveal::attach(&ctx);

    assert!(document().get_element_by_id("a").unwrap().class_list().contains("is-visible"));
    assert!(document().get_element_by_id("b").unwrap().class_list().contains("is-visible"));
}

#[wasm_bindgen_test]
fn language_buttons_mark_the_default_language_active() {
    set_fixture(
        r#"
        <div class="language-switch">
            <button data-lang="en"></button>
            <button data-lang="lv"></button>
            <button data-lang="ru"></button>
        </div>
        "#,
    );
    let ctx = page_context();
    lang::attach(&ctx);

    let en = document().query_selector("button[data-lang='en']").unwrap().unwrap();
    let lv = document().query_selector("button[data-lang='lv']").unwrap().unwrap();
    assert!(en.class_list().contains("is-active"));
    assert_eq!(en.get_attribute("aria-current").as_deref(), Some("true"));
    assert!(!lv.class_list().contains("is-active"));
    assert_eq!(lv.get_attribute("aria-current").as_deref(), Some("false"));
}

#[wasm_bindgen_test]
fn gallery_cycles_through_the_image_list() {
    set_fixture(r#"<img id="gallery-image" src="images/gallery-front.png">"#);

    site_behavior::next_gallery_image();
    let image = document()
        .get_element_by_id("gallery-image")
        .unwrap()
        .dyn_into::<web_sys::HtmlImageElement>()
        .unwrap();
    assert!(image.src().ends_with("images/gallery-back.png"));

    site_behavior::next_gallery_image();
    assert!(image.src().ends_with("images/gallery-front.png"));
}
