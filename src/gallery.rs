//! Inline image cycler for the product showcase card.

use std::cell::Cell;

use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

const GALLERY_IMAGES: [&str; 2] = ["images/gallery-front.png", "images/gallery-back.png"];

thread_local! {
    static GALLERY_INDEX: Cell<usize> = const { Cell::new(0) };
}

/// Advances `#gallery-image` to the next showcase image, wrapping around.
pub fn next_image() {
    let Some(image) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("gallery-image"))
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
    else {
        return;
    };
    let next = GALLERY_INDEX.with(|index| {
        let next = (index.get() + 1) % GALLERY_IMAGES.len();
        index.set(next);
        next
    });
    image.set_src(GALLERY_IMAGES[next]);
}
