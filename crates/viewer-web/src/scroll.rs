//! Scroll progress source: maps the page's scrollable height onto [0, 1]
//! and publishes the fraction into a shared cell on every scroll event.
//! The camera core only ever consumes the published value.

use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::scroll_fraction;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Current fraction of the pinned scroll range, clamped to [0, 1].
pub fn read_progress(window: &web::Window) -> f32 {
    let offset = window.scroll_y().unwrap_or(0.0);
    let extent = scrollable_extent(window);
    scroll_fraction(offset, extent)
}

fn scrollable_extent(window: &web::Window) -> f64 {
    let doc_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    doc_height - viewport
}

/// Listen for scroll events and keep `progress` current. The initial value
/// is published immediately so a reloaded page mid-scroll starts correct.
pub fn wire_scroll(progress: Rc<RefCell<f32>>) {
    let Some(window) = web::window() else {
        return;
    };
    *progress.borrow_mut() = read_progress(&window);

    let window_for_read = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        *progress.borrow_mut() = read_progress(&window_for_read);
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}
