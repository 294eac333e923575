//! Small DOM helpers shared by the feature modules, so request/response
//! logic reads against these instead of raw `web_sys` lookups.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub(super) fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

pub(super) fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

pub(super) fn by_id(id: &str) -> Option<web_sys::Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

pub(super) fn query_all(selector: &str) -> Vec<web_sys::Element> {
    let Some(doc) = document() else {
        return Vec::new();
    };
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

pub(super) fn set_text(id: &str, text: &str) {
    if let Some(el) = by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub(super) fn set_inner_html(id: &str, html: &str) {
    if let Some(el) = by_id(id) {
        el.set_inner_html(html);
    }
}

/// Value of an `<input>` or `<textarea>` by id.
pub(super) fn input_value(id: &str) -> Option<String> {
    let el = by_id(id)?;
    if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        return Some(input.value());
    }
    el.dyn_ref::<web_sys::HtmlTextAreaElement>()
        .map(|area| area.value())
}

pub(super) fn set_display(id: &str, display: &str) {
    if let Some(el) = by_id(id).and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) {
        let _ = el.style().set_property("display", display);
    }
}

pub(super) fn listen(
    target: &web_sys::EventTarget,
    kind: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    let _ = target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref());
    // Listeners live for the page lifetime.
    cb.forget();
}

pub(super) fn on_click(
    target: &web_sys::EventTarget,
    handler: impl FnMut(web_sys::Event) + 'static,
) {
    listen(target, "click", handler);
}

pub(super) fn on_blur(
    target: &web_sys::EventTarget,
    handler: impl FnMut(web_sys::Event) + 'static,
) {
    listen(target, "blur", handler);
}

pub(super) fn on_submit(
    target: &web_sys::EventTarget,
    handler: impl FnMut(web_sys::Event) + 'static,
) {
    listen(target, "submit", handler);
}
