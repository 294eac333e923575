//! Single global loading overlay, created on first use and reused by
//! toggling its display.

use super::dom;

const SPINNER_ID: &str = "loading-spinner";

pub(super) fn show() {
    if dom::by_id(SPINNER_ID).is_some() {
        dom::set_display(SPINNER_ID, "block");
        return;
    }
    let Some(doc) = dom::document() else {
        return;
    };
    let Ok(overlay) = doc.create_element("div") else {
        return;
    };
    overlay.set_id(SPINNER_ID);
    overlay.set_class_name("loading-overlay");
    overlay.set_inner_html(r#"<div class="spinner"></div>"#);
    if let Some(body) = doc.body() {
        let _ = body.append_child(&overlay);
    }
}

pub(super) fn hide() {
    dom::set_display(SPINNER_ID, "none");
}
