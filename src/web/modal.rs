//! Generic open/close for the page's modal dialogs. Page scroll is
//! suppressed while a modal is shown.

use super::dom;

pub(super) fn open(modal_id: &str) {
    let Some(el) = dom::by_id(modal_id) else {
        return;
    };
    let _ = el.class_list().add_1("show");
    set_body_scroll_locked(true);
}

pub(super) fn close(modal_id: &str) {
    let Some(el) = dom::by_id(modal_id) else {
        return;
    };
    let _ = el.class_list().remove_1("show");
    set_body_scroll_locked(false);
}

fn set_body_scroll_locked(locked: bool) {
    let Some(body) = dom::document().and_then(|d| d.body()) else {
        return;
    };
    if locked {
        let _ = body.style().set_property("overflow", "hidden");
    } else {
        let _ = body.style().remove_property("overflow");
    }
}
