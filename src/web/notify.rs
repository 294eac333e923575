//! Transient stacked notifications, the page's feedback channel for every
//! request outcome. Notices auto-dismiss after a few seconds and can be
//! closed by hand.

use gloo_timers::callback::Timeout;

use crate::ui_model::Severity;

use super::dom;

const AUTO_DISMISS_MS: u32 = 5_000;
const CONTAINER_ID: &str = "notification-container";
const STYLES_ID: &str = "notification-styles";

pub(super) fn show(message: &str, severity: Severity) {
    let Some(doc) = dom::document() else {
        return;
    };
    let Some(container) = container(&doc) else {
        return;
    };

    let Ok(note) = doc.create_element("div") else {
        return;
    };
    note.set_class_name(&format!(
        "notification notification-{} fade-in",
        severity.class_suffix()
    ));

    let Ok(content) = doc.create_element("div") else {
        return;
    };
    content.set_class_name("notification-content");

    let Ok(text) = doc.create_element("span") else {
        return;
    };
    text.set_class_name("notification-message");
    text.set_text_content(Some(message));

    let Ok(close) = doc.create_element("button") else {
        return;
    };
    close.set_class_name("notification-close");
    close.set_text_content(Some("×"));

    let _ = content.append_child(&text);
    let _ = content.append_child(&close);
    let _ = note.append_child(&content);
    let _ = container.append_child(&note);

    let dismissed = note.clone();
    dom::on_click(close.as_ref(), move |_| dismissed.remove());

    let expired = note;
    Timeout::new(AUTO_DISMISS_MS, move || expired.remove()).forget();
}

fn container(doc: &web_sys::Document) -> Option<web_sys::Element> {
    if let Some(existing) = doc.get_element_by_id(CONTAINER_ID) {
        return Some(existing);
    }
    let container = doc.create_element("div").ok()?;
    container.set_id(CONTAINER_ID);
    container.set_class_name("notification-container");
    doc.body()?.append_child(&container).ok()?;
    Some(container)
}

/// Installs the notification stylesheet once per page.
pub(super) fn inject_styles() {
    let Some(doc) = dom::document() else {
        return;
    };
    if doc.get_element_by_id(STYLES_ID).is_some() {
        return;
    }
    let Ok(style) = doc.create_element("style") else {
        return;
    };
    style.set_id(STYLES_ID);
    style.set_text_content(Some(NOTIFICATION_CSS));
    if let Some(head) = doc.head() {
        let _ = head.append_child(&style);
    }
}

const NOTIFICATION_CSS: &str = r#"
.notification-container {
    position: fixed;
    top: 20px;
    right: 20px;
    z-index: 9999;
    max-width: 400px;
}

.notification {
    background: white;
    border-radius: 8px;
    box-shadow: 0 4px 12px rgba(0,0,0,0.15);
    margin-bottom: 10px;
    overflow: hidden;
    border-left: 4px solid;
}

.notification-info { border-left-color: #3498db; }
.notification-success { border-left-color: #27ae60; }
.notification-warning { border-left-color: #f39c12; }
.notification-error { border-left-color: #e74c3c; }

.notification-content {
    padding: 16px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.notification-message {
    flex: 1;
    font-size: 14px;
    line-height: 1.4;
}

.notification-close {
    background: none;
    border: none;
    font-size: 18px;
    cursor: pointer;
    color: #999;
    margin-left: 12px;
}

.notification-close:hover {
    color: #666;
}
"#;
