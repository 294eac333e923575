use wasm_bindgen::JsCast;

use crate::api::{self, OrderStatus};
use crate::money::fmt_rupees;
use crate::ui_model::{stage_marks, Severity, StageMark};

use super::{dom, http, modal, notify};

pub(super) async fn track_order(order_id: String) {
    if order_id.is_empty() {
        notify::show("Please enter an order ID", Severity::Error);
        return;
    }

    match http::get_json::<OrderStatus>(&api::order_status_url(&order_id)).await {
        Ok(order) => {
            if let Some(err) = &order.error {
                notify::show(err, Severity::Error);
            } else {
                display_order_status(&order);
            }
        }
        Err(err) => {
            log::error!("order_status: {err}");
            notify::show("Failed to track order", Severity::Error);
        }
    }
}

fn display_order_status(order: &OrderStatus) {
    if dom::by_id("order-status-modal").is_none() {
        return;
    }
    dom::set_text("status-order-id", &order.order_id);
    dom::set_text("status-customer-name", &order.customer_name);
    dom::set_text("status-total", &fmt_rupees(order.total));
    dom::set_text("status-current", &order.status_display);
    update_timeline(&order.status);
    modal::open("order-status-modal");
}

fn update_timeline(status: &str) {
    let Some(timeline) = dom::by_id("order-timeline") else {
        return;
    };
    let Ok(items) = timeline.query_selector_all(".timeline-item") else {
        return;
    };

    for (index, mark) in stage_marks(status).iter().enumerate() {
        let Some(item) = items
            .get(index as u32)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let classes = item.class_list();
        let _ = classes.remove_2("active", "current");
        match mark {
            StageMark::Done => {
                let _ = classes.add_1("active");
            }
            StageMark::Current => {
                let _ = classes.add_1("current");
            }
            StageMark::Upcoming => {}
        }
    }
}
