use web_sys::{FormData, HtmlFormElement};

use crate::api::{self, PlaceOrderResponse};
use crate::money::fmt_rupees;
use crate::ui_model::{OrderDraft, Severity};

use super::{cart, dom, http, loading, modal, notify};

pub(super) async fn place_order(form: HtmlFormElement) {
    let Some(draft) = read_order_form(&form) else {
        return;
    };
    if let Err(msg) = draft.validate() {
        notify::show(msg, Severity::Error);
        return;
    }

    loading::show();
    let res = http::post_json::<_, PlaceOrderResponse>(api::PLACE_ORDER_URL, &draft).await;
    loading::hide();

    match res {
        Ok(data) if data.success => show_order_success(&data),
        Ok(data) => notify::show(
            data.error.as_deref().unwrap_or("Failed to place order"),
            Severity::Error,
        ),
        Err(err) => {
            log::error!("place_order: {err}");
            notify::show("Failed to place order", Severity::Error);
        }
    }
}

fn read_order_form(form: &HtmlFormElement) -> Option<OrderDraft> {
    let data = FormData::new_with_form(form).ok()?;
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    Some(OrderDraft::new(
        field("customer_name"),
        field("customer_phone"),
        field("customer_address"),
        field("payment_method"),
        field("coupon_code"),
    ))
}

fn show_order_success(data: &PlaceOrderResponse) {
    if dom::by_id("order-success-modal").is_none() {
        return;
    }
    dom::set_text("order-id-display", &data.order_id);
    dom::set_text("order-total-display", &fmt_rupees(data.total));
    dom::set_inner_html(
        "order-qr-code",
        &format!(
            r#"<img src="data:image/png;base64,{}" alt="QR Code">"#,
            data.qr_code
        ),
    );
    dom::set_text(
        "estimated-delivery",
        &format!("{} minutes", data.estimated_delivery),
    );
    modal::open("order-success-modal");

    // The server dropped the session cart when it accepted the order.
    cart::update_cart_counter(0);
}
