use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, CartItemRequest, CartResponse};
use crate::money::fmt_rupees;
use crate::ui_model::Severity;

use super::{dom, http, loading, notify};

pub(super) async fn add_to_cart(item_name: String) {
    loading::show();
    let res = http::post_json::<_, CartResponse>(
        api::ADD_TO_CART_URL,
        &CartItemRequest {
            item_name: &item_name,
        },
    )
    .await;
    loading::hide();

    match res {
        Ok(data) if data.success => {
            update_cart_counter(data.cart_count);
            notify::show("Item added to cart!", Severity::Success);
        }
        Ok(data) => notify::show(
            data.error.as_deref().unwrap_or("Failed to add item to cart"),
            Severity::Error,
        ),
        Err(err) => {
            log::error!("add_to_cart: {err}");
            notify::show("Failed to add item to cart", Severity::Error);
        }
    }
}

pub(super) async fn remove_from_cart(item_name: String) {
    let res = http::post_json::<_, CartResponse>(
        api::REMOVE_FROM_CART_URL,
        &CartItemRequest {
            item_name: &item_name,
        },
    )
    .await;

    match res {
        Ok(data) if data.success => {
            update_cart_counter(data.cart_count);
            if let Some(subtotal) = data.subtotal {
                dom::set_text("cart-subtotal", &fmt_rupees(subtotal));
            }
            remove_cart_row(&item_name);
            notify::show("Item removed from cart", Severity::Info);
        }
        Ok(data) => notify::show(
            data.error.as_deref().unwrap_or("Failed to remove item"),
            Severity::Error,
        ),
        Err(err) => {
            log::error!("remove_from_cart: {err}");
            notify::show("Failed to remove item", Severity::Error);
        }
    }
}

/// Increase delegates to add-to-cart; decrease is wired in the pages but has
/// no backend operation yet, so it only logs.
pub(super) fn change_quantity(item_name: &str, delta: i32) {
    if delta > 0 {
        spawn_local(add_to_cart(item_name.to_string()));
    } else {
        log::debug!("decrease quantity requested for {item_name}: not implemented");
    }
}

pub(super) fn update_cart_counter(count: u32) {
    let Some(el) = dom::by_id("cart-counter") else {
        return;
    };
    el.set_text_content(Some(&count.to_string()));
    if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html
            .style()
            .set_property("display", if count > 0 { "flex" } else { "none" });
    }
}

fn remove_cart_row(item_name: &str) {
    let Some(doc) = dom::document() else {
        return;
    };
    let selector = format!("[data-cart-item=\"{}\"]", item_name.replace('"', "\\\""));
    if let Ok(Some(row)) = doc.query_selector(&selector) {
        row.remove();
    }
}

/// Seeds the counter from the rows present in the server-rendered page.
pub(super) fn seed_cart_display() {
    update_cart_counter(dom::query_all(".cart-item").len() as u32);
}
