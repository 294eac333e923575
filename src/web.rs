//! Browser entry point: wires the storefront pages' DOM to the backend.
//!
//! Every lookup tolerates an absent element, because each page only carries
//! the markup for the features it hosts; binding is skipped silently where
//! the markup is missing.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

mod cart;
mod coupon;
mod dom;
mod http;
mod loading;
mod modal;
mod notify;
mod order;
mod rating;
mod refresh;
mod spin;
mod support;
mod tracking;

/// Interaction controller shared into the handlers. This is the only
/// client-held state; everything substantive lives server-side and is
/// re-rendered from each response.
#[derive(Default)]
pub(crate) struct App {
    /// True only between spin dispatch and its resolution.
    is_spinning: Cell<bool>,
    /// Star the customer picked in the rating modal; 0 until one is picked.
    selected_rating: Cell<u8>,
}

thread_local! {
    static APP: Rc<App> = Rc::new(App::default());
}

fn app() -> Rc<App> {
    APP.with(Rc::clone)
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    cart::seed_cart_display();
    notify::inject_styles();
    bind_event_listeners(&app());
    refresh::start_auto_refresh();

    log::info!("storefront interaction layer attached");
}

fn bind_event_listeners(app: &Rc<App>) {
    for el in dom::query_all(".add-to-cart") {
        if let Some(item) = el.get_attribute("data-item") {
            dom::on_click(el.as_ref(), move |_| {
                spawn_local(cart::add_to_cart(item.clone()));
            });
        }
    }

    for el in dom::query_all(".remove-from-cart") {
        if let Some(item) = el.get_attribute("data-item") {
            dom::on_click(el.as_ref(), move |_| {
                spawn_local(cart::remove_from_cart(item.clone()));
            });
        }
    }

    for el in dom::query_all(".quantity-increase") {
        if let Some(item) = el.get_attribute("data-item") {
            dom::on_click(el.as_ref(), move |_| cart::change_quantity(&item, 1));
        }
    }
    for el in dom::query_all(".quantity-decrease") {
        if let Some(item) = el.get_attribute("data-item") {
            dom::on_click(el.as_ref(), move |_| cart::change_quantity(&item, -1));
        }
    }

    if let Some(input) = dom::by_id("coupon-code") {
        dom::on_blur(input.as_ref(), move |_| {
            spawn_local(coupon::validate_coupon());
        });
    }

    if let Some(form) = dom::by_id("order-form")
        .and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok())
    {
        let submitted = form.clone();
        dom::on_submit(form.as_ref(), move |ev| {
            ev.prevent_default();
            spawn_local(order::place_order(submitted.clone()));
        });
    }

    if let Some(btn) = dom::by_id("spin-btn") {
        let app = Rc::clone(app);
        dom::on_click(btn.as_ref(), move |_| spin::spin_wheel(Rc::clone(&app)));
    }

    if let Some(form) = dom::by_id("support-form")
        .and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok())
    {
        let submitted = form.clone();
        dom::on_submit(form.as_ref(), move |ev| {
            ev.prevent_default();
            spawn_local(support::submit_ticket(submitted.clone()));
        });
    }

    for star in dom::query_all(".rating-star") {
        let Some(value) = star
            .get_attribute("data-rating")
            .and_then(|v| v.parse::<u8>().ok())
        else {
            continue;
        };
        let app = Rc::clone(app);
        dom::on_click(star.as_ref(), move |_| rating::set_rating(&app, value));
    }

    for trigger in dom::query_all(".modal-trigger") {
        if let Some(id) = trigger.get_attribute("data-modal") {
            dom::on_click(trigger.as_ref(), move |_| modal::open(&id));
        }
    }

    for close_btn in dom::query_all(".modal-close") {
        let btn = close_btn.clone();
        dom::on_click(close_btn.as_ref(), move |_| {
            if let Ok(Some(owner)) = btn.closest(".modal") {
                modal::close(&owner.id());
            }
        });
    }

    // A click directly on the backdrop closes the modal; clicks inside the
    // panel bubble up with a different target and are ignored.
    for backdrop in dom::query_all(".modal") {
        let el = backdrop.clone();
        dom::on_click(backdrop.as_ref(), move |ev| {
            let this: &web_sys::EventTarget = el.as_ref();
            if ev.target().as_ref() == Some(this) {
                modal::close(&el.id());
            }
        });
    }
}

// Page-callable exports, replacing the original templates' inline
// `window.*` handlers.

#[wasm_bindgen(js_name = openModal)]
pub fn open_modal(modal_id: &str) {
    modal::open(modal_id);
}

#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal(modal_id: &str) {
    modal::close(modal_id);
}

#[wasm_bindgen(js_name = trackOrder)]
pub fn track_order(order_id: String) {
    spawn_local(tracking::track_order(order_id));
}

#[wasm_bindgen(js_name = setRating)]
pub fn set_rating(rating: u8) {
    rating::set_rating(&app(), rating);
}

#[wasm_bindgen(js_name = submitRating)]
pub fn submit_rating() {
    spawn_local(rating::submit_rating(app()));
}
