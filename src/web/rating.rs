use std::rc::Rc;

use crate::api::{self, RatingRequest, RatingResponse};
use crate::ui_model::{self, Severity};

use super::{dom, http, modal, notify, App};

/// Star clicks store the selection and light up the stars up to it.
pub(super) fn set_rating(app: &App, rating: u8) {
    app.selected_rating.set(rating);
    for (index, star) in dom::query_all(".rating-star").into_iter().enumerate() {
        let lit = (index as u8) < rating;
        let _ = star.class_list().toggle_with_force("active", lit);
    }
}

pub(super) async fn submit_rating(app: Rc<App>) {
    let rating = app.selected_rating.get();
    if !ui_model::is_valid_rating(rating) {
        notify::show("Please select a rating", Severity::Error);
        return;
    }

    let order_id = dom::input_value("rating-order-id").unwrap_or_default();
    let feedback = dom::input_value("order-feedback").unwrap_or_default();

    let res = http::post_json::<_, RatingResponse>(
        api::RATE_ORDER_URL,
        &RatingRequest {
            order_id: &order_id,
            rating,
            feedback: &feedback,
        },
    )
    .await;

    match res {
        Ok(data) if data.success => {
            notify::show(
                data.message
                    .as_deref()
                    .unwrap_or("Thank you for your feedback!"),
                Severity::Success,
            );
            modal::close("rating-modal");
        }
        Ok(data) => notify::show(
            data.error.as_deref().unwrap_or("Failed to submit rating"),
            Severity::Error,
        ),
        Err(err) => {
            log::error!("rate_order: {err}");
            notify::show("Failed to submit rating", Severity::Error);
        }
    }
}
