use crate::api::{self, CouponCheckRequest, CouponCheckResponse, CouponEffect};
use crate::money::parse_rupees;
use crate::ui_model;

use super::{dom, http};

pub(super) async fn validate_coupon() {
    let Some(raw) = dom::input_value("coupon-code") else {
        return;
    };
    let code = raw.trim().to_string();
    if code.is_empty() {
        dom::set_inner_html("coupon-feedback", "");
        return;
    }

    dom::set_inner_html("coupon-feedback", ui_model::COUPON_VALIDATING_HTML);

    let res = http::post_json::<_, CouponCheckResponse>(
        api::CHECK_COUPON_URL,
        &CouponCheckRequest { coupon_code: &code },
    )
    .await;

    match res {
        Ok(data) if data.valid => {
            dom::set_inner_html(
                "coupon-feedback",
                &ui_model::coupon_valid_html(
                    data.reward_name.as_deref().unwrap_or_default(),
                    data.effect.as_ref(),
                ),
            );
            recompute_total(data.effect.as_ref());
        }
        Ok(data) => dom::set_inner_html(
            "coupon-feedback",
            &ui_model::coupon_invalid_html(
                data.message.as_deref().unwrap_or("Invalid coupon code"),
            ),
        ),
        Err(err) => {
            log::error!("check_coupon: {err}");
            dom::set_inner_html(
                "coupon-feedback",
                &ui_model::coupon_invalid_html("Error validating coupon"),
            );
        }
    }
}

/// Recomputes the displayed total from the subtotal already on the page;
/// the server re-prices authoritatively at order time.
fn recompute_total(effect: Option<&CouponEffect>) {
    let Some(subtotal) = dom::by_id("cart-subtotal")
        .and_then(|el| el.text_content())
        .and_then(|text| parse_rupees(&text))
    else {
        return;
    };
    if dom::by_id("cart-total").is_none() {
        return;
    }

    let priced = ui_model::priced_total(subtotal, effect);
    dom::set_inner_html("cart-total", &ui_model::total_breakdown_html(&priced));
}
