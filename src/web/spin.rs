use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, SpinRequest, SpinResponse, SpinResult};
use crate::ui_model::{self, Severity};

use super::{dom, http, modal, notify, App};

/// How long the wheel animates before the result is revealed.
const REVEAL_DELAY_MS: u32 = 3_000;

pub(super) fn spin_wheel(app: Rc<App>) {
    if app.is_spinning.get() {
        return;
    }

    let order_id = dom::input_value("order-id-input")
        .map(|v| v.trim().to_string())
        .unwrap_or_default();
    if order_id.is_empty() {
        notify::show("Please enter your order ID", Severity::Error);
        return;
    }

    app.is_spinning.set(true);
    set_spin_button_spinning(true);

    spawn_local(async move {
        let res = http::post_json::<_, SpinResponse>(
            api::SPIN_WHEEL_URL,
            &SpinRequest {
                order_id: &order_id,
            },
        )
        .await;

        match res {
            Ok(data) if data.success => {
                rotate_wheel();
                // Hold the result until the wheel animation settles.
                TimeoutFuture::new(REVEAL_DELAY_MS).await;
                if let Some(result) = &data.result {
                    show_spin_result(result);
                }
            }
            Ok(data) => notify::show(
                data.error.as_deref().unwrap_or("Failed to spin wheel"),
                Severity::Error,
            ),
            Err(err) => {
                log::error!("spin_wheel: {err}");
                notify::show("Failed to spin wheel", Severity::Error);
            }
        }

        app.is_spinning.set(false);
        set_spin_button_spinning(false);
    });
}

fn rotate_wheel() {
    let Some(wheel) =
        dom::by_id("spin-wheel").and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    let deg = ui_model::spin_rotation_deg(js_sys::Math::random());
    let _ = wheel
        .style()
        .set_property("transform", &format!("rotate({deg}deg)"));
}

fn set_spin_button_spinning(spinning: bool) {
    let Some(btn) =
        dom::by_id("spin-btn").and_then(|el| el.dyn_into::<web_sys::HtmlButtonElement>().ok())
    else {
        return;
    };
    btn.set_disabled(spinning);
    btn.set_text_content(Some(if spinning { "Spinning..." } else { "Spin Wheel" }));
}

fn show_spin_result(result: &SpinResult) {
    if dom::by_id("spin-result-modal").is_none() {
        return;
    }
    dom::set_text("result-emoji", &result.emoji);
    dom::set_text("result-name", &result.reward_name);
    dom::set_inner_html("result-description", &ui_model::spin_result_html(result));
    modal::open("spin-result-modal");
}
