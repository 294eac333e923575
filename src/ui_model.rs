//! Interaction logic that should be available on both wasm and native.
//!
//! Keeping the validation, pricing, and timeline decisions out of the
//! wasm-only `web` module allows us to unit-test them on the host without a
//! live document; the browser side only applies the results to the DOM.

use serde::Serialize;

use crate::api::{CouponEffect, SpinResult};
use crate::money::fmt_rupees;

/// Notification severities, distinguished in the page only by a
/// border-color class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn class_suffix(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    pub fn all() -> &'static [Severity] {
        &[
            Severity::Info,
            Severity::Success,
            Severity::Warning,
            Severity::Error,
        ]
    }
}

/// The fixed fulfillment timeline, in delivery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStage {
    Pending,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStage {
    pub fn all() -> &'static [OrderStage; 5] {
        &[
            OrderStage::Pending,
            OrderStage::Confirmed,
            OrderStage::Preparing,
            OrderStage::OutForDelivery,
            OrderStage::Delivered,
        ]
    }

    /// Wire value used by the backend's `status` field.
    pub fn label(self) -> &'static str {
        match self {
            OrderStage::Pending => "pending",
            OrderStage::Confirmed => "confirmed",
            OrderStage::Preparing => "preparing",
            OrderStage::OutForDelivery => "out_for_delivery",
            OrderStage::Delivered => "delivered",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            OrderStage::Pending => "Order Received",
            OrderStage::Confirmed => "Confirmed",
            OrderStage::Preparing => "Being Prepared",
            OrderStage::OutForDelivery => "Out for Delivery",
            OrderStage::Delivered => "Delivered",
        }
    }
}

/// How a timeline entry should be drawn for a given order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageMark {
    /// Strictly before the current status.
    Done,
    Current,
    Upcoming,
}

/// Classifies every timeline stage against the backend's `status` string.
/// A status outside the timeline (e.g. `cancelled`) marks nothing done and
/// nothing current.
pub fn stage_marks(status: &str) -> [StageMark; 5] {
    let current = OrderStage::all().iter().position(|s| s.label() == status);
    let mut marks = [StageMark::Upcoming; 5];
    if let Some(current) = current {
        for (i, mark) in marks.iter_mut().enumerate() {
            *mark = match i.cmp(&current) {
                std::cmp::Ordering::Less => StageMark::Done,
                std::cmp::Ordering::Equal => StageMark::Current,
                std::cmp::Ordering::Greater => StageMark::Upcoming,
            };
        }
    }
    marks
}

/// Display breakdown after applying a coupon to the cart subtotal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricedTotal {
    pub subtotal: f64,
    pub discount: f64,
    pub total: f64,
}

/// Applies a coupon effect client-side for display. A flat discount is
/// capped at the subtotal and the total never goes negative; a free-item
/// effect changes nothing about the amount due.
pub fn priced_total(subtotal: f64, effect: Option<&CouponEffect>) -> PricedTotal {
    let discount = effect
        .and_then(|e| e.discount)
        .map(|d| d.min(subtotal))
        .unwrap_or(0.0);
    PricedTotal {
        subtotal,
        discount,
        total: (subtotal - discount).max(0.0),
    }
}

pub fn total_breakdown_html(priced: &PricedTotal) -> String {
    if priced.discount > 0.0 {
        format!(
            "Subtotal: {}<br>Discount: -{}<br><strong>Total: {}</strong>",
            fmt_rupees(priced.subtotal),
            fmt_rupees(priced.discount),
            fmt_rupees(priced.total),
        )
    } else {
        format!("<strong>Total: {}</strong>", fmt_rupees(priced.subtotal))
    }
}

pub const COUPON_VALIDATING_HTML: &str = r#"<div class="text-info">Validating coupon...</div>"#;

pub fn coupon_valid_html(reward_name: &str, effect: Option<&CouponEffect>) -> String {
    let suffix = match effect {
        Some(CouponEffect {
            discount: Some(d), ..
        }) => format!(" ({} off)", fmt_rupees(*d)),
        Some(CouponEffect {
            item: Some(item), ..
        }) => format!(" (Free {item})"),
        _ => String::new(),
    };
    format!(r#"<div class="text-success">✅ Valid: {reward_name}{suffix}</div>"#)
}

pub fn coupon_invalid_html(message: &str) -> String {
    format!(r#"<div class="text-danger">❌ {message}</div>"#)
}

/// Body of the spin-result modal. A reward comes with a time-limited coupon
/// code; an empty effect means the spin won nothing.
pub fn spin_result_html(result: &SpinResult) -> String {
    match (&result.effect, &result.coupon_code) {
        (Some(_), Some(code)) => {
            format!("Your coupon code: <strong>{code}</strong><br>Valid for 72 hours!")
        }
        (Some(_), None) => String::new(),
        (None, _) => "Try again with your next order!".to_string(),
    }
}

/// Order form fields, serialized as the place-order request body.
#[derive(Debug, Clone, Serialize)]
pub struct OrderDraft {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub payment_method: String,
    pub coupon_code: String,
}

impl OrderDraft {
    /// Builds a draft from raw form values. An unset payment method falls
    /// back to `cash`, matching the page's default.
    pub fn new(
        customer_name: String,
        customer_phone: String,
        customer_address: String,
        payment_method: String,
        coupon_code: String,
    ) -> Self {
        Self {
            customer_name,
            customer_phone,
            customer_address,
            payment_method: if payment_method.is_empty() {
                "cash".to_string()
            } else {
                payment_method
            },
            coupon_code,
        }
    }

    /// Name, phone, and address are required before any request is made.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.customer_name.is_empty()
            || self.customer_phone.is_empty()
            || self.customer_address.is_empty()
        {
            return Err("Please fill all required fields");
        }
        Ok(())
    }
}

/// Support form fields, serialized as the create-ticket request body.
#[derive(Debug, Clone, Serialize)]
pub struct TicketDraft {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub order_id: String,
    pub category: String,
    pub subject: String,
    pub description: String,
}

pub const MAX_RATING: u8 = 5;

/// A rating must be picked (1..=5) before submission; 0 means no star was
/// selected yet.
pub fn is_valid_rating(rating: u8) -> bool {
    (1..=MAX_RATING).contains(&rating)
}

/// Maps a `[0, 1)` random draw to a whole-degree wheel rotation of at least
/// four full turns.
pub fn spin_rotation_deg(unit_random: f64) -> u32 {
    let extra = (unit_random.clamp(0.0, 1.0) * 360.0) as u32;
    1440 + extra.min(359)
}

/// Indian mobile number: ten digits starting 6-9, ignoring separators.
pub fn is_valid_phone(raw: &str) -> bool {
    let digits: Vec<u8> = raw
        .bytes()
        .filter(|b| b.is_ascii_digit())
        .collect();
    digits.len() == 10 && matches!(digits[0], b'6'..=b'9')
}

/// Groups a bare ten-digit number as `XXX-XXX-XXXX`; anything else is
/// returned untouched.
pub fn format_phone(raw: &str) -> String {
    if raw.len() == 10 && raw.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}-{}-{}", &raw[..3], &raw[3..6], &raw[6..])
    } else {
        raw.to_string()
    }
}

/// Minimal shape check: one `@`, non-empty local part, dotted domain, no
/// whitespace anywhere.
pub fn is_valid_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if raw.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tld)) => !head.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_inventory_is_stable() {
        let all = OrderStage::all();
        assert_eq!(all.len(), 5);

        let mut labels: Vec<&'static str> = all.iter().copied().map(OrderStage::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 5);

        for s in all {
            assert!(!s.label().trim().is_empty());
            assert!(!s.display_name().trim().is_empty());
        }
    }

    #[test]
    fn severity_classes_cover_all_four_levels() {
        let suffixes: Vec<&'static str> =
            Severity::all().iter().copied().map(Severity::class_suffix).collect();
        assert_eq!(suffixes, ["info", "success", "warning", "error"]);
    }

    #[test]
    fn timeline_marks_split_around_the_current_stage() {
        use StageMark::*;
        assert_eq!(stage_marks("pending"), [Current, Upcoming, Upcoming, Upcoming, Upcoming]);
        assert_eq!(stage_marks("preparing"), [Done, Done, Current, Upcoming, Upcoming]);
        assert_eq!(stage_marks("delivered"), [Done, Done, Done, Done, Current]);
    }

    #[test]
    fn unknown_status_marks_no_stage_current() {
        assert!(stage_marks("cancelled")
            .iter()
            .all(|m| *m == StageMark::Upcoming));
        assert!(stage_marks("").iter().all(|m| *m == StageMark::Upcoming));
    }

    #[test]
    fn discount_is_capped_at_subtotal_and_total_floors_at_zero() {
        let effect = CouponEffect {
            discount: Some(50.0),
            item: None,
        };
        let priced = priced_total(200.0, Some(&effect));
        assert_eq!(priced.discount, 50.0);
        assert_eq!(priced.total, 150.0);

        let oversized = CouponEffect {
            discount: Some(300.0),
            item: None,
        };
        let priced = priced_total(200.0, Some(&oversized));
        assert_eq!(priced.discount, 200.0);
        assert_eq!(priced.total, 0.0);
    }

    #[test]
    fn free_item_effect_leaves_the_total_alone() {
        let effect = CouponEffect {
            discount: None,
            item: Some("Veg Roll".to_string()),
        };
        let priced = priced_total(180.0, Some(&effect));
        assert_eq!(priced.discount, 0.0);
        assert_eq!(priced.total, 180.0);
        assert_eq!(priced_total(180.0, None).total, 180.0);
    }

    #[test]
    fn total_breakdown_only_itemizes_when_discounted() {
        let discounted = priced_total(
            200.0,
            Some(&CouponEffect {
                discount: Some(50.0),
                item: None,
            }),
        );
        let html = total_breakdown_html(&discounted);
        assert!(html.contains("Subtotal: ₹200.00"));
        assert!(html.contains("Discount: -₹50.00"));
        assert!(html.contains("<strong>Total: ₹150.00</strong>"));

        let plain = priced_total(200.0, None);
        assert_eq!(
            total_breakdown_html(&plain),
            "<strong>Total: ₹200.00</strong>"
        );
    }

    #[test]
    fn coupon_feedback_names_the_reward_shape() {
        let discount = CouponEffect {
            discount: Some(50.0),
            item: None,
        };
        assert_eq!(
            coupon_valid_html("₹50 off", Some(&discount)),
            r#"<div class="text-success">✅ Valid: ₹50 off (₹50.00 off)</div>"#
        );

        let item = CouponEffect {
            discount: None,
            item: Some("Soft Drink (500 ml)".to_string()),
        };
        assert!(coupon_valid_html("Free Soft Drink", Some(&item))
            .contains("(Free Soft Drink (500 ml))"));

        assert!(coupon_invalid_html("Invalid or expired coupon code").contains("❌"));
    }

    #[test]
    fn spin_result_text_depends_on_the_reward() {
        let rewarded = SpinResult {
            emoji: "🔥".to_string(),
            reward_name: "₹50 off".to_string(),
            effect: Some(CouponEffect {
                discount: Some(50.0),
                item: None,
            }),
            coupon_code: Some("A1B2C3D4E5F6G7H".to_string()),
        };
        let html = spin_result_html(&rewarded);
        assert!(html.contains("A1B2C3D4E5F6G7H"));
        assert!(html.contains("72 hours"));

        let lost = SpinResult {
            emoji: "❌".to_string(),
            reward_name: "Better luck next time".to_string(),
            effect: None,
            coupon_code: None,
        };
        assert_eq!(spin_result_html(&lost), "Try again with your next order!");
    }

    #[test]
    fn order_draft_requires_name_phone_and_address() {
        let draft = OrderDraft::new(
            "Asha".into(),
            "9876543210".into(),
            "12 MG Road".into(),
            "upi".into(),
            String::new(),
        );
        assert!(draft.validate().is_ok());
        assert_eq!(draft.payment_method, "upi");

        let missing = OrderDraft::new(
            "Asha".into(),
            String::new(),
            "12 MG Road".into(),
            String::new(),
            String::new(),
        );
        assert_eq!(missing.validate(), Err("Please fill all required fields"));
    }

    #[test]
    fn unset_payment_method_defaults_to_cash() {
        let draft = OrderDraft::new(
            "Asha".into(),
            "9876543210".into(),
            "12 MG Road".into(),
            String::new(),
            "A1B2C3".into(),
        );
        assert_eq!(draft.payment_method, "cash");
        assert_eq!(draft.coupon_code, "A1B2C3");
    }

    #[test]
    fn rating_must_be_between_one_and_five() {
        assert!(!is_valid_rating(0));
        assert!(is_valid_rating(1));
        assert!(is_valid_rating(5));
        assert!(!is_valid_rating(6));
    }

    #[test]
    fn spin_rotation_is_at_least_four_full_turns() {
        assert_eq!(spin_rotation_deg(0.0), 1440);
        assert!(spin_rotation_deg(0.999_999) < 1800);
        for draw in [0.0, 0.25, 0.5, 0.75, 0.999] {
            let deg = spin_rotation_deg(draw);
            assert!((1440..1800).contains(&deg));
        }
        // Out-of-range draws are clamped rather than wrapped.
        assert_eq!(spin_rotation_deg(1.5), 1799);
        assert_eq!(spin_rotation_deg(-0.3), 1440);
    }

    #[test]
    fn phone_validation_matches_indian_mobiles() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone("98-7654-3210"));
        assert!(!is_valid_phone("1234567890"));
        assert!(!is_valid_phone("98765"));
        assert!(!is_valid_phone(""));
        assert_eq!(format_phone("9876543210"), "987-654-3210");
        assert_eq!(format_phone("98765"), "98765");
    }

    #[test]
    fn email_validation_matches_the_simple_shape() {
        assert!(is_valid_email("asha@example.com"));
        assert!(is_valid_email("a.b@mail.co.in"));
        assert!(!is_valid_email("asha@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("asha@@example.com"));
        assert!(!is_valid_email("asha @example.com"));
        assert!(!is_valid_email("asha@.com"));
    }
}
