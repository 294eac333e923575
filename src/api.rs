//! Request and response payloads for the storefront backend.
//!
//! The backend answers JSON on both success and failure (failures carry an
//! `error`/`message` field and are often sent with a 4xx status), so every
//! response field the client does not strictly need is optional or
//! defaulted. Extra fields the backend includes are ignored.

use serde::{Deserialize, Serialize};

pub const ADD_TO_CART_URL: &str = "/customer/add_to_cart";
pub const REMOVE_FROM_CART_URL: &str = "/customer/remove_from_cart";
pub const CHECK_COUPON_URL: &str = "/api/check_coupon";
pub const PLACE_ORDER_URL: &str = "/customer/place_order";
pub const SPIN_WHEEL_URL: &str = "/customer/spin_wheel";
pub const CREATE_TICKET_URL: &str = "/support/create_ticket";
pub const RATE_ORDER_URL: &str = "/customer/rate_order";

pub fn order_status_url(order_id: &str) -> String {
    format!("/api/order_status/{order_id}")
}

#[derive(Debug, Serialize)]
pub struct CartItemRequest<'a> {
    pub item_name: &'a str,
}

/// Shared shape for both cart mutations; `subtotal` only comes back on
/// removal.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CartResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub cart_count: u32,
    #[serde(default)]
    pub subtotal: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CouponCheckRequest<'a> {
    pub coupon_code: &'a str,
}

/// Server-declared reward shape: a flat rupee discount or a free item.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CouponEffect {
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default)]
    pub item: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CouponCheckResponse {
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub reward_name: Option<String>,
    #[serde(default)]
    pub effect: Option<CouponEffect>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceOrderResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub total: f64,
    /// Base64-encoded PNG for the order-tracking QR code.
    #[serde(default)]
    pub qr_code: String,
    /// Minutes until delivery.
    #[serde(default)]
    pub estimated_delivery: u32,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SpinRequest<'a> {
    pub order_id: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpinResult {
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub reward_name: String,
    /// `None` means the wheel landed on a no-reward segment.
    #[serde(default)]
    pub effect: Option<CouponEffect>,
    #[serde(default)]
    pub coupon_code: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpinResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub result: Option<SpinResult>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub ticket_id: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RatingRequest<'a> {
    pub order_id: &'a str,
    pub rating: u8,
    pub feedback: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatingResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Subset of the order record the status view renders. The backend sends
/// the full order; everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderStatus {
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub status_display: String,
    /// Set instead of the order fields when the lookup fails.
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coupon_response_carries_either_effect_shape() {
        let discount: CouponCheckResponse = serde_json::from_str(
            r#"{"valid": true, "reward_name": "₹50 off", "effect": {"discount": 50}}"#,
        )
        .unwrap();
        assert!(discount.valid);
        assert_eq!(discount.effect.as_ref().unwrap().discount, Some(50.0));
        assert_eq!(discount.effect.as_ref().unwrap().item, None);

        let item: CouponCheckResponse = serde_json::from_str(
            r#"{"valid": true, "reward_name": "Free Veg Roll", "effect": {"item": "Veg Roll"}}"#,
        )
        .unwrap();
        assert_eq!(item.effect.unwrap().item.as_deref(), Some("Veg Roll"));

        let invalid: CouponCheckResponse =
            serde_json::from_str(r#"{"valid": false, "message": "Invalid or expired coupon code"}"#)
                .unwrap();
        assert!(!invalid.valid);
        assert!(invalid.effect.is_none());
    }

    #[test]
    fn spin_response_without_reward_has_no_effect_or_code() {
        let won: SpinResponse = serde_json::from_str(
            r#"{"success": true, "result": {"emoji": "🔥", "reward_name": "₹50 off",
                "effect": {"discount": 50}, "coupon_code": "A1B2C3D4E5F6G7H"}}"#,
        )
        .unwrap();
        let result = won.result.unwrap();
        assert!(result.effect.is_some());
        assert_eq!(result.coupon_code.as_deref(), Some("A1B2C3D4E5F6G7H"));

        let lost: SpinResponse = serde_json::from_str(
            r#"{"success": true, "result": {"emoji": "❌",
                "reward_name": "Better luck next time", "effect": null}}"#,
        )
        .unwrap();
        let result = lost.result.unwrap();
        assert!(result.effect.is_none());
        assert!(result.coupon_code.is_none());
    }

    #[test]
    fn order_status_ignores_the_rest_of_the_order_record() {
        let status: OrderStatus = serde_json::from_str(
            r#"{"order_id": "BC123456", "customer_name": "Asha", "total": 340.0,
                "status": "preparing", "status_display": "Being Prepared",
                "items": [{"name": "Veg Roll"}], "payment_method": "cash",
                "can_use_spin": false}"#,
        )
        .unwrap();
        assert_eq!(status.order_id, "BC123456");
        assert_eq!(status.status, "preparing");
        assert!(status.error.is_none());

        let missing: OrderStatus =
            serde_json::from_str(r#"{"error": "Order not found"}"#).unwrap();
        assert_eq!(missing.error.as_deref(), Some("Order not found"));
        assert!(missing.order_id.is_empty());
    }

    #[test]
    fn error_bodies_deserialize_into_the_success_shapes() {
        let cart: CartResponse =
            serde_json::from_str(r#"{"success": false, "error": "Item not available"}"#).unwrap();
        assert!(!cart.success);
        assert_eq!(cart.error.as_deref(), Some("Item not available"));
        assert_eq!(cart.cart_count, 0);

        let order: PlaceOrderResponse =
            serde_json::from_str(r#"{"error": "Invalid or expired coupon code"}"#).unwrap();
        assert!(!order.success);
        assert!(order.order_id.is_empty());
    }
}
