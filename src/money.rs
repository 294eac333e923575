//! Currency formatting and parsing for amounts rendered into the page.
//!
//! Rust's core float-to-decimal formatting has had wasm-facing panics in some
//! toolchain/browser combinations, so the fixed-decimal path here does **not**
//! use `format!` on floats: finite values are scaled + rounded into an `i64`
//! and formatted as integers.

/// Formats an amount as rupees with two decimals, e.g. `₹150.00`.
pub fn fmt_rupees(amount: f64) -> String {
    format!("₹{}", fmt_fixed(amount, 2))
}

/// Reads an amount back out of a rendered price, tolerating the rupee sign
/// and thousands separators. Returns `None` for anything non-numeric.
pub fn parse_rupees(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != '₹' && *c != ',')
        .collect();
    cleaned.trim().parse::<f64>().ok()
}

pub fn fmt_fixed(v: f64, decimals: usize) -> String {
    if !v.is_finite() {
        return if v.is_nan() {
            "NaN".to_string()
        } else if v.is_sign_positive() {
            "Inf".to_string()
        } else {
            "-Inf".to_string()
        };
    }

    // Clamp decimals to something reasonable to avoid huge powers.
    let decimals = decimals.min(9);

    let scale_i64 = 10_i64.checked_pow(decimals as u32).unwrap_or(1_i64);
    let scaled = (v * scale_i64 as f64).round();

    // Amounts far outside the i64 range degrade to an infinity marker.
    if !scaled.is_finite() || scaled.abs() > (i64::MAX as f64) {
        return if v.is_sign_negative() {
            "-Inf".to_string()
        } else {
            "Inf".to_string()
        };
    }

    let scaled_i = scaled as i64;
    let negative = scaled_i < 0;
    let abs_i = scaled_i.abs();
    let int_part = abs_i / scale_i64;
    let frac_part = abs_i % scale_i64;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&int_part.to_string());

    if decimals > 0 {
        out.push('.');
        let frac_str = frac_part.to_string();
        for _ in 0..decimals.saturating_sub(frac_str.len()) {
            out.push('0');
        }
        out.push_str(&frac_str);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_formatting_pads_and_rounds() {
        assert_eq!(fmt_fixed(150.0, 2), "150.00");
        assert_eq!(fmt_fixed(99.5, 0), "100");
        assert_eq!(fmt_fixed(0.125, 2), "0.13");
        assert_eq!(fmt_fixed(-7.05, 2), "-7.05");
    }

    #[test]
    fn non_finite_amounts_do_not_panic() {
        assert_eq!(fmt_fixed(f64::NAN, 2), "NaN");
        assert_eq!(fmt_fixed(f64::INFINITY, 2), "Inf");
        assert_eq!(fmt_fixed(f64::NEG_INFINITY, 2), "-Inf");
    }

    #[test]
    fn rupees_round_trip_through_the_rendered_form() {
        assert_eq!(fmt_rupees(200.0), "₹200.00");
        assert_eq!(parse_rupees("₹200.00"), Some(200.0));
        assert_eq!(parse_rupees("  ₹1,250.50 "), Some(1250.5));
        assert_eq!(parse_rupees("340"), Some(340.0));
        assert_eq!(parse_rupees("free"), None);
        assert_eq!(parse_rupees(""), None);
    }
}
