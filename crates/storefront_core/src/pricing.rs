//! crates/storefront_core/src/pricing.rs
//!
//! The pricing engine: pure derivation of order totals from a list of cart
//! lines and an applied discount. Everything in this module is free of side
//! effects and deterministic, so the session layer can recompute a
//! [`PriceBreakdown`] as often as it likes.

use rust_decimal::Decimal;

use crate::domain::{LineItem, PriceBreakdown};

/// Sales tax rate applied to the discounted subtotal (7%).
pub const TAX_RATE: Decimal = Decimal::from_parts(7, 0, 0, false, 2);

/// Orders with a subtotal strictly above this amount ship free.
pub const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Flat shipping fee charged at or below the free-shipping threshold.
pub const FLAT_SHIPPING_FEE: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// The fixed coupon table: code → percentage off the subtotal.
const COUPONS: &[(&str, u32)] = &[("WELCOME10", 10), ("ARTISAN25", 25)];

/// Sum of `unit_price × quantity` over all lines. An empty slice yields zero.
pub fn subtotal(items: &[LineItem]) -> Decimal {
    items.iter().map(LineItem::line_total).sum()
}

/// Computes the full price breakdown for a cart and an absolute discount.
///
/// The discount is clamped into `[0, subtotal]` before the tax computation,
/// so an over-sized discount can never produce a negative tax. The shipping
/// threshold is evaluated on the subtotal *before* the discount.
pub fn compute_breakdown(items: &[LineItem], discount_amount: Decimal) -> PriceBreakdown {
    let subtotal = subtotal(items);
    let discount = discount_amount.clamp(Decimal::ZERO, subtotal.max(Decimal::ZERO));

    let shipping_cost = if subtotal > FREE_SHIPPING_THRESHOLD {
        Decimal::ZERO
    } else {
        FLAT_SHIPPING_FEE
    };

    let tax = (subtotal - discount) * TAX_RATE;
    let total = subtotal - discount + shipping_cost + tax;

    PriceBreakdown {
        subtotal,
        discount,
        shipping_cost,
        tax,
        total,
    }
}

/// A coupon accepted against the fixed table.
///
/// Only the percentage is retained; the absolute discount is rederived from
/// the subtotal of the moment via [`AppliedCoupon::amount_for`], so a cart
/// change can never leave a stale discount-to-subtotal ratio behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedCoupon {
    /// The normalized (trimmed, uppercased) code.
    pub code: String,
    /// Percentage off the subtotal, e.g. `10` for 10%.
    pub percent: u32,
}

impl AppliedCoupon {
    /// The discount rate as a fraction, e.g. `0.10`.
    pub fn rate(&self) -> Decimal {
        Decimal::from(self.percent) / Decimal::ONE_HUNDRED
    }

    /// The absolute discount this coupon grants against `subtotal`.
    pub fn amount_for(&self, subtotal: Decimal) -> Decimal {
        subtotal * self.rate()
    }
}

/// Rejection reasons for coupon codes. These are local validation errors and
/// never cross a port boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CouponError {
    #[error("Please enter a coupon code")]
    Empty,
    #[error("Invalid coupon code")]
    Invalid,
}

/// Resolves a user-entered code against the coupon table.
///
/// The code is trimmed and matched case-insensitively. A blank code is
/// rejected as [`CouponError::Empty`], an unrecognized one as
/// [`CouponError::Invalid`].
pub fn resolve_coupon(code: &str) -> Result<AppliedCoupon, CouponError> {
    let normalized = code.trim().to_uppercase();
    if normalized.is_empty() {
        return Err(CouponError::Empty);
    }

    COUPONS
        .iter()
        .find(|(known, _)| *known == normalized)
        .map(|&(known, percent)| AppliedCoupon {
            code: known.to_string(),
            percent,
        })
        .ok_or(CouponError::Invalid)
}
