//! crates/storefront_core/src/domain.rs
//!
//! Defines the pure, core data structures for the storefront.
//! These structs are independent of any transport or serialization format.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// One product quantity held in a user's cart.
///
/// A quantity of zero means the item is absent, not present-with-zero: the
/// mutation paths in the cart session remove the entry instead of storing 0.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    /// Opaque product identifier, unique within a single cart.
    pub product_id: String,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub image: Option<String>,
    /// The artisan or workshop the product is attributed to.
    pub artisan: Option<String>,
}

impl LineItem {
    /// The extended price of this line: `unit_price × quantity`.
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Derived order totals, recomputed from the cart on every change and never
/// persisted. See [`crate::pricing::compute_breakdown`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceBreakdown {
    pub subtotal: Decimal,
    /// Absolute discount amount, clamped into `[0, subtotal]`.
    pub discount: Decimal,
    pub shipping_cost: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// A catalog product as returned by the remote product service.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image: Option<String>,
    pub artisan: Option<String>,
}

/// One saved product on a user's wishlist.
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistEntry {
    pub product_id: String,
    pub name: String,
    pub price: Decimal,
    pub image: Option<String>,
    pub artisan: Option<String>,
}

/// Outcome of an admin login: the identity service's message plus the issued
/// token, when one was granted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminLogin {
    pub token: Option<String>,
    pub message: String,
}

/// Severity of a user-visible notification, matching the toast levels the
/// presentation layer renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// A transient, user-visible notification (toast/banner).
///
/// Notifications are the only way recoverable failures surface: the prior
/// loaded state stays displayed and the message is shown alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub severity: Severity,
    pub message: String,
    pub emitted_at: DateTime<Utc>,
}

impl Notification {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            severity,
            message: message.into(),
            emitted_at: Utc::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }
}
