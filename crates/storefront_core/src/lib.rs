pub mod domain;
pub mod ports;
pub mod pricing;

pub use domain::{AdminLogin, LineItem, Notification, PriceBreakdown, Product, Severity, WishlistEntry};
pub use ports::{AdminGateway, CartStore, Notifier, PortError, PortResult, ProductCatalog, WishlistStore};
pub use pricing::{compute_breakdown, resolve_coupon, subtotal, AppliedCoupon, CouponError};
