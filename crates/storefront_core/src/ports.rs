//! crates/storefront_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the storefront's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to stay independent of the concrete transport to the remote
//! marketplace API.

use async_trait::async_trait;

use crate::domain::{AdminLogin, LineItem, Notification, Product, WishlistEntry};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
///
/// Every failure from a remote call is mapped into one of these variants at
/// the adapter boundary; nothing transport-specific leaks past a port.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    /// The request could not be completed (connection refused, timed out,
    /// malformed response body).
    #[error("Network error: {0}")]
    Network(String),
    #[error("Item not found: {0}")]
    NotFound(String),
    /// The remote rejected the request as malformed, e.g. a quantity below 1.
    #[error("Validation failed: {0}")]
    Validation(String),
    /// The identity service refused the credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// The remote cart store: holds one list of line items per user identifier.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Fetches the authoritative list of cart lines for a user.
    async fn fetch_cart(&self, user_id: &str) -> PortResult<Vec<LineItem>>;

    /// Adds a product to the cart (or increases its quantity).
    async fn add_item(&self, user_id: &str, product_id: &str, quantity: u32) -> PortResult<()>;

    /// Upserts the quantity of an existing line. `quantity` must be at least
    /// 1; the removal path is [`CartStore::remove_item`].
    async fn set_quantity(&self, user_id: &str, product_id: &str, quantity: u32) -> PortResult<()>;

    /// Removes a product's line from the cart entirely.
    async fn remove_item(&self, user_id: &str, product_id: &str) -> PortResult<()>;
}

/// The remote wishlist store.
#[async_trait]
pub trait WishlistStore: Send + Sync {
    async fn fetch_wishlist(&self, user_id: &str) -> PortResult<Vec<WishlistEntry>>;

    async fn add(&self, user_id: &str, product_id: &str) -> PortResult<()>;

    async fn remove(&self, user_id: &str, product_id: &str) -> PortResult<()>;
}

/// Read-only access to the product catalog service.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn product_by_id(&self, product_id: &str) -> PortResult<Product>;
}

/// The admin identity service behind the login and registration forms.
#[async_trait]
pub trait AdminGateway: Send + Sync {
    /// Exchanges credentials for a token. A non-success response surfaces as
    /// [`PortError::Unauthorized`] carrying the server's message.
    async fn login(&self, email: &str, password: &str) -> PortResult<AdminLogin>;

    async fn register(&self, user_name: &str, email: &str, password: &str) -> PortResult<()>;
}

/// The toast seam: view-models hand every user-visible notification to an
/// implementation of this trait. Implementations must be cheap and must not
/// block.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
