//! services/storefront/src/bin/storefront.rs
//!
//! A small headless driver for the storefront: loads one user's cart over
//! the live API, optionally applies a coupon, and logs the itemised
//! breakdown. Useful for smoke-testing the adapters against a running
//! backend.

use std::sync::Arc;

use storefront_lib::{
    adapters::cart_http::HttpCartStore,
    config::{Config, ConfigError},
    error::ClientError,
    notify::TracingNotifier,
    cart::CartSession,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Talking to {}", config.api_base_url);

    let user_id = config
        .user_id
        .clone()
        .ok_or_else(|| ConfigError::MissingVar("STOREFRONT_USER_ID".to_string()))?;

    // --- 2. Build the Shared HTTP Client & Adapters ---
    let client = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()?;
    let store = Arc::new(HttpCartStore::new(client, config.api_base_url.clone()));
    let notifier = Arc::new(TracingNotifier);

    // --- 3. Load the Cart and Report ---
    let mut session = CartSession::new(user_id, store, notifier);
    session.load().await;

    if let Ok(code) = std::env::var("STOREFRONT_COUPON") {
        session.apply_coupon(&code);
    }

    for item in session.items() {
        info!(
            product_id = %item.product_id,
            quantity = item.quantity,
            unit_price = %item.unit_price,
            line_total = %item.line_total(),
            "{}",
            item.name
        );
    }

    let breakdown = session.breakdown();
    info!(
        items = session.item_count(),
        subtotal = %breakdown.subtotal,
        discount = %breakdown.discount,
        shipping = %breakdown.shipping_cost,
        tax = %breakdown.tax,
        total = %breakdown.total,
        "cart breakdown"
    );

    Ok(())
}
