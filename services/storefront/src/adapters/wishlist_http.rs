//! services/storefront/src/adapters/wishlist_http.rs
//!
//! The HTTP adapter for the remote wishlist store.

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use storefront_core::domain::WishlistEntry;
use storefront_core::ports::{PortError, PortResult, WishlistStore};

use super::{check_status, transport_error};

#[derive(Clone)]
pub struct HttpWishlistStore {
    client: Client,
    base_url: String,
}

impl HttpWishlistStore {
    /// Creates a new `HttpWishlistStore`. `base_url` must not end with a slash.
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WishlistEntryRecord {
    product_id: String,
    name: String,
    price: Decimal,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    artisan: Option<String>,
}

impl WishlistEntryRecord {
    fn to_domain(self) -> WishlistEntry {
        WishlistEntry {
            product_id: self.product_id,
            name: self.name,
            price: self.price,
            image: self.image,
            artisan: self.artisan,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WishlistMutationBody<'a> {
    user_id: &'a str,
    product_id: &'a str,
}

#[async_trait]
impl WishlistStore for HttpWishlistStore {
    async fn fetch_wishlist(&self, user_id: &str) -> PortResult<Vec<WishlistEntry>> {
        let url = format!("{}/api/shop/wishlist/get/{user_id}", self.base_url);
        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        let response = check_status(response)?;

        // Same defensive decoding as the cart: a non-array body is an empty
        // wishlist, not an error.
        let body: serde_json::Value = response.json().await.map_err(transport_error)?;
        let records = match body {
            serde_json::Value::Array(values) => values
                .into_iter()
                .map(serde_json::from_value::<WishlistEntryRecord>)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| PortError::Unexpected(format!("malformed wishlist payload: {e}")))?,
            _ => Vec::new(),
        };

        Ok(records.into_iter().map(WishlistEntryRecord::to_domain).collect())
    }

    async fn add(&self, user_id: &str, product_id: &str) -> PortResult<()> {
        let url = format!("{}/api/shop/wishlist/add", self.base_url);
        let body = WishlistMutationBody { user_id, product_id };
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response).map(|_| ())
    }

    async fn remove(&self, user_id: &str, product_id: &str) -> PortResult<()> {
        let url = format!(
            "{}/api/shop/wishlist/remove/{user_id}/{product_id}",
            self.base_url
        );
        let response = self.client.delete(&url).send().await.map_err(transport_error)?;
        check_status(response).map(|_| ())
    }
}
