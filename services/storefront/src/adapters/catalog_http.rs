//! services/storefront/src/adapters/catalog_http.rs
//!
//! Read-only HTTP adapter for the product catalog service. The catalog is an
//! external collaborator; only the single-product lookup the storefront needs
//! is wired here.

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use storefront_core::domain::Product;
use storefront_core::ports::{PortResult, ProductCatalog};

use super::{check_status, transport_error};

#[derive(Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    /// Creates a new `HttpCatalog`. `base_url` must not end with a slash.
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[derive(Deserialize)]
struct ProductRecord {
    // The catalog exposes Mongo-style identifiers.
    #[serde(rename = "_id")]
    id: String,
    name: String,
    #[serde(default)]
    description: Option<String>,
    price: Decimal,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    artisan: Option<String>,
}

impl ProductRecord {
    fn to_domain(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            image: self.image,
            artisan: self.artisan,
        }
    }
}

#[async_trait]
impl ProductCatalog for HttpCatalog {
    async fn product_by_id(&self, product_id: &str) -> PortResult<Product> {
        let url = format!("{}/api/shop/products/get/{product_id}", self.base_url);
        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        let response = check_status(response)?;
        let record: ProductRecord = response.json().await.map_err(transport_error)?;
        Ok(record.to_domain())
    }
}
