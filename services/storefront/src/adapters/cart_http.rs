//! services/storefront/src/adapters/cart_http.rs
//!
//! The HTTP adapter for the remote cart store. Implements the `CartStore`
//! port from the `core` crate against the marketplace's shop API.

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use storefront_core::domain::LineItem;
use storefront_core::ports::{CartStore, PortError, PortResult};

use super::{check_status, transport_error};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

#[derive(Clone)]
pub struct HttpCartStore {
    client: Client,
    base_url: String,
}

impl HttpCartStore {
    /// Creates a new `HttpCartStore`. `base_url` must not end with a slash.
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

//=========================================================================================
// "Impure" Wire Record Structs
//=========================================================================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartItemRecord {
    product_id: String,
    name: String,
    price: Decimal,
    quantity: u32,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    artisan: Option<String>,
}

impl CartItemRecord {
    fn to_domain(self) -> LineItem {
        LineItem {
            product_id: self.product_id,
            name: self.name,
            unit_price: self.price,
            quantity: self.quantity,
            image: self.image,
            artisan: self.artisan,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CartMutationBody<'a> {
    user_id: &'a str,
    product_id: &'a str,
    quantity: u32,
}

//=========================================================================================
// `CartStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl CartStore for HttpCartStore {
    async fn fetch_cart(&self, user_id: &str) -> PortResult<Vec<LineItem>> {
        let url = format!("{}/api/shop/cart/get/{user_id}", self.base_url);
        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        let response = check_status(response)?;

        // The backend answers with a bare JSON array. Anything else (`null`
        // for a user with no cart yet, an error envelope) decodes as an
        // empty cart.
        let body: serde_json::Value = response.json().await.map_err(transport_error)?;
        let records = match body {
            serde_json::Value::Array(values) => values
                .into_iter()
                .map(serde_json::from_value::<CartItemRecord>)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| PortError::Unexpected(format!("malformed cart payload: {e}")))?,
            _ => Vec::new(),
        };

        Ok(records.into_iter().map(CartItemRecord::to_domain).collect())
    }

    async fn add_item(&self, user_id: &str, product_id: &str, quantity: u32) -> PortResult<()> {
        let url = format!("{}/api/shop/cart/add", self.base_url);
        let body = CartMutationBody {
            user_id,
            product_id,
            quantity,
        };
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response).map(|_| ())
    }

    async fn set_quantity(&self, user_id: &str, product_id: &str, quantity: u32) -> PortResult<()> {
        // The remote rejects quantities below 1; removal is its own endpoint.
        if quantity < 1 {
            return Err(PortError::Validation(
                "quantity must be at least 1".to_string(),
            ));
        }

        let url = format!("{}/api/shop/cart/update", self.base_url);
        let body = CartMutationBody {
            user_id,
            product_id,
            quantity,
        };
        let response = self
            .client
            .put(&url)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response).map(|_| ())
    }

    async fn remove_item(&self, user_id: &str, product_id: &str) -> PortResult<()> {
        let url = format!("{}/api/shop/cart/remove/{user_id}/{product_id}", self.base_url);
        let response = self.client.delete(&url).send().await.map_err(transport_error)?;
        check_status(response).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_record_decodes_camel_case_payload() {
        let record: CartItemRecord = serde_json::from_str(
            r#"{
                "productId": "66b2f1",
                "name": "Hand-thrown mug",
                "price": 24.5,
                "quantity": 2,
                "image": "/images/mug.jpg",
                "artisan": "Clay & Kiln Studio"
            }"#,
        )
        .unwrap();

        let item = record.to_domain();
        assert_eq!(item.product_id, "66b2f1");
        assert_eq!(item.unit_price, Decimal::new(245, 1));
        assert_eq!(item.quantity, 2);
        assert_eq!(item.artisan.as_deref(), Some("Clay & Kiln Studio"));
    }

    #[test]
    fn cart_record_tolerates_missing_display_fields() {
        let record: CartItemRecord = serde_json::from_str(
            r#"{"productId": "p1", "name": "Basket", "price": 12, "quantity": 1}"#,
        )
        .unwrap();

        let item = record.to_domain();
        assert_eq!(item.image, None);
        assert_eq!(item.artisan, None);
    }

    #[test]
    fn mutation_body_serializes_camel_case() {
        let body = CartMutationBody {
            user_id: "u1",
            product_id: "p1",
            quantity: 3,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"userId": "u1", "productId": "p1", "quantity": 3})
        );
    }
}
