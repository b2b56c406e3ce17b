//! services/storefront/src/adapters/admin_http.rs
//!
//! HTTP adapter for the admin identity service behind the login and
//! registration forms.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use storefront_core::domain::AdminLogin;
use storefront_core::ports::{AdminGateway, PortError, PortResult};

use super::transport_error;

#[derive(Clone)]
pub struct HttpAdminGateway {
    client: Client,
    base_url: String,
}

impl HttpAdminGateway {
    /// Creates a new `HttpAdminGateway`. `base_url` must not end with a slash.
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterBody<'a> {
    user_name: &'a str,
    email: &'a str,
    password: &'a str,
}

/// The identity service's uniform response envelope. The body carries the
/// outcome even on non-2xx statuses, so it is decoded before any status check.
#[derive(Deserialize)]
struct AuthResponseRecord {
    success: bool,
    #[serde(default)]
    message: String,
    #[serde(default)]
    token: Option<String>,
}

#[async_trait]
impl AdminGateway for HttpAdminGateway {
    async fn login(&self, email: &str, password: &str) -> PortResult<AdminLogin> {
        let url = format!("{}/api/admin/auth/admin-login", self.base_url);
        let body = LoginBody { email, password };
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let record: AuthResponseRecord = response
            .json()
            .await
            .map_err(|e| PortError::Unexpected(format!("malformed login response: {e}")))?;

        if !record.success {
            return Err(PortError::Unauthorized(record.message));
        }

        Ok(AdminLogin {
            token: record.token,
            message: record.message,
        })
    }

    async fn register(&self, user_name: &str, email: &str, password: &str) -> PortResult<()> {
        let url = format!("{}/api/admin/auth/admin-register", self.base_url);
        let body = RegisterBody {
            user_name,
            email,
            password,
        };
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let record: AuthResponseRecord = response
            .json()
            .await
            .map_err(|e| PortError::Unexpected(format!("malformed registration response: {e}")))?;

        if !record.success {
            return Err(PortError::Validation(record.message));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_decodes_with_token() {
        let record: AuthResponseRecord = serde_json::from_str(
            r#"{"success": true, "message": "Welcome back", "token": "jwt-abc"}"#,
        )
        .unwrap();
        assert!(record.success);
        assert_eq!(record.token.as_deref(), Some("jwt-abc"));
    }

    #[test]
    fn auth_response_tolerates_missing_fields() {
        let record: AuthResponseRecord = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!record.success);
        assert_eq!(record.message, "");
        assert_eq!(record.token, None);
    }

    #[test]
    fn register_body_serializes_camel_case() {
        let body = RegisterBody {
            user_name: "Ada",
            email: "ada@example.com",
            password: "secret",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "userName": "Ada",
                "email": "ada@example.com",
                "password": "secret"
            })
        );
    }
}
