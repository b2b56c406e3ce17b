//! services/storefront/src/adapters/mod.rs
//!
//! Concrete implementations of the core ports over the marketplace REST API.
//! Each adapter wraps a shared `reqwest::Client` plus the API base URL and
//! maps transport failures into the `PortError` taxonomy at this boundary.

pub mod admin_http;
pub mod cart_http;
pub mod catalog_http;
pub mod wishlist_http;

use reqwest::{Response, StatusCode};
use storefront_core::ports::{PortError, PortResult};

/// Request-level failures (refused connection, timeout, interrupted body)
/// all collapse into `PortError::Network`.
pub(crate) fn transport_error(err: reqwest::Error) -> PortError {
    PortError::Network(err.to_string())
}

/// Maps a non-2xx status into the port taxonomy and passes 2xx through.
pub(crate) fn check_status(response: Response) -> PortResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let path = response.url().path().to_string();
    Err(match status {
        StatusCode::NOT_FOUND => PortError::NotFound(path),
        StatusCode::BAD_REQUEST => PortError::Validation(format!("request to {path} was rejected")),
        _ => PortError::Unexpected(format!("server responded with {status} for {path}")),
    })
}
