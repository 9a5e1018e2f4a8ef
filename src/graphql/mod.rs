//! GraphQL Module
//!
//! Builds catalog queries and unwraps the `{"data": ...}` envelope of their
//! responses. Everything here is stateless; the token is passed in.

pub mod queries;
pub mod wire;

pub use queries::GraphQlRequest;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::session::CSRF_COOKIE;
use crate::transport::{ApiRequest, ApiResponse};

/// Header echoing the anti-forgery token.
pub const CSRF_HEADER: &str = "x-csrftoken";

#[derive(Debug, Deserialize)]
struct ResponseEnvelope {
    #[serde(default)]
    data: Option<Value>,
}

/// Builds an authenticated GraphQL POST.
pub fn build_request(
    url: &str,
    token: &str,
    body: &GraphQlRequest,
    referer: &str,
) -> Result<ApiRequest, ApiError> {
    let payload = serde_json::to_vec(body)?;

    Ok(ApiRequest::post(url, payload)
        .with_header("Content-Type", "application/json")
        .with_header("Cache-Control", "no-cache")
        .with_header("Cookie", format!("{}={}", CSRF_COOKIE, token))
        .with_header(CSRF_HEADER, token)
        .with_header("Referer", referer))
}

/// Checks the status and decodes the `data` field into `T`.
pub fn decode_data<T: DeserializeOwned>(
    response: &ApiResponse,
    what: &'static str,
) -> Result<T, ApiError> {
    if !response.is_success() {
        return Err(ApiError::Status(response.status));
    }

    let envelope: ResponseEnvelope = serde_json::from_slice(&response.body)?;
    match envelope.data {
        Some(Value::Null) | None => Err(ApiError::MissingData(what)),
        Some(data) => Ok(serde_json::from_value(data)?),
    }
}
