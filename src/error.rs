//! Error types for the catalog client
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Api Error Enum ==
/// Infrastructure-level failure behind a lookup or a refresh step.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The transport could not complete the call
    #[error("transport failure: {0}")]
    Transport(String),

    /// The service answered with a non-success status
    #[error("unexpected response status: {0}")]
    Status(u16),

    /// A response body could not be decoded
    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),

    /// The service returned data of an unexpected shape
    #[error("invalid data: {0}")]
    Validation(String),

    /// No anti-forgery token has been obtained yet
    #[error("csrf token is empty")]
    TokenMissing,

    /// The stored anti-forgery token is past its expiry
    #[error("csrf token has expired")]
    TokenExpired,

    /// The landing page did not set the expected cookie
    #[error("no {0} cookie found in response")]
    CookieMissing(String),

    /// A lookup table has not been populated
    #[error("{0} is not initialized")]
    NotInitialized(&'static str),

    /// The response envelope carried no data for the query
    #[error("response has no data for {0}")]
    MissingData(&'static str),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

// == Catalog Error Enum ==
/// Error returned by every public lookup.
///
/// `NotFound` means the catalog has no such problem; `System` means the
/// catalog could not be asked.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Problem absent from the current index or catalog
    #[error("problem not found: {0}")]
    NotFound(String),

    /// Infrastructure failure
    #[error("system error: {context}: {source}")]
    System {
        context: String,
        #[source]
        source: ApiError,
    },
}

impl CatalogError {
    /// Wraps an infrastructure failure with the step that hit it.
    pub fn system(context: impl Into<String>, source: ApiError) -> Self {
        CatalogError::System {
            context: context.into(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }

    pub fn is_system(&self) -> bool {
        matches!(self, CatalogError::System { .. })
    }

    /// True for a system error caused by malformed service data.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CatalogError::System {
                source: ApiError::Validation(_),
                ..
            }
        )
    }

    /// Returns the underlying infrastructure cause, if any.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            CatalogError::System { source, .. } => Some(source),
            CatalogError::NotFound(_) => None,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match &self {
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::System { source, .. } => match source {
                ApiError::NotInitialized(_) | ApiError::TokenMissing | ApiError::TokenExpired => {
                    StatusCode::SERVICE_UNAVAILABLE
                }
                _ => StatusCode::BAD_GATEWAY,
            },
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for catalog lookups.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let not_found = CatalogError::NotFound("two-sum".to_string());
        assert!(not_found.is_not_found());
        assert!(!not_found.is_system());
        assert!(not_found.api_error().is_none());

        let system = CatalogError::system("get problem", ApiError::TokenMissing);
        assert!(system.is_system());
        assert!(!system.is_validation());
        assert!(matches!(system.api_error(), Some(ApiError::TokenMissing)));

        let invalid = CatalogError::system("convert", ApiError::Validation("bad id".into()));
        assert!(invalid.is_validation());
    }

    #[test]
    fn test_error_messages() {
        let err = CatalogError::system(
            "lookup by title",
            ApiError::NotInitialized("problem title map"),
        );
        assert_eq!(
            err.to_string(),
            "system error: lookup by title: problem title map is not initialized"
        );
    }

    #[test]
    fn test_status_mapping() {
        let resp = CatalogError::NotFound("x".into()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = CatalogError::system("x", ApiError::NotInitialized("map")).into_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let resp = CatalogError::system("x", ApiError::Status(500)).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }
}
