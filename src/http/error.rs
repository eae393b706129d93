//! Errors surfaced by the HTTP layer and their status mapping.

use super::envelope::Envelope;
use crate::product_actor::ProductError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The `:id` path segment is not a product ID.
    #[error("invalid product id: {0}")]
    InvalidId(String),

    /// The body is not JSON of the expected shape.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// The body decoded but a field value is out of range.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The `:id` path segment is an integer outside the ID range.
    #[error("product not found: id={0}")]
    NotFound(i64),

    #[error(transparent)]
    Product(#[from] ProductError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_) | ApiError::InvalidBody(_) | ApiError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) | ApiError::Product(ProductError::NotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Product(
                ProductError::IdsExhausted | ProductError::ActorCommunicationError(_),
            ) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(error = %self, "Store unavailable");
        }
        (status, Json(Envelope::error(status.as_u16(), self.to_string()))).into_response()
    }
}
