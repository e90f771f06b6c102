//! HTTP error envelope and mapping from domain errors.
//!
//! Keeps the domain free of transport concerns: [`CatalogError`] values are
//! translated into status codes and the `{"error": ...}` body here and
//! nowhere else.

use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::http::header::HeaderName;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::CatalogError;
use crate::middleware::{REQUEST_ID_HEADER, RequestId};

/// Wire shape of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable failure description.
    #[schema(example = "SKU already exists")]
    pub error: String,
}

/// Transport-level error carrying the status to answer with.
///
/// The message is surfaced verbatim, including for internal errors; this is
/// an internal tool, not a hardened public API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// A 400 response for malformed or incomplete input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// A 409 response for uniqueness violations.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }

    /// A 404 response for unknown ids.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    /// A 500 response for unclassified failures.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    /// The message serialised into the response body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<CatalogError> for ApiError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::Validation { message } => Self::validation(message),
            CatalogError::Conflict { message } => Self::conflict(message),
            CatalogError::NotFound { message } => Self::not_found(message),
            CatalogError::Store { message } => {
                error!(%message, "catalog store failure");
                Self::internal(message)
            }
        }
    }
}

impl From<BlockingError> for ApiError {
    fn from(error: BlockingError) -> Self {
        error!(error = %error, "blocking store call failed");
        Self::internal("Internal server error")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status);
        if let Some(id) = RequestId::current() {
            builder.insert_header((HeaderName::from_static(REQUEST_ID_HEADER), id.to_string()));
        }
        builder.json(ErrorBody {
            error: self.message.clone(),
        })
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;
