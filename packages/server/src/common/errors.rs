//! API error taxonomy and HTTP mapping.
//!
//! Every failure surfaces to the client as a short human-readable message;
//! none is fatal to the application. Rate-limit and quota errors from the AI
//! service keep their own variants so handlers can surface them verbatim
//! instead of falling back to base scores.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by API handlers and domain effects.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("You must be signed in to do that")]
    Unauthenticated,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Invalid request: {0}")]
    Invalid(String),

    #[error("The analysis service is busy right now. Try again in a moment")]
    RateLimited,

    #[error("AI credits are used up. Check your billing settings")]
    QuotaExhausted,

    #[error("Something went wrong. Please try again")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Invalid(_) => StatusCode::BAD_REQUEST,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::QuotaExhausted => StatusCode::PAYMENT_REQUIRED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Internal(anyhow::Error::new(err).context("database query failed"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(ref source) = self {
            tracing::error!(error = ?source, "Request failed");
        }

        let body = Json(json!({ "error": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::NotFound("candidate").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::RateLimited.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ApiError::QuotaExhausted.status_code(),
            StatusCode::PAYMENT_REQUIRED
        );
    }

    #[test]
    fn test_messages_are_human_readable() {
        assert_eq!(
            ApiError::NotFound("candidate").to_string(),
            "candidate not found"
        );
        assert!(ApiError::RateLimited.to_string().contains("try again"));
        assert!(ApiError::QuotaExhausted.to_string().contains("billing"));
    }
}
