// API Error Type
// Every error this crate produces on the wire goes through ApiError

use crate::validation::FieldError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request data failed validation; responds 422 with a structured
    /// detail payload listing every failure.
    #[error("request validation failed")]
    Validation {
        errors: Vec<FieldError>,
        /// Raw request body, echoed back as a diagnostic when available
        body: Option<String>,
    },

    /// Anything unexpected; responds 500. The cause is logged, not leaked.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Validation failure without a captured request body.
    pub fn validation(errors: Vec<FieldError>) -> Self {
        ApiError::Validation { errors, body: None }
    }
}

#[derive(Serialize)]
struct Detail<'a> {
    errors: &'a [FieldError],
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<&'a str>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    detail: Detail<'a>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation { errors, body } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorBody {
                    detail: Detail {
                        errors: &errors,
                        body: body.as_deref(),
                    },
                }),
            )
                .into_response(),
            ApiError::Internal(err) => {
                tracing::error!("internal error: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "detail": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
