// Copyright (c) Civic Social Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;
use crate::validation::ValidationError;

/// Application error taxonomy. Every handler returns `Result<_, AppError>`;
/// the `IntoResponse` impl is the single place errors become HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or out-of-range input.
    #[error("{0}")]
    Validation(String),

    /// Missing prerequisite or target record.
    #[error("{0}")]
    NotFound(String),

    /// Business-rule access denial.
    #[error("{0}")]
    Forbidden(String),

    /// Duplicate write, e.g. voting twice on the same poll.
    /// Returned as 400 to match the deployed API contract.
    #[error("{0}")]
    Conflict(String),

    /// Missing or unreadable authorizer claims.
    #[error("Unauthorized")]
    Unauthorized,

    /// Anything unanticipated. The cause is logged, never exposed.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Internal(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AppError::Internal(err) => {
                error!("Unhandled error in request handler: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
