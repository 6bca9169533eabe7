// Copyright (c) Civic Social Team
// SPDX-License-Identifier: Apache-2.0

//! Request extractors.

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::validation::ValidationError;

/// Header carrying the caller's identity. The upstream gateway verifies the
/// token and forwards the subject claim here; handlers trust it as-is and
/// never see raw tokens.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Authenticated caller identity.
#[derive(Debug, Clone)]
pub struct AuthUser(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|subject| !subject.is_empty())
            .map(|subject| AuthUser(subject.to_string()))
            .ok_or(AppError::Unauthorized)
    }
}

/// Per-endpoint request body validation, run before any business logic.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// JSON body extractor that rejects malformed shapes with a 400 and runs
/// the body's field validators before the handler sees it.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| AppError::Validation("Invalid request body".to_string()))?;
        body.validate()?;
        Ok(ValidatedJson(body))
    }
}
