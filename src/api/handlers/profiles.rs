// Copyright (c) Civic Social Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::extract::{AuthUser, Validate, ValidatedJson};
use crate::api::AppState;
use crate::error::AppError;
use crate::models::{Profile, UpdateProfile};
use crate::validation::{
    validate_bio, validate_display_name, validate_political_alignment, ValidationError,
};

use super::TargetUserQuery;

/// Search results are capped regardless of how many profiles match.
const SEARCH_RESULT_LIMIT: usize = 10;

/// GET /api/profile - retrieve the caller's profile
/// GET /api/profile?user_id={id} - retrieve a specific user's profile
///
/// Returns the stored record verbatim for any viewer. Redaction of private
/// profiles is only applied on the search path; see DESIGN.md.
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(auth_user_id): AuthUser,
    Query(query): Query<TargetUserQuery>,
) -> Result<impl IntoResponse, AppError> {
    let target_user_id = query.target_or(&auth_user_id);

    let profile = state
        .store
        .get_profile(target_user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    Ok(Json(profile))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub profiles: Vec<Profile>,
    pub count: usize,
}

/// GET /api/profile/search?query={term} - search profiles by display name
///
/// Case-insensitive substring match. An empty query is an empty result set,
/// not an error. Private profiles belonging to other users come back with
/// their free-text fields suppressed.
pub async fn search_profiles(
    State(state): State<AppState>,
    AuthUser(auth_user_id): AuthUser,
    Query(params): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let query = params.query.as_deref().unwrap_or("").trim().to_lowercase();

    if query.is_empty() {
        return Ok(Json(SearchResults {
            profiles: Vec::new(),
            count: 0,
        }));
    }

    let profiles: Vec<Profile> = state
        .store
        .scan_profiles()
        .await?
        .into_iter()
        .filter(|profile| profile.display_name.to_lowercase().contains(query.as_str()))
        .take(SEARCH_RESULT_LIMIT)
        .map(|profile| {
            let is_own_profile = profile.user_id == auth_user_id;
            if profile.profile_private && !is_own_profile {
                profile.redacted()
            } else {
                profile
            }
        })
        .collect();

    let count = profiles.len();
    Ok(Json(SearchResults { profiles, count }))
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub political_alignment: Option<String>,
    pub profile_private: Option<bool>,
}

impl UpdateProfileRequest {
    /// A supplied display name that trims to nothing is treated as omitted,
    /// matching the deployed API's behavior.
    fn display_name_change(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

impl Validate for UpdateProfileRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(display_name) = self.display_name_change() {
            validate_display_name(display_name)?;
        }
        if let Some(bio) = &self.bio {
            validate_bio(bio.trim())?;
        }
        if let Some(alignment) = &self.political_alignment {
            validate_political_alignment(alignment.trim())?;
        }
        Ok(())
    }
}

/// PUT /api/profile - partial update of the caller's profile
///
/// Only supplied fields are written; `updated_at` is always refreshed.
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(auth_user_id): AuthUser,
    ValidatedJson(body): ValidatedJson<UpdateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    let changes = UpdateProfile {
        display_name: body.display_name_change().map(str::to_string),
        bio: body.bio.as_deref().map(|bio| bio.trim().to_string()),
        political_alignment: body
            .political_alignment
            .as_deref()
            .map(|alignment| alignment.trim().to_string()),
        profile_private: body.profile_private,
    };

    let profile = state
        .store
        .update_profile(&auth_user_id, changes)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found. Use POST to create.".to_string()))?;

    Ok(Json(profile))
}
