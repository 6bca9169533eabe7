// Copyright (c) Civic Social Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::api::extract::{AuthUser, Validate, ValidatedJson};
use crate::api::AppState;
use crate::error::AppError;
use crate::models::Post;
use crate::validation::{validate_post_content, ValidationError};

use super::TargetUserQuery;

/// The feed is truncated to the most recent posts; older ones are only
/// reachable through the per-user listing.
const FEED_LIMIT: usize = 100;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub content: String,
}

impl Validate for CreatePostRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_post_content(&self.content)
    }
}

/// POST /api/posts - create a new post
///
/// Requires an existing profile; the author's display name is denormalized
/// onto the post at write time and never re-synced.
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(auth_user_id): AuthUser,
    ValidatedJson(body): ValidatedJson<CreatePostRequest>,
) -> Result<impl IntoResponse, AppError> {
    let profile = state.store.get_profile(&auth_user_id).await?.ok_or_else(|| {
        AppError::NotFound("Profile not found. Please complete onboarding first.".to_string())
    })?;

    let post = Post::new(
        auth_user_id,
        profile.display_name,
        body.content.trim().to_string(),
    );
    state.store.put_post(post.clone()).await?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /api/posts - the global feed, newest first
///
/// Scans the whole collection; an accepted limitation at this scale.
pub async fn get_feed(
    State(state): State<AppState>,
    AuthUser(_auth_user_id): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let mut posts = state.store.scan_posts().await?;
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    posts.truncate(FEED_LIMIT);

    Ok(Json(posts))
}

/// GET /api/posts/user - all posts by the caller
/// GET /api/posts/user?user_id={id} - all posts by a specific user
pub async fn get_user_posts(
    State(state): State<AppState>,
    AuthUser(auth_user_id): AuthUser,
    Query(query): Query<TargetUserQuery>,
) -> Result<impl IntoResponse, AppError> {
    let target_user_id = query.target_or(&auth_user_id);
    let posts = state.store.posts_by_user(target_user_id).await?;

    Ok(Json(posts))
}
