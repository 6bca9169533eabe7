// Copyright (c) Civic Social Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::api::extract::{AuthUser, Validate, ValidatedJson};
use crate::api::AppState;
use crate::error::AppError;
use crate::models::{Poll, PollResults, PollVote, UserVote};
use crate::validation::{validate_poll_answer, validate_poll_reason, ValidationError};

use super::TargetUserQuery;

/// A poll as listed to a caller, annotated with their own voting status.
#[derive(Debug, Serialize)]
pub struct PollView {
    #[serde(flatten)]
    pub poll: Poll,
    pub has_voted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_vote: Option<UserVote>,
}

/// GET /api/polls - list all polls with the caller's voting status
pub async fn get_polls(
    State(state): State<AppState>,
    AuthUser(auth_user_id): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let polls = state.store.list_polls().await?;

    let mut views = Vec::with_capacity(polls.len());
    for poll in polls {
        let vote = state.store.get_vote(&poll.poll_id, &auth_user_id).await?;
        views.push(PollView {
            has_voted: vote.is_some(),
            user_vote: vote.as_ref().map(UserVote::from),
            poll,
        });
    }

    Ok(Json(views))
}

#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub answer: String,
    #[serde(default)]
    pub reason: String,
}

impl Validate for VoteRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        // The answer is checked against the poll's option set in the
        // handler, once the poll has been loaded.
        validate_poll_reason(self.reason.trim())
    }
}

/// POST /api/polls/{poll_id}/vote - cast a vote
///
/// One vote per user per poll, enforced by an existence check before the
/// write. Requires an existing profile for the denormalized display name.
pub async fn vote_poll(
    State(state): State<AppState>,
    AuthUser(auth_user_id): AuthUser,
    Path(poll_id): Path<String>,
    ValidatedJson(body): ValidatedJson<VoteRequest>,
) -> Result<impl IntoResponse, AppError> {
    let poll = state
        .store
        .get_poll(&poll_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))?;

    let answer = body.answer.trim();
    validate_poll_answer(answer, &poll.options)?;

    if state.store.get_vote(&poll_id, &auth_user_id).await?.is_some() {
        return Err(AppError::Conflict(
            "You have already voted on this poll".to_string(),
        ));
    }

    let profile = state.store.get_profile(&auth_user_id).await?.ok_or_else(|| {
        AppError::NotFound("Profile not found. Please complete onboarding first.".to_string())
    })?;

    let reason = body.reason.trim();
    let vote = PollVote {
        poll_id,
        user_id: auth_user_id,
        display_name: profile.display_name,
        answer: answer.to_string(),
        reason: (!reason.is_empty()).then(|| reason.to_string()),
        voted_at: Utc::now(),
    };
    state.store.put_vote(vote.clone()).await?;

    Ok((StatusCode::CREATED, Json(vote)))
}

/// GET /api/polls/{poll_id}/results - aggregated results
///
/// Only visible to callers who have themselves voted.
pub async fn get_poll_results(
    State(state): State<AppState>,
    AuthUser(auth_user_id): AuthUser,
    Path(poll_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if state.store.get_vote(&poll_id, &auth_user_id).await?.is_none() {
        return Err(AppError::Forbidden(
            "You must vote before viewing results".to_string(),
        ));
    }

    let poll = state
        .store
        .get_poll(&poll_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))?;

    let votes = state.store.votes_for_poll(&poll_id).await?;
    let results = PollResults::tally(&poll, &votes);

    Ok(Json(results))
}

/// A vote enriched with the originating poll's question, for profile views.
#[derive(Debug, Serialize)]
pub struct EnrichedVote {
    #[serde(flatten)]
    pub vote: PollVote,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_text: Option<String>,
}

/// GET /api/polls/votes - all votes cast by the caller
/// GET /api/polls/votes?user_id={id} - all votes cast by a specific user
pub async fn get_user_poll_votes(
    State(state): State<AppState>,
    AuthUser(auth_user_id): AuthUser,
    Query(query): Query<TargetUserQuery>,
) -> Result<impl IntoResponse, AppError> {
    let target_user_id = query.target_or(&auth_user_id);
    let votes = state.store.votes_by_user(target_user_id).await?;

    let mut enriched = Vec::with_capacity(votes.len());
    for vote in votes {
        let poll = state.store.get_poll(&vote.poll_id).await?;
        enriched.push(EnrichedVote {
            question: poll.as_ref().map(|p| p.question.clone()),
            info_text: poll.as_ref().map(|p| p.info_text.clone()),
            vote,
        });
    }

    Ok(Json(enriched))
}
