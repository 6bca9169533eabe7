// Copyright (c) Civic Social Team
// SPDX-License-Identifier: Apache-2.0

//! Typed data access over the app's four collections: profiles, posts,
//! polls, and poll votes. Handlers only see this trait; the backing store
//! is chosen at startup and injected through the router state.

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Poll, PollVote, Post, Profile, UpdateProfile};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait Store: Send + Sync {
    // Profiles
    async fn get_profile(&self, user_id: &str) -> StoreResult<Option<Profile>>;
    async fn put_profile(&self, profile: Profile) -> StoreResult<()>;
    /// Apply a partial change set to an existing profile, refreshing
    /// `updated_at`. Returns `None` when no profile exists; never creates.
    async fn update_profile(
        &self,
        user_id: &str,
        changes: UpdateProfile,
    ) -> StoreResult<Option<Profile>>;
    /// Full-collection scan, unordered.
    async fn scan_profiles(&self) -> StoreResult<Vec<Profile>>;

    // Posts
    async fn put_post(&self, post: Post) -> StoreResult<()>;
    /// Full-collection scan, unordered.
    async fn scan_posts(&self) -> StoreResult<Vec<Post>>;
    /// All posts by one user, newest first.
    async fn posts_by_user(&self, user_id: &str) -> StoreResult<Vec<Post>>;

    // Polls
    async fn get_poll(&self, poll_id: &str) -> StoreResult<Option<Poll>>;
    async fn list_polls(&self) -> StoreResult<Vec<Poll>>;

    // Poll votes, keyed by (poll_id, user_id)
    async fn get_vote(&self, poll_id: &str, user_id: &str) -> StoreResult<Option<PollVote>>;
    async fn put_vote(&self, vote: PollVote) -> StoreResult<()>;
    async fn votes_for_poll(&self, poll_id: &str) -> StoreResult<Vec<PollVote>>;
    async fn votes_by_user(&self, user_id: &str) -> StoreResult<Vec<PollVote>>;
}
