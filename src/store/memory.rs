// Copyright (c) Civic Social Team
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::{poll, Poll, PollVote, Post, Profile, UpdateProfile};

use super::{Store, StoreResult};

/// In-memory store. Each collection is a map under its own lock; the
/// composite vote key mirrors the (poll_id, user_id) key of the backing
/// document store this stands in for.
pub struct MemoryStore {
    profiles: RwLock<HashMap<String, Profile>>,
    posts: RwLock<HashMap<String, Post>>,
    polls: RwLock<Vec<Poll>>,
    votes: RwLock<HashMap<(String, String), PollVote>>,
}

impl MemoryStore {
    /// An empty store seeded with the statically defined polls.
    pub fn new() -> Self {
        Self::with_polls(poll::seed_polls())
    }

    pub fn with_polls(polls: Vec<Poll>) -> Self {
        MemoryStore {
            profiles: RwLock::new(HashMap::new()),
            posts: RwLock::new(HashMap::new()),
            polls: RwLock::new(polls),
            votes: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn get_profile(&self, user_id: &str) -> StoreResult<Option<Profile>> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn put_profile(&self, profile: Profile) -> StoreResult<()> {
        self.profiles
            .write()
            .await
            .insert(profile.user_id.clone(), profile);
        Ok(())
    }

    async fn update_profile(
        &self,
        user_id: &str,
        changes: UpdateProfile,
    ) -> StoreResult<Option<Profile>> {
        let mut profiles = self.profiles.write().await;
        let Some(profile) = profiles.get_mut(user_id) else {
            return Ok(None);
        };

        if let Some(display_name) = changes.display_name {
            profile.display_name = display_name;
        }
        if let Some(bio) = changes.bio {
            profile.bio = bio;
        }
        if let Some(alignment) = changes.political_alignment {
            profile.political_alignment = alignment;
        }
        if let Some(private) = changes.profile_private {
            profile.profile_private = private;
        }
        profile.updated_at = Utc::now();

        Ok(Some(profile.clone()))
    }

    async fn scan_profiles(&self) -> StoreResult<Vec<Profile>> {
        Ok(self.profiles.read().await.values().cloned().collect())
    }

    async fn put_post(&self, post: Post) -> StoreResult<()> {
        self.posts
            .write()
            .await
            .insert(post.post_id.clone(), post);
        Ok(())
    }

    async fn scan_posts(&self) -> StoreResult<Vec<Post>> {
        Ok(self.posts.read().await.values().cloned().collect())
    }

    async fn posts_by_user(&self, user_id: &str) -> StoreResult<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .posts
            .read()
            .await
            .values()
            .filter(|post| post.user_id == user_id)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn get_poll(&self, poll_id: &str) -> StoreResult<Option<Poll>> {
        Ok(self
            .polls
            .read()
            .await
            .iter()
            .find(|poll| poll.poll_id == poll_id)
            .cloned())
    }

    async fn list_polls(&self) -> StoreResult<Vec<Poll>> {
        Ok(self.polls.read().await.clone())
    }

    async fn get_vote(&self, poll_id: &str, user_id: &str) -> StoreResult<Option<PollVote>> {
        let key = (poll_id.to_string(), user_id.to_string());
        Ok(self.votes.read().await.get(&key).cloned())
    }

    async fn put_vote(&self, vote: PollVote) -> StoreResult<()> {
        let key = (vote.poll_id.clone(), vote.user_id.clone());
        self.votes.write().await.insert(key, vote);
        Ok(())
    }

    async fn votes_for_poll(&self, poll_id: &str) -> StoreResult<Vec<PollVote>> {
        Ok(self
            .votes
            .read()
            .await
            .values()
            .filter(|vote| vote.poll_id == poll_id)
            .cloned()
            .collect())
    }

    async fn votes_by_user(&self, user_id: &str) -> StoreResult<Vec<PollVote>> {
        Ok(self
            .votes
            .read()
            .await
            .values()
            .filter(|vote| vote.user_id == user_id)
            .cloned()
            .collect())
    }
}
