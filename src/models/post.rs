use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A short post. Immutable once created; `display_name` is denormalized
/// from the author's profile at creation time and never re-synced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub post_id: String,
    pub user_id: String,
    pub display_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn new(user_id: String, display_name: String, content: String) -> Self {
        let now = Utc::now();
        Post {
            post_id: Uuid::new_v4().to_string(),
            user_id,
            display_name,
            content,
            created_at: now,
            updated_at: now,
        }
    }
}
