// Copyright (c) Civic Social Team
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user profile, keyed by the identity provider's subject id. Created
/// during onboarding (outside this service) and partially updated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub display_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub political_alignment: String,
    #[serde(default)]
    pub profile_private: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// View of a private profile for anyone other than its owner: name and
    /// metadata only, free-text fields suppressed.
    pub fn redacted(&self) -> Profile {
        Profile {
            user_id: self.user_id.clone(),
            display_name: self.display_name.clone(),
            bio: String::new(),
            political_alignment: String::new(),
            profile_private: true,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Partial profile change set. `None` fields are left untouched by the
/// store; `updated_at` is always refreshed on apply.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfile {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub political_alignment: Option<String>,
    pub profile_private: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacted_keeps_identity_and_suppresses_free_text() {
        let profile = Profile {
            user_id: "user-1".to_string(),
            display_name: "Kiri".to_string(),
            bio: "secret".to_string(),
            political_alignment: "Labour".to_string(),
            profile_private: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let redacted = profile.redacted();
        assert_eq!(redacted.user_id, "user-1");
        assert_eq!(redacted.display_name, "Kiri");
        assert_eq!(redacted.bio, "");
        assert_eq!(redacted.political_alignment, "");
        assert!(redacted.profile_private);
        assert_eq!(redacted.created_at, profile.created_at);
    }
}
