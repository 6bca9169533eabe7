// Copyright (c) Civic Social Team
// SPDX-License-Identifier: Apache-2.0

pub mod health;
pub mod polls;
pub mod posts;
pub mod profiles;

use serde::Deserialize;

/// Query parameters for the cross-user read endpoints: the target user when
/// supplied, otherwise the caller themselves.
#[derive(Debug, Deserialize)]
pub struct TargetUserQuery {
    pub user_id: Option<String>,
}

impl TargetUserQuery {
    pub fn target_or<'a>(&'a self, auth_user_id: &'a str) -> &'a str {
        self.user_id.as_deref().unwrap_or(auth_user_id)
    }
}
