// Copyright (c) Civic Social Team
// SPDX-License-Identifier: Apache-2.0

//! Field validators for writable record fields.
//!
//! Every function is pure and returns the human-readable rejection reason on
//! failure. Handlers compose these per endpoint; the first failure wins.

use thiserror::Error;

pub const DISPLAY_NAME_MIN: usize = 2;
pub const DISPLAY_NAME_MAX: usize = 20;
pub const BIO_MAX: usize = 500;
pub const POST_CONTENT_MAX: usize = 280;
pub const POLL_REASON_MAX: usize = 500;

/// The closed set of accepted political alignments. Empty string clears the
/// field.
pub const POLITICAL_ALIGNMENTS: [&str; 4] = ["National", "Labour", "Independent", ""];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    fn new(message: impl Into<String>) -> Self {
        ValidationError(message.into())
    }
}

pub fn validate_display_name(name: &str) -> Result<(), ValidationError> {
    let length = name.trim().chars().count();
    if length < DISPLAY_NAME_MIN {
        return Err(ValidationError::new(format!(
            "display_name must be at least {DISPLAY_NAME_MIN} characters"
        )));
    }
    if length > DISPLAY_NAME_MAX {
        return Err(ValidationError::new(format!(
            "display_name must not exceed {DISPLAY_NAME_MAX} characters"
        )));
    }
    Ok(())
}

pub fn validate_bio(bio: &str) -> Result<(), ValidationError> {
    if bio.chars().count() > BIO_MAX {
        return Err(ValidationError::new(format!(
            "bio must not exceed {BIO_MAX} characters"
        )));
    }
    Ok(())
}

pub fn validate_political_alignment(alignment: &str) -> Result<(), ValidationError> {
    if !POLITICAL_ALIGNMENTS.contains(&alignment) {
        return Err(ValidationError::new(
            "political_alignment must be National, Labour, or Independent",
        ));
    }
    Ok(())
}

pub fn validate_post_content(content: &str) -> Result<(), ValidationError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(ValidationError::new("Content is required"));
    }
    // Character count, not byte length; macrons and other multi-byte
    // characters count once.
    if content.chars().count() > POST_CONTENT_MAX {
        return Err(ValidationError::new(format!(
            "Content must not exceed {POST_CONTENT_MAX} characters"
        )));
    }
    Ok(())
}

/// Case-sensitive membership check against the poll's declared options.
pub fn validate_poll_answer(answer: &str, options: &[String]) -> Result<(), ValidationError> {
    if !options.iter().any(|option| option == answer) {
        return Err(ValidationError::new(format!(
            "answer must be one of: {}",
            options.join(", ")
        )));
    }
    Ok(())
}

pub fn validate_poll_reason(reason: &str) -> Result<(), ValidationError> {
    if reason.chars().count() > POLL_REASON_MAX {
        return Err(ValidationError::new(format!(
            "reason must not exceed {POLL_REASON_MAX} characters"
        )));
    }
    Ok(())
}
