// Copyright (c) Civic Social Team
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A poll definition: a question with an ordered set of allowed answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poll {
    pub poll_id: String,
    pub question: String,
    pub info_text: String,
    pub options: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A single user's vote on a poll. The (poll_id, user_id) pair is the
/// composite key; at most one vote per pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollVote {
    pub poll_id: String,
    pub user_id: String,
    pub display_name: String,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub voted_at: DateTime<Utc>,
}

/// The caller's own vote, as annotated onto a poll listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserVote {
    pub answer: String,
    pub reason: String,
    pub voted_at: DateTime<Utc>,
}

impl From<&PollVote> for UserVote {
    fn from(vote: &PollVote) -> Self {
        UserVote {
            answer: vote.answer.clone(),
            reason: vote.reason.clone().unwrap_or_default(),
            voted_at: vote.voted_at,
        }
    }
}

/// Aggregated results for one poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollResults {
    pub poll_id: String,
    pub total_votes: usize,
    pub options: Vec<OptionTally>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionTally {
    pub option: String,
    pub votes: usize,
    pub percentage: f64,
}

impl PollResults {
    /// Tally `votes` against the poll's declared options. Percentages are
    /// rounded to one decimal place; all zero when there are no votes.
    /// Answers not in the option set (impossible via the API) are counted
    /// into the total but no bucket.
    pub fn tally(poll: &Poll, votes: &[PollVote]) -> PollResults {
        let total = votes.len();
        let options = poll
            .options
            .iter()
            .map(|option| {
                let count = votes.iter().filter(|vote| &vote.answer == option).count();
                let percentage = if total == 0 {
                    0.0
                } else {
                    (count as f64 / total as f64 * 1000.0).round() / 10.0
                };
                OptionTally {
                    option: option.clone(),
                    votes: count,
                    percentage,
                }
            })
            .collect();

        PollResults {
            poll_id: poll.poll_id.clone(),
            total_votes: total,
            options,
        }
    }
}

/// The polls known at startup. A single poll today; the collection is
/// growable without touching callers.
pub fn seed_polls() -> Vec<Poll> {
    vec![Poll {
        poll_id: "national-coalition-2024".to_string(),
        question: "Do you support the current government (National led coalition)?".to_string(),
        info_text: "Current government includes; National, ACT, NZ First".to_string(),
        options: vec!["Yes".to_string(), "No".to_string()],
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }]
}
