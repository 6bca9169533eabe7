// Copyright (c) Civic Social Team
// SPDX-License-Identifier: Apache-2.0

pub mod poll;
pub mod post;
pub mod profile;

pub use poll::{OptionTally, Poll, PollResults, PollVote, UserVote};
pub use post::Post;
pub use profile::{Profile, UpdateProfile};
