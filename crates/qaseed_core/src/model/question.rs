//! Question record.
//!
//! # Invariants
//! - `author_uuid` references a user created earlier in the same run.
//! - `rating` starts at 0 and is only touched by rating aggregation.

use crate::model::user::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a question row.
pub type QuestionId = Uuid;

/// Maximum title length in characters; longer synthesized titles are cut.
pub const TITLE_MAX_CHARS: usize = 200;

/// Question with title, body and a vote-derived rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub uuid: QuestionId,
    /// Truncated to [`TITLE_MAX_CHARS`] characters.
    pub title: String,
    pub content: String,
    pub author_uuid: UserId,
    /// Signed sum of question-vote values after aggregation.
    pub rating: i64,
}

impl Question {
    /// Creates a question with a generated stable ID and zero rating.
    pub fn new(title: impl Into<String>, content: impl Into<String>, author_uuid: UserId) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            author_uuid,
            rating: 0,
        }
    }
}
