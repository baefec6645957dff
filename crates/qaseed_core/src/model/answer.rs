//! Answer record.
//!
//! # Invariants
//! - `question_uuid` references a question created earlier in the same run.
//! - `rating` starts at 0 and is only touched by rating aggregation.

use crate::model::question::QuestionId;
use crate::model::user::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an answer row.
pub type AnswerId = Uuid;

/// Answer attached to a question, with a vote-derived rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub uuid: AnswerId,
    pub content: String,
    pub author_uuid: UserId,
    pub question_uuid: QuestionId,
    /// Signed sum of answer-vote values after aggregation.
    pub rating: i64,
    /// Set by a coin flip on every tenth generation index, false elsewhere.
    pub is_correct: bool,
}

impl Answer {
    /// Creates an answer with a generated stable ID and zero rating.
    pub fn new(
        content: impl Into<String>,
        author_uuid: UserId,
        question_uuid: QuestionId,
        is_correct: bool,
    ) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            content: content.into(),
            author_uuid,
            question_uuid,
            rating: 0,
            is_correct,
        }
    }
}
