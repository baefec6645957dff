//! Vote records for questions and answers.
//!
//! # Invariants
//! - At most one vote per (user, target) pair, independently per vote kind.
//! - Vote values are exactly +1 or -1.

use crate::model::answer::AnswerId;
use crate::model::question::QuestionId;
use crate::model::user::UserId;
use serde::{Deserialize, Serialize};

/// Signed vote value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteValue {
    Up,
    Down,
}

impl VoteValue {
    /// Returns the signed integer persisted for this vote.
    pub fn signed(self) -> i64 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

/// One user's vote on one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionVote {
    pub user_uuid: UserId,
    pub question_uuid: QuestionId,
    pub value: VoteValue,
}

/// One user's vote on one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerVote {
    pub user_uuid: UserId,
    pub answer_uuid: AnswerId,
    pub value: VoteValue,
}

#[cfg(test)]
mod tests {
    use super::VoteValue;

    #[test]
    fn vote_values_are_signed_units() {
        assert_eq!(VoteValue::Up.signed(), 1);
        assert_eq!(VoteValue::Down.signed(), -1);
    }
}
