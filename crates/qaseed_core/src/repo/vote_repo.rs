//! Vote repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist question-votes and answer-votes.
//! - Answer (user, target) existence probes ahead of creation.
//! - Provide the signed sums consumed by rating aggregation.
//!
//! # Invariants
//! - One vote per (user, target) pair per kind, mirrored by composite
//!   primary keys in the schema.
//! - Sums over zero votes are 0, never NULL.

use crate::model::answer::AnswerId;
use crate::model::question::QuestionId;
use crate::model::user::UserId;
use crate::model::vote::{AnswerVote, QuestionVote};
use crate::repo::{count_rows, RepoResult};
use rusqlite::{params, Connection};

/// Repository interface for vote persistence, parameterized by target kind
/// through its paired method families.
pub trait VoteRepository {
    /// Creates one question-vote.
    fn create_question_vote(&self, vote: &QuestionVote) -> RepoResult<()>;
    /// Returns whether the user already voted on the question.
    fn question_vote_exists(&self, user: UserId, question: QuestionId) -> RepoResult<bool>;
    /// Returns the signed sum of all votes on one question.
    fn sum_question_votes(&self, question: QuestionId) -> RepoResult<i64>;
    /// Returns the number of persisted question-votes.
    fn count_question_votes(&self) -> RepoResult<u64>;

    /// Creates one answer-vote.
    fn create_answer_vote(&self, vote: &AnswerVote) -> RepoResult<()>;
    /// Returns whether the user already voted on the answer.
    fn answer_vote_exists(&self, user: UserId, answer: AnswerId) -> RepoResult<bool>;
    /// Returns the signed sum of all votes on one answer.
    fn sum_answer_votes(&self, answer: AnswerId) -> RepoResult<i64>;
    /// Returns the number of persisted answer-votes.
    fn count_answer_votes(&self) -> RepoResult<u64>;
}

/// SQLite-backed vote repository.
pub struct SqliteVoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteVoteRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl VoteRepository for SqliteVoteRepository<'_> {
    fn create_question_vote(&self, vote: &QuestionVote) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO question_votes (user_uuid, question_uuid, value)
             VALUES (?1, ?2, ?3);",
            params![
                vote.user_uuid.to_string(),
                vote.question_uuid.to_string(),
                vote.value.signed(),
            ],
        )?;

        Ok(())
    }

    fn question_vote_exists(&self, user: UserId, question: QuestionId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM question_votes
                WHERE user_uuid = ?1 AND question_uuid = ?2
            );",
            params![user.to_string(), question.to_string()],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    fn sum_question_votes(&self, question: QuestionId) -> RepoResult<i64> {
        let sum: i64 = self.conn.query_row(
            "SELECT COALESCE(SUM(value), 0)
             FROM question_votes
             WHERE question_uuid = ?1;",
            [question.to_string()],
            |row| row.get(0),
        )?;
        Ok(sum)
    }

    fn count_question_votes(&self) -> RepoResult<u64> {
        count_rows(self.conn, "question_votes")
    }

    fn create_answer_vote(&self, vote: &AnswerVote) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO answer_votes (user_uuid, answer_uuid, value)
             VALUES (?1, ?2, ?3);",
            params![
                vote.user_uuid.to_string(),
                vote.answer_uuid.to_string(),
                vote.value.signed(),
            ],
        )?;

        Ok(())
    }

    fn answer_vote_exists(&self, user: UserId, answer: AnswerId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM answer_votes
                WHERE user_uuid = ?1 AND answer_uuid = ?2
            );",
            params![user.to_string(), answer.to_string()],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    fn sum_answer_votes(&self, answer: AnswerId) -> RepoResult<i64> {
        let sum: i64 = self.conn.query_row(
            "SELECT COALESCE(SUM(value), 0)
             FROM answer_votes
             WHERE answer_uuid = ?1;",
            [answer.to_string()],
            |row| row.get(0),
        )?;
        Ok(sum)
    }

    fn count_answer_votes(&self) -> RepoResult<u64> {
        count_rows(self.conn, "answer_votes")
    }
}
