//! Answer repository contract and SQLite implementation.
//!
//! # Invariants
//! - Rating updates target existing rows; a zero-row update is `NotFound`.

use crate::model::answer::{Answer, AnswerId};
use crate::repo::{count_rows, RepoError, RepoResult};
use rusqlite::{params, Connection};

/// Repository interface for answer persistence.
pub trait AnswerRepository {
    /// Creates one answer and returns its stable id.
    fn create_answer(&self, answer: &Answer) -> RepoResult<AnswerId>;
    /// Persists a recomputed rating value.
    fn set_answer_rating(&self, answer_uuid: AnswerId, rating: i64) -> RepoResult<()>;
    /// Returns the persisted rating for one answer.
    fn answer_rating(&self, answer_uuid: AnswerId) -> RepoResult<i64>;
    /// Returns the number of persisted answers.
    fn count_answers(&self) -> RepoResult<u64>;
}

/// SQLite-backed answer repository.
pub struct SqliteAnswerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAnswerRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AnswerRepository for SqliteAnswerRepository<'_> {
    fn create_answer(&self, answer: &Answer) -> RepoResult<AnswerId> {
        self.conn.execute(
            "INSERT INTO answers (uuid, content, author_uuid, question_uuid, rating, is_correct)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                answer.uuid.to_string(),
                answer.content.as_str(),
                answer.author_uuid.to_string(),
                answer.question_uuid.to_string(),
                answer.rating,
                bool_to_int(answer.is_correct),
            ],
        )?;

        Ok(answer.uuid)
    }

    fn set_answer_rating(&self, answer_uuid: AnswerId, rating: i64) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE answers SET rating = ?2 WHERE uuid = ?1;",
            params![answer_uuid.to_string(), rating],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(answer_uuid));
        }

        Ok(())
    }

    fn answer_rating(&self, answer_uuid: AnswerId) -> RepoResult<i64> {
        let mut stmt = self
            .conn
            .prepare("SELECT rating FROM answers WHERE uuid = ?1;")?;
        let mut rows = stmt.query([answer_uuid.to_string()])?;
        match rows.next()? {
            Some(row) => Ok(row.get(0)?),
            None => Err(RepoError::NotFound(answer_uuid)),
        }
    }

    fn count_answers(&self) -> RepoResult<u64> {
        count_rows(self.conn, "answers")
    }
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
