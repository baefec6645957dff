//! Question repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist questions, their tag associations, and rating updates.
//! - Own the bulk tag-link replacement logic with atomic semantics.
//!
//! # Invariants
//! - `set_question_tags` replaces the whole link set in a single transaction.
//! - Rating updates target existing rows; a zero-row update is `NotFound`.

use crate::model::question::{Question, QuestionId};
use crate::model::tag::TagId;
use crate::repo::{count_rows, parse_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection};

/// Repository interface for question persistence.
pub trait QuestionRepository {
    /// Creates one question and returns its stable id.
    fn create_question(&self, question: &Question) -> RepoResult<QuestionId>;
    /// Replaces all tag associations for the given question.
    fn set_question_tags(&mut self, question_uuid: QuestionId, tags: &[TagId]) -> RepoResult<()>;
    /// Persists a recomputed rating value.
    fn set_question_rating(&self, question_uuid: QuestionId, rating: i64) -> RepoResult<()>;
    /// Returns the tag ids associated with one question.
    fn tags_for_question(&self, question_uuid: QuestionId) -> RepoResult<Vec<TagId>>;
    /// Returns the persisted rating for one question.
    fn question_rating(&self, question_uuid: QuestionId) -> RepoResult<i64>;
    /// Returns the number of persisted questions.
    fn count_questions(&self) -> RepoResult<u64>;
}

/// SQLite-backed question repository.
pub struct SqliteQuestionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteQuestionRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl QuestionRepository for SqliteQuestionRepository<'_> {
    fn create_question(&self, question: &Question) -> RepoResult<QuestionId> {
        self.conn.execute(
            "INSERT INTO questions (uuid, title, content, author_uuid, rating)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                question.uuid.to_string(),
                question.title.as_str(),
                question.content.as_str(),
                question.author_uuid.to_string(),
                question.rating,
            ],
        )?;

        Ok(question.uuid)
    }

    fn set_question_tags(&mut self, question_uuid: QuestionId, tags: &[TagId]) -> RepoResult<()> {
        let question_text = question_uuid.to_string();
        let tx = self.conn.unchecked_transaction()?;

        tx.execute(
            "DELETE FROM question_tags WHERE question_uuid = ?1;",
            [question_text.as_str()],
        )?;
        for tag in tags {
            tx.execute(
                "INSERT INTO question_tags (question_uuid, tag_uuid) VALUES (?1, ?2);",
                params![question_text.as_str(), tag.to_string()],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    fn set_question_rating(&self, question_uuid: QuestionId, rating: i64) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE questions SET rating = ?2 WHERE uuid = ?1;",
            params![question_uuid.to_string(), rating],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(question_uuid));
        }

        Ok(())
    }

    fn tags_for_question(&self, question_uuid: QuestionId) -> RepoResult<Vec<TagId>> {
        let mut stmt = self.conn.prepare(
            "SELECT tag_uuid FROM question_tags WHERE question_uuid = ?1 ORDER BY tag_uuid ASC;",
        )?;
        let mut rows = stmt.query([question_uuid.to_string()])?;
        let mut tags = Vec::new();
        while let Some(row) = rows.next()? {
            let value: String = row.get(0)?;
            tags.push(parse_uuid(&value, "question_tags.tag_uuid")?);
        }
        Ok(tags)
    }

    fn question_rating(&self, question_uuid: QuestionId) -> RepoResult<i64> {
        let mut stmt = self
            .conn
            .prepare("SELECT rating FROM questions WHERE uuid = ?1;")?;
        let mut rows = stmt.query([question_uuid.to_string()])?;
        match rows.next()? {
            Some(row) => Ok(row.get(0)?),
            None => Err(RepoError::NotFound(question_uuid)),
        }
    }

    fn count_questions(&self) -> RepoResult<u64> {
        count_rows(self.conn, "questions")
    }
}
