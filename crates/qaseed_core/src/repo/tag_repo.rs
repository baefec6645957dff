//! Tag repository contract and SQLite implementation.

use crate::model::tag::{Tag, TagId};
use crate::repo::{count_rows, RepoResult};
use rusqlite::{params, Connection};

/// Repository interface for taxonomy persistence.
pub trait TagRepository {
    /// Creates one tag and returns its stable id.
    fn create_tag(&self, tag: &Tag) -> RepoResult<TagId>;
    /// Returns the number of persisted tags.
    fn count_tags(&self) -> RepoResult<u64>;
}

/// SQLite-backed tag repository.
pub struct SqliteTagRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTagRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TagRepository for SqliteTagRepository<'_> {
    fn create_tag(&self, tag: &Tag) -> RepoResult<TagId> {
        self.conn.execute(
            "INSERT INTO tags (uuid, name) VALUES (?1, ?2);",
            params![tag.uuid.to_string(), tag.name.as_str()],
        )?;

        Ok(tag.uuid)
    }

    fn count_tags(&self) -> RepoResult<u64> {
        count_rows(self.conn, "tags")
    }
}
