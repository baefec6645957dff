//! User/profile repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist user accounts and their 1:1 profile companions.
//!
//! # Invariants
//! - `username` and `email` uniqueness is enforced by schema constraints;
//!   a rejection here is fatal for the seeding run.

use crate::model::user::{Profile, User, UserId};
use crate::repo::{count_rows, RepoResult};
use rusqlite::{params, Connection};

/// Repository interface for identity persistence.
pub trait UserRepository {
    /// Creates one user and returns its stable id.
    fn create_user(&self, user: &User) -> RepoResult<UserId>;
    /// Creates the paired profile for an already-created user.
    fn create_profile(&self, profile: &Profile) -> RepoResult<()>;
    /// Returns the number of persisted users.
    fn count_users(&self) -> RepoResult<u64>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn create_user(&self, user: &User) -> RepoResult<UserId> {
        self.conn.execute(
            "INSERT INTO users (uuid, username, email, password)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                user.uuid.to_string(),
                user.username.as_str(),
                user.email.as_str(),
                user.password.as_str(),
            ],
        )?;

        Ok(user.uuid)
    }

    fn create_profile(&self, profile: &Profile) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO profiles (uuid, user_uuid) VALUES (?1, ?2);",
            params![profile.uuid.to_string(), profile.user_uuid.to_string()],
        )?;

        Ok(())
    }

    fn count_users(&self) -> RepoResult<u64> {
        count_rows(self.conn, "users")
    }
}
