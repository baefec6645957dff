//! User and profile records.
//!
//! # Invariants
//! - `username` and `email` are unique across a run by construction.
//! - Every user owns exactly one profile, created immediately after it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a user row.
pub type UserId = Uuid;

/// Account record with synthetic credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uuid: UserId,
    /// Handle of the form `user_{index}`; the index makes it unique.
    pub username: String,
    /// Derived from the handle, `{username}@example.com`.
    pub email: String,
    /// Placeholder credential, identical for every seeded account.
    pub password: String,
}

impl User {
    /// Creates a user with a generated stable ID.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Empty 1:1 companion record for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub uuid: Uuid,
    pub user_uuid: UserId,
}

impl Profile {
    /// Creates the paired profile for an existing user.
    pub fn for_user(user: &User) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            user_uuid: user.uuid,
        }
    }
}
