//! Identity generation stage.
//!
//! # Responsibility
//! - Create users with handles unique by construction, plus their profiles.
//!
//! # Invariants
//! - Handle `user_{index}` and its derived email are injective over indices,
//!   so no existence check runs before creation.
//! - A store rejection aborts the run; there is nothing to retry.

use crate::model::user::{Profile, User};
use crate::repo::user_repo::UserRepository;
use crate::seed::progress::ProgressSink;
use crate::seed::SeedResult;

const STAGE: &str = "users";
const PROGRESS_INTERVAL: u64 = 1000;
const PASSWORD_PLACEHOLDER: &str = "testpass123";

/// Creates `target` users, each immediately followed by its paired profile.
///
/// Returns the created users in generation order for downstream sampling.
pub fn generate_users<R, P>(repo: &R, target: u64, progress: &P) -> SeedResult<Vec<User>>
where
    R: UserRepository,
    P: ProgressSink,
{
    progress.stage_started(STAGE, target);

    let mut users = Vec::with_capacity(target as usize);
    for index in 0..target {
        let username = format!("user_{index}");
        let email = format!("{username}@example.com");
        let user = User::new(username, email, PASSWORD_PLACEHOLDER);
        repo.create_user(&user)?;
        repo.create_profile(&Profile::for_user(&user))?;
        users.push(user);

        if index > 0 && index % PROGRESS_INTERVAL == 0 {
            progress.checkpoint(STAGE, index);
        }
    }

    Ok(users)
}
