//! Generation-and-aggregation pipeline.
//!
//! # Responsibility
//! - Derive target counts from the scale coefficient.
//! - Generate users, tags, questions, answers and votes in strict order.
//! - Recompute vote-derived ratings once all votes exist.
//!
//! # Invariants
//! - Stages run strictly sequentially; each stage's output is materialized
//!   in memory before the next stage samples from it.
//! - Entities are create-only; only ratings are updated, nothing is deleted.
//!
//! # See also
//! - docs/architecture/seeding-pipeline.md

use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod answers;
pub mod identity;
pub mod pipeline;
pub mod plan;
pub mod progress;
pub mod questions;
pub mod ratings;
pub mod taxonomy;
pub mod votes;

pub use pipeline::{run, run_seeded, SeedSummary};
pub use plan::SeedPlan;
pub use progress::{LogProgress, NullProgress, ProgressSink};

pub type SeedResult<T> = Result<T, SeedError>;

/// Pipeline-level error.
///
/// Store rejections are not retried anywhere in the pipeline; they surface
/// here and abort the run.
#[derive(Debug)]
pub enum SeedError {
    Repo(RepoError),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for SeedError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
