//! Core logic for qaseed, a synthetic-data generator for a question/answer
//! platform's store.
//!
//! Given a single scale coefficient, the pipeline populates a relational
//! schema (users, tags, questions, answers, votes) with internally
//! consistent random content, then derives aggregate rating fields from the
//! generated vote records.

pub mod content;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;

pub use content::{ContentProvider, LoremProvider};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::answer::{Answer, AnswerId};
pub use model::question::{Question, QuestionId};
pub use model::tag::{Tag, TagId};
pub use model::user::{Profile, User, UserId};
pub use model::vote::{AnswerVote, QuestionVote, VoteValue};
pub use repo::answer_repo::{AnswerRepository, SqliteAnswerRepository};
pub use repo::question_repo::{QuestionRepository, SqliteQuestionRepository};
pub use repo::tag_repo::{SqliteTagRepository, TagRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::vote_repo::{SqliteVoteRepository, VoteRepository};
pub use repo::{RepoError, RepoResult};
pub use seed::{
    run, run_seeded, LogProgress, NullProgress, ProgressSink, SeedError, SeedPlan, SeedResult,
    SeedSummary,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
