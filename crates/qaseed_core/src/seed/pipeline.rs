//! Pipeline orchestration and run summary.
//!
//! # Responsibility
//! - Sequence the generation stages top-down over one store connection.
//! - Read final per-kind counts back from the store after aggregation.
//!
//! # Invariants
//! - Stage order is fixed: users, tags, questions, answers, question-votes,
//!   answer-votes, ratings.
//! - Summary counts come from the store, not from in-memory collections.

use crate::content::{ContentProvider, LoremProvider};
use crate::repo::answer_repo::{AnswerRepository, SqliteAnswerRepository};
use crate::repo::question_repo::{QuestionRepository, SqliteQuestionRepository};
use crate::repo::tag_repo::{SqliteTagRepository, TagRepository};
use crate::repo::user_repo::{SqliteUserRepository, UserRepository};
use crate::repo::vote_repo::{SqliteVoteRepository, VoteRepository};
use crate::seed::plan::SeedPlan;
use crate::seed::progress::ProgressSink;
use crate::seed::{answers, identity, questions, ratings, taxonomy, votes, SeedResult};
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rusqlite::Connection;

/// Final per-kind counts read back from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: u64,
    pub tags: u64,
    pub questions: u64,
    pub answers: u64,
    pub question_votes: u64,
    pub answer_votes: u64,
}

impl SeedSummary {
    /// Combined vote count across both kinds.
    pub fn total_votes(&self) -> u64 {
        self.question_votes + self.answer_votes
    }
}

/// Runs the pipeline with content and sampling streams derived from `seed`.
///
/// Text synthesis and sampling draw from separate seeded streams; the same
/// seed always yields the same generated structure.
pub fn run_seeded<P: ProgressSink>(
    conn: &Connection,
    coefficient: u64,
    seed: u64,
    progress: &P,
) -> SeedResult<SeedSummary> {
    let mut content = LoremProvider::seeded(seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));
    run(conn, coefficient, &mut content, &mut rng, progress)
}

/// Runs the full generation-and-aggregation pipeline on one connection.
///
/// # Side effects
/// - Emits `seed_run` logging events and per-stage progress notifications.
///
/// # Errors
/// - Any store rejection aborts the run at the failing stage; partial output
///   stays in the database (there is no rollback or checkpointing).
pub fn run<C, R, P>(
    conn: &Connection,
    coefficient: u64,
    content: &mut C,
    rng: &mut R,
    progress: &P,
) -> SeedResult<SeedSummary>
where
    C: ContentProvider,
    R: Rng,
    P: ProgressSink,
{
    let plan = SeedPlan::for_coefficient(coefficient);
    info!(
        "event=seed_run module=seed status=start coefficient={coefficient} users={} tags={} questions={} answers={} vote_budget={}",
        plan.users,
        plan.tags,
        plan.questions,
        plan.answers,
        plan.question_votes + plan.answer_votes
    );

    let user_repo = SqliteUserRepository::new(conn);
    let users = identity::generate_users(&user_repo, plan.users, progress)?;

    let tag_repo = SqliteTagRepository::new(conn);
    let tags = taxonomy::generate_tags(&tag_repo, content, plan.tags, progress)?;

    let mut question_repo = SqliteQuestionRepository::new(conn);
    let questions = questions::generate_questions(
        &mut question_repo,
        content,
        rng,
        &users,
        &tags,
        plan.questions,
        progress,
    )?;

    let answer_repo = SqliteAnswerRepository::new(conn);
    let answers = answers::generate_answers(
        &answer_repo,
        content,
        rng,
        &users,
        &questions,
        plan.answers,
        progress,
    )?;

    let vote_repo = SqliteVoteRepository::new(conn);
    let question_votes_created = votes::generate_question_votes(
        &vote_repo,
        rng,
        &users,
        &questions,
        plan.question_votes,
        progress,
    )?;
    let answer_votes_created = votes::generate_answer_votes(
        &vote_repo,
        rng,
        &users,
        &answers,
        plan.answer_votes,
        progress,
    )?;
    info!(
        "event=seed_votes module=seed status=ok question_votes={question_votes_created} answer_votes={answer_votes_created} target_per_kind={}",
        plan.question_votes
    );

    ratings::recompute_ratings(
        &question_repo,
        &answer_repo,
        &vote_repo,
        &questions,
        &answers,
        progress,
    )?;

    let summary = SeedSummary {
        users: user_repo.count_users()?,
        tags: tag_repo.count_tags()?,
        questions: question_repo.count_questions()?,
        answers: answer_repo.count_answers()?,
        question_votes: vote_repo.count_question_votes()?,
        answer_votes: vote_repo.count_answer_votes()?,
    };
    info!(
        "event=seed_run module=seed status=ok users={} tags={} questions={} answers={} question_votes={} answer_votes={} total_votes={}",
        summary.users,
        summary.tags,
        summary.questions,
        summary.answers,
        summary.question_votes,
        summary.answer_votes,
        summary.total_votes()
    );

    Ok(summary)
}
