//! Rating aggregation stage.
//!
//! # Responsibility
//! - Recompute every question/answer rating as the signed sum of its votes.
//!
//! # Invariants
//! - Full recomputation, not an incremental delta; re-running it over the
//!   same vote set yields identical ratings.
//! - Entities with zero votes end at rating 0, matching their initial value.

use crate::model::answer::Answer;
use crate::model::question::Question;
use crate::repo::answer_repo::AnswerRepository;
use crate::repo::question_repo::QuestionRepository;
use crate::repo::vote_repo::VoteRepository;
use crate::seed::progress::ProgressSink;
use crate::seed::SeedResult;

const STAGE: &str = "ratings";

/// Recomputes and persists ratings for every given question and answer.
pub fn recompute_ratings<Q, A, V, P>(
    question_repo: &Q,
    answer_repo: &A,
    vote_repo: &V,
    questions: &[Question],
    answers: &[Answer],
    progress: &P,
) -> SeedResult<()>
where
    Q: QuestionRepository,
    A: AnswerRepository,
    V: VoteRepository,
    P: ProgressSink,
{
    progress.stage_started(STAGE, (questions.len() + answers.len()) as u64);

    for question in questions {
        let rating = vote_repo.sum_question_votes(question.uuid)?;
        question_repo.set_question_rating(question.uuid, rating)?;
    }

    for answer in answers {
        let rating = vote_repo.sum_answer_votes(answer.uuid)?;
        answer_repo.set_answer_rating(answer.uuid, rating)?;
    }

    Ok(())
}
