//! Vote generation stage.
//!
//! # Responsibility
//! - Create question-votes and answer-votes under the one-vote-per-
//!   (user, target) constraint.
//!
//! # Invariants
//! - Each budget unit is a single bounded attempt: draw, probe, create or
//!   silently skip. No retry, no substitution.
//! - Realized counts may undershoot targets; that is expected output, not a
//!   failure mode.
//! - Empty user or target pools short-circuit the stage.

use crate::model::answer::Answer;
use crate::model::question::Question;
use crate::model::user::User;
use crate::model::vote::{AnswerVote, QuestionVote, VoteValue};
use crate::repo::vote_repo::VoteRepository;
use crate::seed::progress::ProgressSink;
use crate::seed::SeedResult;
use rand::seq::IndexedRandom;
use rand::Rng;

const QUESTION_STAGE: &str = "question_votes";
const ANSWER_STAGE: &str = "answer_votes";
const PROGRESS_INTERVAL: u64 = 100_000;

/// Attempts `target` question-votes; returns the realized creation count.
pub fn generate_question_votes<V, R, P>(
    repo: &V,
    rng: &mut R,
    users: &[User],
    questions: &[Question],
    target: u64,
    progress: &P,
) -> SeedResult<u64>
where
    V: VoteRepository,
    R: Rng,
    P: ProgressSink,
{
    progress.stage_started(QUESTION_STAGE, target);

    if users.is_empty() || questions.is_empty() {
        return Ok(0);
    }

    let mut created = 0;
    for index in 0..target {
        let Some(user) = users.choose(rng) else {
            break;
        };
        let Some(question) = questions.choose(rng) else {
            break;
        };

        if !repo.question_vote_exists(user.uuid, question.uuid)? {
            let vote = QuestionVote {
                user_uuid: user.uuid,
                question_uuid: question.uuid,
                value: draw_value(rng),
            };
            repo.create_question_vote(&vote)?;
            created += 1;
        }

        if index > 0 && index % PROGRESS_INTERVAL == 0 {
            progress.checkpoint(QUESTION_STAGE, index);
        }
    }

    Ok(created)
}

/// Attempts `target` answer-votes; returns the realized creation count.
pub fn generate_answer_votes<V, R, P>(
    repo: &V,
    rng: &mut R,
    users: &[User],
    answers: &[Answer],
    target: u64,
    progress: &P,
) -> SeedResult<u64>
where
    V: VoteRepository,
    R: Rng,
    P: ProgressSink,
{
    progress.stage_started(ANSWER_STAGE, target);

    if users.is_empty() || answers.is_empty() {
        return Ok(0);
    }

    let mut created = 0;
    for index in 0..target {
        let Some(user) = users.choose(rng) else {
            break;
        };
        let Some(answer) = answers.choose(rng) else {
            break;
        };

        if !repo.answer_vote_exists(user.uuid, answer.uuid)? {
            let vote = AnswerVote {
                user_uuid: user.uuid,
                answer_uuid: answer.uuid,
                value: draw_value(rng),
            };
            repo.create_answer_vote(&vote)?;
            created += 1;
        }

        if index > 0 && index % PROGRESS_INTERVAL == 0 {
            progress.checkpoint(ANSWER_STAGE, index);
        }
    }

    Ok(created)
}

fn draw_value<R: Rng>(rng: &mut R) -> VoteValue {
    if rng.random() {
        VoteValue::Up
    } else {
        VoteValue::Down
    }
}
