//! Answer generation stage.
//!
//! # Responsibility
//! - Create answers with independently sampled questions and authors.
//!
//! # Invariants
//! - Question and author draws are independent; an author may answer their
//!   own question.
//! - The correctness flag is a coin flip only on indices divisible by 10 and
//!   false everywhere else. The index gate is part of the generation policy
//!   and must not be folded into a flat probability.
//! - Empty user or question pools short-circuit the stage.

use crate::content::ContentProvider;
use crate::model::answer::Answer;
use crate::model::question::Question;
use crate::model::user::User;
use crate::repo::answer_repo::AnswerRepository;
use crate::seed::progress::ProgressSink;
use crate::seed::SeedResult;
use rand::seq::IndexedRandom;
use rand::Rng;

const STAGE: &str = "answers";
const PROGRESS_INTERVAL: u64 = 100_000;
const CONTENT_MAX_CHARS: usize = 300;
const CORRECTNESS_GATE: u64 = 10;

/// Creates `target` answers sampled over the given users and questions.
///
/// Returns the created answers in generation order for downstream sampling.
pub fn generate_answers<A, C, R, P>(
    repo: &A,
    content: &mut C,
    rng: &mut R,
    users: &[User],
    questions: &[Question],
    target: u64,
    progress: &P,
) -> SeedResult<Vec<Answer>>
where
    A: AnswerRepository,
    C: ContentProvider,
    R: Rng,
    P: ProgressSink,
{
    progress.stage_started(STAGE, target);

    if users.is_empty() || questions.is_empty() {
        return Ok(Vec::new());
    }

    let mut answers = Vec::with_capacity(target as usize);
    for index in 0..target {
        let Some(question) = questions.choose(rng) else {
            break;
        };
        let Some(author) = users.choose(rng) else {
            break;
        };
        let body = content.text(CONTENT_MAX_CHARS);
        let is_correct = if index % CORRECTNESS_GATE == 0 {
            rng.random::<bool>()
        } else {
            false
        };
        let answer = Answer::new(body, author.uuid, question.uuid, is_correct);
        repo.create_answer(&answer)?;
        answers.push(answer);

        if index > 0 && index % PROGRESS_INTERVAL == 0 {
            progress.checkpoint(STAGE, index);
        }
    }

    Ok(answers)
}
