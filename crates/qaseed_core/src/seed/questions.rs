//! Question generation stage.
//!
//! # Responsibility
//! - Create questions with uniformly sampled authors and 1–3 tag links.
//!
//! # Invariants
//! - Authors are drawn with replacement; tag sets are drawn without
//!   replacement, clamped to the available tag pool.
//! - Ratings start at 0; only rating aggregation touches them later.
//! - Empty user or tag pools short-circuit the stage to an empty output.

use crate::content::ContentProvider;
use crate::model::question::{Question, TITLE_MAX_CHARS};
use crate::model::tag::{Tag, TagId};
use crate::model::user::User;
use crate::repo::question_repo::QuestionRepository;
use crate::seed::progress::ProgressSink;
use crate::seed::SeedResult;
use rand::seq::IndexedRandom;
use rand::Rng;

const STAGE: &str = "questions";
const PROGRESS_INTERVAL: u64 = 10_000;
const CONTENT_MAX_CHARS: usize = 500;
const TAGS_PER_QUESTION_MIN: usize = 1;
const TAGS_PER_QUESTION_MAX: usize = 3;

/// Creates `target` questions sampled over the given users and tags.
///
/// Returns the created questions in generation order for downstream
/// sampling.
pub fn generate_questions<Q, C, R, P>(
    repo: &mut Q,
    content: &mut C,
    rng: &mut R,
    users: &[User],
    tags: &[Tag],
    target: u64,
    progress: &P,
) -> SeedResult<Vec<Question>>
where
    Q: QuestionRepository,
    C: ContentProvider,
    R: Rng,
    P: ProgressSink,
{
    progress.stage_started(STAGE, target);

    if users.is_empty() || tags.is_empty() {
        return Ok(Vec::new());
    }

    let mut questions = Vec::with_capacity(target as usize);
    for index in 0..target {
        let Some(author) = users.choose(rng) else {
            break;
        };
        let title: String = content.sentence().chars().take(TITLE_MAX_CHARS).collect();
        let question = Question::new(title, content.text(CONTENT_MAX_CHARS), author.uuid);
        repo.create_question(&question)?;

        let tag_count = rng.random_range(TAGS_PER_QUESTION_MIN..=TAGS_PER_QUESTION_MAX);
        let chosen: Vec<TagId> = tags
            .choose_multiple(rng, tag_count)
            .map(|tag| tag.uuid)
            .collect();
        repo.set_question_tags(question.uuid, &chosen)?;
        questions.push(question);

        if index > 0 && index % PROGRESS_INTERVAL == 0 {
            progress.checkpoint(STAGE, index);
        }
    }

    Ok(questions)
}
