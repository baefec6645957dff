//! Taxonomy generation stage.
//!
//! # Invariants
//! - Tag names append the generation index to a random word; the suffix
//!   alone keeps names unique within a run, so no existence check runs
//!   before creation. The word must stay in front of the suffix.

use crate::content::ContentProvider;
use crate::model::tag::Tag;
use crate::repo::tag_repo::TagRepository;
use crate::seed::progress::ProgressSink;
use crate::seed::SeedResult;

const STAGE: &str = "tags";
const PROGRESS_INTERVAL: u64 = 1000;

/// Creates `target` tags named `{word}{index}`.
///
/// Returns the created tags in generation order for downstream sampling.
pub fn generate_tags<R, C, P>(
    repo: &R,
    content: &mut C,
    target: u64,
    progress: &P,
) -> SeedResult<Vec<Tag>>
where
    R: TagRepository,
    C: ContentProvider,
    P: ProgressSink,
{
    progress.stage_started(STAGE, target);

    let mut tags = Vec::with_capacity(target as usize);
    for index in 0..target {
        let tag = Tag::new(format!("{}{index}", content.word()));
        repo.create_tag(&tag)?;
        tags.push(tag);

        if index > 0 && index % PROGRESS_INTERVAL == 0 {
            progress.checkpoint(STAGE, index);
        }
    }

    Ok(tags)
}
