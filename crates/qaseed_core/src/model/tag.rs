//! Tag record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a tag row.
pub type TagId = Uuid;

/// Taxonomy label attachable to questions.
///
/// Names are a random word with the generation index appended; the index
/// alone keeps them unique within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub uuid: TagId,
    pub name: String,
}

impl Tag {
    /// Creates a tag with a generated stable ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.into(),
        }
    }
}
