//! Random text synthesis for seeded content.
//!
//! # Responsibility
//! - Define the provider contract consumed by the generation stages.
//! - Keep text synthesis swappable and deterministic under a fixed seed.

mod lorem;

pub use lorem::LoremProvider;

/// Source of random words, sentences and bounded paragraphs.
pub trait ContentProvider {
    /// Returns one random word from the provider's vocabulary.
    fn word(&mut self) -> String;
    /// Returns one random sentence.
    fn sentence(&mut self) -> String;
    /// Returns random text no longer than `max_chars` characters.
    fn text(&mut self, max_chars: usize) -> String;
}
