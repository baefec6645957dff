//! Word-pool content provider.
//!
//! # Invariants
//! - Output is fully determined by the injected RNG state.
//! - `text` never exceeds the requested character bound.

use crate::content::ContentProvider;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit",
    "voluptate", "velit", "esse", "cillum", "eu", "fugiat", "nulla", "pariatur", "excepteur",
    "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia",
    "deserunt", "mollit", "anim", "id", "est", "laborum",
];

const SENTENCE_MIN_WORDS: usize = 4;
const SENTENCE_MAX_WORDS: usize = 9;

/// Lorem-style provider over a fixed word pool and an injected RNG.
pub struct LoremProvider<R: Rng> {
    rng: R,
}

impl<R: Rng> LoremProvider<R> {
    /// Creates a provider driven by the given RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl LoremProvider<ChaCha8Rng> {
    /// Creates a provider with a reproducible stream for the given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> ContentProvider for LoremProvider<R> {
    fn word(&mut self) -> String {
        WORDS
            .choose(&mut self.rng)
            .copied()
            .expect("word pool is non-empty")
            .to_string()
    }

    fn sentence(&mut self) -> String {
        let word_count = self.rng.random_range(SENTENCE_MIN_WORDS..=SENTENCE_MAX_WORDS);
        let mut sentence = String::new();
        for index in 0..word_count {
            let word = WORDS
                .choose(&mut self.rng)
                .copied()
                .expect("word pool is non-empty");
            if index == 0 {
                sentence.extend(word.chars().next().map(|c| c.to_ascii_uppercase()));
                sentence.push_str(&word[1..]);
            } else {
                sentence.push(' ');
                sentence.push_str(word);
            }
        }
        sentence.push('.');
        sentence
    }

    fn text(&mut self, max_chars: usize) -> String {
        if max_chars == 0 {
            return String::new();
        }

        let mut out = String::new();
        loop {
            let sentence = self.sentence();
            let sentence_len = sentence.chars().count();
            if out.is_empty() {
                if sentence_len > max_chars {
                    return sentence.chars().take(max_chars).collect();
                }
                out.push_str(&sentence);
            } else {
                if out.chars().count() + 1 + sentence_len > max_chars {
                    return out;
                }
                out.push(' ');
                out.push_str(&sentence);
            }
        }
    }
}
