//! Word sources for secret words
//!
//! The session only needs "give me a random candidate line". `WordSource`
//! captures that; `WordList` is the in-memory implementation backed by either
//! the embedded list or a file.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::SecretWord;
use rand::RngCore;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// Origin name of the embedded list
pub const BUILTIN: &str = "builtin";

/// A supply of candidate secret words
pub trait WordSource {
    /// Human-readable name of the source, for messages
    fn origin(&self) -> &str;

    /// Number of candidate lines, including unusable ones
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of distinct lines that make a valid secret word
    fn distinct_words(&self) -> usize;

    /// Candidate line at `index`, in source order
    fn line(&self, index: usize) -> Option<&str>;

    /// Pick one candidate line at random
    ///
    /// Returns `None` only when the source has no lines.
    fn draw(&self, rng: &mut dyn RngCore) -> Option<&str>;
}

/// Candidate lines held in memory
#[derive(Debug, Clone)]
pub struct WordList {
    origin: String,
    lines: Vec<String>,
    distinct: usize,
}

impl WordList {
    /// Build a list from candidate lines
    ///
    /// Lines are kept as given; invalid ones are rejected when drawn.
    #[must_use]
    pub fn new(origin: impl Into<String>, lines: Vec<String>) -> Self {
        let distinct = lines
            .iter()
            .filter_map(|line| SecretWord::new(line).ok())
            .collect::<FxHashSet<_>>()
            .len();

        Self {
            origin: origin.into(),
            lines,
            distinct,
        }
    }

    /// The list compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use hangman::wordlists::{WordList, WordSource, WORDS_COUNT};
    ///
    /// let list = WordList::builtin();
    /// assert_eq!(list.len(), WORDS_COUNT);
    /// ```
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(BUILTIN, WORDS.iter().map(|&s| s.to_string()).collect())
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl WordSource for WordList {
    fn origin(&self) -> &str {
        &self.origin
    }

    fn len(&self) -> usize {
        self.lines.len()
    }

    fn distinct_words(&self) -> usize {
        self.distinct
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    fn draw(&self, rng: &mut dyn RngCore) -> Option<&str> {
        self.lines.choose(rng).map(String::as_str)
    }
}
