//! Secret word representation
//!
//! A `SecretWord` holds the lowercase target of one round and answers the two
//! queries the game needs: the masked reveal and the win test.

use crate::error::InvalidWordError;
use std::fmt;

/// Character shown in place of a letter that has not been guessed yet
pub const PLACEHOLDER: char = '_';

/// The hidden word for a single round
///
/// Immutable once constructed. The text is always lowercase, non-empty and
/// alphabetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SecretWord {
    text: String,
}

impl SecretWord {
    /// Create a secret word from a raw candidate line
    ///
    /// Any trailing line terminator is stripped and the text is lower-cased.
    ///
    /// # Errors
    /// Returns `InvalidWordError` if:
    /// - Nothing is left after stripping the line terminator
    /// - The text contains anything other than alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("Banjo\n").unwrap();
    /// assert_eq!(word.text(), "banjo");
    ///
    /// assert!(SecretWord::new("\r\n").is_err());
    /// assert!(SecretWord::new("two words").is_err());
    /// ```
    pub fn new(candidate: impl AsRef<str>) -> Result<Self, InvalidWordError> {
        let text = candidate
            .as_ref()
            .trim_end_matches(['\n', '\r'])
            .to_lowercase();

        if text.is_empty() {
            return Err(InvalidWordError::Empty);
        }

        if !text.chars().all(char::is_alphabetic) {
            return Err(InvalidWordError::NonAlphabetic(text));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the word has no letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.text.contains(letter)
    }

    /// The word with every letter not in `guessed` replaced by [`PLACEHOLDER`]
    ///
    /// The result always has exactly `self.len()` characters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("cat").unwrap();
    /// assert_eq!(word.masked_reveal(&['a']), vec!['_', 'a', '_']);
    /// ```
    #[must_use]
    pub fn masked_reveal(&self, guessed: &[char]) -> Vec<char> {
        self.text
            .chars()
            .map(|c| if guessed.contains(&c) { c } else { PLACEHOLDER })
            .collect()
    }

    /// True once every letter of the word has been guessed
    #[must_use]
    pub fn is_fully_guessed(&self, guessed: &[char]) -> bool {
        !self.masked_reveal(guessed).contains(&PLACEHOLDER)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
