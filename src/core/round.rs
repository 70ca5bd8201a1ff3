//! Per-round guess bookkeeping
//!
//! A `Round` pairs a secret word with the letters guessed so far and the
//! number of misses. It validates raw guesses and decides win or loss.

use super::SecretWord;
use crate::error::GuessError;

/// Where a round stands after the latest guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// More guesses are needed
    InProgress,
    /// Every letter of the word has been revealed
    Won,
    /// The miss count reached the maximum
    Lost,
}

/// Result of applying one accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter occurs in the word
    Hit(char),
    /// The letter does not occur in the word
    Miss(char),
}

/// State of a single round of play
#[derive(Debug, Clone)]
pub struct Round {
    word: SecretWord,
    guessed: Vec<char>,
    incorrect: usize,
    max_incorrect: usize,
}

impl Round {
    #[must_use]
    pub const fn new(word: SecretWord, max_incorrect: usize) -> Self {
        Self {
            word,
            guessed: Vec::new(),
            incorrect: 0,
            max_incorrect,
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &SecretWord {
        &self.word
    }

    /// Letters guessed this round, in guess order
    #[inline]
    #[must_use]
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed
    }

    #[inline]
    #[must_use]
    pub const fn incorrect_guesses(&self) -> usize {
        self.incorrect
    }

    #[inline]
    #[must_use]
    pub const fn max_incorrect_guesses(&self) -> usize {
        self.max_incorrect
    }

    #[inline]
    #[must_use]
    pub const fn remaining_guesses(&self) -> usize {
        self.max_incorrect - self.incorrect
    }

    #[must_use]
    pub fn masked_reveal(&self) -> Vec<char> {
        self.word.masked_reveal(&self.guessed)
    }

    /// Win is checked before loss, matching the display order.
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.word.is_fully_guessed(&self.guessed) {
            RoundStatus::Won
        } else if self.incorrect >= self.max_incorrect {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    /// Check a raw input line without changing any state
    ///
    /// The line is lower-cased first. It must then be exactly one alphabetic
    /// character that has not been guessed yet this round.
    ///
    /// # Errors
    /// Returns the first `GuessError` the line violates.
    pub fn validate_guess(&self, raw: &str) -> Result<char, GuessError> {
        let lowered = raw.to_lowercase();
        let mut chars = lowered.chars();

        let letter = match (chars.next(), chars.next()) {
            (None, _) => return Err(GuessError::Empty),
            (Some(c), None) => c,
            (Some(_), Some(_)) => return Err(GuessError::NotSingleLetter(lowered)),
        };

        if !letter.is_alphabetic() {
            return Err(GuessError::NotAlphabetic(letter));
        }

        if self.guessed.contains(&letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }

        Ok(letter)
    }

    /// Validate and record a guess
    ///
    /// A rejected guess leaves the round untouched.
    ///
    /// # Errors
    /// Returns `GuessError::RoundOver` once the round is won or lost, or the
    /// validation error from [`Round::validate_guess`].
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GuessOutcome, Round, SecretWord};
    ///
    /// let mut round = Round::new(SecretWord::new("cat").unwrap(), 9);
    /// assert_eq!(round.apply_guess("A").unwrap(), GuessOutcome::Hit('a'));
    /// assert_eq!(round.apply_guess("x").unwrap(), GuessOutcome::Miss('x'));
    /// assert!(round.apply_guess("a").is_err());
    /// assert_eq!(round.incorrect_guesses(), 1);
    /// ```
    pub fn apply_guess(&mut self, raw: &str) -> Result<GuessOutcome, GuessError> {
        if self.status() != RoundStatus::InProgress {
            return Err(GuessError::RoundOver);
        }

        let letter = self.validate_guess(raw)?;
        self.guessed.push(letter);

        if self.word.has_letter(letter) {
            Ok(GuessOutcome::Hit(letter))
        } else {
            self.incorrect += 1;
            Ok(GuessOutcome::Miss(letter))
        }
    }
}
