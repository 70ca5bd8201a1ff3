//! Game configuration
//!
//! All tunables live in one immutable value handed to the session at startup.

use crate::core::StageTable;
use crate::error::MenuError;

/// Default upper bound on rounds per session
pub const DEFAULT_MAX_ROUNDS: usize = 3;

/// Default number of draws per source word before giving up on a fresh word
pub const DEFAULT_REDRAW_FACTOR: usize = 3;

/// Answers to "play a game?" that mean no
pub const DEFAULT_NEGATIVE_ANSWERS: &[&str] = &["n", "no", "nope"];

/// Session configuration
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Largest round count a player may request
    pub max_rounds: usize,
    /// Lowercase answers treated as declining to play
    pub negative_answers: Vec<String>,
    /// Draw attempts allowed per round, as a multiple of the source length
    pub redraw_factor: usize,
    /// Failure-stage drawings; also fixes the allowed misses
    pub stages: StageTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            negative_answers: DEFAULT_NEGATIVE_ANSWERS
                .iter()
                .map(|&s| s.to_string())
                .collect(),
            redraw_factor: DEFAULT_REDRAW_FACTOR,
            stages: StageTable::default(),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Incorrect guesses that end a round, derived from the stage table
    #[inline]
    #[must_use]
    pub fn max_incorrect_guesses(&self) -> usize {
        self.stages.max_incorrect_guesses()
    }

    /// Whether `answer` declines the offer to play (case-insensitive)
    #[must_use]
    pub fn is_negative(&self, answer: &str) -> bool {
        let answer = answer.trim().to_lowercase();
        self.negative_answers.iter().any(|n| *n == answer)
    }

    /// Check a round count lies in `1..=max_rounds`
    ///
    /// # Errors
    /// Returns `MenuError::OutOfRange` otherwise.
    pub const fn validate_rounds(&self, rounds: usize) -> Result<usize, MenuError> {
        if rounds >= 1 && rounds <= self.max_rounds {
            Ok(rounds)
        } else {
            Err(MenuError::OutOfRange {
                value: rounds,
                max: self.max_rounds,
            })
        }
    }

    /// Parse and validate a typed round count
    ///
    /// # Errors
    /// Returns `MenuError::NotANumber` for non-numeric input and
    /// `MenuError::OutOfRange` for numbers outside `1..=max_rounds`.
    ///
    /// # Examples
    /// ```
    /// use hangman::config::GameConfig;
    ///
    /// let config = GameConfig::default();
    /// assert_eq!(config.parse_rounds(" 2 "), Ok(2));
    /// assert!(config.parse_rounds("4").is_err());
    /// assert!(config.parse_rounds("two").is_err());
    /// ```
    pub fn parse_rounds(&self, raw: &str) -> Result<usize, MenuError> {
        let trimmed = raw.trim();
        // Negative numbers parse as i64 so they report as out of range, not as text
        let value: i64 = trimmed
            .parse()
            .map_err(|_| MenuError::NotANumber(trimmed.to_string()))?;
        let value = usize::try_from(value).unwrap_or(0);
        self.validate_rounds(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.max_rounds, 3);
        assert_eq!(config.max_incorrect_guesses(), 9);
        assert_eq!(config.negative_answers, vec!["n", "no", "nope"]);
    }

    #[test]
    fn negative_answers_are_case_insensitive() {
        let config = GameConfig::default();
        assert!(config.is_negative("N"));
        assert!(config.is_negative("Nope"));
        assert!(config.is_negative(" no "));
        assert!(!config.is_negative("y"));
        assert!(!config.is_negative(""));
    }

    #[test]
    fn rounds_out_of_range() {
        let config = GameConfig::default();
        assert_eq!(
            config.parse_rounds("0"),
            Err(MenuError::OutOfRange { value: 0, max: 3 })
        );
        assert_eq!(
            config.parse_rounds("4"),
            Err(MenuError::OutOfRange { value: 4, max: 3 })
        );
        assert!(matches!(
            config.parse_rounds("-1"),
            Err(MenuError::OutOfRange { .. })
        ));
    }

    #[test]
    fn rounds_not_a_number() {
        let config = GameConfig::default();
        assert_eq!(
            config.parse_rounds("lots"),
            Err(MenuError::NotANumber("lots".to_string()))
        );
        assert!(matches!(config.parse_rounds(""), Err(MenuError::NotANumber(_))));
    }

    #[test]
    fn max_rounds_is_configurable() {
        let config = GameConfig::default().with_max_rounds(5);
        assert_eq!(config.parse_rounds("5"), Ok(5));
        assert!(config.parse_rounds("6").is_err());
    }
}
