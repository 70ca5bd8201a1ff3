//! Error types for the game.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A candidate line that cannot be used as a secret word
///
/// Recovered by drawing another candidate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidWordError {
    /// Nothing left after stripping the line terminator
    #[error("candidate word is empty")]
    Empty,

    /// Contains whitespace, digits or punctuation
    #[error("candidate word {0:?} contains non-alphabetic characters")]
    NonAlphabetic(String),
}

/// Failures of the word source
///
/// These are the only errors allowed to end the program.
#[derive(Debug, Error)]
pub enum WordSourceError {
    /// The word list file is missing or unreadable
    #[error("cannot read word list {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The word list holds no usable line
    #[error("word list {origin} contains no words")]
    Empty { origin: String },

    /// Every word in the source has already been played this session
    #[error("ran out of unused words ({used} used of {available} available)")]
    Exhausted { used: usize, available: usize },
}

/// A rejected guess line; the player is asked again
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GuessError {
    #[error("Please enter a letter")]
    Empty,

    #[error("Please enter a single letter, not {0:?}")]
    NotSingleLetter(String),

    #[error("'{0}' is not a letter")]
    NotAlphabetic(char),

    #[error("You've already guessed that letter")]
    AlreadyGuessed(char),

    #[error("The round is already over")]
    RoundOver,
}

/// A rejected round-count answer; the player is asked again
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MenuError {
    #[error("Not a number")]
    NotANumber(String),

    #[error("Invalid number")]
    OutOfRange { value: usize, max: usize },
}

/// Errors that stop a running session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid number of rounds")]
    Rounds(#[from] MenuError),

    #[error("word source failed")]
    Source(#[from] WordSourceError),

    #[error("terminal I/O failed")]
    Io(#[from] io::Error),
}
