//! Core domain types for hangman
//!
//! This module contains the pure game rules with no I/O.
//! Everything here is deterministic and testable in isolation.

mod round;
mod secret;
mod stages;

pub use round::{GuessOutcome, Round, RoundStatus};
pub use secret::{PLACEHOLDER, SecretWord};
pub use stages::{HANGMAN_STAGES, StageTable};
