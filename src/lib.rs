//! Hangman
//!
//! A terminal word-guessing game played over one or more rounds, with no word
//! repeated within a session.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Round, RoundStatus, SecretWord};
//!
//! let mut round = Round::new(SecretWord::new("cat").unwrap(), 9);
//! for guess in ["a", "t", "c"] {
//!     round.apply_guess(guess).unwrap();
//! }
//! assert_eq!(round.status(), RoundStatus::Won);
//! ```

// Core domain types
pub mod core;

// Session state machine
pub mod game;

// Word sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal I/O and formatting
pub mod output;

// Tunables
pub mod config;

// Error taxonomy
pub mod error;

// Diagnostics
pub mod logging;
