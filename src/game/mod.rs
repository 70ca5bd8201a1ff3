//! Multi-round game session
//!
//! `GameSession` is an explicit state machine driving rounds of hangman
//! against a word source and a console.

mod session;
mod summary;

pub use session::{GameSession, SessionState};
pub use summary::{RoundOutcome, SessionSummary};
