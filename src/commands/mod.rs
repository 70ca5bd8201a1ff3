//! Command implementations

pub mod play;

pub use play::{PlayOptions, ask_rounds, ask_to_play, run_play};
