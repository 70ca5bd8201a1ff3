//! Terminal output formatting
//!
//! Console I/O plus display utilities for the round status and game events.

pub mod console;
pub mod display;
pub mod formatters;

pub use console::Console;
pub use display::{print_round_lost, print_round_start, print_round_won, print_status, print_summary};
