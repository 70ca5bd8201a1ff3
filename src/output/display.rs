//! Display functions for game events

use super::formatters::{games_label, status_lines};
use crate::core::{Round, StageTable};
use crate::game::SessionSummary;
use colored::Colorize;
use std::io::{self, Write};

/// Print the stage drawing and round status
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn print_status(out: &mut impl Write, round: &Round, stages: &StageTable) -> io::Result<()> {
    for line in status_lines(round, stages) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Print the banner at the start of a round
///
/// `remaining` counts the round about to be played.
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn print_round_start(out: &mut impl Write, remaining: usize) -> io::Result<()> {
    writeln!(
        out,
        "New game started. {remaining} {} remaining",
        games_label(remaining)
    )
}

/// # Errors
///
/// Returns any I/O error from the writer.
pub fn print_round_won(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "You won!".green().bold())
}

/// # Errors
///
/// Returns any I/O error from the writer.
pub fn print_round_lost(out: &mut impl Write, word: &str) -> io::Result<()> {
    writeln!(out, "{}", "You failed!".red().bold())?;
    writeln!(out, "The word was {}", word.bright_yellow().bold())
}

/// Print the tally at the end of a session
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn print_summary(out: &mut impl Write, summary: &SessionSummary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "─".repeat(40).cyan())?;
    writeln!(
        out,
        "Rounds won: {}  Rounds lost: {}",
        summary.wins().to_string().green().bold(),
        summary.losses().to_string().red().bold()
    )?;
    for (i, outcome) in summary.outcomes().iter().enumerate() {
        let mark = if outcome.won() { "✓".green() } else { "✗".red() };
        writeln!(
            out,
            "  {}. {} {} ({} missed)",
            i + 1,
            mark,
            outcome.word(),
            outcome.incorrect_guesses()
        )?;
    }
    writeln!(out, "{}", "─".repeat(40).cyan())
}
