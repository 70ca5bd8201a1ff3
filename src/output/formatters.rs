//! Formatting utilities for terminal output

use crate::core::{Round, StageTable};

/// Join the masked reveal with single spaces: `_ a _`
#[must_use]
pub fn spaced_reveal(reveal: &[char]) -> String {
    let mut result = String::with_capacity(reveal.len() * 2);
    for (i, c) in reveal.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(*c);
    }
    result
}

/// Join guessed letters in guess order: `a, t, c`
#[must_use]
pub fn letters_used(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The full status block shown before each guess
///
/// A blank separator, the current stage drawing, the masked word, the letters
/// used and the guesses remaining, one item per line.
#[must_use]
pub fn status_lines(round: &Round, stages: &StageTable) -> Vec<String> {
    let mut lines = vec![String::new()];
    lines.extend(stages.stage(round.incorrect_guesses()).iter().cloned());
    lines.push(spaced_reveal(&round.masked_reveal()));
    lines.push("Letters Used:".to_string());
    lines.push(letters_used(round.guessed_letters()));
    lines.push("Guesses Remaining:".to_string());
    lines.push(round.remaining_guesses().to_string());
    lines
}

/// Pluralise "game" the way the round banner does
#[must_use]
pub const fn games_label(count: usize) -> &'static str {
    if count == 1 { "game" } else { "games" }
}
