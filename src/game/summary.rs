//! Round results and session tally

use crate::core::{Round, RoundStatus};

/// How one finished round went
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    word: String,
    won: bool,
    guessed: Vec<char>,
    incorrect: usize,
}

impl RoundOutcome {
    /// Snapshot a finished round
    #[must_use]
    pub fn from_round(round: &Round) -> Self {
        Self {
            word: round.word().text().to_string(),
            won: round.status() == RoundStatus::Won,
            guessed: round.guessed_letters().to_vec(),
            incorrect: round.incorrect_guesses(),
        }
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub const fn won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed
    }

    #[must_use]
    pub const fn incorrect_guesses(&self) -> usize {
        self.incorrect
    }
}

/// Results of every round played in a session, in play order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    outcomes: Vec<RoundOutcome>,
}

impl SessionSummary {
    #[must_use]
    pub const fn new(outcomes: Vec<RoundOutcome>) -> Self {
        Self { outcomes }
    }

    #[must_use]
    pub fn outcomes(&self) -> &[RoundOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn wins(&self) -> usize {
        self.outcomes.iter().filter(|o| o.won()).count()
    }

    #[must_use]
    pub fn losses(&self) -> usize {
        self.outcomes.len() - self.wins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretWord;

    fn finished(word: &str, guesses: &[&str]) -> RoundOutcome {
        let mut round = Round::new(SecretWord::new(word).unwrap(), 2);
        for guess in guesses {
            round.apply_guess(guess).unwrap();
        }
        RoundOutcome::from_round(&round)
    }

    #[test]
    fn outcome_of_won_round() {
        let outcome = finished("ox", &["o", "q", "x"]);
        assert!(outcome.won());
        assert_eq!(outcome.word(), "ox");
        assert_eq!(outcome.guessed_letters(), &['o', 'q', 'x']);
        assert_eq!(outcome.incorrect_guesses(), 1);
    }

    #[test]
    fn tally_counts_wins_and_losses() {
        let summary = SessionSummary::new(vec![
            finished("ox", &["o", "x"]),
            finished("ox", &["a", "b"]),
            finished("ox", &["x", "o"]),
        ]);
        assert_eq!(summary.wins(), 2);
        assert_eq!(summary.losses(), 1);
        assert_eq!(summary.outcomes().len(), 3);
    }

    #[test]
    fn empty_summary() {
        let summary = SessionSummary::default();
        assert_eq!(summary.wins(), 0);
        assert_eq!(summary.losses(), 0);
    }
}
