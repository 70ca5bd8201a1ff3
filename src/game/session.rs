//! Session state machine
//!
//! A session plays a fixed number of rounds. Each call to
//! [`GameSession::step`] performs exactly one transition:
//!
//! ```text
//! RoundStart -> AwaitingGuess (loop) -> RoundWon | RoundLost -> RoundStart | SessionEnd
//! ```

use super::{RoundOutcome, SessionSummary};
use crate::config::GameConfig;
use crate::core::{Round, RoundStatus, SecretWord};
use crate::error::{MenuError, SessionError, WordSourceError};
use crate::output::{
    Console, print_round_lost, print_round_start, print_round_won, print_status,
};
use crate::wordlists::WordSource;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;
use std::io::{BufRead, Write};

/// Prompt shown when asking for a guess
pub const GUESS_PROMPT: &str = "Guess a letter: ";

/// Where the session currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// About to draw a word for the next round
    RoundStart,
    /// Showing status, then reading one guess if the round is undecided
    AwaitingGuess,
    /// Current round just ended in a win
    RoundWon,
    /// Current round just ended in a loss
    RoundLost,
    /// All rounds played
    SessionEnd,
}

/// A multi-round hangman session
///
/// Owns its configuration, word source and random generator. Words drawn in
/// one round are never drawn again in the same session.
pub struct GameSession<S> {
    config: GameConfig,
    source: S,
    rng: StdRng,
    rounds_remaining: usize,
    used_words: FxHashSet<String>,
    round: Option<Round>,
    state: SessionState,
    outcomes: Vec<RoundOutcome>,
}

impl<S: WordSource> GameSession<S> {
    /// Create a session for `rounds` rounds
    ///
    /// # Errors
    ///
    /// Returns `MenuError::OutOfRange` unless `1 <= rounds <= config.max_rounds`.
    pub fn new(rounds: usize, config: GameConfig, source: S) -> Result<Self, MenuError> {
        let rounds = config.validate_rounds(rounds)?;

        Ok(Self {
            config,
            source,
            rng: StdRng::from_rng(&mut rand::rng()),
            rounds_remaining: rounds,
            used_words: FxHashSet::default(),
            round: None,
            state: SessionState::RoundStart,
            outcomes: Vec::new(),
        })
    }

    /// Use a fixed seed so word draws are reproducible
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Rounds not yet started
    #[must_use]
    pub const fn rounds_remaining(&self) -> usize {
        self.rounds_remaining
    }

    /// Every word drawn so far this session
    #[must_use]
    pub const fn used_words(&self) -> &FxHashSet<String> {
        &self.used_words
    }

    /// The round in play, if any
    #[must_use]
    pub const fn current_round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Results of the rounds finished so far
    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary::new(self.outcomes.clone())
    }

    /// Perform one state transition and return the new state
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Source` if no fresh word can be drawn and
    /// `SessionError::Io` if the console fails or input is closed mid-round.
    pub fn step<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<SessionState, SessionError> {
        let next = match self.state {
            SessionState::RoundStart => self.start_round(console)?,
            SessionState::AwaitingGuess => self.await_guess(console)?,
            SessionState::RoundWon | SessionState::RoundLost => self.finish_round(console)?,
            SessionState::SessionEnd => SessionState::SessionEnd,
        };

        tracing::trace!(from = ?self.state, to = ?next, "session transition");
        self.state = next;
        Ok(next)
    }

    /// Step until the session ends
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`GameSession::step`].
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<SessionSummary, SessionError> {
        while self.state != SessionState::SessionEnd {
            self.step(console)?;
        }
        Ok(self.summary())
    }

    fn start_round<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<SessionState, SessionError> {
        print_round_start(console.out(), self.rounds_remaining)?;
        self.rounds_remaining -= 1;

        let word = self.draw_word()?;
        tracing::debug!(
            rounds_remaining = self.rounds_remaining,
            letters = word.len(),
            "round started"
        );
        self.round = Some(Round::new(word, self.config.max_incorrect_guesses()));
        Ok(SessionState::AwaitingGuess)
    }

    fn await_guess<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<SessionState, SessionError> {
        let Some(round) = self.round.as_mut() else {
            return Ok(SessionState::RoundStart);
        };

        print_status(console.out(), round, &self.config.stages)?;

        match round.status() {
            RoundStatus::Won => return Ok(SessionState::RoundWon),
            RoundStatus::Lost => return Ok(SessionState::RoundLost),
            RoundStatus::InProgress => {}
        }

        loop {
            let line = console.prompt(GUESS_PROMPT)?;
            match round.apply_guess(&line) {
                Ok(outcome) => {
                    tracing::debug!(
                        ?outcome,
                        incorrect = round.incorrect_guesses(),
                        "guess applied"
                    );
                    return Ok(SessionState::AwaitingGuess);
                }
                Err(err) => {
                    tracing::debug!(input = %line, %err, "guess rejected");
                    console.say(&err)?;
                }
            }
        }
    }

    fn finish_round<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<SessionState, SessionError> {
        if let Some(round) = self.round.take() {
            match self.state {
                SessionState::RoundWon => print_round_won(console.out())?,
                _ => print_round_lost(console.out(), round.word().text())?,
            }
            self.outcomes.push(RoundOutcome::from_round(&round));
        }

        if self.rounds_remaining > 0 {
            Ok(SessionState::RoundStart)
        } else {
            Ok(SessionState::SessionEnd)
        }
    }

    /// Draw a valid word not yet used this session
    ///
    /// Invalid candidates and repeats are redrawn up to
    /// `redraw_factor * source.len()` times. After that the word is picked
    /// uniformly from the unused valid lines, so a fresh word is always found
    /// while one exists.
    fn draw_word(&mut self) -> Result<SecretWord, WordSourceError> {
        let available = self.source.distinct_words();
        if self.used_words.len() >= available {
            return Err(WordSourceError::Exhausted {
                used: self.used_words.len(),
                available,
            });
        }

        let attempts = self
            .config
            .redraw_factor
            .saturating_mul(self.source.len())
            .max(1);

        for attempt in 1..=attempts {
            let Some(candidate) = self.source.draw(&mut self.rng) else {
                break;
            };

            match SecretWord::new(candidate) {
                Ok(word) if self.used_words.contains(word.text()) => {
                    tracing::trace!(attempt, "word already used, redrawing");
                }
                Ok(word) => {
                    self.used_words.insert(word.text().to_string());
                    return Ok(word);
                }
                Err(err) => {
                    tracing::debug!(origin = self.source.origin(), %err, "skipping candidate");
                }
            }
        }

        tracing::debug!(attempts, "random draws exhausted, picking from unused words");
        let mut unused: Vec<SecretWord> = Vec::new();
        for index in 0..self.source.len() {
            let Some(word) = self.source.line(index).and_then(|l| SecretWord::new(l).ok()) else {
                continue;
            };
            if !self.used_words.contains(word.text()) && !unused.contains(&word) {
                unused.push(word);
            }
        }

        let word = unused
            .choose(&mut self.rng)
            .cloned()
            .ok_or(WordSourceError::Exhausted {
                used: self.used_words.len(),
                available,
            })?;
        self.used_words.insert(word.text().to_string());
        Ok(word)
    }
}
