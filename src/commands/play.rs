//! Interactive play command
//!
//! Session bootstrap: offer a game, ask how many rounds, then hand over to the
//! session state machine.

use crate::config::GameConfig;
use crate::error::SessionError;
use crate::game::{GameSession, SessionSummary};
use crate::output::{Console, print_summary};
use crate::wordlists::WordSource;
use std::io::{self, BufRead, Write};

pub const GREETING: &str = "Hello! Would you like to play a game of hangman?";
pub const PLAY_PROMPT: &str = "Y/N: ";
pub const ROUNDS_QUESTION: &str = "How many games do you want to play?";

/// Options from the command line that skip or seed parts of the flow
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayOptions {
    /// Play this many rounds without asking
    pub rounds: Option<usize>,
    /// Seed for reproducible word draws
    pub seed: Option<u64>,
}

/// Greet the player and ask whether to play
///
/// Any answer outside the configured negative answers means yes. Closed input
/// means no.
///
/// # Errors
///
/// Returns any I/O error from the console.
pub fn ask_to_play<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &GameConfig,
) -> io::Result<bool> {
    console.say(GREETING)?;
    match console.read_line(PLAY_PROMPT)? {
        Some(answer) => Ok(!config.is_negative(&answer)),
        None => Ok(false),
    }
}

/// Ask for a round count until a valid one is entered
///
/// # Errors
///
/// Returns any I/O error from the console, including `UnexpectedEof` if input
/// closes before a valid answer.
pub fn ask_rounds<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &GameConfig,
) -> io::Result<usize> {
    console.say(ROUNDS_QUESTION)?;
    let prompt = format!("A number 1-{} (inclusive): ", config.max_rounds);

    loop {
        let answer = console.prompt(&prompt)?;
        match config.parse_rounds(&answer) {
            Ok(rounds) => return Ok(rounds),
            Err(err) => {
                tracing::debug!(input = %answer, %err, "round count rejected");
                console.say(&err)?;
            }
        }
    }
}

/// Run the whole interactive flow
///
/// Returns `Ok(None)` if the player declined to play.
///
/// # Errors
///
/// Returns `SessionError::Rounds` if `options.rounds` is out of range, and any
/// error from the session itself.
pub fn run_play<S: WordSource, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: GameConfig,
    source: S,
    options: PlayOptions,
) -> Result<Option<SessionSummary>, SessionError> {
    let rounds = match options.rounds {
        Some(rounds) => rounds,
        None => {
            if !ask_to_play(console, &config)? {
                tracing::debug!("player declined");
                return Ok(None);
            }
            ask_rounds(console, &config)?
        }
    };

    tracing::info!(rounds, origin = source.origin(), "session starting");
    let mut session = GameSession::new(rounds, config, source)?;
    if let Some(seed) = options.seed {
        session = session.with_seed(seed);
    }

    let summary = session.run(console)?;
    print_summary(console.out(), &summary)?;
    Ok(Some(summary))
}
