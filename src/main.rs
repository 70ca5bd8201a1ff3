//! Hangman - CLI
//!
//! Guess the hidden word one letter at a time before the gallows is complete.

use anyhow::{Context, Result, ensure};
use clap::Parser;
use hangman::{
    commands::{PlayOptions, run_play},
    config::{DEFAULT_MAX_ROUNDS, GameConfig},
    logging,
    output::Console,
    wordlists::loader,
};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Terminal hangman: guess the word before the drawing is finished",
    version,
    author
)]
struct Cli {
    /// Wordlist: 'builtin' (default, embedded list) or path to a file with one word per line
    #[arg(short = 'w', long, default_value = "builtin")]
    wordlist: String,

    /// Number of rounds to play; skips the opening questions
    #[arg(short, long)]
    rounds: Option<usize>,

    /// Largest number of rounds a player may ask for
    #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS)]
    max_rounds: usize,

    /// Seed for reproducible word choice
    #[arg(long)]
    seed: Option<u64>,

    /// Show debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    ensure!(cli.max_rounds >= 1, "--max-rounds must be at least 1");

    logging::init(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let source = loader::load(&cli.wordlist)
        .with_context(|| format!("Failed to load word list '{}'", cli.wordlist))?;
    let config = GameConfig::default().with_max_rounds(cli.max_rounds);
    let options = PlayOptions {
        rounds: cli.rounds,
        seed: cli.seed,
    };

    let mut console = Console::stdio();
    run_play(&mut console, config, source, options).context("Game stopped")?;

    Ok(())
}
