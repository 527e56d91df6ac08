//! Wordle - CLI
//!
//! Play Wordle in the terminal, full-screen or line by line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordle_game::{
    commands::{check_guess, run_simple},
    dictionary::Dictionary,
    game::{DEFAULT_MAX_ATTEMPTS, Mode, SessionConfig},
    output::{print_check_result, print_statistics},
    wordlists::{DEFAULT_WORD_LIST, loader::read_raw_words},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list to build the dictionary from, one word per line
    #[arg(short, long, global = true, env = "WORDLE_DICT", default_value = DEFAULT_WORD_LIST)]
    dict: PathBuf,

    /// Seed for target selection (random when omitted)
    #[arg(short, long, global = true, env = "WORDLE_SEED")]
    seed: Option<u64>,

    /// Attempts allowed per game
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Hard mode: revealed hints must be used in later guesses
    #[arg(long, global = true)]
    hard: bool,

    /// File that receives the game log
    #[arg(long, global = true, default_value = "wordle.log")]
    log_file: PathBuf,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Show the feedback one guess would get against a target
    Check {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_file)?;

    let config = SessionConfig::new(
        cli.max_attempts,
        if cli.hard { Mode::Hard } else { Mode::Normal },
    );

    // Default to Play mode if no command given
    let command = cli.command.clone().unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli, config),
        Commands::Simple => run_simple_command(&cli, config),
        Commands::Check { guess, target } => run_check_command(&guess, &target),
    }
}

/// Send tracing output to the log file so it never lands on the game screen
fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordle_game=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}

fn load_dictionary(path: &Path) -> Result<Dictionary> {
    let raw = read_raw_words(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    let dictionary = Dictionary::load(&raw)
        .with_context(|| format!("cannot start a game from {}", path.display()))?;

    tracing::info!(path = %path.display(), words = dictionary.size(), "dictionary ready");
    Ok(dictionary)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn run_play_command(cli: &Cli, config: SessionConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let dictionary = load_dictionary(&cli.dict)?;
    let app = App::new(&dictionary, make_rng(cli.seed), config)?;
    let stats = run_tui(app)?;

    if stats.games_played > 0 {
        print_statistics(&stats);
    }
    Ok(())
}

fn run_simple_command(cli: &Cli, config: SessionConfig) -> Result<()> {
    let dictionary = load_dictionary(&cli.dict)?;
    let mut rng = make_rng(cli.seed);
    run_simple(&dictionary, &mut rng, config)?;
    Ok(())
}

fn run_check_command(guess: &str, target: &str) -> Result<()> {
    let check = check_guess(guess, target).context("invalid word")?;
    print_check_result(&check.guess, &check.target, &check.result);
    Ok(())
}
