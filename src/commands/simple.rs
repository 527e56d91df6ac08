//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI

use crate::dictionary::Dictionary;
use crate::game::{Mode, Session, SessionConfig, Statistics, Status};
use crate::output::{print_outcome, print_statistics};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if reading input fails or a session cannot be started.
pub fn run_simple<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    rng: &mut R,
    config: SessionConfig,
) -> Result<Statistics> {
    let stdin = io::stdin();
    play_lines(&mut stdin.lock(), dictionary, rng, config)
}

/// Drive games from any line source until it is exhausted or the player quits
///
/// # Errors
///
/// Returns an error if reading input fails or a session cannot be started.
pub fn play_lines<B: BufRead, R: Rng + ?Sized>(
    input: &mut B,
    dictionary: &Dictionary,
    rng: &mut R,
    config: SessionConfig,
) -> Result<Statistics> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the hidden 5-letter word in {} attempts{}.",
        config.max_attempts,
        if config.mode == Mode::Hard {
            " (hard mode: revealed hints must be reused)"
        } else {
            ""
        }
    );
    println!(
        "  {} right letter, right spot   {} right letter, wrong spot   {} not in the word",
        " G ".black().on_green(),
        " Y ".black().on_yellow(),
        " - ".white().on_bright_black()
    );
    println!("Commands: 'quit' to exit\n");

    let mut stats = Statistics::default();

    'games: loop {
        let mut session = Session::new(dictionary, &mut *rng, config)?;

        while session.status() == Status::Active {
            let Some(line) = read_line(input, &format!("Guess #{}", session.attempts() + 1))? else {
                break 'games;
            };
            if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
                break 'games;
            }

            let outcome = session.submit_guess(&line)?;
            print_outcome(&session, &outcome);
        }

        stats.record(&session);
        println!("\n{}\n", session.transcript());

        match read_line(input, "Play again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                println!("\n🔄 New game started!\n");
            }
            _ => break,
        }
    }

    print_statistics(&stats);
    println!("\n👋 Thanks for playing!\n");
    Ok(stats)
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<B: BufRead>(input: &mut B, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read input")?;

    if read == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn single_word() -> Dictionary {
        Dictionary::load(["crane"]).unwrap()
    }

    #[test]
    fn winning_game_then_stop() {
        let dict = single_word();
        let mut rng = StdRng::seed_from_u64(1);
        let mut input = Cursor::new("nope\ncrane\nno\n");

        let stats = play_lines(&mut input, &dict, &mut rng, SessionConfig::default()).unwrap();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution, vec![0, 1]);
    }

    #[test]
    fn losing_game_is_recorded() {
        let dict = Dictionary::load(["crane", "slate"]).unwrap();
        let config = SessionConfig::default().with_max_attempts(1);

        // Same seed, same draw: find the target, then guess the other word
        let target = crate::game::pick(&dict, &mut StdRng::seed_from_u64(2)).unwrap();
        let wrong = if target.text() == "crane" { "slate" } else { "crane" };
        let mut input = Cursor::new(format!("{wrong}\nno\n"));

        let mut rng = StdRng::seed_from_u64(2);
        let stats = play_lines(&mut input, &dict, &mut rng, config).unwrap();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 0);
        assert_eq!(stats.current_streak, 0);
    }

    #[test]
    fn quit_abandons_active_game() {
        let dict = single_word();
        let mut rng = StdRng::seed_from_u64(3);
        let mut input = Cursor::new("quit\n");

        let stats = play_lines(&mut input, &dict, &mut rng, SessionConfig::default()).unwrap();
        assert_eq!(stats.games_played, 0);
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let dict = single_word();
        let mut rng = StdRng::seed_from_u64(4);
        let mut input = Cursor::new("");

        let stats = play_lines(&mut input, &dict, &mut rng, SessionConfig::default()).unwrap();
        assert_eq!(stats, Statistics::default());
    }
}
