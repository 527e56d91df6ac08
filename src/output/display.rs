//! Display functions for game results

use super::formatters::{create_progress_bar, render_guess};
use crate::core::{GuessResult, Word};
use crate::game::{Session, Statistics, SubmitOutcome};
use colored::Colorize;

/// Print the outcome of one submitted guess
pub fn print_outcome(session: &Session<'_>, outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Invalid(reason) => {
            println!("{} {reason}", "✗".red().bold());
        }
        SubmitOutcome::Evaluated {
            result,
            remaining_attempts,
        } => {
            print_last_row(session, result);
            println!(
                "{}",
                format!(
                    "{remaining_attempts} of {} attempt(s) left",
                    session.config().max_attempts
                )
                .bright_black()
            );
        }
        SubmitOutcome::Won { result, attempts } => {
            print_last_row(session, result);
            println!(
                "\n{}",
                format!(
                    "🎉 Solved in {attempts} {}!",
                    if *attempts == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            );
        }
        SubmitOutcome::Lost { result, target } => {
            print_last_row(session, result);
            println!(
                "\n{} {}",
                "❌ Out of attempts. The word was".red().bold(),
                target.text().to_uppercase().bright_yellow().bold()
            );
        }
    }
}

fn print_last_row(session: &Session<'_>, result: &GuessResult) {
    if let Some((word, _)) = session.history().last() {
        println!("  {}", render_guess(word, result));
    }
}

/// Print a single classification, as produced by the `check` command
pub fn print_check_result(guess: &Word, target: &Word, result: &GuessResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        guess.text().to_uppercase().bright_white().bold(),
        target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}", render_guess(guess, result));
    println!("  {}   {}", result.to_emoji(), result);
    println!(
        "\n  Exact: {}  Present: {}",
        result.count_exact().to_string().green(),
        result.count_present().to_string().yellow()
    );
}

/// Print accumulated statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!("   Played:       {}", stats.games_played);
    println!(
        "   Win rate:     {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Streak:       {}", stats.current_streak);
    println!("   Max streak:   {}", stats.max_streak);

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    if most > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (attempts, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
            let bar = create_progress_bar(count, most, 30);
            println!("   {attempts}: {} {count}", bar.green());
        }
    }
}
