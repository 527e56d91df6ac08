//! Check command
//!
//! Classifies a single guess against a chosen target.

use crate::core::{GuessResult, Word, WordError, classify};

/// Outcome of checking one guess against one target
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub result: GuessResult,
}

/// Normalize both words and classify the guess
///
/// No dictionary is consulted; any five letters are accepted.
///
/// # Errors
///
/// Returns `WordError` if either word is not five letters.
pub fn check_guess(guess: &str, target: &str) -> Result<CheckResult, WordError> {
    let guess = Word::new(Word::normalize(guess))?;
    let target = Word::new(Word::normalize(target))?;
    let result = classify(&guess, &target);

    Ok(CheckResult {
        guess,
        target,
        result,
    })
}
