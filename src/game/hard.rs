//! Hard mode hint enforcement
//!
//! In hard mode every revealed hint has to be reused: letters marked `Exact`
//! stay in place, and letters marked `Exact` or `Present` appear at least as
//! often as they were revealed.

use crate::core::{GuessResult, LetterFeedback, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// A revealed hint the guess fails to reuse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HintViolation {
    #[error("letter {} must be '{}'", .position + 1, .letter.to_ascii_uppercase())]
    MissingExact { position: usize, letter: char },
    #[error("guess must contain '{}' at least {required} time(s)", .letter.to_ascii_uppercase())]
    MissingLetter { letter: char, required: usize },
}

/// Check `guess` against every hint revealed in `history`
///
/// # Errors
/// Returns the first hint the guess does not honour.
pub fn check_hints(guess: &Word, history: &[(Word, GuessResult)]) -> Result<(), HintViolation> {
    let guess_counts = guess.char_counts();

    for (previous, result) in history {
        let mut revealed: FxHashMap<u8, usize> = FxHashMap::default();

        for position in 0..WORD_LENGTH {
            let letter = previous.char_at(position);
            match result.letters()[position] {
                LetterFeedback::Exact => {
                    if guess.char_at(position) != letter {
                        return Err(HintViolation::MissingExact {
                            position,
                            letter: char::from(letter),
                        });
                    }
                    *revealed.entry(letter).or_insert(0) += 1;
                }
                LetterFeedback::Present => *revealed.entry(letter).or_insert(0) += 1,
                LetterFeedback::Absent => {}
            }
        }

        // Sorted so the reported violation does not depend on hash order
        let mut revealed: Vec<(u8, usize)> = revealed.into_iter().collect();
        revealed.sort_unstable();

        for (letter, required) in revealed {
            let have = usize::from(guess_counts.get(&letter).copied().unwrap_or(0));
            if have < required {
                return Err(HintViolation::MissingLetter {
                    letter: char::from(letter),
                    required,
                });
            }
        }
    }

    Ok(())
}
