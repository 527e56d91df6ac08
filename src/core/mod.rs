//! Core domain types for Wordle
//!
//! Words and the feedback engine. Everything here is pure: no I/O, no
//! randomness, no hidden state.

mod feedback;
mod word;

pub use feedback::{GuessResult, LetterFeedback, classify};
pub use word::{WORD_LENGTH, Word, WordError};
