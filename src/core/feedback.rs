//! Guess feedback calculation
//!
//! Each guessed letter is classified as:
//! - `Exact` - correct letter in the correct position
//! - `Present` - letter occurs elsewhere in the target, with an unclaimed occurrence left
//! - `Absent` - no unclaimed occurrence of the letter remains in the target

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterFeedback {
    Absent,
    Present,
    Exact,
}

impl LetterFeedback {
    /// Emoji tile for sharing transcripts
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-letter code: `G`reen, `Y`ellow or `-`
    #[must_use]
    pub const fn to_code(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback for one guess: one classification per letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessResult {
    letters: [LetterFeedback; WORD_LENGTH],
}

impl GuessResult {
    /// Feedback where every position is `Exact`
    pub const PERFECT: Self = Self {
        letters: [LetterFeedback::Exact; WORD_LENGTH],
    };

    #[must_use]
    pub const fn new(letters: [LetterFeedback; WORD_LENGTH]) -> Self {
        Self { letters }
    }

    /// Per-position feedback, in guess order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.letters
    }

    /// True iff every position is `Exact`
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.letters.iter().all(|&f| f == LetterFeedback::Exact)
    }

    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.count(LetterFeedback::Exact)
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterFeedback::Present)
    }

    fn count(&self, kind: LetterFeedback) -> usize {
        self.letters.iter().filter(|&&f| f == kind).count()
    }

    /// Render as a row of emoji tiles, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.letters.iter().map(|f| f.to_emoji()).collect()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{}", letter.to_code())?;
        }
        Ok(())
    }
}

/// Classify `guess` against `target`
///
/// Duplicate letters are handled by consuming from a per-letter pool of the
/// target's letters, so a letter is never reported `Exact` or `Present` more
/// often than it occurs in the target.
///
/// # Algorithm
/// 1. First pass: mark exact matches and remove them from the pool
/// 2. Second pass: left to right, mark `Present` while the pool still holds
///    the letter, otherwise `Absent`
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterFeedback::*, Word, classify};
///
/// let guess = Word::new("boots").unwrap();
/// let target = Word::new("robot").unwrap();
///
/// let result = classify(&guess, &target);
/// assert_eq!(result.letters(), &[Present, Exact, Present, Present, Absent]);
/// ```
#[must_use]
pub fn classify(guess: &Word, target: &Word) -> GuessResult {
    let mut letters = [LetterFeedback::Absent; WORD_LENGTH];
    let mut available = target.char_counts();

    // Allow: index needed to compare guess[i] with target[i] and set letters[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        let letter = guess.char_at(i);
        if letter == target.char_at(i) {
            letters[i] = LetterFeedback::Exact;
            if let Some(count) = available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if letters[i] == LetterFeedback::Exact {
            continue;
        }
        if let Some(count) = available.get_mut(&guess.char_at(i))
            && *count > 0
        {
            letters[i] = LetterFeedback::Present;
            *count -= 1;
        }
    }

    GuessResult { letters }
}

#[cfg(test)]
mod tests {
    use super::LetterFeedback::{Absent, Exact, Present};
    use super::*;

    fn run(guess: &str, target: &str) -> GuessResult {
        classify(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn all_absent() {
        let result = run("abcde", "fghij");
        assert_eq!(result.letters(), &[Absent; 5]);
        assert!(!result.is_win());
    }

    #[test]
    fn identical_words_win() {
        for word in ["crane", "slate", "zzzzz", "error"] {
            let result = run(word, word);
            assert_eq!(result, GuessResult::PERFECT);
            assert!(result.is_win());
        }
    }

    #[test]
    fn boots_against_robot() {
        let result = run("boots", "robot");
        assert_eq!(result.letters(), &[Present, Exact, Present, Present, Absent]);
    }

    #[test]
    fn rotor_against_error() {
        // ERROR holds R three times and O once
        let result = run("rotor", "error");
        assert_eq!(result.letters(), &[Present, Absent, Absent, Exact, Exact]);
    }

    #[test]
    fn exact_match_claims_letter_before_earlier_duplicate() {
        // Single E in target sits at position 4; the leading E must not steal it
        let result = run("eerie", "crane");
        assert_eq!(result.letters(), &[Absent, Absent, Present, Absent, Exact]);
    }

    #[test]
    fn repeated_guess_letter_reported_once_for_single_target_letter() {
        // BEAST holds a single S; only the first of three is claimed
        let result = run("asses", "beast");
        assert_eq!(result.letters(), &[Present, Present, Absent, Present, Absent]);
    }

    #[test]
    fn repeated_guess_letter_matches_repeated_target_letter() {
        let result = run("llama", "hello");
        assert_eq!(result.letters(), &[Present, Present, Absent, Absent, Absent]);
    }

    #[test]
    fn speed_against_erase() {
        let result = run("speed", "erase");
        assert_eq!(result.letters(), &[Present, Absent, Present, Present, Absent]);
        assert_eq!(result.count_exact(), 0);
        assert_eq!(result.count_present(), 3);
    }

    #[test]
    fn never_overcounts_any_letter() {
        let words = [
            "robot", "boots", "error", "rotor", "speed", "erase", "llama", "hello", "aaaaa",
            "abbey", "kebab", "geese", "eerie",
        ];
        for guess in words {
            for target in words {
                let g = Word::new(guess).unwrap();
                let t = Word::new(target).unwrap();
                let result = classify(&g, &t);
                let target_counts = t.char_counts();

                for &letter in g.chars() {
                    let claimed = (0..WORD_LENGTH)
                        .filter(|&i| {
                            g.char_at(i) == letter && result.letters()[i] != Absent
                        })
                        .count();
                    let available = usize::from(*target_counts.get(&letter).unwrap_or(&0));
                    assert!(
                        claimed <= available,
                        "{guess} vs {target}: '{}' claimed {claimed} of {available}",
                        letter as char
                    );
                }
            }
        }
    }

    #[test]
    fn classification_is_repeatable() {
        let first = run("kebab", "abbey");
        let second = run("kebab", "abbey");
        assert_eq!(first, second);
    }

    #[test]
    fn renders_codes_and_emoji() {
        let result = run("boots", "robot");
        assert_eq!(result.to_string(), "YGYY-");
        assert_eq!(result.to_emoji(), "🟨🟩🟨🟨⬜");
    }

    #[test]
    fn feedback_ordering_ranks_exact_highest() {
        assert!(Exact > Present);
        assert!(Present > Absent);
    }
}
