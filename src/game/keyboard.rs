//! Per-letter hint summary for on-screen keyboards

use crate::core::{GuessResult, LetterFeedback, Word};

/// QWERTY rows, top to bottom
pub const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best feedback seen so far for each letter a-z
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keyboard {
    states: [Option<LetterFeedback>; 26],
}

impl Keyboard {
    /// Fold a guess history; a letter keeps its strongest classification
    #[must_use]
    pub fn from_history(history: &[(Word, GuessResult)]) -> Self {
        let mut keyboard = Self::default();
        for (word, result) in history {
            for (&letter, &feedback) in word.chars().iter().zip(result.letters()) {
                let slot = &mut keyboard.states[usize::from(letter - b'a')];
                *slot = (*slot).max(Some(feedback));
            }
        }
        keyboard
    }

    /// `None` if the letter has not been guessed
    #[must_use]
    pub fn state(&self, letter: char) -> Option<LetterFeedback> {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            self.states[(letter as u8 - b'a') as usize]
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify;

    fn keyboard(target: &str, guesses: &[&str]) -> Keyboard {
        let target = Word::new(target).unwrap();
        let history: Vec<_> = guesses
            .iter()
            .map(|g| {
                let word = Word::new(*g).unwrap();
                let result = classify(&word, &target);
                (word, result)
            })
            .collect();
        Keyboard::from_history(&history)
    }

    #[test]
    fn unguessed_letters_are_unknown() {
        let kb = keyboard("robot", &[]);
        assert_eq!(kb.state('a'), None);
        assert_eq!(kb.state('1'), None);
    }

    #[test]
    fn strongest_feedback_wins() {
        // BOOTS marks the second O exact and the third present; ROBOT later fixes B
        let kb = keyboard("robot", &["boots", "robot"]);
        assert_eq!(kb.state('o'), Some(LetterFeedback::Exact));
        assert_eq!(kb.state('b'), Some(LetterFeedback::Exact));
        assert_eq!(kb.state('s'), Some(LetterFeedback::Absent));
        assert_eq!(kb.state('T'), Some(LetterFeedback::Exact));
    }

    #[test]
    fn present_beats_absent_for_repeated_letter() {
        // Second S in ASSES is absent but the first is present
        let kb = keyboard("beast", &["asses"]);
        assert_eq!(kb.state('s'), Some(LetterFeedback::Present));
    }

    #[test]
    fn rows_cover_the_alphabet() {
        let mut letters: Vec<char> = KEY_ROWS.iter().flat_map(|row| row.chars()).collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 26);
    }
}
