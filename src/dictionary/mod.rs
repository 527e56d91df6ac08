//! Dictionary of valid guesses
//!
//! Curates raw candidate words into the immutable set a session validates
//! guesses against and draws its target from.

use crate::core::{WORD_LENGTH, Word};
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Error raised when curation leaves nothing to play with
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("no valid {WORD_LENGTH}-letter words among {candidates} candidates")]
    Empty { candidates: usize },
}

/// Why a raw candidate was left out of the dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    WrongLength,
    Apostrophe,
    ProperNoun,
    NotLowercaseLetters,
}

/// Curated set of valid guess words
///
/// Members are unique, five ASCII lowercase letters, and kept sorted so that
/// seeded target selection is reproducible across runs.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from raw candidate words
    ///
    /// Candidates are filtered exactly as given; surrounding whitespace counts
    /// toward the length, so callers reading files split lines first (see
    /// [`crate::wordlists::loader::lines_to_words`]).
    ///
    /// A candidate is kept when it is exactly five characters, contains no
    /// apostrophe, and does not start with an uppercase letter (proper nouns
    /// are skipped by that heuristic). The uppercase check looks at the raw
    /// text; nothing is lowercased.
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no candidate survives.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::load(["crane", "Paris", "can't", "apple", "toolong"]).unwrap();
    /// assert_eq!(dict.size(), 2);
    /// assert!(dict.contains("crane"));
    /// assert!(!dict.contains("paris"));
    /// ```
    pub fn load<I, S>(raw_words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut candidates = 0;
        let mut index = FxHashSet::default();
        let mut words = Vec::new();

        for raw in raw_words {
            candidates += 1;
            let raw = raw.as_ref();

            match Self::screen(raw) {
                Ok(word) => {
                    if index.insert(word.text().to_string()) {
                        words.push(word);
                    }
                }
                Err(reason) => tracing::trace!(word = raw, ?reason, "skipping candidate"),
            }
        }

        if words.is_empty() {
            return Err(DictionaryError::Empty { candidates });
        }

        words.sort_unstable();
        tracing::info!(
            kept = words.len(),
            candidates,
            "loaded words into dictionary"
        );

        Ok(Self { words, index })
    }

    /// Apply the curation filters to one raw candidate
    ///
    /// # Errors
    /// Returns the first filter the candidate fails.
    pub fn screen(raw: &str) -> Result<Word, Rejection> {
        if raw.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
            return Err(Rejection::ProperNoun);
        }
        if raw.contains('\'') {
            return Err(Rejection::Apostrophe);
        }
        if raw.chars().count() != WORD_LENGTH {
            return Err(Rejection::WrongLength);
        }
        Word::new(raw).map_err(|_| Rejection::NotLowercaseLetters)
    }

    /// Membership test; case-sensitive against the lowercase members
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Number of words in the dictionary
    #[must_use]
    pub fn size(&self) -> usize {
        self.words.len()
    }

    /// All members, sorted
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_applies_every_filter() {
        let dict = Dictionary::load([
            "crane", "slate", "Boston", "Paris", "don't", "it's", "abc", "toolong", "cran3",
            "éclat", "aPple",
        ])
        .unwrap();

        assert_eq!(dict.size(), 2);
        assert!(dict.contains("crane"));
        assert!(dict.contains("slate"));
    }

    #[test]
    fn every_member_satisfies_curation_filters() {
        let raw = [
            "crane", "Crane", "CRANE", "o'neil", "abbey", "kebab", "xylem", "x", "", "llama",
        ];
        let dict = Dictionary::load(raw).unwrap();

        for word in dict.words() {
            let text = word.text();
            assert_eq!(text.len(), 5);
            assert!(!text.contains('\''));
            assert!(!text.starts_with(|c: char| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn proper_noun_check_runs_before_lowercasing() {
        // "Crane" is rejected outright rather than folded into "crane"
        let dict = Dictionary::load(["Crane", "slate"]).unwrap();
        assert!(!dict.contains("crane"));
        assert!(!dict.contains("Crane"));
        assert_eq!(dict.size(), 1);
    }

    #[test]
    fn contains_is_case_sensitive() {
        let dict = Dictionary::load(["crane"]).unwrap();
        assert!(dict.contains("crane"));
        assert!(!dict.contains("CRANE"));
    }

    #[test]
    fn duplicates_collapse() {
        let dict = Dictionary::load(["crane", "crane", "crane"]).unwrap();
        assert_eq!(dict.size(), 1);
    }

    #[test]
    fn surrounding_whitespace_is_not_stripped() {
        let err = Dictionary::load([" crane", "slate\t", "irate\n"]).unwrap_err();
        assert_eq!(err, DictionaryError::Empty { candidates: 3 });

        let dict = Dictionary::load([" crane", "slate"]).unwrap();
        assert_eq!(dict.size(), 1);
        assert!(!dict.contains("crane"));
    }

    #[test]
    fn members_are_sorted() {
        let dict = Dictionary::load(["slate", "crane", "irate"]).unwrap();
        let texts: Vec<&str> = dict.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "irate", "slate"]);
    }

    #[test]
    fn empty_after_filtering_is_an_error() {
        let err = Dictionary::load(["Paris", "can't", "abc"]).unwrap_err();
        assert_eq!(err, DictionaryError::Empty { candidates: 3 });

        let err = Dictionary::load(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, DictionaryError::Empty { candidates: 0 });
    }

    #[test]
    fn screen_reports_reason() {
        assert_eq!(Dictionary::screen("Paris"), Err(Rejection::ProperNoun));
        assert_eq!(Dictionary::screen("ain't"), Err(Rejection::Apostrophe));
        assert_eq!(Dictionary::screen("abc"), Err(Rejection::WrongLength));
        assert_eq!(
            Dictionary::screen("ab1de"),
            Err(Rejection::NotLowercaseLetters)
        );
        assert!(Dictionary::screen("crane").is_ok());
    }
}
