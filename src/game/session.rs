//! Turn-based session state machine
//!
//! A session starts `Active` with a freshly picked target and zero attempts.
//! Each valid guess consumes one attempt; the session ends `Won` on an exact
//! guess or `Lost` once the attempts run out, and accepts nothing afterwards.

use super::config::{Mode, SessionConfig};
use super::hard::{HintViolation, check_hints};
use super::keyboard::Keyboard;
use super::selector::pick;
use crate::core::{GuessResult, WORD_LENGTH, Word, WordError, classify};
use crate::dictionary::{Dictionary, DictionaryError};
use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Won,
    Lost,
}

impl Status {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Active => "active",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// Reason a guess was rejected without consuming an attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGuess {
    #[error("guess must be {WORD_LENGTH} letters, got {0}")]
    WrongLength(usize),
    #[error("'{0}' is not a letter")]
    NotALetter(char),
    #[error("'{0}' is not in the word list")]
    NotInDictionary(String),
    #[error("hard mode: {0}")]
    HintNotUsed(HintViolation),
}

/// Result of submitting a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Rejected; the session is unchanged
    Invalid(InvalidGuess),
    /// Scored; the session is still active
    Evaluated {
        result: GuessResult,
        remaining_attempts: usize,
    },
    /// Scored and solved on attempt number `attempts`
    Won { result: GuessResult, attempts: usize },
    /// Scored, not solved, and no attempts remain
    Lost { result: GuessResult, target: Word },
}

impl SubmitOutcome {
    /// Feedback for the guess, unless it was rejected
    #[must_use]
    pub const fn result(&self) -> Option<&GuessResult> {
        match self {
            Self::Invalid(_) => None,
            Self::Evaluated { result, .. } | Self::Won { result, .. } | Self::Lost { result, .. } => {
                Some(result)
            }
        }
    }
}

/// Errors from constructing or misusing a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session is already {0}; no further guesses are accepted")]
    Closed(Status),
    #[error("a session needs at least one attempt")]
    ZeroAttempts,
    #[error("target '{0}' is not in the dictionary")]
    TargetNotInDictionary(Word),
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

/// One playthrough against a single hidden target
///
/// Borrows the dictionary for guess validation. Mutated only through
/// [`Session::submit_guess`].
#[derive(Debug, Clone)]
pub struct Session<'a> {
    dictionary: &'a Dictionary,
    target: Word,
    config: SessionConfig,
    history: Vec<(Word, GuessResult)>,
    status: Status,
}

impl<'a> Session<'a> {
    /// Start a session with a target drawn from `dictionary` using `rng`
    ///
    /// # Errors
    /// Returns `SessionError::ZeroAttempts` if the configuration allows no
    /// guesses, or `SessionError::Dictionary` if no target can be picked.
    pub fn new<R: Rng + ?Sized>(
        dictionary: &'a Dictionary,
        rng: &mut R,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        if config.max_attempts == 0 {
            return Err(SessionError::ZeroAttempts);
        }
        let target = pick(dictionary, rng)?;
        Ok(Self::start(dictionary, target, config))
    }

    /// Start a session with a known target
    ///
    /// # Errors
    /// Returns `SessionError::ZeroAttempts` for a zero attempt limit, or
    /// `SessionError::TargetNotInDictionary` if `target` is not a member.
    pub fn with_target(
        dictionary: &'a Dictionary,
        target: Word,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        if config.max_attempts == 0 {
            return Err(SessionError::ZeroAttempts);
        }
        if !dictionary.contains(target.text()) {
            return Err(SessionError::TargetNotInDictionary(target));
        }
        Ok(Self::start(dictionary, target, config))
    }

    fn start(dictionary: &'a Dictionary, target: Word, config: SessionConfig) -> Self {
        tracing::info!(
            max_attempts = config.max_attempts,
            mode = ?config.mode,
            "session started"
        );
        Self {
            dictionary,
            target,
            config,
            history: Vec::new(),
            status: Status::Active,
        }
    }

    /// Submit one guess
    ///
    /// Input is trimmed and lowercased before validation. Invalid guesses
    /// leave the session untouched.
    ///
    /// # Errors
    /// Returns `SessionError::Closed` if the session already ended.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::dictionary::Dictionary;
    /// use wordle_game::game::{Session, SessionConfig, Status, SubmitOutcome};
    /// use wordle_game::core::Word;
    ///
    /// let dict = Dictionary::load(["crane", "slate"]).unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let mut session = Session::with_target(&dict, target, SessionConfig::default()).unwrap();
    ///
    /// let outcome = session.submit_guess("SLATE").unwrap();
    /// assert!(matches!(outcome, SubmitOutcome::Won { attempts: 1, .. }));
    /// assert_eq!(session.status(), Status::Won);
    /// ```
    pub fn submit_guess(&mut self, raw: &str) -> Result<SubmitOutcome, SessionError> {
        if self.status.is_terminal() {
            return Err(SessionError::Closed(self.status));
        }

        let guess = match self.validate(raw) {
            Ok(guess) => guess,
            Err(reason) => {
                tracing::info!(guess = raw, %reason, "rejected guess");
                return Ok(SubmitOutcome::Invalid(reason));
            }
        };

        let result = classify(&guess, &self.target);
        self.history.push((guess, result));
        let attempts = self.attempts();
        tracing::debug!(attempt = attempts, feedback = %result, "evaluated guess");

        let outcome = if result.is_win() {
            self.status = Status::Won;
            tracing::info!(attempts, "session won");
            SubmitOutcome::Won { result, attempts }
        } else if attempts == self.config.max_attempts {
            self.status = Status::Lost;
            tracing::info!(target_word = %self.target, "session lost");
            SubmitOutcome::Lost {
                result,
                target: self.target.clone(),
            }
        } else {
            SubmitOutcome::Evaluated {
                result,
                remaining_attempts: self.remaining_attempts(),
            }
        };

        Ok(outcome)
    }

    fn validate(&self, raw: &str) -> Result<Word, InvalidGuess> {
        let normalized = Word::normalize(raw);

        let guess = Word::new(normalized).map_err(|err| match err {
            WordError::InvalidLength(len) => InvalidGuess::WrongLength(len),
            WordError::InvalidCharacter(c) => InvalidGuess::NotALetter(c),
        })?;

        if !self.dictionary.contains(guess.text()) {
            return Err(InvalidGuess::NotInDictionary(guess.text().to_string()));
        }

        if self.config.mode == Mode::Hard {
            check_hints(&guess, &self.history).map_err(InvalidGuess::HintNotUsed)?;
        }

        Ok(guess)
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Scored guesses in submission order
    #[must_use]
    pub fn history(&self) -> &[(Word, GuessResult)] {
        &self.history
    }

    /// Number of valid guesses submitted so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.config.max_attempts - self.attempts()
    }

    #[must_use]
    pub const fn config(&self) -> SessionConfig {
        self.config
    }

    /// The target, once the session has ended
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        self.status.is_terminal().then_some(&self.target)
    }

    /// Best feedback seen so far for each guessed letter
    #[must_use]
    pub fn keyboard(&self) -> Keyboard {
        Keyboard::from_history(&self.history)
    }

    /// Shareable summary: a header line then one emoji row per attempt
    ///
    /// The header reads `attempts/max`, or `X/max` for a lost game.
    #[must_use]
    pub fn transcript(&self) -> String {
        let score = match self.status {
            Status::Lost => "X".to_string(),
            _ => self.attempts().to_string(),
        };
        let mut out = format!("{score}/{}", self.config.max_attempts);
        if self.config.mode == Mode::Hard {
            out.push('*');
        }
        for (_, result) in &self.history {
            out.push('\n');
            out.push_str(&result.to_emoji());
        }
        out
    }
}
