//! Wordle Game
//!
//! A terminal Wordle with a duplicate-aware feedback engine, strict and
//! normal validity modes, and seedable target selection.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::{SeedableRng, rngs::StdRng};
//! use wordle_game::dictionary::Dictionary;
//! use wordle_game::game::{Session, SessionConfig, SubmitOutcome};
//!
//! let dictionary = Dictionary::load(["crane", "slate", "robot"]).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut session = Session::new(&dictionary, &mut rng, SessionConfig::default()).unwrap();
//!
//! match session.submit_guess("crane").unwrap() {
//!     SubmitOutcome::Invalid(reason) => println!("try again: {reason}"),
//!     outcome => println!("{:?}", outcome.result()),
//! }
//! ```

// Core domain types
pub mod core;

// Curated word set
pub mod dictionary;

// Target selection and the session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
