//! Game orchestration
//!
//! Target selection, the session state machine and the bookkeeping the
//! front ends render from.

pub mod config;
mod hard;
mod keyboard;
mod selector;
mod session;
mod stats;

pub use config::{DEFAULT_MAX_ATTEMPTS, Mode, SessionConfig};
pub use hard::{HintViolation, check_hints};
pub use keyboard::{KEY_ROWS, Keyboard};
pub use selector::pick;
pub use session::{InvalidGuess, Session, SessionError, Status, SubmitOutcome};
pub use stats::Statistics;
