//! Terminal output formatting
//!
//! Colored tiles and summaries for the line-based front end.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, print_outcome, print_statistics};
