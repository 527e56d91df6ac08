//! Word list sources
//!
//! Reading raw candidate words from disk. Curation happens in
//! [`crate::dictionary`]; nothing here filters.

pub mod loader;

/// Word list shipped with most Unix systems
pub const DEFAULT_WORD_LIST: &str = "/usr/share/dict/words";
