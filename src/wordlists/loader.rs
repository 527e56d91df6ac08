//! Word list loading utilities

use std::fs;
use std::io;
use std::path::Path;

/// Read raw candidate words from a file, one per line
///
/// Blank lines are dropped; every other line is returned as written so the
/// dictionary can apply its case-sensitive filters.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::read_raw_words;
///
/// let raw = read_raw_words("/usr/share/dict/words").unwrap();
/// println!("Read {} candidates", raw.len());
/// ```
pub fn read_raw_words<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(lines_to_words(&content))
}

/// Split file content into raw candidate words
#[must_use]
pub fn lines_to_words(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_keep_raw_casing() {
        let words = lines_to_words("crane\nParis\r\n\n  don't  \n");
        assert_eq!(words, ["crane", "Paris", "don't"]);
    }

    #[test]
    fn lines_from_empty_content() {
        assert!(lines_to_words("").is_empty());
        assert!(lines_to_words("\n\n").is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_raw_words("/nonexistent/word/list").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("wordle_game_loader_{}.txt", std::process::id()));
        fs::write(&path, "crane\nslate\n").unwrap();

        let words = read_raw_words(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, ["crane", "slate"]);
    }
}
