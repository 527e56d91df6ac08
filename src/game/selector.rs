//! Target word selection

use crate::core::Word;
use crate::dictionary::{Dictionary, DictionaryError};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Pick a target uniformly at random from the dictionary
///
/// The random source is supplied by the caller; pass a seeded
/// `rand::rngs::StdRng` for reproducible games.
///
/// # Errors
/// Returns `DictionaryError::Empty` if the dictionary holds no words, which a
/// successfully loaded dictionary never does.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use wordle_game::dictionary::Dictionary;
/// use wordle_game::game::pick;
///
/// let dict = Dictionary::load(["crane", "slate", "irate"]).unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
/// let target = pick(&dict, &mut rng).unwrap();
/// assert!(dict.contains(target.text()));
/// ```
pub fn pick<R: Rng + ?Sized>(dictionary: &Dictionary, rng: &mut R) -> Result<Word, DictionaryError> {
    let word = dictionary
        .words()
        .choose(rng)
        .cloned()
        .ok_or(DictionaryError::Empty { candidates: 0 })?;

    tracing::debug!(target_word = %word, "picked target");
    Ok(word)
}
