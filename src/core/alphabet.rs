//! The letter inventory of the game
//!
//! Letters are stored as canonical lowercase ASCII bytes. Display code uppercases them.

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// All valid letters, in order
pub const ALPHABET: &[u8; ALPHABET_LEN] = b"abcdefghijklmnopqrstuvwxyz";

/// Normalize an input symbol to a canonical letter
///
/// Returns `None` for anything outside `A-Z`/`a-z`.
///
/// # Examples
/// ```
/// use sinal::core::alphabet::normalize;
///
/// assert_eq!(normalize('Q'), Some(b'q'));
/// assert_eq!(normalize('q'), Some(b'q'));
/// assert_eq!(normalize('ç'), None);
/// assert_eq!(normalize('3'), None);
/// ```
#[must_use]
pub fn normalize(ch: char) -> Option<u8> {
    if ch.is_ascii_alphabetic() {
        Some(ch.to_ascii_lowercase() as u8)
    } else {
        None
    }
}

/// Position of a canonical letter in [`ALPHABET`]
#[inline]
#[must_use]
pub const fn index_of(letter: u8) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter - b'a') as usize)
    } else {
        None
    }
}

/// Uppercase display form of a canonical letter
#[inline]
#[must_use]
pub const fn display(letter: u8) -> char {
    letter.to_ascii_uppercase() as char
}
