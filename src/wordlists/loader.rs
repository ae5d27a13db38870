//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use crate::error::ConfigurationError;
use std::fs;
use std::path::Path;

/// Parse newline-delimited word list text
///
/// Each line is trimmed and lowercased; lines that are not valid five-letter words are
/// silently dropped.
///
/// # Examples
/// ```
/// use sinal::wordlists::loader::parse_words;
///
/// let words = parse_words("SINAL\n  linha \nmesa\n\nfeliz!\n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "linha");
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    let mut dropped = 0usize;

    let words: Vec<Word> = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            let word = Word::new(trimmed).ok();
            if word.is_none() {
                dropped += 1;
            }
            word
        })
        .collect();

    if dropped > 0 {
        tracing::debug!(kept = words.len(), dropped, "Filtered word list");
    }

    words
}

/// Load words from a file
///
/// Returns the valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns [`ConfigurationError::Read`] if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use sinal::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, ConfigurationError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigurationError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content);
    tracing::info!(path = %path.display(), count = words.len(), "Loaded word list");

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use sinal::wordlists::loader::words_from_slice;
/// use sinal::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s.trim()).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["sinal", "linha", "carta"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "sinal");
        assert_eq!(words[1].text(), "linha");
        assert_eq!(words[2].text(), "carta");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["sinal", "palavra", "mar", "linha", "açude"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "sinal");
        assert_eq!(words[1].text(), "linha");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn parse_words_trims_and_normalizes() {
        let words = parse_words("  SINAL\r\nLinha\t\n\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["sinal", "linha"]);
    }

    #[test]
    fn parse_words_drops_wrong_lengths() {
        let words = parse_words("mesa\nsinais\nnoite\n");
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text(), "noite");
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("sinal-loader-{}.txt", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "SINAL\nlinha\nxx").unwrap();
        }

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "sinal");
    }

    #[test]
    fn load_from_missing_file_is_configuration_error() {
        let result = load_from_file("/definitely/not/here/answers.txt");
        assert!(matches!(result, Err(ConfigurationError::Read { .. })));
    }

    #[test]
    fn load_from_embedded_answers() {
        use crate::wordlists::ANSWERS;

        let words = words_from_slice(ANSWERS);
        assert_eq!(words.len(), ANSWERS.len());
    }
}
