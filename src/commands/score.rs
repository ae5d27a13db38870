//! Score a single guess against a chosen secret

use crate::core::{Feedback, Word};
use crate::output::print_score;
use anyhow::{Context, Result};
use std::io::Write;

/// Score `guess` against `secret` and print the verdicts
///
/// # Errors
///
/// Returns an error if either word is not a valid five-letter word, or if writing fails.
pub fn score_words(guess: &str, secret: &str, out: &mut impl Write) -> Result<Feedback> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess {guess:?}"))?;
    let secret = Word::new(secret).with_context(|| format!("invalid secret {secret:?}"))?;

    let feedback = Feedback::score(&guess, &secret);
    print_score(out, &guess, &secret, &feedback)?;

    Ok(feedback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_words_prints_emoji() {
        let mut out = Vec::new();
        let feedback = score_words("LINHA", "sinal", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("🟨🟩🟩⬜🟨"));
        assert_eq!(feedback.count_correct(), 2);
        assert_eq!(feedback.count_present(), 2);
    }

    #[test]
    fn score_words_rejects_bad_input() {
        let mut out = Vec::new();
        let err = score_words("mesa", "sinal", &mut out).unwrap_err();
        assert!(err.to_string().contains("invalid guess"));

        let err = score_words("linha", "s1nal", &mut out).unwrap_err();
        assert!(err.to_string().contains("invalid secret"));
    }
}
