//! Wordle feedback calculation and representation
//!
//! A [`Feedback`] holds one [`Verdict`] per position of a scored guess.

use super::verdict::Verdict;
use super::word::{WORD_LEN, Word};
use rustc_hash::FxHashMap;

/// Feedback for one scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LEN]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Verdict::Correct; WORD_LEN]);

    /// Wrap raw verdicts
    #[inline]
    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LEN]) -> Self {
        Self(verdicts)
    }

    /// Score `guess` against `secret`
    ///
    /// Implements Wordle's feedback rules, including duplicate letters: a letter is credited
    /// at most as many times as it occurs in the secret, and exact matches are credited first.
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches (greens) and remove them from the available pool
    /// 2. Second pass: mark present-but-wrong-position (yellows) from the remaining pool
    ///
    /// # Examples
    /// ```
    /// use sinal::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    /// let feedback = Feedback::score(&guess, &secret);
    ///
    /// use sinal::core::Verdict::{Absent, Correct};
    /// assert_eq!(feedback.verdicts(), &[Absent, Absent, Correct, Absent, Correct]);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        let mut result = [Verdict::Absent; WORD_LEN];
        let mut available = secret.char_counts();

        // Allow: Index needed to access guess[i], secret[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.char_at(i) == secret.char_at(i) {
                result[i] = Verdict::Correct;
                consume(&mut available, guess.char_at(i));
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if result[i] != Verdict::Correct && consume(&mut available, guess.char_at(i)) {
                result[i] = Verdict::Present;
            }
        }

        Self(result)
    }

    /// Get the verdicts in position order
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LEN] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Correct).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Present).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use sinal::core::Feedback;
    ///
    /// let f1 = Feedback::parse("GY-GY").unwrap();
    /// let f2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut result = [Verdict::Absent; WORD_LEN];
        let mut chars = s.chars();

        for slot in &mut result {
            *slot = Verdict::from_symbol(chars.next()?)?;
        }

        if chars.next().is_some() {
            return None;
        }

        Some(Self(result))
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

/// Score raw letter slices
///
/// Lower-level form of [`Feedback::score`] for callers holding unvalidated buffers.
///
/// # Panics
/// Panics if either slice is not exactly [`WORD_LEN`] long.
#[must_use]
pub fn score_letters(guess: &[u8], secret: &[u8]) -> Feedback {
    assert_eq!(guess.len(), WORD_LEN, "guess must be {WORD_LEN} letters");
    assert_eq!(secret.len(), WORD_LEN, "secret must be {WORD_LEN} letters");

    let mut result = [Verdict::Absent; WORD_LEN];
    let mut available: FxHashMap<u8, u8> = FxHashMap::default();

    for (i, (&g, &s)) in guess.iter().zip(secret).enumerate() {
        if g == s {
            result[i] = Verdict::Correct;
        } else {
            *available.entry(s).or_insert(0) += 1;
        }
    }

    for (i, &g) in guess.iter().enumerate() {
        if result[i] != Verdict::Correct && consume(&mut available, g) {
            result[i] = Verdict::Present;
        }
    }

    Feedback(result)
}

/// Remove one occurrence of `letter` from the pool, reporting whether one was available
fn consume(available: &mut FxHashMap<u8, u8>, letter: u8) -> bool {
    match available.get_mut(&letter) {
        Some(count) if *count > 0 => {
            *count -= 1;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict::{Absent, Correct, Present};
    use proptest::prelude::*;

    fn score(guess: &str, secret: &str) -> [Verdict; WORD_LEN] {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        *Feedback::score(&guess, &secret).verdicts()
    }

    #[test]
    fn feedback_perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(Feedback::PERFECT.count_correct(), 5);
        assert_eq!(Feedback::PERFECT.count_present(), 0);
    }

    #[test]
    fn feedback_all_absent() {
        assert_eq!(score("abcde", "fghij"), [Absent; WORD_LEN]);
    }

    #[test]
    fn feedback_no_duplicate_letters() {
        // R is absent because SLATE has no R
        assert_eq!(
            score("crane", "slate"),
            [Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn feedback_duplicate_letters_consumed() {
        // SPEED vs ERASE: S and both E's are displaced, ERASE has exactly two E's
        assert_eq!(
            score("speed", "erase"),
            [Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn feedback_green_takes_priority_over_yellow() {
        // The second O is exact, so it consumes one O before the first is considered
        assert_eq!(
            score("robot", "floor"),
            [Present, Present, Absent, Correct, Absent]
        );
        // Only one E in the secret, already used by the exact match at the end
        assert_eq!(
            score("eerie", "tribe"),
            [Absent, Absent, Present, Present, Correct]
        );
    }

    #[test]
    fn feedback_extra_copies_are_absent() {
        // AAAAA vs SINAL: only position 3 is A
        assert_eq!(
            score("aaaaa", "sinal"),
            [Absent, Absent, Absent, Correct, Absent]
        );
        // Secret has one A; the first A in the guess takes it
        assert_eq!(
            score("aabbb", "xxaxx"),
            [Present, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn feedback_linha_vs_sinal() {
        assert_eq!(
            score("linha", "sinal"),
            [Present, Correct, Correct, Absent, Present]
        );
    }

    #[test]
    fn feedback_parse_valid() {
        let f1 = Feedback::parse("GYG--").unwrap();
        let f2 = Feedback::parse("🟩🟨🟩⬜⬜").unwrap();
        let f3 = Feedback::parse("gyg__").unwrap();

        assert_eq!(f1, f2);
        assert_eq!(f1, f3);
        assert_eq!(f1.verdicts(), &[Correct, Present, Correct, Absent, Absent]);
    }

    #[test]
    fn feedback_parse_invalid() {
        assert!(Feedback::parse("GYGGYX").is_none());
        assert!(Feedback::parse("GYG").is_none());
        assert!(Feedback::parse("GXGGY").is_none());
        assert!(Feedback::parse("").is_none());
        assert!("GXGGY".parse::<Feedback>().is_err());
    }

    #[test]
    fn feedback_to_emoji() {
        let feedback = Feedback::new([Correct, Present, Absent, Correct, Present]);
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
    }

    #[test]
    fn score_letters_matches_score() {
        for (guess, secret) in [("speed", "erase"), ("linha", "sinal"), ("robot", "floor")] {
            let expected = Feedback::score(&Word::new(guess).unwrap(), &Word::new(secret).unwrap());
            assert_eq!(score_letters(guess.as_bytes(), secret.as_bytes()), expected);
        }
    }

    #[test]
    #[should_panic(expected = "guess must be 5 letters")]
    fn score_letters_rejects_short_guess() {
        let _ = score_letters(b"sina", b"sinal");
    }

    #[test]
    #[should_panic(expected = "secret must be 5 letters")]
    fn score_letters_rejects_long_secret() {
        let _ = score_letters(b"sinal", b"sinais");
    }

    proptest! {
        #[test]
        fn scoring_a_word_against_itself_is_perfect(text in "[a-z]{5}") {
            let word = Word::new(text).unwrap();
            prop_assert!(Feedback::score(&word, &word).is_perfect());
        }

        #[test]
        fn credits_never_exceed_secret_letters(guess in "[a-e]{5}", secret in "[a-e]{5}") {
            let g = Word::new(guess).unwrap();
            let s = Word::new(secret).unwrap();
            let feedback = Feedback::score(&g, &s);
            let counts = s.char_counts();

            for (&letter, &available) in &counts {
                let credited = (0..WORD_LEN)
                    .filter(|&i| g.char_at(i) == letter && feedback.verdicts()[i] != Absent)
                    .count();
                prop_assert!(credited <= usize::from(available));
            }
        }
    }
}
