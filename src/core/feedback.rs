//! Per-letter feedback scoring
//!
//! Feedback compares a guess against the secret word: exact-position
//! matches, present-but-misplaced matches with frequency-limited
//! accounting, and absent letters.

use super::{WORD_LENGTH, Word};

/// Feedback code for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterScore {
    /// Correct letter in the correct position
    Exact,
    /// Letter occurs in the secret, but at another position
    Present,
    /// Letter not in the secret, or every occurrence already accounted for
    Absent,
}

impl LetterScore {
    /// Single-character display symbol
    ///
    /// `G` for exact, `Y` for present, `B` for absent.
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => 'B',
        }
    }
}

/// Feedback for a full guess, one code per position in guess order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback([LetterScore; WORD_LENGTH]);

impl Feedback {
    /// All exact matches (winning feedback)
    pub const WIN: Self = Self([LetterScore::Exact; WORD_LENGTH]);

    /// Score `guess` against `secret`
    ///
    /// Every position is visited exactly once, left to right, against a
    /// letter-frequency map built from the secret. An exact match is
    /// checked first and consumes one occurrence of its letter; otherwise
    /// the letter is marked present only while unconsumed occurrences
    /// remain. The map is shared mutable state threaded through the whole
    /// sweep, which caps present marks for repeated letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Word};
    /// use wordle_game::core::LetterScore::{Absent, Exact, Present};
    ///
    /// let secret = Word::new("alley").unwrap();
    /// let guess = Word::new("lolly").unwrap();
    ///
    /// let feedback = Feedback::score(&secret, &guess);
    /// assert_eq!(feedback.scores(), &[Present, Absent, Exact, Absent, Exact]);
    /// ```
    #[must_use]
    pub fn score(secret: &Word, guess: &Word) -> Self {
        let mut remaining = secret.char_counts();
        let mut codes = [LetterScore::Absent; WORD_LENGTH];

        // Allow: Index needed to access guess[i], secret[i], and set codes[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.char_at(i);

            if letter == secret.char_at(i) {
                codes[i] = LetterScore::Exact;

                // Reserve this occurrence so it cannot also satisfy a
                // later present match
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            } else if let Some(count) = remaining.get_mut(&letter)
                && *count > 0
            {
                codes[i] = LetterScore::Present;
                *count -= 1;
            }
        }

        Self(codes)
    }

    /// The per-position codes, in guess order
    #[inline]
    #[must_use]
    pub const fn scores(&self) -> &[LetterScore; WORD_LENGTH] {
        &self.0
    }

    /// Check whether every position is an exact match
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        *self == Self::WIN
    }
}
