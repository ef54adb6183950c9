//! One-off scoring command
//!
//! Computes the feedback a guess would receive against a given secret,
//! without running a full game.

use crate::core::{Feedback, Word};

/// Result of scoring a guess against a secret
pub struct ScoreResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`, validating both shapes
///
/// # Errors
///
/// Returns an error if either word is not exactly five ASCII letters.
pub fn score_guess(secret: &str, guess: &str) -> Result<ScoreResult, String> {
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    let feedback = Feedback::score(&secret, &guess);

    Ok(ScoreResult {
        secret,
        guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterScore::{Absent, Exact, Present};

    #[test]
    fn score_valid_pair() {
        let result = score_guess("crane", "trace").unwrap();

        assert_eq!(result.secret.text(), "crane");
        assert_eq!(result.guess.text(), "trace");
        assert_eq!(
            result.feedback.scores(),
            &[Absent, Exact, Exact, Present, Exact]
        );
    }

    #[test]
    fn score_correct_guess_is_a_win() {
        let result = score_guess("slate", "slate").unwrap();
        assert!(result.feedback.is_win());
    }

    #[test]
    fn score_invalid_secret() {
        let result = score_guess("cranes", "trace");
        assert!(result.is_err());
    }

    #[test]
    fn score_invalid_guess() {
        let result = score_guess("crane", "tr4ce");
        assert!(result.is_err());
    }
}
