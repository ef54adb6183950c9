//! A single game: secret word, attempt counter, outcome

use crate::core::{Feedback, Word, WordError};
use crate::game::{EmptyCandidateSet, choose_secret};
use rand::Rng;
use std::fmt;

/// Why a submitted guess was rejected
///
/// A rejected guess never consumes an attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Input is not five ASCII letters
    Shape(WordError),
    /// Well-formed, but not in the candidate set
    NotInList(String),
    /// The game has already ended
    Finished,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape(e) => write!(f, "{e}"),
            Self::NotInList(word) => write!(f, "'{word}' is not in the word list"),
            Self::Finished => write!(f, "the game is already over"),
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Shape(e) => Some(e),
            Self::NotInList(_) | Self::Finished => None,
        }
    }
}

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The secret was guessed within the attempt limit
    Win,
    /// The attempt limit was reached without a correct guess
    Loss,
}

/// One validated, scored guess
#[derive(Debug, Clone)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
    /// 1-based attempt number of this turn
    pub attempt: usize,
}

/// State for one game
///
/// Owns the secret word and the attempt counter; borrows the candidate
/// set, which is loaded once per process and shared read-only by
/// sequential sessions.
pub struct GameSession<'a> {
    candidates: &'a [Word],
    secret: Word,
    max_attempts: usize,
    attempts: usize,
    won: bool,
}

impl<'a> GameSession<'a> {
    /// Start a new game, drawing the secret from `candidates` via `rng`
    ///
    /// # Errors
    /// Returns `EmptyCandidateSet` if `candidates` is empty.
    pub fn new<R: Rng + ?Sized>(
        candidates: &'a [Word],
        rng: &mut R,
        max_attempts: usize,
    ) -> Result<Self, EmptyCandidateSet> {
        let secret = choose_secret(candidates, rng)?.clone();
        log::debug!(
            "secret word selected from {} candidates: {secret}",
            candidates.len()
        );

        Ok(Self {
            candidates,
            secret,
            max_attempts,
            attempts: 0,
            won: false,
        })
    }

    /// Submit one line of player input as a guess
    ///
    /// Input is trimmed, lowercase-normalized, shape-validated, and
    /// checked for candidate set membership. Only a valid guess consumes
    /// an attempt; a rejected guess leaves the session unchanged.
    ///
    /// # Errors
    /// - [`GuessError::Shape`] for input that is not five ASCII letters
    /// - [`GuessError::NotInList`] for a word outside the candidate set
    /// - [`GuessError::Finished`] once the game is over
    pub fn submit(&mut self, input: &str) -> Result<Turn, GuessError> {
        if self.outcome().is_some() {
            return Err(GuessError::Finished);
        }

        let guess = Word::new(input.trim()).map_err(GuessError::Shape)?;

        if !self.candidates.contains(&guess) {
            return Err(GuessError::NotInList(guess.text().to_string()));
        }

        self.attempts += 1;
        let feedback = Feedback::score(&self.secret, &guess);
        if feedback.is_win() {
            self.won = true;
        }

        Ok(Turn {
            guess,
            feedback,
            attempt: self.attempts,
        })
    }

    /// Final outcome, or `None` while the game is still in progress
    ///
    /// Computed from the attempt counter and the recorded win, so it is
    /// well-defined even before the first valid guess.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.won {
            Some(GameOutcome::Win)
        } else if self.attempts >= self.max_attempts {
            Some(GameOutcome::Loss)
        } else {
            None
        }
    }

    /// The secret word (revealed to the player on a loss)
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Attempts consumed so far
    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Configured attempt limit
    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Attempts still available
    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        self.max_attempts.saturating_sub(self.attempts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn session(candidates: &[Word], max_attempts: usize) -> GameSession<'_> {
        let mut rng = StdRng::seed_from_u64(1);
        GameSession::new(candidates, &mut rng, max_attempts).unwrap()
    }

    #[test]
    fn new_session_fails_on_empty_candidates() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(GameSession::new(&[], &mut rng, 6).is_err());
    }

    #[test]
    fn outcome_is_none_before_any_guess() {
        let candidates = words(&["crane"]);
        let session = session(&candidates, 6);

        assert_eq!(session.outcome(), None);
        assert_eq!(session.attempts(), 0);
        assert_eq!(session.attempts_remaining(), 6);
    }

    #[test]
    fn correct_guess_wins() {
        let candidates = words(&["crane"]);
        let mut session = session(&candidates, 6);

        let turn = session.submit("crane").unwrap();
        assert!(turn.feedback.is_win());
        assert_eq!(turn.attempt, 1);
        assert_eq!(session.outcome(), Some(GameOutcome::Win));
    }

    #[test]
    fn guess_is_normalized_before_scoring() {
        let candidates = words(&["crane"]);
        let mut session = session(&candidates, 6);

        let turn = session.submit("  CRANE \n").unwrap();
        assert!(turn.feedback.is_win());
    }

    #[test]
    fn invalid_shape_consumes_no_attempt() {
        let candidates = words(&["crane", "slate"]);
        let mut session = session(&candidates, 6);

        for input in ["cran", "cranes", "cr4ne", "", "hi", "crane!"] {
            let err = session.submit(input).unwrap_err();
            assert!(matches!(err, GuessError::Shape(_)), "input {input:?}");
        }

        // Six rejects later the game has not moved
        assert_eq!(session.attempts(), 0);
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn unknown_word_consumes_no_attempt() {
        let candidates = words(&["crane", "slate"]);
        let mut session = session(&candidates, 6);

        let err = session.submit("zzzzz").unwrap_err();
        assert_eq!(err, GuessError::NotInList("zzzzz".to_string()));
        assert_eq!(session.attempts(), 0);
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn attempt_exhaustion_is_a_loss() {
        let candidates = words(&["crane", "slate", "irate"]);
        let mut session = session(&candidates, 3);

        // Always guess a valid word that is not the secret
        let wrong = candidates
            .iter()
            .find(|w| *w != session.secret())
            .unwrap()
            .text()
            .to_string();

        for attempt in 1..=3 {
            let turn = session.submit(&wrong).unwrap();
            assert_eq!(turn.attempt, attempt);
            assert!(!turn.feedback.is_win());
        }

        assert_eq!(session.outcome(), Some(GameOutcome::Loss));
        assert_eq!(session.attempts_remaining(), 0);
    }

    #[test]
    fn finished_game_rejects_further_guesses() {
        let candidates = words(&["crane"]);
        let mut session = session(&candidates, 6);

        session.submit("crane").unwrap();
        assert_eq!(session.submit("crane").unwrap_err(), GuessError::Finished);
        assert_eq!(session.attempts(), 1);
    }

    #[test]
    fn win_on_final_attempt_is_a_win() {
        let candidates = words(&["crane", "slate"]);
        let mut session = session(&candidates, 2);

        let secret = session.secret().text().to_string();
        let wrong = candidates
            .iter()
            .find(|w| w.text() != secret)
            .unwrap()
            .text()
            .to_string();

        session.submit(&wrong).unwrap();
        session.submit(&secret).unwrap();
        assert_eq!(session.outcome(), Some(GameOutcome::Win));
    }
}
