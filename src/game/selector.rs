//! Secret word selection

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// Error returned when no candidate words are available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCandidateSet;

impl fmt::Display for EmptyCandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no candidate words available")
    }
}

impl std::error::Error for EmptyCandidateSet {}

/// Choose one secret word uniformly from `candidates`
///
/// The random source is injected so a game can be reproduced from a
/// seeded generator. Candidates are assumed to already satisfy the word
/// shape invariant; this function does not re-validate them.
///
/// # Errors
/// Returns `EmptyCandidateSet` if `candidates` is empty.
pub fn choose_secret<'a, R: Rng + ?Sized>(
    candidates: &'a [Word],
    rng: &mut R,
) -> Result<&'a Word, EmptyCandidateSet> {
    candidates.choose(rng).ok_or(EmptyCandidateSet)
}
