//! Wordle Game
//!
//! A command-line word-guessing game: find the secret five-letter word
//! within six attempts, with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, Word};
//!
//! let secret = Word::new("crane").unwrap();
//! let guess = Word::new("trace").unwrap();
//!
//! // Score the guess
//! let feedback = Feedback::score(&secret, &guess);
//! assert!(!feedback.is_win());
//! ```

// Core domain types
pub mod core;

// Game sessions
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
