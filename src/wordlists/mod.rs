//! Word lists for the game
//!
//! Provides the embedded default candidate list compiled into the binary,
//! plus file loading for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
