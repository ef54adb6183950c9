//! Interactive game loop
//!
//! Reads guesses from the player, scores them, and reports feedback until
//! the game is won or the attempts run out.

use crate::game::{GameOutcome, GameSession, GuessError};
use crate::output::formatters::{colored_guess, feedback_symbols, spaced_letters};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run one interactive game over `reader`
///
/// Returns the final outcome, or `None` if input ended (EOF or a quit
/// command) before the game finished.
///
/// # Errors
///
/// Returns an error if reading input or flushing the prompt fails.
pub fn run_play<R: BufRead>(
    session: &mut GameSession<'_>,
    reader: &mut R,
) -> io::Result<Option<GameOutcome>> {
    print_banner(session);

    loop {
        let Some(input) = prompt_guess(session, reader)? else {
            println!("\nGoodbye!");
            return Ok(None);
        };

        match session.submit(&input) {
            Ok(turn) => {
                println!("{}", spaced_letters(&turn.guess));
                println!("{}", feedback_symbols(&turn.feedback));
                println!("{}\n", colored_guess(&turn.guess, &turn.feedback));
                log::debug!("attempt {} scored", turn.attempt);
            }
            Err(err @ (GuessError::Shape(_) | GuessError::NotInList(_))) => {
                // Rejected input is re-prompted, no attempt consumed
                println!("{}\n", format!("{err}. Try again.").red());
                continue;
            }
            Err(GuessError::Finished) => break,
        }

        if let Some(outcome) = session.outcome() {
            print_outcome(session, outcome);
            return Ok(Some(outcome));
        }
    }

    Ok(session.outcome())
}

/// Prompt for and read one line of input
///
/// Returns `None` on EOF or an explicit quit command.
fn prompt_guess<R: BufRead>(
    session: &GameSession<'_>,
    reader: &mut R,
) -> io::Result<Option<String>> {
    print!(
        "Guess {}/{}: ",
        session.attempts() + 1,
        session.max_attempts()
    );
    io::stdout().flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None); // EOF
    }

    let input = input.trim().to_lowercase();
    if matches!(input.as_str(), "quit" | "q" | "exit") {
        return Ok(None);
    }

    Ok(Some(input))
}

fn print_banner(session: &GameSession<'_>) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      W O R D L E                             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the secret 5-letter word. You have {} attempts.",
        session.max_attempts()
    );
    println!("Feedback: G = right spot, Y = wrong spot, B = not in word");
    println!("Type 'quit' to give up.\n");
}

fn print_outcome(session: &GameSession<'_>, outcome: GameOutcome) {
    match outcome {
        GameOutcome::Win => {
            let attempts = session.attempts();
            println!(
                "{}",
                format!(
                    "Congratulations! You guessed the word in {attempts} {}.",
                    if attempts == 1 { "attempt" } else { "attempts" }
                )
                .green()
                .bold()
            );
        }
        GameOutcome::Loss => {
            println!(
                "{}",
                format!(
                    "Out of attempts. The word was: {}",
                    session.secret().text().to_uppercase()
                )
                .red()
                .bold()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn session(candidates: &[Word], max_attempts: usize) -> GameSession<'_> {
        let mut rng = StdRng::seed_from_u64(3);
        GameSession::new(candidates, &mut rng, max_attempts).unwrap()
    }

    #[test]
    fn win_on_first_guess() {
        let candidates = words(&["crane"]);
        let mut session = session(&candidates, 6);
        let mut reader = Cursor::new("crane\n");

        let outcome = run_play(&mut session, &mut reader).unwrap();
        assert_eq!(outcome, Some(GameOutcome::Win));
        assert_eq!(session.attempts(), 1);
    }

    #[test]
    fn eof_before_finish_has_no_outcome() {
        let candidates = words(&["crane"]);
        let mut session = session(&candidates, 6);
        let mut reader = Cursor::new("");

        let outcome = run_play(&mut session, &mut reader).unwrap();
        assert_eq!(outcome, None);
        assert_eq!(session.attempts(), 0);
    }

    #[test]
    fn quit_command_ends_the_session() {
        let candidates = words(&["crane", "slate"]);
        let mut session = session(&candidates, 6);
        let mut reader = Cursor::new("quit\n");

        let outcome = run_play(&mut session, &mut reader).unwrap();
        assert_eq!(outcome, None);
    }

    #[test]
    fn invalid_guesses_are_reprompted_without_cost() {
        let candidates = words(&["crane"]);
        let mut session = session(&candidates, 6);
        // Bad shape, unknown word, then the answer
        let mut reader = Cursor::new("cr\nzzzzz\ncrane\n");

        let outcome = run_play(&mut session, &mut reader).unwrap();
        assert_eq!(outcome, Some(GameOutcome::Win));
        assert_eq!(session.attempts(), 1);
    }

    #[test]
    fn exhausting_attempts_is_a_loss() {
        let candidates = words(&["crane", "slate"]);
        let mut session = session(&candidates, 2);

        let wrong = candidates
            .iter()
            .find(|w| *w != session.secret())
            .unwrap()
            .text()
            .to_string();
        let mut reader = Cursor::new(format!("{wrong}\n{wrong}\n"));

        let outcome = run_play(&mut session, &mut reader).unwrap();
        assert_eq!(outcome, Some(GameOutcome::Loss));
        assert_eq!(session.attempts(), 2);
    }

    #[test]
    fn uppercase_input_is_accepted() {
        let candidates = words(&["crane"]);
        let mut session = session(&candidates, 6);
        let mut reader = Cursor::new("CRANE\n");

        let outcome = run_play(&mut session, &mut reader).unwrap();
        assert_eq!(outcome, Some(GameOutcome::Win));
    }
}
