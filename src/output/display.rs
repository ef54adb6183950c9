//! Display functions for command results

use super::formatters::{colored_guess, feedback_symbols, spaced_letters};
use crate::commands::ScoreResult;
use colored::Colorize;

/// Print the result of scoring a guess against a secret
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        " {} {} vs {}",
        "SCORING:".bright_cyan().bold(),
        result.guess.text().to_uppercase().bright_yellow().bold(),
        result.secret.text().to_uppercase().bright_white()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n{}", spaced_letters(&result.guess));
    println!("{}", feedback_symbols(&result.feedback));
    println!("{}", colored_guess(&result.guess, &result.feedback));

    if result.feedback.is_win() {
        println!("\n{}", "Exact match!".green().bold());
    }
}
