//! Display functions for the game and command results
//!
//! Everything takes a writer so the play loop can run against in-memory
//! buffers as well as the terminal.

use super::formatters::{create_progress_bar, format_round, palette_legend};
use crate::commands::ScoreResult;
use crate::core::{CODE_LENGTH, Code};
use crate::error::GuessError;
use crate::game::Round;
use colored::Colorize;
use std::io::{self, Write};

/// Print the welcome banner
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_banner<W: Write>(out: &mut W, max_rounds: u32) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(
        out,
        "║                  {}                  ║",
        "M A S T E R M I N D".bright_cyan().bold()
    )?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;

    writeln!(
        out,
        "Crack the hidden code of {CODE_LENGTH} distinct colours in {max_rounds} attempts."
    )?;
    writeln!(out, "Feedback: k = right colour, right place; w = right colour, wrong place.\n")
}

/// Print the per-round input prompt
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Insert a string of {CODE_LENGTH} colors.")?;
    writeln!(out, "{}", palette_legend())?;
    out.flush()
}

/// Print why a guess was refused
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_rejection<W: Write>(out: &mut W, error: &GuessError) -> io::Result<()> {
    writeln!(out, "{}", error.to_string().red())
}

/// Print feedback and status for an accepted guess
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_round<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    writeln!(out, "{}", format_round(round))
}

/// Print the victory summary
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_victory<W: Write>(out: &mut W, rounds: u32, max_rounds: u32) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "{}", "    🎉  C O D E   C R A C K E D !  🎉".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;

    writeln!(
        out,
        "\n  Solved in {} {}",
        rounds.to_string().bright_cyan().bold(),
        if rounds == 1 { "guess" } else { "guesses" }
    )?;
    writeln!(
        out,
        "  Attempts used: [{}] {rounds}/{max_rounds}\n",
        create_progress_bar(rounds, max_rounds, 20).green()
    )
}

/// Print the defeat summary, revealing the secret
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_defeat<W: Write>(out: &mut W, secret: &Code) -> io::Result<()> {
    writeln!(out, "\n{}", "GAME OVER: You exceeded the allowed attempts.".red().bold())?;
    writeln!(
        out,
        "  The code was: {}\n",
        secret.to_string().bright_yellow().bold()
    )
}

/// Print the result of scoring a single guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        result.secret.to_string().bright_yellow().bold(),
        result.guess.to_string().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("{}", result.feedback);
    println!(
        "  exact: {}   partial: {}",
        result.feedback.exact().to_string().green(),
        result.feedback.partial().to_string().yellow()
    );
}
