//! Formatting utilities for terminal output

use crate::core::PALETTE;
use crate::game::Round;

/// Palette legend, e.g. `r->red, g->green, ... p->purple.`
#[must_use]
pub fn palette_legend() -> String {
    let entries: Vec<String> = PALETTE
        .iter()
        .map(|peg| format!("{}->{}", peg.symbol(), peg.name()))
        .collect();

    format!("{}.", entries.join(", "))
}

/// Feedback line followed by status line
#[must_use]
pub fn format_round(round: &Round) -> String {
    format!("{}\n{}", round.feedback, round.status)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u32, max: u32, width: usize) -> String {
    if max == 0 {
        return "░".repeat(width);
    }

    let filled = (u64::from(value) * width as u64 / u64::from(max)) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
