//! Terminal output formatting
//!
//! Display utilities for the play loop and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_defeat, print_prompt, print_rejection, print_round, print_score_result,
    print_victory,
};
