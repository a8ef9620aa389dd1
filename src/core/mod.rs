//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod feedback;
mod peg;

pub use code::{CODE_LENGTH, Code};
pub use feedback::{Feedback, Mark, NO_MARK};
pub use peg::{PALETTE, PALETTE_SIZE, Peg};
