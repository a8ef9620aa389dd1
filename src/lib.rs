//! Mastermind
//!
//! Console Mastermind: a hidden code of 4 distinct colours is drawn from a
//! palette of 6, and the player has a fixed number of guesses to crack it.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::Code;
//! use mastermind::game::{GameSession, Status};
//!
//! let secret = Code::parse("rgob").unwrap();
//! let mut session = GameSession::with_secret(secret, 1).unwrap();
//!
//! let round = session.evaluate(&Code::parse("gobr").unwrap()).unwrap();
//! assert_eq!(round.feedback.to_string(), "wwww");
//! assert_eq!(round.status, Status::GameOver);
//! ```

// Core domain types
pub mod core;

// Session state and scoring rules
pub mod game;

// Game configuration
pub mod config;

// Error types
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
