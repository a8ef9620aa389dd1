//! One-shot scoring command
//!
//! Scores a guess against a known secret without starting a session.

use crate::core::{Code, Feedback};
use crate::error::GuessError;

/// Result of scoring one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub secret: Code,
    pub guess: Code,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`, both given as player-style strings
///
/// # Errors
///
/// Returns `GuessError` if either string is not a valid code.
pub fn score_guess(secret: &str, guess: &str) -> Result<ScoreResult, GuessError> {
    let secret = Code::parse(secret)?;
    let guess = Code::parse(guess)?;

    Ok(ScoreResult {
        secret,
        guess,
        feedback: Feedback::calculate(&guess, &secret),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_example() {
        let result = score_guess("rgob", "rogb").unwrap();
        assert_eq!(result.feedback.to_string(), "kkww");
        assert_eq!(result.secret.to_string(), "rgob");
        assert_eq!(result.guess.to_string(), "rogb");
    }

    #[test]
    fn scores_are_case_insensitive() {
        let upper = score_guess("RGOB", "GOBR").unwrap();
        let lower = score_guess("rgob", "gobr").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn invalid_secret_rejected() {
        assert_eq!(score_guess("rrgo", "rgob"), Err(GuessError::DuplicateSymbol('r')));
    }

    #[test]
    fn invalid_guess_rejected() {
        assert_eq!(score_guess("rgob", "rgo"), Err(GuessError::WrongLength(3)));
        assert_eq!(score_guess("rgob", "zgob"), Err(GuessError::UnknownSymbol('z')));
    }
}
