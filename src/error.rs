//! Error types
//!
//! Input validation errors are recoverable: the play loop reports them and
//! re-prompts without consuming a round. Configuration errors are fatal at
//! startup.

use std::io;

/// A guess (or secret) string that is not a valid code
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("String must be 4-characters long, try again!")]
    WrongLength(usize),
    #[error("Input colors must be in the specified list!")]
    UnknownSymbol(char),
    #[error("Characters in the string must be unique!")]
    DuplicateSymbol(char),
}

/// Invalid game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("maximum number of rounds must be positive")]
    NonPositiveRounds,
}

/// A session operation that is not allowed in the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("the game has already finished")]
    Finished,
}

/// Failure of the interactive play loop
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Session(#[from] SessionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_error_messages_match_prompts() {
        assert_eq!(
            GuessError::WrongLength(3).to_string(),
            "String must be 4-characters long, try again!"
        );
        assert_eq!(
            GuessError::UnknownSymbol('x').to_string(),
            "Input colors must be in the specified list!"
        );
        assert_eq!(
            GuessError::DuplicateSymbol('r').to_string(),
            "Characters in the string must be unique!"
        );
    }

    #[test]
    fn play_error_wraps_io() {
        let err: PlayError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(err.to_string().starts_with("io error:"));
    }
}
