//! Game session state and round evaluation
//!
//! A session owns the secret and the round counter. It performs no I/O; the
//! play loop validates input and prints results.

use crate::config::GameConfig;
use crate::core::{Code, Feedback};
use crate::error::{ConfigError, SessionError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::{debug, info};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

/// Status reported to the player after a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Won,
    GameOver,
    TryAgain { remaining: u32 },
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won => write!(f, "you won"),
            Self::GameOver => write!(f, "game over"),
            Self::TryAgain { remaining } => {
                write!(f, "try again, {remaining} attempts remaining")
            }
        }
    }
}

/// Result of one accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    /// 1-based round number
    pub number: u32,
    pub feedback: Feedback,
    pub status: Status,
}

/// A single game of Mastermind
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Code,
    max_rounds: u32,
    round: u32,
    won: bool,
    over: bool,
}

impl GameSession {
    /// Start a session with a freshly drawn secret
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        match config.seed {
            Some(seed) => Self::with_rng(config.max_rounds, &mut StdRng::seed_from_u64(seed)),
            None => Self::with_rng(config.max_rounds, &mut rand::rng()),
        }
    }

    /// Start a session drawing the secret from `rng`
    ///
    /// # Errors
    /// Returns `ConfigError::NonPositiveRounds` if `max_rounds` is zero.
    pub fn with_rng<R: Rng + ?Sized>(max_rounds: u32, rng: &mut R) -> Result<Self, ConfigError> {
        GameConfig::new(max_rounds).validate()?;
        Ok(Self::start(Code::random(rng), max_rounds))
    }

    /// Start a session with a known secret
    ///
    /// # Errors
    /// Returns `ConfigError::NonPositiveRounds` if `max_rounds` is zero.
    pub fn with_secret(secret: Code, max_rounds: u32) -> Result<Self, ConfigError> {
        GameConfig::new(max_rounds).validate()?;
        Ok(Self::start(secret, max_rounds))
    }

    fn start(secret: Code, max_rounds: u32) -> Self {
        info!(max_rounds, "new game session");
        debug!(%secret, "secret drawn");

        Self {
            secret,
            max_rounds,
            round: 0,
            won: false,
            over: false,
        }
    }

    /// Score a well-formed guess and advance the round counter
    ///
    /// # Errors
    /// Returns `SessionError::Finished` if the game is already won or lost;
    /// the session is left unchanged.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    /// use mastermind::game::{GameSession, Status};
    ///
    /// let secret = Code::parse("rgob").unwrap();
    /// let mut session = GameSession::with_secret(secret, 10).unwrap();
    ///
    /// let round = session.evaluate(&Code::parse("rogb").unwrap()).unwrap();
    /// assert_eq!(round.feedback.to_string(), "kkww");
    /// assert_eq!(round.status, Status::TryAgain { remaining: 9 });
    /// ```
    pub fn evaluate(&mut self, guess: &Code) -> Result<Round, SessionError> {
        if self.is_finished() {
            return Err(SessionError::Finished);
        }

        let feedback = Feedback::calculate(guess, &self.secret);
        self.round += 1;

        if feedback.is_perfect() {
            self.won = true;
        }
        if self.round >= self.max_rounds {
            self.over = true;
        }

        // A win on the last round is still a win
        let status = if self.won {
            Status::Won
        } else if self.over {
            Status::GameOver
        } else {
            Status::TryAgain {
                remaining: self.remaining(),
            }
        };

        debug!(round = self.round, %guess, %feedback, "round evaluated");
        if self.is_finished() {
            info!(rounds = self.round, won = self.won, "game finished");
        }

        Ok(Round {
            number: self.round,
            feedback,
            status,
        })
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        if self.won {
            GameState::Won
        } else if self.over {
            GameState::Lost
        } else {
            GameState::InProgress
        }
    }

    /// Rounds played so far
    #[inline]
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    #[inline]
    #[must_use]
    pub const fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.max_rounds.saturating_sub(self.round)
    }

    #[inline]
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// True once the round limit is reached, whether or not the last guess won
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.over
    }

    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.won || self.over
    }

    /// The hidden code, for revealing after a loss
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }
}
