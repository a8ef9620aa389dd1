//! Mastermind code representation
//!
//! A Code is an ordered row of 4 distinct pegs. The same type holds the
//! hidden secret and each guess the player submits.

use super::peg::{PALETTE, Peg};
use crate::error::GuessError;
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;

/// Number of pegs in a code
pub const CODE_LENGTH: usize = 4;

/// A row of 4 pairwise-distinct pegs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([Peg; CODE_LENGTH]);

impl Code {
    /// Build a code from pegs, rejecting repeats
    ///
    /// # Errors
    /// Returns `GuessError::DuplicateSymbol` if any peg appears twice.
    pub fn new(pegs: [Peg; CODE_LENGTH]) -> Result<Self, GuessError> {
        let mut seen = FxHashSet::default();
        for peg in pegs {
            if !seen.insert(peg) {
                return Err(GuessError::DuplicateSymbol(peg.symbol()));
            }
        }
        Ok(Self(pegs))
    }

    /// Parse player input such as `"rgob"` or `"RGOB"`
    ///
    /// Surrounding whitespace is ignored. Checks are applied in order:
    /// length, palette membership, uniqueness.
    ///
    /// # Errors
    /// Returns `GuessError` describing the first check that failed.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    /// use mastermind::error::GuessError;
    ///
    /// let code = Code::parse("RgOb").unwrap();
    /// assert_eq!(code.to_string(), "rgob");
    ///
    /// assert_eq!(Code::parse("rgo"), Err(GuessError::WrongLength(3)));
    /// assert_eq!(Code::parse("rgox"), Err(GuessError::UnknownSymbol('x')));
    /// assert_eq!(Code::parse("rgor"), Err(GuessError::DuplicateSymbol('r')));
    /// ```
    pub fn parse(input: &str) -> Result<Self, GuessError> {
        let normalized = input.trim().to_lowercase();

        let len = normalized.chars().count();
        if len != CODE_LENGTH {
            return Err(GuessError::WrongLength(len));
        }

        let mut pegs = [Peg::Red; CODE_LENGTH];
        for (slot, ch) in pegs.iter_mut().zip(normalized.chars()) {
            *slot = Peg::from_char(ch).ok_or(GuessError::UnknownSymbol(ch))?;
        }

        Self::new(pegs)
    }

    /// Draw a secret uniformly at random: a random permutation of the
    /// palette, truncated to the code length
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pool = PALETTE;
        pool.shuffle(rng);

        let mut pegs = [Peg::Red; CODE_LENGTH];
        pegs.copy_from_slice(&pool[..CODE_LENGTH]);
        Self(pegs)
    }

    #[inline]
    #[must_use]
    pub const fn pegs(&self) -> &[Peg; CODE_LENGTH] {
        &self.0
    }

    /// Get the peg at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn peg_at(&self, position: usize) -> Peg {
        self.0[position]
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, peg: Peg) -> bool {
        self.0.contains(&peg)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for peg in self.0 {
            write!(f, "{peg}")?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
