//! Palette symbols
//!
//! The palette is fixed: six colours, each typed as a single lowercase letter.

use std::fmt;

/// Number of colours in the palette
pub const PALETTE_SIZE: usize = 6;

/// A coloured peg from the fixed palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Peg {
    Red,
    Green,
    Orange,
    Blue,
    Yellow,
    Purple,
}

/// The palette in display order
pub const PALETTE: [Peg; PALETTE_SIZE] = [
    Peg::Red,
    Peg::Green,
    Peg::Orange,
    Peg::Blue,
    Peg::Yellow,
    Peg::Purple,
];

impl Peg {
    /// Look up a peg by its display character (case-insensitive)
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Peg;
    ///
    /// assert_eq!(Peg::from_char('r'), Some(Peg::Red));
    /// assert_eq!(Peg::from_char('P'), Some(Peg::Purple));
    /// assert_eq!(Peg::from_char('x'), None);
    /// ```
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'r' => Some(Self::Red),
            'g' => Some(Self::Green),
            'o' => Some(Self::Orange),
            'b' => Some(Self::Blue),
            'y' => Some(Self::Yellow),
            'p' => Some(Self::Purple),
            _ => None,
        }
    }

    /// The character the player types for this peg
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Red => 'r',
            Self::Green => 'g',
            Self::Orange => 'o',
            Self::Blue => 'b',
            Self::Yellow => 'y',
            Self::Purple => 'p',
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_symbols_in_order() {
        let symbols: String = PALETTE.iter().map(|p| p.symbol()).collect();
        assert_eq!(symbols, "rgobyp");
    }

    #[test]
    fn from_char_round_trips_palette() {
        for peg in PALETTE {
            assert_eq!(Peg::from_char(peg.symbol()), Some(peg));
            assert_eq!(
                Peg::from_char(peg.symbol().to_ascii_uppercase()),
                Some(peg)
            );
        }
    }

    #[test]
    fn from_char_rejects_foreign() {
        for ch in ['x', 'a', '1', ' ', 'é'] {
            assert_eq!(Peg::from_char(ch), None, "{ch:?} should be rejected");
        }
    }

    #[test]
    fn names() {
        assert_eq!(Peg::Orange.name(), "orange");
        assert_eq!(Peg::Purple.to_string(), "p");
    }
}
