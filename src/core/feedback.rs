//! Mastermind feedback calculation and representation
//!
//! Feedback is a multiset of marks, one per guess position that matched:
//! - `k` = Exact (right colour, right position)
//! - `w` = Partial (right colour, wrong position)
//!
//! Only the counts carry meaning, so the marks are reported in a canonical
//! order: all exact marks, then all partial marks.

use super::code::{CODE_LENGTH, Code};
use std::fmt;

/// A single feedback mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Exact,
    Partial,
}

impl Mark {
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => 'k',
            Self::Partial => 'w',
        }
    }
}

/// Character printed for a position that earned no mark
pub const NO_MARK: char = '-';

/// Feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    exact: u8,
    partial: u8,
}

impl Feedback {
    /// All exact (the guess is the secret)
    pub const PERFECT: Self = Self {
        exact: CODE_LENGTH as u8,
        partial: 0,
    };

    /// Create feedback from raw counts
    ///
    /// # Panics
    /// Panics in debug mode if the counts exceed the code length
    #[must_use]
    pub const fn new(exact: u8, partial: u8) -> Self {
        debug_assert!(
            exact as usize + partial as usize <= CODE_LENGTH,
            "more marks than positions"
        );
        Self { exact, partial }
    }

    /// Score `guess` against `secret`
    ///
    /// For each position: an exact mark if the pegs match, otherwise a
    /// partial mark if the guessed peg occurs anywhere in the secret.
    ///
    /// The membership test does not consume secret pegs. That matches the
    /// classic two-pass count only because codes never repeat a peg; if
    /// repeats are ever allowed this must switch to frequency counting.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Feedback};
    ///
    /// let secret = Code::parse("rgob").unwrap();
    /// let guess = Code::parse("rogb").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// assert_eq!(feedback.exact(), 2);
    /// assert_eq!(feedback.partial(), 2);
    /// assert_eq!(feedback.to_string(), "kkww");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, secret: &Code) -> Self {
        let mut exact = 0;
        let mut partial = 0;

        for (position, &guessed) in guess.pegs().iter().enumerate() {
            if guessed == secret.peg_at(position) {
                exact += 1;
            } else if secret.contains(guessed) {
                partial += 1;
            }
        }

        Self::new(exact, partial)
    }

    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    #[inline]
    #[must_use]
    pub const fn partial(self) -> u8 {
        self.partial
    }

    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.exact as usize == CODE_LENGTH
    }

    /// Marks in canonical order: exact first, then partial
    #[must_use]
    pub fn marks(self) -> Vec<Mark> {
        let mut marks = Vec::with_capacity(CODE_LENGTH);
        marks.extend(std::iter::repeat_n(Mark::Exact, self.exact as usize));
        marks.extend(std::iter::repeat_n(Mark::Partial, self.partial as usize));
        marks
    }
}

impl fmt::Display for Feedback {
    /// Always exactly 4 characters, e.g. `kkww`, `kw--`, `----`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marks = self.marks();
        for mark in &marks {
            write!(f, "{}", mark.symbol())?;
        }
        for _ in marks.len()..CODE_LENGTH {
            write!(f, "{NO_MARK}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::peg::PALETTE;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn score(guess: &str, secret: &str) -> Feedback {
        Feedback::calculate(&Code::parse(guess).unwrap(), &Code::parse(secret).unwrap())
    }

    #[test]
    fn perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(Feedback::PERFECT.to_string(), "kkkk");
        assert_eq!(Feedback::PERFECT.marks(), vec![Mark::Exact; 4]);
    }

    #[test]
    fn guessing_secret_is_perfect() {
        let fb = score("rgob", "rgob");
        assert_eq!(fb, Feedback::PERFECT);
    }

    #[test]
    fn two_exact_two_partial() {
        // r and b in place, g and o swapped
        let fb = score("rogb", "rgob");
        assert_eq!((fb.exact(), fb.partial()), (2, 2));
        assert_eq!(fb.to_string(), "kkww");
    }

    #[test]
    fn all_partial() {
        let fb = score("gobr", "rgob");
        assert_eq!((fb.exact(), fb.partial()), (0, 4));
        assert_eq!(fb.to_string(), "wwww");
        assert!(!fb.is_perfect());
    }

    #[test]
    fn misses_are_padded() {
        // y and p are not in the secret
        let fb = score("rypg", "rgob");
        assert_eq!((fb.exact(), fb.partial()), (1, 1));
        assert_eq!(fb.to_string(), "kw--");
    }

    #[test]
    fn disjoint_colours_leave_gaps() {
        // 4 of 6 colours in each code, so at least 2 are shared
        let fb = score("ypgr", "obgr");
        assert_eq!(fb.exact() + fb.partial(), 2);
        assert_eq!(fb.to_string(), "kk--");
    }

    #[test]
    fn marks_are_sorted_exact_first() {
        let fb = score("grob", "rgob");
        assert_eq!(
            fb.marks(),
            vec![Mark::Exact, Mark::Exact, Mark::Partial, Mark::Partial]
        );
    }

    #[test]
    fn new_keeps_counts() {
        let fb = Feedback::new(1, 3);
        assert_eq!((fb.exact(), fb.partial()), (1, 3));
        assert_eq!(fb.to_string(), "kwww");
        assert_eq!(Feedback::new(0, 0).to_string(), "----");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "more marks than positions")]
    fn new_rejects_counts_past_u8_sum() {
        // 200 + 100 would overflow a u8 sum before the bound check
        let _ = Feedback::new(200, 100);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "more marks than positions")]
    fn new_rejects_too_many_marks() {
        let _ = Feedback::new(3, 2);
    }

    #[test]
    fn mark_ordering() {
        assert!(Mark::Exact < Mark::Partial);
        assert_eq!(Mark::Exact.symbol(), 'k');
        assert_eq!(Mark::Partial.symbol(), 'w');
    }

    #[test]
    fn counts_match_set_arithmetic() {
        // exact = positional matches; partial = shared colours minus exact
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..500 {
            let secret = Code::random(&mut rng);
            let guess = Code::random(&mut rng);
            let fb = Feedback::calculate(&guess, &secret);

            let exact = (0..CODE_LENGTH)
                .filter(|&i| guess.peg_at(i) == secret.peg_at(i))
                .count();
            let shared = PALETTE
                .iter()
                .filter(|&&p| guess.contains(p) && secret.contains(p))
                .count();

            assert_eq!(fb.exact() as usize, exact);
            assert_eq!(fb.partial() as usize, shared - exact);
            assert_eq!(fb.to_string().chars().count(), CODE_LENGTH);
        }
    }

    #[test]
    fn matches_two_pass_count_for_distinct_codes() {
        // Textbook scorer: exact matches, then min frequency per colour
        fn two_pass(guess: &Code, secret: &Code) -> (u8, u8) {
            let exact = (0..CODE_LENGTH)
                .filter(|&i| guess.peg_at(i) == secret.peg_at(i))
                .count();
            let total: usize = PALETTE
                .iter()
                .map(|&p| {
                    let in_guess = guess.pegs().iter().filter(|&&g| g == p).count();
                    let in_secret = secret.pegs().iter().filter(|&&s| s == p).count();
                    in_guess.min(in_secret)
                })
                .sum();
            (exact as u8, (total - exact) as u8)
        }

        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..500 {
            let secret = Code::random(&mut rng);
            let guess = Code::random(&mut rng);
            let fb = Feedback::calculate(&guess, &secret);
            assert_eq!((fb.exact(), fb.partial()), two_pass(&guess, &secret));
        }
    }
}
