//! Hint patterns: one full row of feedback states
//!
//! A pattern is indexed in base 3 with position 0 as the least significant
//! digit:
//! - 0 = Absent
//! - 1 = `WrongPlace`
//! - 2 = `CorrectPlace`
//!
//! so the all-`CorrectPlace` terminal pattern of length L has index 3^L - 1.

use super::Word;
use super::feedback::{FeedbackState, RowError};
use std::fmt;

/// Feedback pattern for one guess, one state per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HintPattern(Vec<FeedbackState>);

impl HintPattern {
    /// Wrap an explicit sequence of states
    #[must_use]
    pub const fn new(states: Vec<FeedbackState>) -> Self {
        Self(states)
    }

    /// The all-`CorrectPlace` pattern of the given length
    #[must_use]
    pub fn terminal(len: usize) -> Self {
        Self(vec![FeedbackState::CorrectPlace; len])
    }

    /// Number of patterns for a word length (3^len)
    #[must_use]
    pub fn space_size(len: usize) -> u64 {
        3u64.pow(len as u32)
    }

    /// Decode a base-3 index into a pattern of `len` states
    #[must_use]
    pub fn from_index(mut index: u64, len: usize) -> Self {
        let mut states = Vec::with_capacity(len);
        for _ in 0..len {
            states.push(FeedbackState::from_digit((index % 3) as u8));
            index /= 3;
        }
        Self(states)
    }

    /// Base-3 index of this pattern
    #[must_use]
    pub fn index(&self) -> u64 {
        self.0
            .iter()
            .rev()
            .fold(0, |acc, state| acc * 3 + u64::from(state.digit()))
    }

    /// The states in position order
    #[inline]
    #[must_use]
    pub fn states(&self) -> &[FeedbackState] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if this is the winning pattern (all `CorrectPlace`)
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.0.iter().all(|&s| s == FeedbackState::CorrectPlace)
    }

    /// Calculate the pattern when `guess` is played and `target` is the answer
    ///
    /// Implements real Wordle feedback, including duplicate letters: a letter
    /// only earns `WrongPlace` while the target still has unmatched copies.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass: mark present-but-misplaced letters from what remains
    ///
    /// # Errors
    /// Returns [`RowError::LengthMismatch`] when the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use helple::core::{HintPattern, Word};
    ///
    /// let guess = Word::new("llama").unwrap();
    /// let target = Word::new("alarm").unwrap();
    /// let pattern = HintPattern::calculate(&guess, &target).unwrap();
    /// assert_eq!(pattern.to_string(), "-GGYY");
    /// ```
    pub fn calculate(guess: &Word, target: &Word) -> Result<Self, RowError> {
        if guess.len() != target.len() {
            return Err(RowError::LengthMismatch {
                expected: target.len(),
                actual: guess.len(),
            });
        }

        let mut result = vec![FeedbackState::Absent; guess.len()];
        let mut available = target.letter_counts();

        for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
            if g == t {
                result[i] = FeedbackState::CorrectPlace;
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, &g) in guess.letters().iter().enumerate() {
            if result[i] == FeedbackState::CorrectPlace {
                continue;
            }
            if let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                result[i] = FeedbackState::WrongPlace;
                *count -= 1;
            }
        }

        Ok(Self(result))
    }

    /// Parse a pattern from a string like "GY-G-" or "🟩🟨⬜🟩⬜"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for `CorrectPlace`
    /// - 'Y'/'y'/🟨 for `WrongPlace`
    /// - '-'/'_'/'.'/⬜/⬛ for `Absent`
    ///
    /// # Errors
    /// Returns [`RowError::InvalidPattern`] on any other character or an
    /// empty string.
    pub fn parse(s: &str) -> Result<Self, RowError> {
        let states = s
            .chars()
            .map(|ch| match ch {
                'G' | 'g' | '🟩' => Ok(FeedbackState::CorrectPlace),
                'Y' | 'y' | '🟨' => Ok(FeedbackState::WrongPlace),
                '-' | '_' | '.' | '⬜' | '⬛' => Ok(FeedbackState::Absent),
                _ => Err(RowError::InvalidPattern(s.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if states.is_empty() {
            return Err(RowError::InvalidPattern(s.to_string()));
        }
        Ok(Self(states))
    }

    /// Convert pattern to emoji string
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|state| match state {
                FeedbackState::CorrectPlace => '🟩',
                FeedbackState::WrongPlace => '🟨',
                FeedbackState::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for HintPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in &self.0 {
            let ch = match state {
                FeedbackState::CorrectPlace => 'G',
                FeedbackState::WrongPlace => 'Y',
                FeedbackState::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for HintPattern {
    type Err = RowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use FeedbackState::{Absent, CorrectPlace, WrongPlace};

    fn pattern(guess: &str, target: &str) -> HintPattern {
        HintPattern::calculate(&Word::new(guess).unwrap(), &Word::new(target).unwrap()).unwrap()
    }

    #[test]
    fn terminal_index_is_last() {
        let terminal = HintPattern::terminal(5);
        assert!(terminal.is_terminal());
        assert_eq!(terminal.index(), HintPattern::space_size(5) - 1);
        assert_eq!(terminal.index(), 242);
    }

    #[test]
    fn index_round_trips_through_decode() {
        let p = HintPattern::new(vec![WrongPlace, Absent, CorrectPlace]);
        // 1 + 0×3 + 2×9 = 19
        assert_eq!(p.index(), 19);
        assert_eq!(HintPattern::from_index(19, 3), p);
    }

    #[test]
    fn all_absent() {
        let p = pattern("abcde", "fghij");
        assert_eq!(p.index(), 0);
        assert!(p.states().iter().all(|&s| s == Absent));
    }

    #[test]
    fn same_word_is_terminal() {
        for word in ["apple", "llama", "siorka", "zzzzz", "a"] {
            assert!(pattern(word, word).is_terminal());
        }
    }

    #[test]
    fn duplicate_guess_letter_single_in_target() {
        // LLAMA vs ALARM: one L is green, the other is absent; both A's score.
        assert_eq!(
            pattern("llama", "alarm").states(),
            &[Absent, CorrectPlace, CorrectPlace, WrongPlace, WrongPlace]
        );
    }

    #[test]
    fn green_takes_priority_over_yellow() {
        // APPLE vs ANGLE: L is at position 3 in both.
        assert_eq!(pattern("apple", "angle").to_string(), "G--GG");
        // ROBOT vs FLOOR: the second O is exact, the first O is misplaced.
        assert_eq!(pattern("robot", "floor").to_string(), "YY-G-");
    }

    #[test]
    fn length_mismatch_rejected() {
        let result =
            HintPattern::calculate(&Word::new("apple").unwrap(), &Word::new("siorka").unwrap());
        assert!(matches!(result, Err(RowError::LengthMismatch { .. })));
    }

    #[test]
    fn parse_accepts_letters_and_emoji() {
        let p1 = HintPattern::parse("GY-G_").unwrap();
        let p2 = HintPattern::parse("🟩🟨⬜🟩⬛").unwrap();
        let p3: HintPattern = "gy.g-".parse().unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.to_emoji(), "🟩🟨⬜🟩⬜");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(HintPattern::parse("GXG").is_err());
        assert!(HintPattern::parse("").is_err());
    }
}
