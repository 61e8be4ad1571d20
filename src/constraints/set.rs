//! Filtering predicates and their normalized collection

use crate::core::Word;
use std::collections::BTreeSet;
use std::fmt;

/// A single filtering predicate over dictionary words
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Constraint {
    /// `letter` sits at `position`
    LetterAt { position: usize, letter: u8 },
    /// `letter` does not sit at `position`
    LetterNotAt { position: usize, letter: u8 },
    /// `letter` occurs nowhere in the word
    LetterAbsent { letter: u8 },
    /// `letter` occurs at some position outside `excluded`
    LetterElsewhere { letter: u8, excluded: Vec<usize> },
}

impl Constraint {
    /// Check a word against this predicate
    ///
    /// Positions past the end of the word never hold a letter.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        let letters = word.letters();
        match self {
            Self::LetterAt { position, letter } => letters.get(*position) == Some(letter),
            Self::LetterNotAt { position, letter } => letters.get(*position) != Some(letter),
            Self::LetterAbsent { letter } => !word.has_letter(*letter),
            Self::LetterElsewhere { letter, excluded } => word
                .positions_of(*letter)
                .iter()
                .any(|p| !excluded.contains(p)),
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LetterAt { position, letter } => {
                write!(f, "{}@{position}", char::from(*letter))
            }
            Self::LetterNotAt { position, letter } => {
                write!(f, "{}!@{position}", char::from(*letter))
            }
            Self::LetterAbsent { letter } => write!(f, "!{}", char::from(*letter)),
            Self::LetterElsewhere { letter, excluded } => {
                write!(f, "{}@not{excluded:?}", char::from(*letter))
            }
        }
    }
}

/// Normalized, order-independent set of predicates
///
/// An empty set matches every word. Two sets built from the same feedback in
/// any order compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    constraints: BTreeSet<Constraint>,
}

impl ConstraintSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one predicate; duplicates collapse
    pub fn insert(&mut self, constraint: Constraint) {
        let constraint = match constraint {
            Constraint::LetterElsewhere {
                letter,
                mut excluded,
            } => {
                excluded.sort_unstable();
                excluded.dedup();
                Constraint::LetterElsewhere { letter, excluded }
            }
            other => other,
        };
        self.constraints.insert(constraint);
    }

    /// Union of two sets
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        merged.extend(other.iter().cloned());
        merged
    }

    pub fn iter(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// True if the word satisfies every predicate
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.constraints.iter().all(|c| c.matches(word))
    }
}

impl Extend<Constraint> for ConstraintSet {
    fn extend<I: IntoIterator<Item = Constraint>>(&mut self, iter: I) {
        for constraint in iter {
            self.insert(constraint);
        }
    }
}

impl FromIterator<Constraint> for ConstraintSet {
    fn from_iter<I: IntoIterator<Item = Constraint>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl fmt::Display for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.constraints.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn empty_set_matches_everything() {
        let set = ConstraintSet::new();
        assert!(set.is_empty());
        assert!(set.matches(&word("apple")));
        assert!(set.matches(&word("siorka")));
    }

    #[test]
    fn letter_at_and_not_at() {
        let at = Constraint::LetterAt {
            position: 0,
            letter: b'a',
        };
        let not_at = Constraint::LetterNotAt {
            position: 0,
            letter: b'a',
        };
        assert!(at.matches(&word("angle")));
        assert!(!at.matches(&word("table")));
        assert!(!not_at.matches(&word("angle")));
        assert!(not_at.matches(&word("table")));
    }

    #[test]
    fn letter_elsewhere_needs_an_outside_occurrence() {
        let c = Constraint::LetterElsewhere {
            letter: b'l',
            excluded: vec![3],
        };
        assert!(c.matches(&word("llama")));
        assert!(!c.matches(&word("angle")));
        assert!(!c.matches(&word("crane")));
    }

    #[test]
    fn duplicates_collapse_and_order_is_irrelevant() {
        let a = Constraint::LetterAbsent { letter: b'p' };
        let b = Constraint::LetterElsewhere {
            letter: b'm',
            excluded: vec![3, 1, 3],
        };
        let c = Constraint::LetterElsewhere {
            letter: b'm',
            excluded: vec![1, 3],
        };

        let one: ConstraintSet = [a.clone(), b, a.clone()].into_iter().collect();
        let two: ConstraintSet = [c, a].into_iter().collect();
        assert_eq!(one, two);
        assert_eq!(one.len(), 2);
    }

    #[test]
    fn merged_is_union() {
        let left: ConstraintSet = [Constraint::LetterAbsent { letter: b'p' }]
            .into_iter()
            .collect();
        let right: ConstraintSet = [Constraint::LetterAt {
            position: 0,
            letter: b'a',
        }]
        .into_iter()
        .collect();

        let merged = left.merged(&right);
        assert_eq!(merged.len(), 2);
        assert!(merged.matches(&word("angle")));
        assert!(!merged.matches(&word("apple")));
    }
}
