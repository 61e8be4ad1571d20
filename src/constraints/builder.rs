//! Feedback rows to filtering predicates
//!
//! `Absent` is duplicate-letter aware: it only means "no copies beyond those
//! already confirmed in the same row".

use super::{Constraint, ConstraintSet};
use crate::core::{FeedbackState, GuessRow, LetterFeedback, Session};

/// Build the accumulated constraint set for every row of a session
///
/// # Examples
/// ```
/// use helple::constraints::build_constraints;
/// use helple::core::{GuessRow, Session, Word};
///
/// let mut session = Session::new(5).unwrap();
/// session.push(GuessRow::parse("apple", "G--GG").unwrap()).unwrap();
///
/// let constraints = build_constraints(&session);
/// assert!(constraints.matches(&Word::new("angle").unwrap()));
/// assert!(!constraints.matches(&Word::new("table").unwrap()));
/// ```
#[must_use]
pub fn build_constraints(session: &Session) -> ConstraintSet {
    let mut set = ConstraintSet::new();
    for row in session.rows() {
        set.extend(row_constraints(row));
    }
    set
}

/// Constraints implied by a single row, real or hypothetical
#[must_use]
pub fn row_constraints(row: &GuessRow) -> Vec<Constraint> {
    let cells = row.cells();
    let mut out = Vec::with_capacity(cells.len() * 2);

    for cell in cells {
        let LetterFeedback {
            position, letter, ..
        } = *cell;

        match cell.state {
            FeedbackState::CorrectPlace => out.push(Constraint::LetterAt { position, letter }),
            FeedbackState::WrongPlace => {
                out.push(Constraint::LetterNotAt { position, letter });
                out.push(Constraint::LetterElsewhere {
                    letter,
                    excluded: vec![position],
                });
            }
            FeedbackState::Absent => absent_constraints(cells, cell, &mut out),
        }
    }

    out
}

fn absent_constraints(cells: &[LetterFeedback], cell: &LetterFeedback, out: &mut Vec<Constraint>) {
    let letter = cell.letter;
    let sibling_has = |state: FeedbackState| {
        cells
            .iter()
            .any(|o| o.position != cell.position && o.letter == letter && o.state == state)
    };

    if sibling_has(FeedbackState::WrongPlace) {
        // Present elsewhere, just not here.
        out.push(Constraint::LetterNotAt {
            position: cell.position,
            letter,
        });
    } else if sibling_has(FeedbackState::CorrectPlace) {
        // The greens are the only copies.
        out.extend(
            cells
                .iter()
                .filter(|o| !(o.letter == letter && o.state == FeedbackState::CorrectPlace))
                .map(|o| Constraint::LetterNotAt {
                    position: o.position,
                    letter,
                }),
        );
    } else {
        out.push(Constraint::LetterAbsent { letter });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, score_outcome};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn scored_set(guess: &str, target: &str) -> ConstraintSet {
        let row = score_outcome(&word(guess), &word(target)).unwrap();
        row_constraints(&row).into_iter().collect()
    }

    #[test]
    fn empty_session_has_no_constraints() {
        let session = Session::new(5).unwrap();
        assert!(build_constraints(&session).is_empty());
    }

    #[test]
    fn wrong_place_requires_letter_elsewhere() {
        let row = GuessRow::parse("crane", "-Y---").unwrap();
        let set: ConstraintSet = row_constraints(&row).into_iter().collect();

        assert!(set.iter().any(|c| *c
            == Constraint::LetterNotAt {
                position: 1,
                letter: b'r'
            }));
        assert!(set.iter().any(|c| *c
            == Constraint::LetterElsewhere {
                letter: b'r',
                excluded: vec![1]
            }));
        assert!(set.matches(&word("mourt")));
        assert!(!set.matches(&word("bumpy")));
    }

    #[test]
    fn llama_against_alarm() {
        let set = scored_set("llama", "alarm");

        // The absent L only forbids extra copies; the green L stays allowed.
        for position in [0, 2, 3, 4] {
            assert!(set.iter().any(|c| *c
                == Constraint::LetterNotAt {
                    position,
                    letter: b'l'
                }));
        }
        assert!(!set.iter().any(|c| *c == Constraint::LetterAbsent { letter: b'l' }));

        assert!(set.matches(&word("alarm")));
        assert!(!set.matches(&word("alloy")));
        // Zero L's and two L's are both rejected.
        assert!(!set.matches(&word("amarm")));
        assert!(!set.matches(&word("alalm")));
    }

    #[test]
    fn absent_next_to_wrong_place_only_blocks_this_position() {
        // SPEED vs ERASE would mark both E's yellow; use ABBEY vs BARNS so one
        // B is yellow and the other absent.
        let set = scored_set("abbey", "barns");
        assert!(set.iter().any(|c| *c
            == Constraint::LetterNotAt {
                position: 2,
                letter: b'b'
            }));
        assert!(!set.iter().any(|c| *c == Constraint::LetterAbsent { letter: b'b' }));
        assert!(set.matches(&word("barns")));
    }

    #[test]
    fn plain_absent_removes_letter() {
        let set = scored_set("apple", "angle");
        assert!(set.iter().any(|c| *c == Constraint::LetterAbsent { letter: b'p' }));
    }

    #[test]
    fn apple_then_angle_end_to_end() {
        let mut session = Session::new(5).unwrap();
        session
            .push(score_outcome(&word("apple"), &word("angle")).unwrap())
            .unwrap();

        let set = build_constraints(&session);
        assert!(set.matches(&word("angle")));
        assert!(!set.matches(&word("apple")));
        assert!(!set.matches(&word("table")));
    }

    #[test]
    fn target_always_survives_its_own_feedback() {
        let words = [
            "apple", "angle", "table", "llama", "alarm", "alloy", "eerie", "geese", "speed",
            "erase", "robot", "floor", "abbey", "barns", "mamma", "added",
        ];
        for guess in words {
            for target in words {
                let set = scored_set(guess, target);
                assert!(
                    set.matches(&word(target)),
                    "{guess} vs {target} rejected the target: {set}"
                );
            }
        }
    }

    #[test]
    fn row_order_does_not_change_the_set() {
        let first = score_outcome(&word("apple"), &word("angle")).unwrap();
        let second = score_outcome(&word("llama"), &word("angle")).unwrap();

        let forward = Session::from_rows(5, [first.clone(), second.clone()]).unwrap();
        let backward = Session::from_rows(5, [second, first]).unwrap();
        assert_eq!(build_constraints(&forward), build_constraints(&backward));
    }

    #[test]
    fn contradictory_rows_match_nothing() {
        let session = Session::from_rows(
            5,
            [
                GuessRow::parse("apple", "G----").unwrap(),
                GuessRow::parse("axxxx", "-----").unwrap(),
            ],
        )
        .unwrap();

        let set = build_constraints(&session);
        for candidate in ["apple", "angle", "table", "xxxxx"] {
            assert!(!set.matches(&word(candidate)));
        }
    }

    #[test]
    fn uppercase_cells_filter_like_lowercase() {
        use crate::core::LetterFeedback;
        use FeedbackState::{Absent, CorrectPlace};

        let row = GuessRow::new(vec![
            LetterFeedback::new(0, b'A', CorrectPlace),
            LetterFeedback::new(1, b'p', Absent),
            LetterFeedback::new(2, b'p', Absent),
            LetterFeedback::new(3, b'l', Absent),
            LetterFeedback::new(4, b'e', Absent),
        ])
        .unwrap();
        let set: ConstraintSet = row_constraints(&row).into_iter().collect();

        assert!(set.matches(&word("axiom")));
        assert!(!set.matches(&word("bxiom")));
    }
}
