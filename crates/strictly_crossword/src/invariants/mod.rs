//! Consistency checks between a crossword's word list and its derived state.
//!
//! A [`Crossword`](crate::Crossword) stores its words alongside a bounding
//! rectangle, per-orientation counters and a letter grid, all updated on
//! commit. Each check here rebuilds one of those from the word list and
//! compares. Debug builds run the full set after every placement.

pub mod bounds_cover_words;
pub mod counts_match_words;
pub mod grid_matches_words;

pub use bounds_cover_words::BoundsCoverWordsInvariant;
pub use counts_match_words::CountsMatchWordsInvariant;
pub use grid_matches_words::GridMatchesWordsInvariant;

/// A consistency check on some crossword state `S`.
pub trait Invariant<S> {
    /// Whether `state` passes the check.
    fn holds(state: &S) -> bool;

    /// What the check asserts, used in violation reports.
    fn description() -> &'static str;
}

/// A failed check, named by its description.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the failed check.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps a check description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several checks run together, reporting every failure rather than the first.
///
/// Implemented for pairs and triples of [`Invariant`]s; violations come back
/// in tuple order.
pub trait InvariantSet<S> {
    /// Runs every check.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        tracing::warn!(invariant = I::description(), "Invariant violated");
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

/// All crossword invariants as a composable set.
pub type CrosswordInvariants = (
    BoundsCoverWordsInvariant,
    CountsMatchWordsInvariant,
    GridMatchesWordsInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;
    use crate::{Crossword, Orientation, Word};

    fn violation<I: Invariant<Crossword>>() -> InvariantViolation {
        InvariantViolation::new(I::description())
    }

    #[test]
    fn test_invariant_set_holds_for_seed() {
        let cw = Crossword::new(Word::new(0, 0, Orientation::Horizontal, "SEED"), []);
        assert!(CrosswordInvariants::check_all(&cw).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_insertions() {
        let cw = Crossword::new(
            Word::new(2, 2, Orientation::Horizontal, "TRAIN"),
            [
                Word::new(2, 0, Orientation::Vertical, "ACT"),
                Word::new(6, 2, Orientation::Vertical, "NOD"),
                Word::new(4, 1, Orientation::Vertical, "LAB"),
            ],
        );
        assert!(CrosswordInvariants::check_all(&cw).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_corrupted_bounds_and_counts() {
        let mut cw = Crossword::new(Word::new(0, 0, Orientation::Horizontal, "CAT"), []);
        cw.count_mut().vertical += 1;
        cw.bounds_mut().embrace(Position::new(9, 9));

        assert_eq!(
            CrosswordInvariants::check_all(&cw),
            Err(vec![
                violation::<BoundsCoverWordsInvariant>(),
                violation::<CountsMatchWordsInvariant>(),
            ])
        );
    }

    #[test]
    fn test_invariant_set_detects_same_orientation_double_cover() {
        let mut cw = Crossword::new(Word::new(0, 0, Orientation::Horizontal, "CAT"), []);
        let overlap = Word::new(1, 0, Orientation::Horizontal, "AT");
        cw.grid_mut().write(&overlap);
        cw.words_mut().push(overlap);

        assert_eq!(
            CrosswordInvariants::check_all(&cw),
            Err(vec![
                violation::<CountsMatchWordsInvariant>(),
                violation::<GridMatchesWordsInvariant>(),
            ])
        );
    }

    #[test]
    fn test_invariant_set_detects_extra_grid_cell() {
        let mut cw = Crossword::new(Word::new(0, 0, Orientation::Horizontal, "CAT"), []);
        cw.grid_mut().write(&Word::new(5, 5, Orientation::Vertical, "X"));

        assert_eq!(
            CrosswordInvariants::check_all(&cw),
            Err(vec![violation::<GridMatchesWordsInvariant>()])
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        let cw = Crossword::new(Word::new(5, 1, Orientation::Vertical, "AB"), []);
        type TwoInvariants = (BoundsCoverWordsInvariant, CountsMatchWordsInvariant);
        assert!(TwoInvariants::check_all(&cw).is_ok());
    }
}
