//! Orientation counters agree with the placed-word list.

use super::Invariant;
use crate::Crossword;
use crate::word::Orientation;

/// Invariant: the horizontal and vertical counters equal the number of placed
/// words of each orientation.
pub struct CountsMatchWordsInvariant;

impl Invariant<Crossword> for CountsMatchWordsInvariant {
    fn holds(crossword: &Crossword) -> bool {
        let count = |o: Orientation| {
            crossword
                .words()
                .iter()
                .filter(|w| w.orientation() == o)
                .count()
        };
        let counts = crossword.word_count();
        counts.horizontal == count(Orientation::Horizontal)
            && counts.vertical == count(Orientation::Vertical)
    }

    fn description() -> &'static str {
        "Orientation counters match the placed words"
    }
}
