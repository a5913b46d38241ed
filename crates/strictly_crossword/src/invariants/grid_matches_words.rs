//! The letter grid is exactly the union of the placed words.

use super::Invariant;
use crate::Crossword;
use crate::geometry::Position;
use crate::word::Orientation;
use std::collections::BTreeMap;

/// Invariant: every cell of every word is on the grid with that word's
/// orientation flag, every grid cell belongs to some word, and no cell is
/// covered twice by the same orientation.
pub struct GridMatchesWordsInvariant;

impl Invariant<Crossword> for GridMatchesWordsInvariant {
    fn holds(crossword: &Crossword) -> bool {
        let mut coverage: BTreeMap<Position, (usize, usize)> = BTreeMap::new();
        for word in crossword.words() {
            for (pos, _) in word.cells() {
                let entry = coverage.entry(pos).or_default();
                match word.orientation() {
                    Orientation::Horizontal => entry.0 += 1,
                    Orientation::Vertical => entry.1 += 1,
                }
            }
        }

        if coverage.len() != crossword.grid().len() {
            return false;
        }

        coverage.iter().all(|(pos, &(h, v))| {
            h <= 1
                && v <= 1
                && crossword
                    .grid()
                    .get(*pos)
                    .is_some_and(|l| l.horizontal == (h == 1) && l.vertical == (v == 1))
        })
    }

    fn description() -> &'static str {
        "Grid cells are exactly the cells of the placed words"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Word;

    #[test]
    fn test_crossing_holds() {
        let cw = Crossword::new(
            Word::new(0, 0, Orientation::Horizontal, "CAT"),
            [Word::new(2, 0, Orientation::Vertical, "TOP")],
        );
        assert_eq!(cw.word_count().total(), 2);
        assert_eq!(cw.grid().len(), 5);
        assert!(GridMatchesWordsInvariant::holds(&cw));
    }

    #[test]
    fn test_extra_cell_is_detected() {
        let mut cw = Crossword::new(Word::new(0, 0, Orientation::Horizontal, "CAT"), []);
        cw.grid_mut().write(&Word::new(5, 5, Orientation::Vertical, "X"));
        assert!(!GridMatchesWordsInvariant::holds(&cw));
    }

    #[test]
    fn test_stray_orientation_flag_is_detected() {
        // Same cell count, but (0, 0) now claims a vertical word that was never placed.
        let mut cw = Crossword::new(Word::new(0, 0, Orientation::Horizontal, "CAT"), []);
        cw.grid_mut().write(&Word::new(0, 0, Orientation::Vertical, "C"));
        assert_eq!(cw.grid().len(), 3);
        assert!(!GridMatchesWordsInvariant::holds(&cw));
    }

    #[test]
    fn test_same_orientation_double_cover_is_detected() {
        // AT overlaps CAT horizontally; the grid flags look fine but the cell is covered twice.
        let mut cw = Crossword::new(Word::new(0, 0, Orientation::Horizontal, "CAT"), []);
        let overlap = Word::new(1, 0, Orientation::Horizontal, "AT");
        cw.grid_mut().write(&overlap);
        cw.words_mut().push(overlap);
        assert_eq!(cw.grid().len(), 3);
        assert!(!GridMatchesWordsInvariant::holds(&cw));
    }
}
