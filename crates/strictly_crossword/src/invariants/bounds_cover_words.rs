//! The bounding rectangle is exactly the box around every placed word.

use super::Invariant;
use crate::Crossword;
use crate::geometry::RectArea;

/// Invariant: the bounding rectangle equals the minimal rectangle embracing
/// every placed word's start and end.
pub struct BoundsCoverWordsInvariant;

impl Invariant<Crossword> for BoundsCoverWordsInvariant {
    fn holds(crossword: &Crossword) -> bool {
        let mut expected = RectArea::EMPTY;
        for word in crossword.words() {
            expected.embrace(word.start_position());
            expected.embrace(word.end_position());
        }
        expected == *crossword.bounds()
    }

    fn description() -> &'static str {
        "Bounding rectangle is the minimal box around all words"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;
    use crate::{Orientation, Word};

    #[test]
    fn test_single_word_holds() {
        let cw = Crossword::new(Word::new(3, 4, Orientation::Vertical, "TALL"), []);
        assert!(BoundsCoverWordsInvariant::holds(&cw));
    }

    #[test]
    fn test_merged_crossword_holds() {
        let a = Crossword::new(Word::new(0, 0, Orientation::Horizontal, "CAT"), []);
        let b = Crossword::new(Word::new(0, 0, Orientation::Vertical, "CAR"), []);
        assert!(BoundsCoverWordsInvariant::holds(&(&a + &b)));
    }

    #[test]
    fn test_stray_point_in_bounds_is_detected() {
        let mut cw = Crossword::new(Word::new(0, 0, Orientation::Horizontal, "CAT"), []);
        cw.bounds_mut().embrace(Position::new(9, 9));
        assert!(!BoundsCoverWordsInvariant::holds(&cw));
    }

    #[test]
    fn test_shrunken_bounds_are_detected() {
        let mut cw = Crossword::new(Word::new(0, 0, Orientation::Horizontal, "CAT"), []);
        *cw.bounds_mut() = RectArea::new(Position::new(0, 0), Position::new(1, 0));
        assert!(!BoundsCoverWordsInvariant::holds(&cw));
    }
}
