//! Sparse letter grid.

use super::geometry::Position;
use super::word::{Orientation, Word};
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Contents of an occupied cell.
///
/// A cell with both flags set is the crossing of exactly one horizontal and
/// one vertical word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter {
    /// Stored letter, as written by the most recent word through this cell.
    pub value: char,
    /// A horizontal word covers this cell.
    pub horizontal: bool,
    /// A vertical word covers this cell.
    pub vertical: bool,
}

impl Letter {
    /// Whether a word of `orientation` covers this cell.
    pub fn covered_by(&self, orientation: Orientation) -> bool {
        match orientation {
            Orientation::Horizontal => self.horizontal,
            Orientation::Vertical => self.vertical,
        }
    }
}

/// Map from position to the letter occupying it.
///
/// The grid never rejects anything itself; placement rules live in
/// [`crate::placement`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: BTreeMap<Position, Letter>,
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// The letter at `pos`, if occupied.
    pub fn get(&self, pos: Position) -> Option<&Letter> {
        self.cells.get(&pos)
    }

    /// Whether `pos` holds any letter.
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.cells.contains_key(&pos)
    }

    /// Whether `pos` is covered by a word of `orientation`.
    pub fn is_covered_by(&self, pos: Position, orientation: Orientation) -> bool {
        self.get(pos).is_some_and(|l| l.covered_by(orientation))
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Occupied cells in position order.
    pub fn iter(&self) -> btree_map::Iter<'_, Position, Letter> {
        self.cells.iter()
    }

    /// Writes every letter of `word` and flags its orientation.
    ///
    /// Existing letters are overwritten; the opposite orientation flag of a
    /// crossing is preserved.
    pub(crate) fn write(&mut self, word: &Word) {
        let orientation = word.orientation();
        for (pos, value) in word.cells() {
            let letter = self.cells.entry(pos).or_insert(Letter {
                value,
                horizontal: false,
                vertical: false,
            });
            letter.value = value;
            match orientation {
                Orientation::Horizontal => letter.horizontal = true,
                Orientation::Vertical => letter.vertical = true,
            }
        }
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = (&'a Position, &'a Letter);
    type IntoIter = btree_map::Iter<'a, Position, Letter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_sets_letters_and_flags() {
        let mut grid = Grid::new();
        grid.write(&Word::new(0, 0, Orientation::Horizontal, "CAT"));

        assert_eq!(grid.len(), 3);
        let c = grid.get(Position::new(0, 0)).copied();
        assert_eq!(
            c,
            Some(Letter {
                value: 'C',
                horizontal: true,
                vertical: false
            })
        );
        assert!(grid.is_covered_by(Position::new(2, 0), Orientation::Horizontal));
        assert!(!grid.is_covered_by(Position::new(2, 0), Orientation::Vertical));
        assert!(!grid.is_occupied(Position::new(3, 0)));
    }

    #[test]
    fn test_crossing_keeps_both_flags() {
        let mut grid = Grid::new();
        grid.write(&Word::new(0, 0, Orientation::Horizontal, "CAT"));
        grid.write(&Word::new(0, 0, Orientation::Vertical, "cow"));

        let corner = grid.get(Position::ORIGIN).copied();
        assert_eq!(
            corner,
            Some(Letter {
                value: 'c',
                horizontal: true,
                vertical: true
            })
        );
        assert_eq!(grid.len(), 5);
    }
}
