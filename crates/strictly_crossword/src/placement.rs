//! Placement rules: can a word be added to a grid?
//!
//! Each rule is a precondition on `(grid, word)`. They are checked in order by
//! [`LegalPlacement`] and never mutate the grid.

use super::geometry::Position;
use super::grid::Grid;
use super::word::{Orientation, Word, letters_match};
use tracing::{debug, instrument};

/// Reason a word was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PlacementError {
    /// Walking the word would leave the coordinate domain.
    #[display("Word starting at {} runs off the grid", _0)]
    PathOverflow(Position),

    /// A cell just before or after the word, or beside one of those, is taken.
    #[display("Cell {} next to the end of the word is occupied", _0)]
    BoundaryOccupied(Position),

    /// A shared cell holds an incompatible letter.
    #[display("Cell {} holds {:?}, word needs {:?}", position, existing, candidate)]
    LetterMismatch {
        /// Shared cell.
        position: Position,
        /// Letter already on the grid.
        existing: char,
        /// Letter the word would write.
        candidate: char,
    },

    /// A shared cell is already covered by a word of the same orientation.
    #[display("Cell {} is already covered by a word running the same way", _0)]
    SameOrientationOverlap(Position),

    /// A crossing cell has a neighbour from a word running the same way.
    #[display("Cell {} would run alongside a parallel word", _0)]
    ParallelNeighbor(Position),

    /// A fresh cell touches an occupied cell side by side.
    #[display("Cell {} would touch another word side by side", _0)]
    SideContact(Position),
}

impl std::error::Error for PlacementError {}

/// The word's path stays inside the coordinate domain.
pub struct PathFits;

impl PathFits {
    /// Returns the last cell of the path.
    #[instrument(skip(word), fields(start = %word.start_position()))]
    pub fn check(word: &Word) -> Result<Position, PlacementError> {
        let mut pos = word.start_position();
        for _ in 1..word.len() {
            pos = pos
                .forward(word.orientation())
                .ok_or(PlacementError::PathOverflow(word.start_position()))?;
        }
        Ok(pos)
    }
}

/// Nothing touches the cells just before the start and just after the end.
pub struct BoundaryIsolated;

impl BoundaryIsolated {
    /// Checks the three cells across each end of the path ending at `end`.
    #[instrument(skip(grid, word), fields(start = %word.start_position()))]
    pub fn check(grid: &Grid, word: &Word, end: Position) -> Result<(), PlacementError> {
        let orientation = word.orientation();
        let bounds = [
            word.start_position().backward(orientation),
            end.forward(orientation),
        ];
        for bound in bounds.into_iter().flatten() {
            for perp in [-1, 0, 1] {
                match bound.step(0, perp, orientation) {
                    Some(pos) if grid.is_occupied(pos) => {
                        return Err(PlacementError::BoundaryOccupied(pos));
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}

/// Every cell along the word is either a clean crossing or free of side
/// contact.
pub struct CellsCompatible;

impl CellsCompatible {
    /// Walks the word cell by cell.
    #[instrument(skip(grid, word), fields(start = %word.start_position()))]
    pub fn check(grid: &Grid, word: &Word) -> Result<(), PlacementError> {
        let orientation = word.orientation();
        for (pos, candidate) in word.cells() {
            match grid.get(pos) {
                Some(existing) => {
                    if !letters_match(existing.value, candidate) {
                        return Err(PlacementError::LetterMismatch {
                            position: pos,
                            existing: existing.value,
                            candidate,
                        });
                    }
                    if existing.covered_by(orientation) {
                        return Err(PlacementError::SameOrientationOverlap(pos));
                    }
                    if let Some(neighbor) =
                        Self::side_neighbor(pos, orientation, |n| grid.is_covered_by(n, orientation))
                    {
                        return Err(PlacementError::ParallelNeighbor(neighbor));
                    }
                }
                None => {
                    if let Some(neighbor) =
                        Self::side_neighbor(pos, orientation, |n| grid.is_occupied(n))
                    {
                        return Err(PlacementError::SideContact(neighbor));
                    }
                }
            }
        }
        Ok(())
    }

    /// First perpendicular neighbour of `pos` satisfying `blocked`.
    fn side_neighbor(
        pos: Position,
        orientation: Orientation,
        blocked: impl Fn(Position) -> bool,
    ) -> Option<Position> {
        [-1, 1]
            .into_iter()
            .filter_map(|perp| pos.step(0, perp, orientation))
            .find(|&n| blocked(n))
    }
}

/// All placement rules, in order.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates every precondition for adding `word` to `grid`.
    #[instrument(skip(grid, word), fields(word = %word))]
    pub fn check(grid: &Grid, word: &Word) -> Result<(), PlacementError> {
        let end = PathFits::check(word)?;
        BoundaryIsolated::check(grid, word, end)?;
        CellsCompatible::check(grid, word)?;
        Ok(())
    }
}

/// Whether `word` can be added to `grid`.
pub fn can_place(grid: &Grid, word: &Word) -> bool {
    match LegalPlacement::check(grid, word) {
        Ok(()) => true,
        Err(reason) => {
            debug!(%word, %reason, "Placement rejected");
            false
        }
    }
}
