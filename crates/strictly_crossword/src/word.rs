//! Words placed on the grid.

use super::geometry::{Position, RectArea};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use tracing::{debug, instrument};

/// The "unknown letter" wildcard.
///
/// Substituted for empty input and returned for out-of-range access. It is
/// compatible with every letter during placement checks.
pub const UNKNOWN_LETTER: char = '?';

/// Direction a word runs in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Orientation {
    /// Advances along x, left to right.
    #[serde(alias = "h")]
    #[strum(to_string = "horizontal", serialize = "h")]
    Horizontal,
    /// Advances along y, top to bottom.
    #[serde(alias = "v")]
    #[strum(to_string = "vertical", serialize = "v")]
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn perpendicular(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Compares two letters for placement purposes.
///
/// Letters match case-insensitively, and [`UNKNOWN_LETTER`] matches anything.
pub fn letters_match(a: char, b: char) -> bool {
    a == UNKNOWN_LETTER || b == UNKNOWN_LETTER || a.to_uppercase().eq(b.to_uppercase())
}

/// An immutable string placed at a start position with an orientation.
///
/// Identity is the slot, not the text: two words are equal when they share
/// start position and orientation.
#[derive(Debug, Clone)]
pub struct Word {
    start: Position,
    orientation: Orientation,
    letters: Vec<char>,
}

impl Word {
    /// Creates a word starting at `(x, y)`.
    ///
    /// Empty text becomes a single [`UNKNOWN_LETTER`]. Text that would run past
    /// `usize::MAX` is truncated to the longest prefix that fits, so
    /// [`Word::end_position`] never overflows.
    #[instrument(skip(text), fields(text = %text.as_ref()))]
    pub fn new(x: usize, y: usize, orientation: Orientation, text: impl AsRef<str>) -> Self {
        let start = Position::new(x, y);
        let mut letters: Vec<char> = text.as_ref().chars().collect();
        if letters.is_empty() {
            letters.push(UNKNOWN_LETTER);
        }

        let room = usize::MAX - start.along(orientation);
        if letters.len() - 1 > room {
            debug!(kept = room + 1, "Truncating word at the edge of the grid");
            letters.truncate(room + 1);
        }

        Self {
            start,
            orientation,
            letters,
        }
    }

    /// First cell of the word.
    pub fn start_position(&self) -> Position {
        self.start
    }

    /// Last cell of the word.
    pub fn end_position(&self) -> Position {
        let offset = self.letters.len() - 1;
        match self.orientation {
            Orientation::Horizontal => Position::new(self.start.x + offset, self.start.y),
            Orientation::Vertical => Position::new(self.start.x, self.start.y + offset),
        }
    }

    /// Direction the word runs in.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of letters, never zero.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; empty input is replaced by the wildcard.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letter at `index`, or [`UNKNOWN_LETTER`] when out of range.
    pub fn at(&self, index: usize) -> char {
        self.letters.get(index).copied().unwrap_or(UNKNOWN_LETTER)
    }

    /// The letters as a string.
    pub fn text(&self) -> String {
        self.letters.iter().collect()
    }

    /// The rectangle spanned by the word.
    pub fn rect_area(&self) -> RectArea {
        RectArea::new(self.start, self.end_position())
    }

    /// Cells covered by the word, paired with their letters, from start to end.
    pub fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        let orientation = self.orientation;
        let mut next = Some(self.start);
        self.letters.iter().map_while(move |&letter| {
            let pos = next?;
            next = pos.forward(orientation);
            Some((pos, letter))
        })
    }

    /// Deterministic enumeration order: every horizontal word before every
    /// vertical word, then by text.
    ///
    /// Distinct from equality, which only looks at the slot.
    pub fn enumeration_order(&self, other: &Word) -> Ordering {
        self.orientation
            .cmp(&other.orientation)
            .then_with(|| self.letters.cmp(&other.letters))
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.orientation == other.orientation
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.orientation.hash(state);
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} at {}", self.text(), self.orientation, self.start)
    }
}
