//! The crossword assembly: placed words plus derived grid state.

use super::geometry::{Dimensions, Position, RectArea};
use super::grid::{Grid, Letter};
use super::placement::{LegalPlacement, PlacementError, can_place};
use super::render::{RenderConfig, render};
use super::word::{Orientation, Word};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};
use tracing::{debug, instrument};

/// Number of placed words per orientation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, derive_new::new,
)]
#[display("{} horizontal, {} vertical", horizontal, vertical)]
pub struct WordCount {
    /// Horizontal words.
    pub horizontal: usize,
    /// Vertical words.
    pub vertical: usize,
}

impl WordCount {
    /// Words of both orientations.
    pub fn total(&self) -> usize {
        self.horizontal + self.vertical
    }
}

impl From<WordCount> for (usize, usize) {
    fn from(count: WordCount) -> Self {
        (count.horizontal, count.vertical)
    }
}

/// A set of words laid out on the grid so that every placement rule holds.
///
/// Built from a seed word, it only ever grows: words are added through
/// [`Crossword::insert_word`] or [`Crossword::merge`] and never removed.
/// Cloning copies the whole aggregate; instances never share state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crossword {
    words: Vec<Word>,
    bounds: RectArea,
    count: WordCount,
    grid: Grid,
}

impl Crossword {
    /// Builds a crossword from `seed`, then tries each candidate in order.
    ///
    /// The seed is always placed. Candidates that break a placement rule are
    /// skipped.
    #[instrument(skip(candidates), fields(seed = %seed))]
    pub fn new(seed: Word, candidates: impl IntoIterator<Item = Word>) -> Self {
        let mut crossword = Self {
            words: Vec::new(),
            bounds: RectArea::EMPTY,
            count: WordCount::default(),
            grid: Grid::new(),
        };
        crossword.commit(seed);
        for word in candidates {
            crossword.insert_word(word);
        }
        crossword
    }

    /// Adds `word` if every placement rule allows it.
    ///
    /// Returns `false` and leaves the crossword untouched otherwise.
    #[instrument(skip(self, word), fields(word = %word))]
    pub fn insert_word(&mut self, word: Word) -> bool {
        if !can_place(&self.grid, &word) {
            return false;
        }
        self.commit(word);
        true
    }

    /// Like [`Crossword::insert_word`], but reports why a word was refused.
    #[instrument(skip(self, word), fields(word = %word))]
    pub fn try_insert_word(&mut self, word: Word) -> Result<(), PlacementError> {
        LegalPlacement::check(&self.grid, &word)?;
        self.commit(word);
        Ok(())
    }

    /// Whether `word` could be inserted right now.
    pub fn can_insert(&self, word: &Word) -> bool {
        can_place(&self.grid, word)
    }

    /// Width and height of the bounding box of all words.
    pub fn size(&self) -> Dimensions {
        if self.words.is_empty() {
            return Dimensions::ZERO;
        }
        self.bounds.size()
    }

    /// Number of placed words per orientation.
    pub fn word_count(&self) -> WordCount {
        if self.words.is_empty() {
            return WordCount::default();
        }
        self.count
    }

    /// Tries to insert every word of `other`, in its stored order, against
    /// this crossword's current state. Refused words are dropped.
    ///
    /// Not symmetric: what gets accepted depends on what is already here.
    #[instrument(skip(self, other), fields(incoming = other.words.len()))]
    pub fn merge(&mut self, other: &Crossword) -> &mut Self {
        let mut accepted = 0usize;
        for word in &other.words {
            if self.insert_word(word.clone()) {
                accepted += 1;
            }
        }
        debug!(accepted, dropped = other.words.len() - accepted, "Merge finished");
        self
    }

    /// A new crossword holding `a` with `b` merged into it.
    pub fn merged(a: &Crossword, b: &Crossword) -> Crossword {
        let mut out = a.clone();
        out.merge(b);
        out
    }

    /// Placed words in insertion order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Placed words in enumeration order: horizontal first, then by text.
    pub fn sorted_words(&self) -> Vec<&Word> {
        let mut words: Vec<&Word> = self.words.iter().collect();
        words.sort_by(|a, b| a.enumeration_order(b));
        words
    }

    /// The minimal rectangle covering every placed word.
    pub fn bounds(&self) -> &RectArea {
        &self.bounds
    }

    /// The letter grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The letter at `pos`, if any.
    pub fn letter_at(&self, pos: Position) -> Option<&Letter> {
        self.grid.get(pos)
    }

    /// Renders the crossword with custom characters.
    pub fn render_with(&self, config: &RenderConfig) -> String {
        render(&self.grid, &self.bounds, config)
    }

    /// Renders the crossword with the default characters.
    pub fn render(&self) -> String {
        self.render_with(&RenderConfig::default())
    }

    /// Records a word that already passed the placement rules.
    fn commit(&mut self, word: Word) {
        self.bounds.embrace(word.start_position());
        self.bounds.embrace(word.end_position());
        match word.orientation() {
            Orientation::Horizontal => self.count.horizontal += 1,
            Orientation::Vertical => self.count.vertical += 1,
        }
        self.grid.write(&word);
        self.words.push(word);

        #[cfg(debug_assertions)]
        {
            use super::invariants::{CrosswordInvariants, InvariantSet};
            debug_assert!(
                CrosswordInvariants::check_all(self).is_ok(),
                "Crossword invariants violated"
            );
        }
    }
}

/// Raw access to the derived state, for tests that corrupt it on purpose.
#[cfg(test)]
impl Crossword {
    pub(crate) fn words_mut(&mut self) -> &mut Vec<Word> {
        &mut self.words
    }

    pub(crate) fn bounds_mut(&mut self) -> &mut RectArea {
        &mut self.bounds
    }

    pub(crate) fn count_mut(&mut self) -> &mut WordCount {
        &mut self.count
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}

impl AddAssign<&Crossword> for Crossword {
    fn add_assign(&mut self, other: &Crossword) {
        self.merge(other);
    }
}

impl Add for &Crossword {
    type Output = Crossword;

    fn add(self, other: Self) -> Crossword {
        Crossword::merged(self, other)
    }
}

impl std::fmt::Display for Crossword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat() -> Word {
        Word::new(0, 0, Orientation::Horizontal, "CAT")
    }

    #[test]
    fn test_seed_only() {
        let cw = Crossword::new(cat(), []);
        assert_eq!(cw.word_count(), WordCount::new(1, 0));
        assert_eq!(cw.size(), Dimensions::new(3, 1));
        assert_eq!(cw.words(), &[cat()]);
    }

    #[test]
    fn test_insert_crossing() {
        let mut cw = Crossword::new(cat(), []);
        assert!(cw.insert_word(Word::new(0, 0, Orientation::Vertical, "CAR")));
        assert_eq!(cw.word_count(), WordCount::new(1, 1));
        assert_eq!(cw.size(), Dimensions::new(3, 3));
    }

    #[test]
    fn test_rejected_insert_leaves_state() {
        let mut cw = Crossword::new(cat(), []);
        let before = cw.clone();
        assert!(!cw.insert_word(Word::new(0, 0, Orientation::Vertical, "DOG")));
        assert_eq!(cw, before);
    }

    #[test]
    fn test_try_insert_reports_reason() {
        let mut cw = Crossword::new(cat(), []);
        let err = cw
            .try_insert_word(Word::new(3, 0, Orientation::Horizontal, "AT"))
            .unwrap_err();
        assert_eq!(err, PlacementError::BoundaryOccupied(Position::new(2, 0)));
        assert!(cw.try_insert_word(Word::new(2, 0, Orientation::Vertical, "TOP")).is_ok());
        assert_eq!(cw.word_count().total(), 2);
    }

    #[test]
    fn test_seed_is_committed_even_at_the_edge() {
        let cw = Crossword::new(Word::new(usize::MAX, usize::MAX, Orientation::Vertical, "XYZ"), []);
        assert_eq!(cw.size(), Dimensions::new(1, 1));
        assert_eq!(
            cw.letter_at(Position::new(usize::MAX, usize::MAX)).map(|l| l.value),
            Some('X')
        );
    }

    #[test]
    fn test_merge_operators_agree() {
        let a = Crossword::new(cat(), []);
        let b = Crossword::new(Word::new(2, 0, Orientation::Vertical, "TEN"), []);

        let sum = &a + &b;
        let mut acc = a.clone();
        acc += &b;
        let mut chained = a.clone();
        chained.merge(&b).merge(&b);

        assert_eq!(sum, acc);
        assert_eq!(sum, chained);
        assert_eq!(sum.word_count(), WordCount::new(1, 1));
        // Operands are untouched.
        assert_eq!(a.word_count(), WordCount::new(1, 0));
    }

    #[test]
    fn test_sorted_words() {
        let cw = Crossword::new(
            Word::new(0, 2, Orientation::Horizontal, "ZOO"),
            [
                Word::new(0, 0, Orientation::Vertical, "ABZ"),
                Word::new(2, 0, Orientation::Vertical, "COO"),
            ],
        );
        let texts: Vec<String> = cw.sorted_words().iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["ZOO", "ABZ", "COO"]);
    }
}
