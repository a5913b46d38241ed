//! Puzzle files: render settings and an ordered list of words.

use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_crossword::{ConfigError, Crossword, Orientation, PlacementError, RenderConfig, Word};
use tracing::{debug, info, instrument, warn};

/// One word entry of a puzzle file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSpec {
    /// Start column.
    pub x: usize,
    /// Start row.
    pub y: usize,
    /// Direction of the word.
    pub orientation: Orientation,
    /// Letters, may be empty.
    #[serde(default)]
    pub text: String,
}

impl WordSpec {
    /// Builds the word this entry describes.
    pub fn to_word(&self) -> Word {
        Word::new(self.x, self.y, self.orientation, &self.text)
    }
}

/// Parsed puzzle file.
///
/// The first word is the seed; the rest are candidates tried in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// Render characters.
    #[serde(default)]
    pub render: RenderConfig,
    /// Seed followed by candidates.
    #[serde(default)]
    pub words: Vec<WordSpec>,
}

/// A candidate that did not make it into the crossword.
#[derive(Debug, Clone, Serialize)]
pub struct Refusal {
    /// The refused entry.
    pub word: WordSpec,
    /// Why it was refused.
    pub reason: String,
}

impl Puzzle {
    /// Parses a puzzle from TOML text.
    #[instrument(skip(content))]
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let puzzle: Self = toml::from_str(content)?;
        puzzle.split()?;
        debug!(words = puzzle.words.len(), "Puzzle parsed");
        Ok(puzzle)
    }

    /// Loads a puzzle from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let puzzle = Self::parse(&content)?;
        info!(words = puzzle.words.len(), "Puzzle loaded");
        Ok(puzzle)
    }

    /// Builds the crossword, silently skipping refused candidates.
    pub fn build(&self) -> Result<Crossword, ConfigError> {
        let (seed, candidates) = self.split()?;
        Ok(Crossword::new(seed.to_word(), candidates.iter().map(WordSpec::to_word)))
    }

    /// Builds the crossword and records every refused candidate with its reason.
    #[instrument(skip(self))]
    pub fn build_explained(&self) -> Result<(Crossword, Vec<Refusal>), ConfigError> {
        let (seed, candidates) = self.split()?;
        let mut crossword = Crossword::new(seed.to_word(), []);
        let mut refusals = Vec::new();
        for spec in candidates {
            if let Err(reason) = crossword.try_insert_word(spec.to_word()) {
                warn!(word = %spec.text, %reason, "Candidate refused");
                refusals.push(Refusal::new(spec.clone(), &reason));
            }
        }
        Ok((crossword, refusals))
    }

    fn split(&self) -> Result<(&WordSpec, &[WordSpec]), ConfigError> {
        self.words
            .split_first()
            .ok_or_else(|| ConfigError::new("Puzzle has no words; the first word is the seed"))
    }
}

impl Refusal {
    fn new(word: WordSpec, reason: &PlacementError) -> Self {
        Self {
            word,
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use strictly_crossword::WordCount;

    const CAT_CAR: &str = r#"
[render]
background = "_"

[[words]]
x = 0
y = 0
orientation = "horizontal"
text = "CAT"

[[words]]
x = 0
y = 0
orientation = "v"
text = "CAR"

[[words]]
x = 3
y = 0
orientation = "h"
text = "AT"
"#;

    #[test]
    fn test_parse_puzzle() {
        let puzzle = Puzzle::parse(CAT_CAR).unwrap();
        assert_eq!(puzzle.words.len(), 3);
        assert_eq!(puzzle.words[1].orientation, Orientation::Vertical);
        assert_eq!(*puzzle.render.background(), '_');
        assert_eq!(*puzzle.render.unknown(), '?');
    }

    #[test]
    fn test_build_skips_refused() {
        let cw = Puzzle::parse(CAT_CAR).unwrap().build().unwrap();
        assert_eq!(cw.word_count(), WordCount::new(1, 1));
    }

    #[test]
    fn test_build_explained_lists_refusals() {
        let (cw, refusals) = Puzzle::parse(CAT_CAR).unwrap().build_explained().unwrap();
        assert_eq!(cw.word_count(), WordCount::new(1, 1));
        assert_eq!(refusals.len(), 1);
        assert_eq!(refusals[0].word.text, "AT");
        assert!(refusals[0].reason.contains("(2, 0)"));
    }

    #[test]
    fn test_puzzle_without_words_is_an_error() {
        let err = Puzzle::parse("[render]\nbackground = \"#\"\n").unwrap_err();
        assert!(err.message.contains("no words"));
    }

    #[test]
    fn test_empty_puzzle_is_refused_by_parse_and_build_alike() {
        let parse_err = Puzzle::parse("").unwrap_err();
        let empty = Puzzle {
            render: RenderConfig::default(),
            words: Vec::new(),
        };
        let build_err = empty.build().unwrap_err();
        assert_eq!(parse_err.message, build_err.message);
        assert!(empty.build_explained().is_err());
    }

    #[test]
    fn test_missing_text_is_a_wildcard() {
        let puzzle = Puzzle::parse("[[words]]\nx = 1\ny = 2\norientation = \"vertical\"\n").unwrap();
        let cw = puzzle.build().unwrap();
        assert_eq!(cw.render(), ". . .\n. ? .\n. . .\n");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", CAT_CAR).unwrap();
        let puzzle = Puzzle::from_file(file.path()).unwrap();
        assert_eq!(puzzle, Puzzle::parse(CAT_CAR).unwrap());
    }
}
