//! Text rendering of a crossword.

use super::error::ConfigError;
use super::geometry::{Position, RectArea};
use super::grid::Grid;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default character for empty cells.
pub const DEFAULT_BACKGROUND: char = '.';

/// Default character printed for non-alphabetic letters.
pub const DEFAULT_UNKNOWN: char = super::word::UNKNOWN_LETTER;

/// Characters used when printing a crossword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Printed for empty cells.
    #[serde(default = "default_background")]
    background: char,

    /// Printed for cells whose letter is not alphabetic.
    #[serde(default = "default_unknown")]
    unknown: char,
}

fn default_background() -> char {
    DEFAULT_BACKGROUND
}

fn default_unknown() -> char {
    DEFAULT_UNKNOWN
}

impl RenderConfig {
    /// Creates the default configuration (`.` background, `?` unknown).
    pub fn new() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            unknown: DEFAULT_UNKNOWN,
        }
    }

    /// Replaces the background character.
    pub fn with_background(mut self, background: char) -> Self {
        self.background = background;
        self
    }

    /// Replaces the unknown-letter character.
    pub fn with_unknown(mut self, unknown: char) -> Self {
        self.unknown = unknown;
        self
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading render config from file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        info!(background = %config.background, unknown = %config.unknown, "Render config loaded");
        Ok(config)
    }

    /// Uppercases `letter`, or substitutes the unknown character when the
    /// result is not alphabetic.
    pub fn symbol(&self, letter: char) -> char {
        let upper = letter.to_uppercase().next().unwrap_or(letter);
        if upper.is_alphabetic() {
            upper
        } else {
            self.unknown
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders `bounds` plus a one-cell margin on every side.
///
/// Cells in a row are separated by a single space and every row ends with a
/// newline. Margin cells outside the coordinate domain print as background.
pub(crate) fn render(grid: &Grid, bounds: &RectArea, config: &RenderConfig) -> String {
    if bounds.is_empty() {
        return String::new();
    }

    let (top_left, bottom_right) = (bounds.top_left(), bounds.bottom_right());
    let rows = top_left.y as i128 - 1..=bottom_right.y as i128 + 1;
    let columns = top_left.x as i128 - 1..=bottom_right.x as i128 + 1;

    let mut out = String::new();
    for y in rows {
        for x in columns.clone() {
            if x != *columns.start() {
                out.push(' ');
            }
            let letter = match (usize::try_from(x), usize::try_from(y)) {
                (Ok(x), Ok(y)) => grid.get(Position::new(x, y)),
                _ => None,
            };
            out.push(letter.map_or(config.background, |l| config.symbol(l.value)));
        }
        out.push('\n');
    }
    out
}
