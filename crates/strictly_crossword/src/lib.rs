//! Crossword grid assembly.
//!
//! Places words on an unbounded grid of unsigned coordinates and keeps every
//! placement consistent with the crossword rules: words cross only at
//! matching letters, never touch side by side, and never run into each other
//! end to end.
//!
//! # Architecture
//!
//! - **Geometry**: positions, dimensions and bounding rectangles with
//!   overflow-checked stepping
//! - **Word**: an immutable placed string with orientation
//! - **Grid**: sparse map from position to letter and orientation flags
//! - **Placement**: the rules a word must satisfy before it is added
//! - **Crossword**: the assembly that owns words, grid and derived state
//!
//! # Example
//!
//! ```
//! use strictly_crossword::{Crossword, Orientation, Word};
//!
//! let mut crossword = Crossword::new(Word::new(0, 0, Orientation::Horizontal, "CAT"), []);
//! assert!(crossword.insert_word(Word::new(0, 0, Orientation::Vertical, "CAR")));
//! assert_eq!(crossword.size().width, 3);
//! print!("{crossword}");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod crossword;
mod error;
mod geometry;
mod grid;
pub mod invariants;
pub mod placement;
mod render;
mod word;

// Crate-level exports - Geometry
pub use geometry::{Dimensions, Position, RectArea};

// Crate-level exports - Words
pub use word::{Orientation, UNKNOWN_LETTER, Word, letters_match};

// Crate-level exports - Grid state
pub use grid::{Grid, Letter};

// Crate-level exports - Placement
pub use placement::{PlacementError, can_place};

// Crate-level exports - Assembly
pub use crossword::{Crossword, WordCount};

// Crate-level exports - Rendering and configuration
pub use error::ConfigError;
pub use render::{DEFAULT_BACKGROUND, DEFAULT_UNKNOWN, RenderConfig};
