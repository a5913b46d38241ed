//! Command-line interface for the crossword host.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Build crosswords from puzzle files and print them
#[derive(Parser, Debug)]
#[command(name = "crossword")]
#[command(about = "Assemble and render crossword grids", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the assembled grid
    Render {
        /// Puzzle file (TOML)
        puzzle: PathBuf,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Print size, word counts and refused candidates
    Stats {
        /// Puzzle file (TOML)
        puzzle: PathBuf,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Merge the second puzzle into the first and print the result
    Merge {
        /// Puzzle receiving the words
        first: PathBuf,

        /// Puzzle whose words are merged in
        second: PathBuf,

        #[command(flatten)]
        style: StyleArgs,
    },
}

/// Overrides for the render characters
#[derive(Args, Debug, Clone, Default)]
pub struct StyleArgs {
    /// Character for empty cells
    #[arg(long)]
    pub background: Option<char>,

    /// Character for non-alphabetic letters
    #[arg(long)]
    pub unknown: Option<char>,
}
