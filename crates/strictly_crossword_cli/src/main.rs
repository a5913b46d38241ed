//! Crossword host - builds crosswords from puzzle files.

#![warn(missing_docs)]

mod cli;
mod puzzle;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, StyleArgs};
use puzzle::Puzzle;
use serde::Serialize;
use std::path::Path;
use strictly_crossword::{Dimensions, RenderConfig, WordCount};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Render { puzzle, style } => run_render(&puzzle, &style),
        Command::Stats { puzzle, json } => run_stats(&puzzle, json),
        Command::Merge {
            first,
            second,
            style,
        } => run_merge(&first, &second, &style),
    }
}

/// Applies command-line overrides on top of the puzzle's own settings.
fn render_config(base: RenderConfig, style: &StyleArgs) -> RenderConfig {
    let mut config = base;
    if let Some(background) = style.background {
        config = config.with_background(background);
    }
    if let Some(unknown) = style.unknown {
        config = config.with_unknown(unknown);
    }
    config
}

/// Print the assembled grid
#[instrument(skip(style))]
fn run_render(path: &Path, style: &StyleArgs) -> Result<()> {
    let puzzle = Puzzle::from_file(path)?;
    let crossword = puzzle.build()?;
    info!(count = %crossword.word_count(), size = %crossword.size(), "Crossword built");
    print!("{}", crossword.render_with(&render_config(puzzle.render, style)));
    Ok(())
}

#[derive(Debug, Serialize)]
struct StatsReport {
    size: Dimensions,
    words: WordCount,
    refused: Vec<puzzle::Refusal>,
}

/// Print size, word counts and refused candidates
#[instrument]
fn run_stats(path: &Path, json: bool) -> Result<()> {
    let puzzle = Puzzle::from_file(path)?;
    let (crossword, refused) = puzzle.build_explained()?;
    let report = StatsReport {
        size: crossword.size(),
        words: crossword.word_count(),
        refused,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("size: {}", report.size);
    println!("words: {}", report.words);
    for refusal in &report.refused {
        println!(
            "refused: {:?} {} at ({}, {}): {}",
            refusal.word.text,
            refusal.word.orientation,
            refusal.word.x,
            refusal.word.y,
            refusal.reason
        );
    }
    Ok(())
}

/// Merge the second puzzle into the first and print the result
#[instrument(skip(style))]
fn run_merge(first: &Path, second: &Path, style: &StyleArgs) -> Result<()> {
    let base = Puzzle::from_file(first)?;
    let mut crossword = base.build()?;
    let incoming = Puzzle::from_file(second)?.build()?;

    let before = crossword.word_count().total();
    crossword += &incoming;
    info!(
        accepted = crossword.word_count().total() - before,
        offered = incoming.word_count().total(),
        "Merged puzzles"
    );

    print!("{}", crossword.render_with(&render_config(base.render, style)));
    Ok(())
}
