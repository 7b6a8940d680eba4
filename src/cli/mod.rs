//! Command-line interface for shelfscan.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **library**: Load a catalog file and query it, interactively or once
//! - **carpet**: Build a color carpet and search it for 2x2 patterns
//!
//! ## Usage
//!
//! ```text
//! # Interactive catalog queries (prompts "lib> ")
//! shelfscan library libraries.csv
//!
//! # One-shot query with JSON output
//! shelfscan library libraries.csv reservable "Tove Jansson" Comet in Moominland --format json
//!
//! # Interactive carpet session
//! shelfscan carpet
//!
//! # Batch carpet search
//! shelfscan carpet --width 6 --height 4 --seed 7 --pattern RGBY --pattern WWWW
//! ```

use clap::{Parser, Subcommand};

pub mod carpet;
pub mod library;

#[derive(Parser)]
#[command(name = "shelfscan")]
#[command(version)]
#[command(about = "Query library catalogs and search color carpets for patterns")]
#[command(
    long_about = "shelfscan bundles two small tools:\n\n- library: load a delimited catalog of library books and answer queries about authors, reservations and loanable titles\n- carpet: build a color carpet from a seed or an explicit color string and find every 2x2 pattern in it"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for one-shot commands
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Query a library catalog file
    Library(library::LibraryArgs),

    /// Search a color carpet for 2x2 patterns
    Carpet(carpet::CarpetArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
