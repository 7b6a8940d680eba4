//! Interactive sessions for both tools.
//!
//! Sessions read from any `BufRead` and write to any `Write`, so the binary
//! wires them to stdin/stdout while tests drive them with in-memory scripts.
//!
//! - [`LibrarySession`]: the `lib>` command loop over a loaded catalog
//! - [`CarpetSession`]: carpet setup prompts followed by pattern queries

use thiserror::Error;

use crate::grid::carpet::GridError;

pub mod carpet;
pub mod input;
pub mod library;

pub use carpet::CarpetSession;
pub use library::LibrarySession;

#[derive(Error, Debug)]
pub enum ReplError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("Invalid input: '{0}' is not a number")]
    InvalidNumber(String),

    #[error("Input ended before the carpet was complete")]
    UnexpectedEof,
}
