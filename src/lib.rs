//! # shelfscan
//!
//! Two small command-line tools in one crate.
//!
//! **Library catalog.** A catalog file lists which library holds which
//! book and how many reservations each copy has. `shelfscan` loads the file
//! once and answers questions about it: which libraries exist, what a
//! library holds, which copies of an author's books are on the shelf, and
//! where a book can be reserved with the shortest queue.
//!
//! **Color carpet.** A carpet is a grid of five colors, generated from a
//! seed or typed in. `shelfscan` finds every place a 2x2 pattern of colors
//! occurs in it.
//!
//! ## Example
//!
//! ```rust
//! use shelfscan::{CatalogQuery, Grid, LibraryCatalog, Pattern};
//!
//! let catalog = LibraryCatalog::from_text("A;Bob;Book1;0\nA;Bob;Book2;3\n").unwrap();
//! let query = CatalogQuery::new(&catalog);
//! for entry in query.books_by_author("A", "Bob").unwrap() {
//!     println!("{entry}");
//! }
//!
//! let carpet = Grid::from_seed(8, 5, 3).unwrap();
//! let result = carpet.search(&Pattern::parse("RGBY").unwrap());
//! println!(" = Matches found: {}", result.count());
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Catalog storage, flattened index and queries
//! - [`core`]: Colors, books and shared value types
//! - [`grid`]: Carpets and 2x2 pattern search
//! - [`parsing`]: Catalog file and REPL command parsers
//! - [`repl`]: Interactive sessions for both tools
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod grid;
pub mod parsing;
pub mod repl;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::query::{CatalogQuery, Query, QueryOutput, Reservability};
pub use catalog::store::LibraryCatalog;
pub use core::book::Book;
pub use core::color::Color;
pub use core::types::*;
pub use grid::{Grid, Pattern, SearchResult};
