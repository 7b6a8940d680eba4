//! Color carpets and 2x2 pattern search.
//!
//! A [`Grid`] is a rectangular carpet of [`Color`](crate::core::color::Color)
//! cells. It is built once, either from a seed or from an explicit string of
//! color letters, and then searched for [`Pattern`]s.
//!
//! ## Example
//!
//! ```rust
//! use shelfscan::grid::{Grid, Pattern};
//!
//! let carpet = Grid::from_colors("RGRGBYBY", 4, 2).unwrap();
//! let result = carpet.search(&Pattern::parse("rgby").unwrap());
//!
//! assert_eq!(result.count(), 2);
//! for position in &result.matches {
//!     println!(" - Found at {position}");
//! }
//! ```

pub mod carpet;
pub mod pattern;
pub mod search;

pub use carpet::{Grid, GridError};
pub use pattern::Pattern;
pub use search::SearchResult;
