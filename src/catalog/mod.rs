//! Library catalog storage and queries.
//!
//! The catalog is loaded once from a delimited text file and never changes
//! afterwards. It keeps two views of the same records:
//!
//! - **Grouped**: library -> author -> books, in file order within an author.
//!   Used by `material`, `books`, `reservable` and `loanable`.
//! - **Flattened**: library -> (author, title) -> book, one entry per title.
//!   Used by `summary` and `author`.
//!
//! ## Example
//!
//! ```rust
//! use shelfscan::catalog::{CatalogQuery, LibraryCatalog};
//!
//! let catalog = LibraryCatalog::from_text("Metso;Tove Jansson;Moomin;0\n").unwrap();
//! let query = CatalogQuery::new(&catalog);
//!
//! for name in query.libraries() {
//!     println!("{name}");
//! }
//! println!("{}", query.find_reservable("Tove Jansson", "Moomin"));
//! ```

pub mod index;
pub mod query;
pub mod store;

pub use query::{CatalogQuery, Query, QueryError, QueryOutput, Reservability};
pub use store::{CatalogError, LibraryCatalog};
