//! Parsers for catalog files and REPL input.
//!
//! - **Catalog records** ([`records`]): one `library;author;title;reservations`
//!   record per line, `;` or `,` chosen per line, optional gzip compression
//! - **REPL commands** ([`command`]): a command word plus whitespace-separated,
//!   optionally quoted arguments
//!
//! ## Example
//!
//! ```rust
//! use shelfscan::parsing::records::parse_records_text;
//!
//! let records = parse_records_text("Metso;Tove Jansson;Moomin;on-the-shelf\n").unwrap();
//! assert_eq!(records[0].reservations, 0);
//! ```
//!
//! ## Commands
//!
//! | Command | Arguments |
//! |---------|-----------|
//! | `libraries` | none |
//! | `material` | library |
//! | `books` | library, author (rest of line) |
//! | `reservable` | author, title (rest of line or quoted) |
//! | `loanable` | none |
//! | `summary` | library |
//! | `author` | library, author (rest of line) |
//! | `quit`, `exit` | ignored |

pub mod command;
pub mod records;
