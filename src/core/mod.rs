//! Core data types shared by both tools.
//!
//! - [`Color`](color::Color): one of the five carpet colors, parsed from `R`, `G`, `B`, `Y`, `W`
//! - [`Book`](book::Book): one library copy of a book with its reservation count
//! - [`Position`](types::Position): 1-indexed coordinate of a pattern match
//! - [`ShelfStatus`](types::ShelfStatus): "on the shelf" or "N reservations"
//!
//! ## Reservation counts
//!
//! | Count | Meaning |
//! |-------|---------|
//! | 0     | On the shelf, loanable |
//! | 1-99  | That many reservations queued |
//! | 100   | Never reservable (sentinel) |

pub mod book;
pub mod color;
pub mod types;
