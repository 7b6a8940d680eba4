use serde::{Deserialize, Serialize};

use crate::core::types::ShelfStatus;

/// Reservation count meaning "this copy can never be reserved"
pub const NOT_RESERVABLE: u32 = 100;

/// A single copy of a book held by a library
///
/// Two books are equal when author and title match, regardless of how many
/// reservations each copy has.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Book {
    pub author: String,
    pub title: String,
    pub reservations: u32,
}

impl Book {
    pub fn new(author: impl Into<String>, title: impl Into<String>, reservations: u32) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            reservations,
        }
    }

    /// A copy with no reservations is on the shelf and can be loaned
    #[must_use]
    pub fn is_loanable(&self) -> bool {
        self.reservations == 0
    }

    /// Whether this copy is marked with the never-reservable sentinel
    #[must_use]
    pub fn is_reservable(&self) -> bool {
        self.reservations != NOT_RESERVABLE
    }

    #[must_use]
    pub fn status(&self) -> ShelfStatus {
        ShelfStatus::from_reservations(self.reservations)
    }

    #[must_use]
    pub fn matches(&self, author: &str, title: &str) -> bool {
        self.author == author && self.title == title
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.author == other.author && self.title == other.title
    }
}
