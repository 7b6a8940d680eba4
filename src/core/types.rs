use serde::{Deserialize, Serialize};

/// 1-indexed location of the top-left cell of a pattern match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column, counted from 1 at the left edge
    pub x: usize,
    /// Row, counted from 1 at the top edge
    pub y: usize,
}

impl Position {
    #[must_use]
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// How soon a copy can be borrowed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "reservations")]
pub enum ShelfStatus {
    /// No reservations: the copy can be loaned right away
    OnTheShelf,
    /// Number of reservations queued ahead of a new one
    Reserved(u32),
}

impl ShelfStatus {
    #[must_use]
    pub fn from_reservations(reservations: u32) -> Self {
        if reservations == 0 {
            Self::OnTheShelf
        } else {
            Self::Reserved(reservations)
        }
    }

    #[must_use]
    pub fn reservations(self) -> u32 {
        match self {
            Self::OnTheShelf => 0,
            Self::Reserved(n) => n,
        }
    }
}

impl std::fmt::Display for ShelfStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OnTheShelf => write!(f, "on the shelf"),
            Self::Reserved(n) => write!(f, "{n} reservations"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shelf_status_display() {
        assert_eq!(ShelfStatus::from_reservations(0).to_string(), "on the shelf");
        assert_eq!(ShelfStatus::from_reservations(3).to_string(), "3 reservations");
        // Singular form is not special-cased
        assert_eq!(ShelfStatus::from_reservations(1).to_string(), "1 reservations");
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(2, 5).to_string(), "(2, 5)");
    }
}
