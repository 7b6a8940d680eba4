use std::str::FromStr;

use crate::core::color::Color;
use crate::grid::carpet::GridError;

/// Side length of the square search pattern
pub const PATTERN_SIDE: usize = 2;

/// Number of colors in a pattern
pub const PATTERN_LEN: usize = PATTERN_SIDE * PATTERN_SIDE;

/// A 2x2 block of colors, stored row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern([Color; PATTERN_LEN]);

impl Pattern {
    #[must_use]
    pub fn new(colors: [Color; PATTERN_LEN]) -> Self {
        Self(colors)
    }

    /// Parse exactly four color letters, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `GridError::WrongColorCount` if the input is not four characters
    /// long, or `GridError::UnknownColor` for the first letter outside `RGBYW`.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let found = text.chars().count();
        if found != PATTERN_LEN {
            return Err(GridError::WrongColorCount {
                expected: PATTERN_LEN,
                found,
            });
        }

        let mut colors = [Color::Red; PATTERN_LEN];
        for (slot, c) in colors.iter_mut().zip(text.chars()) {
            *slot = Color::from_char(c).ok_or(GridError::UnknownColor(c))?;
        }
        Ok(Self(colors))
    }

    /// Color at `(row, col)` within the pattern
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> Color {
        self.0[row * PATTERN_SIDE + col]
    }

}

impl FromStr for Pattern {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for color in &self.0 {
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pattern() {
        let pattern = Pattern::parse("rGbY").unwrap();
        assert_eq!(
            pattern,
            Pattern::new([Color::Red, Color::Green, Color::Blue, Color::Yellow])
        );
        assert_eq!(pattern.at(1, 0), Color::Blue);
        assert_eq!("RGBY".parse::<Pattern>(), Ok(pattern));
        assert_eq!(pattern.to_string(), "RGBY");
    }

    #[test]
    fn test_parse_pattern_wrong_length() {
        assert!(matches!(
            Pattern::parse("RGB"),
            Err(GridError::WrongColorCount {
                expected: 4,
                found: 3
            })
        ));
        assert!(matches!(
            Pattern::parse("RGBYW"),
            Err(GridError::WrongColorCount { found: 5, .. })
        ));
    }

    #[test]
    fn test_parse_pattern_unknown_color() {
        assert!(matches!(
            Pattern::parse("RGXB"),
            Err(GridError::UnknownColor('X'))
        ));
    }
}
