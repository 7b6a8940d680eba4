use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::core::color::Color;
use crate::grid::pattern::PATTERN_SIDE;
use crate::utils::validation::check_grid_size;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Wrong amount of colors: expected {expected}, found {found}")]
    InvalidLength { expected: usize, found: usize },

    #[error("Wrong amount of colors: a pattern needs {expected}, found {found}")]
    WrongColorCount { expected: usize, found: usize },

    #[error("Unknown color: '{0}'")]
    UnknownColor(char),

    #[error("Carpet cannot be smaller than pattern ({width}x{height})")]
    TooSmall { width: i64, height: i64 },

    #[error("{0}")]
    TooLarge(String),
}

/// A rectangular carpet of colors, stored row-major
///
/// Once built the carpet is never modified; searches borrow it immutably.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Color>,
}

impl Grid {
    /// Fill a carpet deterministically from `seed`.
    ///
    /// Uses `ChaCha8Rng`, whose output stream is fixed across platforms and
    /// crate versions, so the same arguments always yield the same carpet.
    ///
    /// # Errors
    ///
    /// Returns `GridError::TooSmall` if either dimension is below the pattern
    /// size, or `GridError::TooLarge` if the cell count exceeds the limit.
    pub fn from_seed(width: usize, height: usize, seed: u64) -> Result<Self, GridError> {
        check_dimensions(width, height)?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cells = (0..width * height)
            .map(|_| Color::ALL[rng.random_range(0..Color::ALL.len())])
            .collect();

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a carpet from a string of color letters, one per cell, row-major.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidLength` if the number of characters differs
    /// from `width * height`, `GridError::UnknownColor` for the first letter
    /// outside `RGBYW`, or a dimension error as in [`Grid::from_seed`].
    pub fn from_colors(colors: &str, width: usize, height: usize) -> Result<Self, GridError> {
        check_dimensions(width, height)?;

        let expected = width * height;
        let found = colors.chars().count();
        if found != expected {
            return Err(GridError::InvalidLength { expected, found });
        }

        let cells = colors
            .chars()
            .map(|c| Color::from_char(c).ok_or(GridError::UnknownColor(c)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Color at column `x`, row `y` (both 0-indexed)
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x).copied()
    }

    #[must_use]
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.cells.chunks(self.width)
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), GridError> {
    if width < PATTERN_SIDE || height < PATTERN_SIDE {
        return Err(GridError::TooSmall {
            width: i64::try_from(width).unwrap_or(i64::MAX),
            height: i64::try_from(height).unwrap_or(i64::MAX),
        });
    }
    if let Some(msg) = check_grid_size(width, height) {
        return Err(GridError::TooLarge(msg));
    }
    Ok(())
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for color in row {
                write!(f, " {color}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_seed_is_deterministic() {
        for seed in 1..=20 {
            let a = Grid::from_seed(7, 5, seed).unwrap();
            let b = Grid::from_seed(7, 5, seed).unwrap();
            assert_eq!(a, b, "seed {seed} produced different carpets");
        }
    }

    #[test]
    fn test_from_seed_varies_with_seed() {
        let a = Grid::from_seed(10, 10, 1).unwrap();
        let b = Grid::from_seed(10, 10, 2).unwrap();
        assert_ne!(a.cells(), b.cells());
    }

    #[test]
    fn test_from_seed_dimensions() {
        let grid = Grid::from_seed(3, 4, 9).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.cells().len(), 12);
        assert_eq!(grid.rows().count(), 4);
    }

    #[test]
    fn test_from_colors() {
        let grid = Grid::from_colors("rgbYWRgb", 4, 2).unwrap();
        assert_eq!(grid.get(0, 0), Some(Color::Red));
        assert_eq!(grid.get(3, 0), Some(Color::Yellow));
        assert_eq!(grid.get(0, 1), Some(Color::White));
        assert_eq!(grid.get(3, 1), Some(Color::Blue));
        assert_eq!(grid.get(4, 1), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn test_from_colors_invalid_length() {
        assert_eq!(
            Grid::from_colors("RGB", 2, 2),
            Err(GridError::InvalidLength {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn test_from_colors_unknown_color() {
        assert_eq!(
            Grid::from_colors("RGBX", 2, 2),
            Err(GridError::UnknownColor('X'))
        );
    }

    #[test]
    fn test_too_small() {
        assert!(matches!(
            Grid::from_seed(1, 5, 3),
            Err(GridError::TooSmall { .. })
        ));
        assert!(matches!(
            Grid::from_colors("RG", 2, 1),
            Err(GridError::TooSmall { .. })
        ));
    }

    #[test]
    fn test_too_large() {
        use crate::utils::validation::MAX_GRID_CELLS;

        assert!(matches!(
            Grid::from_seed(MAX_GRID_CELLS, 2, 7),
            Err(GridError::TooLarge(_))
        ));
        assert!(matches!(
            Grid::from_colors("RGBY", usize::MAX, 2),
            Err(GridError::TooLarge(_))
        ));
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_colors("RGBYWR", 3, 2).unwrap();
        assert_eq!(grid.to_string(), " R G B\n Y W R\n");
    }
}
