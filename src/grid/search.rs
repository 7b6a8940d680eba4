use serde::Serialize;

use crate::core::types::Position;
use crate::grid::carpet::Grid;
use crate::grid::pattern::{Pattern, PATTERN_SIDE};

/// Every location where a pattern was found, in scan order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub matches: Vec<Position>,
}

impl SearchResult {
    /// Total number of matches, overlapping ones included
    #[must_use]
    pub fn count(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

impl Grid {
    /// Find every 2x2 block equal to `pattern`.
    ///
    /// Blocks are scanned top row first and left to right within a row.
    /// Overlapping matches are reported independently.
    #[must_use]
    pub fn search(&self, pattern: &Pattern) -> SearchResult {
        let mut matches = Vec::new();

        for i in 0..=self.height() - PATTERN_SIDE {
            for j in 0..=self.width() - PATTERN_SIDE {
                if self.block_matches(j, i, pattern) {
                    matches.push(Position::new(j + 1, i + 1));
                }
            }
        }

        SearchResult { matches }
    }

    fn block_matches(&self, x: usize, y: usize, pattern: &Pattern) -> bool {
        (0..PATTERN_SIDE).all(|row| {
            (0..PATTERN_SIDE).all(|col| self.get(x + col, y + row) == Some(pattern.at(row, col)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Color;

    #[test]
    fn test_uniform_carpet_matches_everywhere() {
        for (w, h) in [(2, 2), (3, 2), (5, 4), (9, 9)] {
            let grid = Grid::from_colors(&"Y".repeat(w * h), w, h).unwrap();
            let result = grid.search(&Pattern::parse("YYYY").unwrap());
            assert_eq!(result.count(), (w - 1) * (h - 1), "{w}x{h}");
        }
    }

    #[test]
    fn test_absent_pattern() {
        let grid = Grid::from_colors("RRRRRRRRR", 3, 3).unwrap();
        let result = grid.search(&Pattern::parse("RRRG").unwrap());
        assert!(result.is_empty());
        assert_eq!(result.count(), 0);
    }

    #[test]
    fn test_scan_order_and_coordinates() {
        // R G R G
        // B Y B Y
        // R G R G
        let grid = Grid::from_colors("RGRGBYBYRGRG", 4, 3).unwrap();
        let result = grid.search(&Pattern::parse("RGBY").unwrap());
        assert_eq!(
            result.matches,
            vec![Position::new(1, 1), Position::new(3, 1)]
        );

        let result = grid.search(&Pattern::parse("BYRG").unwrap());
        assert_eq!(
            result.matches,
            vec![Position::new(1, 2), Position::new(3, 2)]
        );
    }

    #[test]
    fn test_overlapping_matches_counted() {
        // W W W
        // W W W
        // B W W
        let grid = Grid::from_colors("WWWWWWBWW", 3, 3).unwrap();
        let result = grid.search(&Pattern::new([Color::White; 4]));
        assert_eq!(
            result.matches,
            vec![Position::new(1, 1), Position::new(2, 1), Position::new(2, 2)]
        );
    }

    #[test]
    fn test_seeded_carpet_contains_its_own_corner() {
        let grid = Grid::from_seed(6, 6, 11).unwrap();
        let corner = Pattern::new([
            grid.get(0, 0).unwrap(),
            grid.get(1, 0).unwrap(),
            grid.get(0, 1).unwrap(),
            grid.get(1, 1).unwrap(),
        ]);
        let result = grid.search(&corner);
        assert_eq!(result.matches.first(), Some(&Position::new(1, 1)));
    }
}
