//! Centralized input limits and small validation helpers.

use std::path::Path;

/// Maximum number of records accepted from one catalog file (DOS protection)
pub const MAX_RECORDS: usize = 1_000_000;

/// Maximum number of cells in a carpet (DOS protection)
pub const MAX_GRID_CELLS: usize = 10_000_000;

/// Seeds accepted for a random carpet
pub const SEED_RANGE: std::ops::RangeInclusive<u64> = 1..=20;

/// Check if adding another record would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new record.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_record_limit(count: usize) -> Option<String> {
    if count >= MAX_RECORDS {
        Some(format!(
            "Too many records: adding another would exceed maximum of {MAX_RECORDS}"
        ))
    } else {
        None
    }
}

/// Check that a `width` x `height` carpet stays within [`MAX_GRID_CELLS`].
///
/// Returns an error message if the carpet is too large, None otherwise.
#[must_use]
pub fn check_grid_size(width: usize, height: usize) -> Option<String> {
    match width.checked_mul(height) {
        Some(cells) if cells <= MAX_GRID_CELLS => None,
        _ => Some(format!(
            "Carpet too large: {width}x{height} exceeds maximum of {MAX_GRID_CELLS} cells"
        )),
    }
}

/// Whether `seed` is one the carpet prompt accepts.
///
/// # Examples
///
/// ```
/// use shelfscan::utils::validation::is_valid_seed;
///
/// assert!(is_valid_seed(1));
/// assert!(is_valid_seed(20));
/// assert!(!is_valid_seed(0));
/// assert!(!is_valid_seed(21));
/// ```
#[must_use]
pub fn is_valid_seed(seed: u64) -> bool {
    SEED_RANGE.contains(&seed)
}

/// Check if the path is a gzipped file
#[must_use]
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_limit() {
        assert!(check_record_limit(0).is_none());
        assert!(check_record_limit(MAX_RECORDS - 1).is_none());
        assert!(check_record_limit(MAX_RECORDS).is_some());
    }

    #[test]
    fn test_grid_size() {
        assert!(check_grid_size(2, 2).is_none());
        assert!(check_grid_size(MAX_GRID_CELLS, 1).is_none());
        assert!(check_grid_size(MAX_GRID_CELLS, 2).is_some());
        assert!(check_grid_size(usize::MAX, usize::MAX).is_some());
    }

    #[test]
    fn test_is_gzipped() {
        assert!(is_gzipped(Path::new("libraries.csv.gz")));
        assert!(is_gzipped(Path::new("/data/LIBRARIES.TXT.GZ")));
        assert!(!is_gzipped(Path::new("libraries.csv")));
    }
}
