use std::collections::{BTreeMap, HashMap};

use crate::core::book::Book;

/// Books of one library keyed by `(author, title)`
pub type FlatShelf = BTreeMap<(String, String), Book>;

/// Flattened per-library view of the catalog
///
/// Each library holds at most one book per `(author, title)`; when a file
/// lists the same book twice for a library, the later line wins.
#[derive(Debug, Default)]
pub struct FlatIndex {
    by_library: HashMap<String, FlatShelf>,
}

impl FlatIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, library: &str, book: Book) {
        self.by_library
            .entry(library.to_string())
            .or_default()
            .insert((book.author.clone(), book.title.clone()), book);
    }

    pub fn get(&self, library: &str) -> Option<&FlatShelf> {
        self.by_library.get(library)
    }

    /// Books of `library` sorted by author, then title
    pub fn sorted_books(&self, library: &str) -> Option<impl Iterator<Item = &Book>> {
        self.get(library).map(BTreeMap::values)
    }
}
