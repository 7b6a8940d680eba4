use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::catalog::index::FlatIndex;
use crate::core::book::Book;
use crate::parsing::records::{self, Record, RecordError};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("input file cannot be opened: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("{0}")]
    ParseError(#[from] RecordError),
}

/// Books of one library grouped by author, authors in lexicographic order
pub type AuthorShelves = BTreeMap<String, Vec<Book>>;

/// All libraries loaded from a catalog file
///
/// Libraries and authors are kept in ordered maps so every listing comes
/// out sorted by name; books keep the order they appeared in the file.
#[derive(Debug, Default)]
pub struct LibraryCatalog {
    libraries: BTreeMap<String, AuthorShelves>,

    /// Index: library -> (author, title) -> book
    flat: FlatIndex,

    record_count: usize,
}

impl LibraryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a delimited text file (optionally gzip-compressed)
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ReadError` if the file cannot be opened, or
    /// `CatalogError::ParseError` for the first malformed line.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        // Opening separately keeps "cannot open" apart from parse failures
        std::fs::metadata(path)?;
        let records = records::parse_records_file(path)?;
        debug!("Read {} records from {}", records.len(), path.display());
        Ok(Self::from_records(records))
    }

    /// Load a catalog from any buffered reader
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` for the first malformed line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, CatalogError> {
        Ok(Self::from_records(records::parse_records(reader)?))
    }

    /// Parse a catalog from text
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` for the first malformed line.
    pub fn from_text(text: &str) -> Result<Self, CatalogError> {
        Self::from_reader(text.as_bytes())
    }

    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut catalog = Self::new();
        for record in records {
            catalog.add_record(record);
        }
        debug!(
            "Catalog holds {} records in {} libraries",
            catalog.record_count,
            catalog.len()
        );
        catalog
    }

    /// Add a record to the catalog
    pub fn add_record(&mut self, record: Record) {
        let book = Book::new(record.author, record.title, record.reservations);

        self.flat.insert(&record.library, book.clone());

        // Keyed by the book's own author so the grouping invariant holds
        self.libraries
            .entry(record.library)
            .or_default()
            .entry(book.author.clone())
            .or_default()
            .push(book);

        self.record_count += 1;
    }

    /// Library names in lexicographic order
    pub fn library_names(&self) -> impl Iterator<Item = &str> {
        self.libraries.keys().map(String::as_str)
    }

    /// Libraries with their author groups, in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AuthorShelves)> {
        self.libraries.iter().map(|(name, shelves)| (name.as_str(), shelves))
    }

    /// Author groups of a library
    pub fn get(&self, library: &str) -> Option<&AuthorShelves> {
        self.libraries.get(library)
    }

    pub fn flat(&self) -> &FlatIndex {
        &self.flat
    }

    /// Number of records loaded, duplicates included
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Number of libraries in catalog
    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}
