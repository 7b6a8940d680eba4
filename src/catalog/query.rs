use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::catalog::store::{AuthorShelves, LibraryCatalog};
use crate::core::book::Book;
use crate::core::types::ShelfStatus;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown library")]
    UnknownLibrary(String),

    #[error("unknown author")]
    UnknownAuthor(String),
}

/// A read-only question asked of the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Libraries,
    Material { library: String },
    Books { library: String, author: String },
    Reservable { author: String, title: String },
    Loanable,
    Summary { library: String },
    AuthorInfo { library: String, author: String },
}

/// An `author: title` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleEntry {
    pub author: String,
    pub title: String,
}

impl TitleEntry {
    fn of(book: &Book) -> Self {
        Self {
            author: book.author.clone(),
            title: book.title.clone(),
        }
    }
}

impl fmt::Display for TitleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.author, self.title)
    }
}

/// A `title --- status` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShelfEntry {
    pub title: String,
    #[serde(flatten)]
    pub status: ShelfStatus,
}

impl ShelfEntry {
    fn of(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            status: book.status(),
        }
    }
}

impl fmt::Display for ShelfEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --- {}", self.title, self.status)
    }
}

/// Where, if anywhere, a book can be reserved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "result")]
pub enum Reservability {
    /// No library holds the book
    NotALibraryBook,
    /// Every copy carries the never-reservable sentinel
    NotReservable,
    /// Shortest queue and the libraries that have it
    Reservable {
        #[serde(flatten)]
        status: ShelfStatus,
        libraries: Vec<String>,
    },
}

impl fmt::Display for Reservability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotALibraryBook => writeln!(f, "Book is not a library book"),
            Self::NotReservable => writeln!(f, "Book is not reservable from any library"),
            Self::Reservable { status, libraries } => {
                writeln!(f, "{status}")?;
                for library in libraries {
                    writeln!(f, "--- {library}")?;
                }
                Ok(())
            }
        }
    }
}

/// Answer to a [`Query`]
///
/// `Display` renders the plain-text lines printed by the REPL, each ending
/// in a newline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryOutput {
    Libraries(Vec<String>),
    Titles(Vec<TitleEntry>),
    Shelf(Vec<ShelfEntry>),
    Reservability(Reservability),
}

impl fmt::Display for QueryOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Libraries(names) => names.iter().try_for_each(|n| writeln!(f, "{n}")),
            Self::Titles(entries) => entries.iter().try_for_each(|e| writeln!(f, "{e}")),
            Self::Shelf(entries) => entries.iter().try_for_each(|e| writeln!(f, "{e}")),
            Self::Reservability(r) => write!(f, "{r}"),
        }
    }
}

/// Runs read-only queries against a loaded catalog
pub struct CatalogQuery<'a> {
    catalog: &'a LibraryCatalog,
}

impl<'a> CatalogQuery<'a> {
    pub fn new(catalog: &'a LibraryCatalog) -> Self {
        Self { catalog }
    }

    /// Dispatch a [`Query`] to the matching operation
    ///
    /// # Errors
    ///
    /// Returns `QueryError::UnknownLibrary` or `QueryError::UnknownAuthor` when
    /// the query names something the catalog does not hold.
    pub fn execute(&self, query: &Query) -> Result<QueryOutput, QueryError> {
        Ok(match query {
            Query::Libraries => QueryOutput::Libraries(self.libraries()),
            Query::Material { library } => QueryOutput::Titles(self.material(library)?),
            Query::Books { library, author } => {
                QueryOutput::Shelf(self.books_by_author(library, author)?)
            }
            Query::Reservable { author, title } => {
                QueryOutput::Reservability(self.find_reservable(author, title))
            }
            Query::Loanable => QueryOutput::Titles(self.loanable()),
            Query::Summary { library } => QueryOutput::Titles(
                self.summary(library)?.iter().map(TitleEntry::of).collect(),
            ),
            Query::AuthorInfo { library, author } => {
                QueryOutput::Shelf(self.author_info(library, author)?)
            }
        })
    }

    /// Library names in lexicographic order
    pub fn libraries(&self) -> Vec<String> {
        self.catalog.library_names().map(str::to_string).collect()
    }

    /// Every book of a library, grouped by author
    ///
    /// # Errors
    ///
    /// Returns `QueryError::UnknownLibrary` if the library is not in the catalog.
    pub fn material(&self, library: &str) -> Result<Vec<TitleEntry>, QueryError> {
        let shelves = self.shelves(library)?;
        Ok(shelves
            .values()
            .flat_map(|books| books.iter().map(TitleEntry::of))
            .collect())
    }

    /// Books of one author in one library, with reservation status
    ///
    /// # Errors
    ///
    /// Returns `QueryError::UnknownLibrary` or `QueryError::UnknownAuthor`.
    pub fn books_by_author(
        &self,
        library: &str,
        author: &str,
    ) -> Result<Vec<ShelfEntry>, QueryError> {
        let books = self
            .shelves(library)?
            .get(author)
            .ok_or_else(|| QueryError::UnknownAuthor(author.to_string()))?;
        Ok(books.iter().map(ShelfEntry::of).collect())
    }

    /// Find the libraries with the shortest reservation queue for a book.
    ///
    /// Copies marked with the never-reservable sentinel count as "found" but
    /// never take part in the minimum. Libraries are listed in scan order and
    /// each appears at most once.
    pub fn find_reservable(&self, author: &str, title: &str) -> Reservability {
        let mut found = false;
        let mut best: Option<u32> = None;
        let mut libraries: Vec<String> = Vec::new();

        for (library, shelves) in self.catalog.iter() {
            let Some(books) = shelves.get(author) else {
                continue;
            };

            for book in books.iter().filter(|b| b.matches(author, title)) {
                found = true;
                if !book.is_reservable() {
                    continue;
                }

                match best {
                    Some(min) if book.reservations > min => {}
                    Some(min) if book.reservations == min => {
                        if libraries.last().map(String::as_str) != Some(library) {
                            libraries.push(library.to_string());
                        }
                    }
                    _ => {
                        best = Some(book.reservations);
                        libraries.clear();
                        libraries.push(library.to_string());
                    }
                }
            }
        }

        match best {
            Some(min) => Reservability::Reservable {
                status: ShelfStatus::from_reservations(min),
                libraries,
            },
            None if found => Reservability::NotReservable,
            None => Reservability::NotALibraryBook,
        }
    }

    /// Books with at least one copy on the shelf somewhere
    ///
    /// Each `(author, title)` appears once, sorted by author then title.
    pub fn loanable(&self) -> Vec<TitleEntry> {
        let mut loanable: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();

        for (_, shelves) in self.catalog.iter() {
            for (author, books) in shelves {
                for book in books.iter().filter(|b| b.is_loanable()) {
                    loanable
                        .entry(author.as_str())
                        .or_default()
                        .insert(book.title.as_str());
                }
            }
        }

        loanable
            .into_iter()
            .flat_map(|(author, titles)| {
                titles.into_iter().map(move |title| TitleEntry {
                    author: author.to_string(),
                    title: title.to_string(),
                })
            })
            .collect()
    }

    /// One book per `(author, title)` of a library, sorted by author then title
    ///
    /// # Errors
    ///
    /// Returns `QueryError::UnknownLibrary` if the library is not in the catalog.
    pub fn summary(&self, library: &str) -> Result<Vec<Book>, QueryError> {
        let books = self
            .catalog
            .flat()
            .sorted_books(library)
            .ok_or_else(|| QueryError::UnknownLibrary(library.to_string()))?;
        Ok(books.cloned().collect())
    }

    /// Books of one author in a library's flattened view, with status
    ///
    /// # Errors
    ///
    /// Returns `QueryError::UnknownLibrary`, or `QueryError::UnknownAuthor` if
    /// no book of the library has that author.
    pub fn author_info(
        &self,
        library: &str,
        author: &str,
    ) -> Result<Vec<ShelfEntry>, QueryError> {
        let entries: Vec<ShelfEntry> = self
            .catalog
            .flat()
            .sorted_books(library)
            .ok_or_else(|| QueryError::UnknownLibrary(library.to_string()))?
            .filter(|b| b.author == author)
            .map(ShelfEntry::of)
            .collect();

        if entries.is_empty() {
            return Err(QueryError::UnknownAuthor(author.to_string()));
        }
        Ok(entries)
    }

    fn shelves(&self, library: &str) -> Result<&'a AuthorShelves, QueryError> {
        self.catalog
            .get(library)
            .ok_or_else(|| QueryError::UnknownLibrary(library.to_string()))
    }
}
