//! Caller-owned catalog session.
//!
//! A [`Catalog`] bundles one [`HashIndex`] with the per-session search counter
//! and validates raw form input before it reaches the index. Rendering is left
//! to whoever owns the catalog.

use crate::algo::partition_sort;
use crate::config::IndexConfig;
use crate::core::{Book, SortField};
use crate::error::{CatalogError, Result};
use crate::index::HashIndex;
use crate::seed::initial_books;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Unvalidated book fields as typed by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub year: String,
}

impl TryFrom<BookDraft> for Book {
    type Error = CatalogError;

    /// Trims every field, then requires all four and an integer year.
    fn try_from(draft: BookDraft) -> Result<Self> {
        let title = required("title", &draft.title)?;
        let author = required("author", &draft.author)?;
        let isbn = required("isbn", &draft.isbn)?;
        let year = required("year", &draft.year)?;

        let year = year
            .parse::<i32>()
            .map_err(|_| CatalogError::InvalidYear(year.to_string()))?;

        Ok(Book::new(title, author, isbn, year))
    }
}

fn required<'a>(name: &'static str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CatalogError::MissingField(name));
    }
    Ok(value)
}

/// Counters a front end displays next to the book list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Insert calls made against the index.
    pub total_books: usize,
    /// Accepted searches, including those with no hits.
    pub searches: u64,
}

/// A book catalog owned by one caller for the length of a session.
///
/// # Examples
///
/// ```
/// use bookshelf::prelude::*;
///
/// let mut catalog = Catalog::seeded(&IndexConfig::default())?;
/// let hits = catalog.search("Tere Liye")?;
///
/// assert_eq!(hits.len(), 2);
/// assert_eq!(catalog.stats().searches, 1);
/// assert_eq!(catalog.stats().total_books, 10);
/// # Ok::<(), bookshelf::CatalogError>(())
/// ```
#[derive(Debug)]
pub struct Catalog {
    index: HashIndex,
    searches: u64,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new(config: &IndexConfig) -> Result<Self> {
        Ok(Self {
            index: HashIndex::with_config(config)?,
            searches: 0,
        })
    }

    /// Creates a catalog preloaded with [`initial_books`].
    pub fn seeded(config: &IndexConfig) -> Result<Self> {
        let mut catalog = Self::new(config)?;
        let books = initial_books();
        let seeded = books.len();
        books.into_iter().for_each(|book| catalog.index.insert(book));
        info!("seeded catalog with {} books", seeded);
        Ok(catalog)
    }

    pub fn index(&self) -> &HashIndex {
        &self.index
    }

    /// Validates `draft` and inserts the resulting book.
    pub fn add_book(&mut self, draft: BookDraft) -> Result<Arc<Book>> {
        let book = Arc::new(Book::try_from(draft)?);
        self.index.insert(Arc::clone(&book));
        debug!("added {:?} by {:?}", book.title, book.author);
        Ok(book)
    }

    /// Runs a hash-routed search and counts it.
    ///
    /// A blank query is rejected with [`CatalogError::EmptyQuery`] and is not
    /// counted.
    pub fn search(&mut self, query: &str) -> Result<Vec<Arc<Book>>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CatalogError::EmptyQuery);
        }
        self.searches += 1;
        Ok(self.index.search(query))
    }

    /// Every distinct book, in index listing order.
    pub fn all_books(&self) -> Vec<Arc<Book>> {
        self.index.all_books()
    }

    /// Every distinct book, ordered by `field`.
    pub fn sorted_by(&self, field: SortField) -> Vec<Arc<Book>> {
        partition_sort(&self.index.all_books(), field)
    }

    /// Like [`Catalog::sorted_by`], with the field given by name.
    pub fn sorted_by_name(&self, field: &str) -> Result<Vec<Arc<Book>>> {
        Ok(self.sorted_by(field.parse()?))
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            total_books: self.index.count(),
            searches: self.searches,
        }
    }
}
