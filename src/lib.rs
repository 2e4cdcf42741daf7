//! # Bookshelf
//!
//! `bookshelf` is an in-memory book catalog built on two small, independent pieces:
//!
//! - [`HashIndex`]: a fixed-size bucket array that files every [`Book`] under three derived
//!   keys (lowercased title, author and ISBN) and answers substring queries by probing the
//!   single bucket the query hashes to.
//! - [`partition_sort`]: a comparator-free, last-element-pivot sort over one record field,
//!   returning a new sequence and leaving its input untouched.
//!
//! A [`Catalog`] ties them together for one caller's session, adding input validation, the
//! starter dataset and a search counter.
//!
//! ## Key Features
//!
//! - **Multi-key indexing**: One insert places a record in up to three buckets. Records are
//!   shared through `Arc`, never copied.
//! - **Deduplicated listing**: [`HashIndex::all_books`] walks buckets in order and emits each
//!   ISBN once.
//! - **Field projection**: The [`SortKey`] trait lets any record type be ordered by title,
//!   author or year, case-insensitively for text.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use bookshelf::prelude::*;
//!
//! let mut index = HashIndex::new(100)?;
//! index.insert(Book::new("Pulang", "Tere Liye", "978-602-03-1234-5", 2015));
//! index.insert(Book::new("Laut Bercerita", "Leila S. Chudori", "978-602-424-694-5", 2017));
//!
//! let hits = index.search("tere liye");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].title, "Pulang");
//!
//! let by_year = partition_sort(&index.all_books(), SortField::Year);
//! assert_eq!(by_year[0].title, "Pulang");
//! assert_eq!(by_year[1].title, "Laut Bercerita");
//! # Ok::<(), bookshelf::CatalogError>(())
//! ```
//!
//! ### Known Limitation
//!
//! Search is hash-routed, not a full scan. A query only finds books filed in the bucket the
//! query itself hashes to, so a true substring such as `"tere"` can miss:
//!
//! ```rust
//! use bookshelf::prelude::*;
//!
//! let mut index = HashIndex::default();
//! index.insert(Book::new("Pulang", "Tere Liye", "978-602-03-1234-5", 2015));
//!
//! assert!(index.search("tere").is_empty());
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Insert**: O(k) in the total key length.
//! - **Search**: O(k + b) where `b` is the size of the probed bucket.
//! - **Sort**: O(n log n) on average, O(n²) for already sorted input. The work stack keeps
//!   the worst case off the call stack.

pub mod algo;
pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod index;
pub mod seed;

pub use crate::algo::{partition_sort, partition_sort_indices};
pub use crate::catalog::{BookDraft, Catalog, CatalogStats};
pub use crate::config::IndexConfig;
pub use crate::core::{Book, FieldValue, SortField, SortKey};
pub use crate::error::{CatalogError, Result};
pub use crate::index::HashIndex;

pub mod prelude {
    pub use crate::algo::{partition_sort, partition_sort_indices};
    pub use crate::catalog::{BookDraft, Catalog};
    pub use crate::config::IndexConfig;
    pub use crate::core::{Book, SortField, SortKey};
    pub use crate::index::HashIndex;
}
