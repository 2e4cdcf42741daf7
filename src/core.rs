//! Core record and sort-key types.
//!
//! This module defines:
//! - [`Book`]: The catalog record shared between the index and the sort.
//! - [`SortKey`]: The trait users implement to sort their own record types.
//! - [`FieldValue`]: A comparable projection of a single record field.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A catalog record.
///
/// `isbn` is treated as the identity of a logical book when listing the index,
/// so callers should keep it non-empty and distinct per book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub year: i32,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            year,
        }
    }

    /// The three lowercased keys a book is indexed under, tagged by origin.
    pub fn derived_keys(&self) -> [(KeyKind, String); 3] {
        [
            (KeyKind::Title, self.title.to_lowercase()),
            (KeyKind::Author, self.author.to_lowercase()),
            (KeyKind::Isbn, self.isbn.to_lowercase()),
        ]
    }

    /// Returns `true` if `needle` occurs in the lowercased title, author or ISBN.
    ///
    /// `needle` is expected to be lowercased already.
    pub fn contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.author.to_lowercase().contains(needle)
            || self.isbn.to_lowercase().contains(needle)
    }
}

/// Which derived key placed an entry into a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    Title,
    Author,
    Isbn,
}

/// A record field that can drive a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Title,
    Author,
    Year,
}

impl SortField {
    pub const ALL: [SortField; 3] = [SortField::Title, SortField::Author, SortField::Year];

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Author => "author",
            SortField::Year => "year",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| CatalogError::UnknownSortField(name.to_string()))
    }
}

/// The value of one field, projected for comparison.
///
/// Text is lowercased on construction and ordered by UTF-16 code units, so
/// `"Zebra"` and `"zebra"` compare equal. Numbers compare numerically. Mixed
/// kinds order numbers first; a single field never mixes kinds in practice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(i64),
}

impl FieldValue {
    /// Builds a case-insensitive text value.
    pub fn text(value: &str) -> Self {
        FieldValue::Text(value.to_lowercase())
    }
}

impl Ord for FieldValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.encode_utf16().cmp(b.encode_utf16()),
            (FieldValue::Number(_), FieldValue::Text(_)) => Ordering::Less,
            (FieldValue::Text(_), FieldValue::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for FieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A trait for projecting a record onto the field being sorted.
///
/// This allows [`partition_sort`](crate::algo::partition_sort) to order any
/// record type, not just [`Book`].
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use bookshelf::core::{FieldValue, SortField, SortKey};
///
/// struct Magazine {
///     name: String,
///     issue: u32,
/// }
///
/// impl SortKey for Magazine {
///     fn sort_value(&self, field: SortField) -> FieldValue {
///         match field {
///             SortField::Year => FieldValue::Number(i64::from(self.issue)),
///             SortField::Title | SortField::Author => FieldValue::text(&self.name),
///         }
///     }
/// }
/// ```
pub trait SortKey {
    /// Returns the comparable value of `field` for this record.
    fn sort_value(&self, field: SortField) -> FieldValue;
}

impl SortKey for Book {
    fn sort_value(&self, field: SortField) -> FieldValue {
        match field {
            SortField::Title => FieldValue::text(&self.title),
            SortField::Author => FieldValue::text(&self.author),
            SortField::Year => FieldValue::Number(i64::from(self.year)),
        }
    }
}

// Blanket implementations so shared handles sort like the records they point to.
impl<T: SortKey + ?Sized> SortKey for &T {
    fn sort_value(&self, field: SortField) -> FieldValue {
        (**self).sort_value(field)
    }
}

impl<T: SortKey + ?Sized> SortKey for Arc<T> {
    fn sort_value(&self, field: SortField) -> FieldValue {
        (**self).sort_value(field)
    }
}
