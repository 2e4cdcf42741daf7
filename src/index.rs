//! Multi-key hash index over [`Book`] records.
//!
//! Every inserted book is placed in up to three buckets, one per derived key
//! (lowercased title, author and ISBN). Bucket positions come from a weighted
//! positional checksum, [`bucket_index`], which collides freely; lookups
//! therefore always filter the probed bucket linearly.
//!
//! Search is *hash-routed*: the query is hashed like a key and only that one
//! bucket is scanned for substring matches. A query that is a true substring
//! of a field but hashes elsewhere finds nothing.

use crate::config::{DEFAULT_CAPACITY, IndexConfig};
use crate::core::{Book, KeyKind};
use crate::error::{CatalogError, Result};
use cuneiform::cuneiform;
use log::{debug, info, trace};
use std::collections::HashSet;
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Maps `key` to a bucket in `[0, capacity)`.
///
/// Accumulates `(sum + code * (position + 1)) % capacity` over the UTF-16 code
/// units of `key`, `position` being zero based. The empty key maps to 0.
///
/// ```
/// use bookshelf::index::bucket_index;
/// use std::num::NonZeroUsize;
///
/// let capacity = NonZeroUsize::new(7).unwrap();
/// // 'a' * 1 + 'b' * 2 + 'c' * 3 = 590, 590 % 7 = 2
/// assert_eq!(bucket_index("abc", capacity), 2);
/// assert_eq!(bucket_index("", capacity), 0);
/// ```
pub fn bucket_index(key: &str, capacity: NonZeroUsize) -> usize {
    let modulus = capacity.get() as u128;
    let sum = key
        .encode_utf16()
        .enumerate()
        .fold(0u128, |sum, (position, code)| {
            (sum + u128::from(code) * (position as u128 + 1)) % modulus
        });
    // sum < capacity, so this never truncates.
    sum as usize
}

/// One bucket slot: a shared record and the derived key that routed it here.
#[derive(Debug, Clone)]
pub struct BucketEntry {
    pub book: Arc<Book>,
    pub key: KeyKind,
}

// Cache-aligned bucket slot. Entries allocate on first push.
#[cuneiform]
struct Bucket {
    entries: Vec<BucketEntry>,
}

/// Fixed-capacity hash index over shared book records.
///
/// Records are never copied or mutated after insertion; buckets hold `Arc`
/// handles. A book whose keys collide appears once per key in the same bucket.
///
/// # Examples
///
/// ```
/// use bookshelf::core::Book;
/// use bookshelf::index::HashIndex;
///
/// let mut index = HashIndex::new(100)?;
/// index.insert(Book::new("Pulang", "Tere Liye", "978-602-03-1234-5", 2015));
///
/// assert_eq!(index.count(), 1);
/// assert_eq!(index.search("  TERE LIYE ").len(), 1);
/// assert_eq!(index.all_books().len(), 1);
/// # Ok::<(), bookshelf::CatalogError>(())
/// ```
pub struct HashIndex {
    capacity: NonZeroUsize,
    buckets: Vec<Bucket>,
    count: usize,
}

impl HashIndex {
    /// Builds an empty index with `capacity` buckets.
    ///
    /// Fails with [`CatalogError::InvalidCapacity`] if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity =
            NonZeroUsize::new(capacity).ok_or(CatalogError::InvalidCapacity(capacity))?;
        info!("building hash index with {} buckets", capacity);
        Ok(Self::with_buckets(capacity))
    }

    fn with_buckets(capacity: NonZeroUsize) -> Self {
        let buckets = (0..capacity.get())
            .map(|_| Bucket {
                entries: Vec::new(),
            })
            .collect();

        Self {
            capacity,
            buckets,
            count: 0,
        }
    }

    pub fn with_config(config: &IndexConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.capacity)
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Number of `insert` calls, not the number of bucket entries.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Bucket index of `key` under this index's capacity.
    pub fn hash(&self, key: &str) -> usize {
        bucket_index(key, self.capacity)
    }

    /// Inserts `book` under its title, author and ISBN keys.
    ///
    /// No uniqueness check is made; inserting the same ISBN twice yields two
    /// independent entries. `count` grows by exactly one per call.
    pub fn insert(&mut self, book: impl Into<Arc<Book>>) {
        let book = book.into();

        for (key, derived) in book.derived_keys() {
            let slot = self.hash(&derived);
            trace!("{:?} key {:?} -> bucket {}", key, derived, slot);
            self.buckets[slot].entries.push(BucketEntry {
                book: Arc::clone(&book),
                key,
            });
        }

        self.count += 1;
        debug!("inserted {} ({} inserts total)", book.isbn, self.count);
    }

    /// Returns the books in the query's bucket that contain it as a substring.
    ///
    /// The query is lowercased and trimmed, then hashed to pick a single bucket.
    /// Results keep bucket insertion order, and a book routed into this bucket
    /// by two of its keys is returned twice.
    pub fn search(&self, query: &str) -> Vec<Arc<Book>> {
        let lowered = query.to_lowercase();
        let needle = lowered.trim();
        let slot = self.hash(needle);

        let hits: Vec<Arc<Book>> = self.buckets[slot]
            .entries
            .iter()
            .filter(|entry| entry.book.contains(needle))
            .map(|entry| Arc::clone(&entry.book))
            .collect();

        debug!(
            "search {:?} probed bucket {} and matched {} entries",
            needle,
            slot,
            hits.len()
        );
        hits
    }

    /// Lists every distinct book once, deduplicated by ISBN.
    ///
    /// Order is bucket index first, then insertion order within a bucket; it is
    /// neither global insertion order nor alphabetical.
    pub fn all_books(&self) -> Vec<Arc<Book>> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut books = Vec::new();

        for entry in self.buckets.iter().flat_map(|bucket| bucket.entries.iter()) {
            if seen.insert(entry.book.isbn.as_str()) {
                books.push(Arc::clone(&entry.book));
            }
        }

        books
    }

    /// Entries of bucket `slot`; empty if unused or out of range.
    pub fn bucket(&self, slot: usize) -> &[BucketEntry] {
        self.buckets
            .get(slot)
            .map(|bucket| bucket.entries.as_slice())
            .unwrap_or(&[])
    }

    /// Number of buckets holding at least one entry.
    pub fn occupied_buckets(&self) -> usize {
        self.buckets
            .iter()
            .filter(|bucket| !bucket.entries.is_empty())
            .count()
    }
}

impl Default for HashIndex {
    fn default() -> Self {
        Self::with_buckets(NonZeroUsize::new(DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN))
    }
}

impl fmt::Debug for HashIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashIndex")
            .field("capacity", &self.capacity)
            .field("count", &self.count)
            .field("occupied_buckets", &self.occupied_buckets())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pulang() -> Book {
        Book::new("Pulang", "Tere Liye", "978-602-03-1234-5", 2015)
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(
            HashIndex::new(0).unwrap_err(),
            CatalogError::InvalidCapacity(0)
        );
        assert!(HashIndex::with_config(&IndexConfig::with_capacity(0)).is_err());
    }

    #[test]
    fn test_default_capacity() {
        let index = HashIndex::default();
        assert_eq!(index.capacity(), DEFAULT_CAPACITY);
        assert_eq!(index.count(), 0);
        assert_eq!(index.occupied_buckets(), 0);
    }

    #[test]
    fn test_entries_tagged_by_key() {
        let mut index = HashIndex::new(100).unwrap();
        index.insert(pulang());

        // pulang -> 26, tere liye -> 84, 978-602-03-1234-5 -> 73
        assert_eq!(index.bucket(26)[0].key, KeyKind::Title);
        assert_eq!(index.bucket(84)[0].key, KeyKind::Author);
        assert_eq!(index.bucket(73)[0].key, KeyKind::Isbn);
        assert_eq!(index.occupied_buckets(), 3);
        assert!(index.bucket(1_000).is_empty());
    }

    #[test]
    fn test_single_bucket_holds_all_keys() {
        let mut index = HashIndex::new(1).unwrap();
        index.insert(pulang());

        assert_eq!(index.count(), 1);
        assert_eq!(index.bucket(0).len(), 3);
        // The filter checks the whole book, so all three entries match.
        assert_eq!(index.search("pulang").len(), 3);
        assert_eq!(index.all_books().len(), 1);
    }

    #[test]
    fn test_inserted_records_are_shared() {
        let mut index = HashIndex::new(100).unwrap();
        let book = Arc::new(pulang());
        index.insert(Arc::clone(&book));

        let listed = index.all_books();
        assert!(Arc::ptr_eq(&listed[0], &book));
        // One handle here, one listed, three in buckets.
        assert_eq!(Arc::strong_count(&book), 5);
    }
}
