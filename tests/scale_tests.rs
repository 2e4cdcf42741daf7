use bookshelf::core::FieldValue;
use bookshelf::index::bucket_index;
use bookshelf::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::Arc;

const ALPHABET: &[u8] = b"abcdeABCDE -";

fn random_text<R: Rng>(rng: &mut R, max_len: usize) -> String {
    let len = rng.random_range(0..max_len);
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

fn random_books<R: Rng>(rng: &mut R, count: usize) -> Vec<Book> {
    (0..count)
        .map(|i| {
            Book::new(
                random_text(rng, 12),
                random_text(rng, 12),
                format!("isbn-{}", i),
                rng.random_range(1900..2030),
            )
        })
        .collect()
}

fn keys<T: SortKey>(records: &[T], field: SortField) -> Vec<FieldValue> {
    records.iter().map(|r| r.sort_value(field)).collect()
}

#[test]
fn test_hash_in_range() {
    let mut rng = rand::rng();

    for _ in 0..10_000 {
        let capacity = rng.random_range(1..500);
        let key: String = (0..rng.random_range(0..40))
            .map(|_| rng.random::<char>())
            .collect();

        let slot = bucket_index(&key, NonZeroUsize::new(capacity).unwrap());
        assert!(slot < capacity, "key {:?} capacity {}", key, capacity);
    }
}

#[test]
fn test_listing_has_each_isbn_once() {
    let mut rng = StdRng::seed_from_u64(7);

    for capacity in [1, 2, 13, 100, 997] {
        let books = random_books(&mut rng, 500);
        let mut index = HashIndex::new(capacity).unwrap();
        books.iter().cloned().for_each(|b| index.insert(b));

        let listed = index.all_books();
        assert_eq!(index.count(), books.len());
        assert_eq!(listed.len(), books.len());

        let isbns: HashSet<&str> = listed.iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(isbns.len(), books.len());
    }
}

#[test]
fn test_search_only_returns_routed_matches() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut index = HashIndex::new(31).unwrap();
    random_books(&mut rng, 300)
        .into_iter()
        .for_each(|b| index.insert(b));

    for _ in 0..2_000 {
        let query = random_text(&mut rng, 6);
        let needle = query.to_lowercase().trim().to_string();
        let slot = index.hash(&needle);

        let expected: Vec<Arc<Book>> = index
            .bucket(slot)
            .iter()
            .filter(|e| e.book.contains(&needle))
            .map(|e| Arc::clone(&e.book))
            .collect();

        let hits = index.search(&query);
        assert_eq!(hits.len(), expected.len());
        assert!(hits.iter().zip(&expected).all(|(a, b)| Arc::ptr_eq(a, b)));
    }
}

#[test]
fn test_fuzz_sort_orders_keys() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..200 {
        let count = rng.random_range(0..200);
        let books = random_books(&mut rng, count);

        for field in SortField::ALL {
            let sorted = partition_sort(&books, field);
            assert_eq!(sorted.len(), books.len());

            let mut expected = keys(&books, field);
            expected.sort();
            assert_eq!(keys(&sorted, field), expected);

            // The output is a permutation of the input.
            let mut indices = partition_sort_indices(&books, field);
            indices.sort_unstable();
            assert_eq!(indices, (0..books.len()).collect::<Vec<_>>());
        }
    }
}

#[test]
fn test_resort_is_fixed_point_on_keys() {
    let mut rng = StdRng::seed_from_u64(99);
    let books = random_books(&mut rng, 1_000);

    for field in SortField::ALL {
        let once = partition_sort(&books, field);
        let twice = partition_sort(&once, field);
        assert_eq!(keys(&once, field), keys(&twice, field));
    }
}

#[test]
fn test_sorted_and_reversed_input() {
    // Worst case for a last-element pivot: one level per element.
    let count = 5_000;
    let ascending: Vec<Book> = (0..count)
        .map(|i| Book::new(format!("t{:05}", i), "a", format!("isbn-{}", i), i))
        .collect();
    let descending: Vec<Book> = ascending.iter().rev().cloned().collect();

    assert_eq!(partition_sort(&ascending, SortField::Year), ascending);
    assert_eq!(partition_sort(&descending, SortField::Title), ascending);
}
