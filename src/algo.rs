//! Pivot-partition sort over a single record field.
//!
//! The sort always takes the **last** element as pivot, sends strictly smaller
//! elements left and everything else (ties included) right, and concatenates
//! `sort(left) ++ [pivot] ++ sort(right)`. No comparator closure is involved;
//! ordering comes from each record's [`SortKey`] projection.
//!
//! Equal keys are not kept in input order. Worst case is O(n²) on input that is
//! already sorted (or reverse sorted); average O(n log n).
//!
//! The main entry points are [`partition_sort`] and [`partition_sort_indices`].

use crate::core::{FieldValue, SortField, SortKey};
use log::debug;

/// Record index paired with its projected field value.
#[derive(Debug, Clone, PartialEq, Eq)]
struct KeyedPtr {
    index: usize,
    value: FieldValue,
}

enum Step {
    Partition(Vec<KeyedPtr>),
    Emit(usize),
}

/// Computes the sorted order of `records` by `field` without touching them.
///
/// # Returns
///
/// A vector of indices such that `records[indices[i]]` is the i-th record in
/// sorted order.
///
/// # Examples
///
/// ```
/// use bookshelf::algo::partition_sort_indices;
/// use bookshelf::core::{Book, SortField};
///
/// let books = vec![
///     Book::new("Pulang", "Tere Liye", "978-602-03-1234-5", 2015),
///     Book::new("Kata", "Rintik Sedu", "978-623-744-701-2", 2019),
///     Book::new("Bumi Manusia", "Pramoedya Ananta Toer", "978-602-06-0000-1", 1980),
/// ];
///
/// assert_eq!(partition_sort_indices(&books, SortField::Year), vec![2, 0, 1]);
/// assert_eq!(partition_sort_indices(&books, SortField::Title), vec![2, 1, 0]);
/// ```
pub fn partition_sort_indices<T: SortKey>(records: &[T], field: SortField) -> Vec<usize> {
    let len = records.len();
    if len == 0 {
        return vec![];
    }
    debug!("partition sort of {} records by {}", len, field);

    // Project each record once up front.
    let pointers: Vec<KeyedPtr> = records
        .iter()
        .enumerate()
        .map(|(index, record)| KeyedPtr {
            index,
            value: record.sort_value(field),
        })
        .collect();

    let mut order = Vec::with_capacity(len);
    let mut stack = vec![Step::Partition(pointers)];

    // Explicit stack instead of recursion: sorted input recurses n levels deep.
    // Pushing right, pivot, left makes left pop first, preserving the
    // `sort(left) ++ [pivot] ++ sort(right)` output order.
    while let Some(step) = stack.pop() {
        match step {
            Step::Emit(index) => order.push(index),
            Step::Partition(mut ptrs) => {
                let Some(pivot) = ptrs.pop() else {
                    continue;
                };
                if ptrs.is_empty() {
                    order.push(pivot.index);
                    continue;
                }

                let (left, right): (Vec<KeyedPtr>, Vec<KeyedPtr>) =
                    ptrs.into_iter().partition(|p| p.value < pivot.value);

                stack.push(Step::Partition(right));
                stack.push(Step::Emit(pivot.index));
                stack.push(Step::Partition(left));
            }
        }
    }

    order
}

/// Returns a new vector holding `records` ordered by `field`.
///
/// The input slice is left as it was. Elements are cloned into the output, so
/// sorting `Arc<Book>` handles shares the underlying records.
///
/// # Examples
///
/// ```
/// use bookshelf::algo::partition_sort;
/// use bookshelf::core::{Book, SortField};
///
/// let books = vec![
///     Book::new("Laut Bercerita", "Leila S. Chudori", "978-602-424-694-5", 2017),
///     Book::new("Pulang", "Tere Liye", "978-602-03-1234-5", 2015),
/// ];
///
/// let sorted = partition_sort(&books, SortField::Year);
/// assert_eq!(sorted[0].title, "Pulang");
/// assert_eq!(books[0].title, "Laut Bercerita");
/// ```
pub fn partition_sort<T: SortKey + Clone>(records: &[T], field: SortField) -> Vec<T> {
    partition_sort_indices(records, field)
        .into_iter()
        .map(|index| records[index].clone())
        .collect()
}
