use bookshelf::prelude::*;
use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;

fn random_books(count: usize) -> Vec<Book> {
    let mut rng = rand::rng();
    (0..count)
        .map(|i| {
            let title: String = (0..12).map(|_| rng.random_range('a'..='z')).collect();
            let author: String = (0..8).map(|_| rng.random_range('a'..='z')).collect();
            Book::new(title, author, format!("978-{:010}", i), 2000)
        })
        .collect()
}

fn bench_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("Hash Index");
    group.sample_size(10);

    let count = 10_000;
    let books = random_books(count);
    group.throughput(Throughput::Elements(count as u64));

    group.bench_function("insert", |b| {
        b.iter_batched(
            || books.clone(),
            |data| {
                let mut index = HashIndex::default();
                data.into_iter().for_each(|book| index.insert(book));
                index
            },
            BatchSize::LargeInput,
        )
    });

    let mut index = HashIndex::default();
    books.iter().cloned().for_each(|book| index.insert(book));

    group.bench_function("search", |b| {
        b.iter(|| {
            books
                .iter()
                .map(|book| index.search(black_box(&book.author)).len())
                .sum::<usize>()
        })
    });

    group.bench_function("all_books", |b| b.iter(|| index.all_books()));

    group.finish();
}

criterion_group!(benches, bench_index);
criterion_main!(benches);
