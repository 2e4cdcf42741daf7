//! The starter dataset a fresh catalog is populated with.

use crate::core::Book;

/// The ten books every seeded catalog starts with, in insertion order.
pub fn initial_books() -> Vec<Book> {
    vec![
        Book::new("Laskar Pelangi", "Andrea Hirata", "978-979-22-2928-4", 2005),
        Book::new("Bumi Manusia", "Pramoedya Ananta Toer", "978-602-06-0000-1", 1980),
        Book::new("Ronggeng Dukuh Paruk", "Ahmad Tohari", "978-979-433-196-2", 1982),
        Book::new("Negeri 5 Menara", "Ahmad Fuadi", "978-602-8811-04-4", 2009),
        Book::new("Perahu Kertas", "Dee Lestari", "978-979-22-6142-0", 2009),
        Book::new("Pulang", "Tere Liye", "978-602-03-1234-5", 2015),
        Book::new("Laut Bercerita", "Leila S. Chudori", "978-602-424-694-5", 2017),
        Book::new("Gadis Kretek", "Ratih Kumala", "978-602-424-825-3", 2012),
        Book::new("Sepotong Hati yang Baru", "Tere Liye", "978-602-03-4567-8", 2020),
        Book::new("Kata", "Rintik Sedu", "978-623-744-701-2", 2019),
    ]
}
