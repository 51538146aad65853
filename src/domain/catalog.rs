//! The fixed book catalog.
//!
//! [`Catalog`] is an ordered, immutable sequence of books shared behind an
//! `Arc`. Cloning a catalog is cheap and every clone sees the same books in the
//! same order.

use super::book::{Book, ImageRef};
use std::ops::Deref;
use std::sync::Arc;

/// Title, author and cover asset name of the built-in shelf, in display order.
const BUILTIN_BOOKS: [(&str, &str, &str); 5] = [
    ("The Great Gatsby", "F. Scott Fitzgerald", "the_great_gatsby"),
    ("To Kill a Mockingbird", "Harper Lee", "o_kill_a_mockingbird"),
    ("1984", "George Orwell", "_984"),
    ("Pride and Prejudice", "Jane Austen", "pride_and_prejudice"),
    ("Moby-Dick", "Herman Melville", "moby_dick"),
];

/// Ordered, read-only collection of books.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    books: Arc<[Book]>,
}

impl Catalog {
    /// Wraps an ordered list of books. Insertion order becomes display order.
    #[must_use]
    pub fn new(books: Vec<Book>) -> Self {
        Self { books: books.into() }
    }

    /// Builds the five-book shelf shown by the plugin.
    ///
    /// # Panics
    ///
    /// Panics if a built-in entry has an empty title or author (should never occur).
    #[must_use]
    pub fn builtin() -> Self {
        let books = BUILTIN_BOOKS
            .iter()
            .map(|&(title, author, cover)| {
                Book::new(title, author, ImageRef::new(cover))
                    .expect("Built-in catalog entries should always be valid")
            })
            .collect();

        Self::new(books)
    }

    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }
}

impl Deref for Catalog {
    type Target = [Book];

    fn deref(&self) -> &Self::Target {
        &self.books
    }
}
