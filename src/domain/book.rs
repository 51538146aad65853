//! Book domain model.
//!
//! A [`Book`] is an immutable value carrying a title, an author, and an opaque
//! [`ImageRef`] naming its cover asset. Title and author are guaranteed non-empty
//! by construction.

use super::error::{BookshelfError, Result};
use std::fmt;

/// Opaque reference to a bundled cover image.
///
/// Holds a stable symbolic asset name. The core never resolves or decodes the
/// image; the presentation layer decides what to draw for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A book on the shelf.
///
/// Fields are private so the non-empty guarantee on `title` and `author`
/// cannot be bypassed after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    title: String,
    author: String,
    cover: ImageRef,
}

impl Book {
    /// Creates a new book.
    ///
    /// # Errors
    ///
    /// Returns [`BookshelfError::InvalidBook`] if `title` or `author` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookshelf::domain::{Book, ImageRef};
    ///
    /// let book = Book::new("1984", "George Orwell", ImageRef::new("_984")).unwrap();
    /// assert_eq!(book.title(), "1984");
    /// assert!(Book::new("", "Nobody", ImageRef::new("blank")).is_err());
    /// ```
    pub fn new(title: impl Into<String>, author: impl Into<String>, cover: ImageRef) -> Result<Self> {
        let title = title.into();
        let author = author.into();

        if title.is_empty() {
            return Err(BookshelfError::InvalidBook(format!(
                "empty title (author: {author:?})"
            )));
        }
        if author.is_empty() {
            return Err(BookshelfError::InvalidBook(format!(
                "empty author (title: {title:?})"
            )));
        }

        Ok(Self { title, author, cover })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub const fn cover(&self) -> &ImageRef {
        &self.cover
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_fields() {
        let book = Book::new("Moby-Dick", "Herman Melville", ImageRef::new("moby_dick")).unwrap();
        assert_eq!(book.title(), "Moby-Dick");
        assert_eq!(book.author(), "Herman Melville");
        assert_eq!(book.cover().as_str(), "moby_dick");
    }

    #[test]
    fn rejects_empty_title_and_author() {
        let empty_title = Book::new("", "Jane Austen", ImageRef::new("x"));
        assert!(matches!(empty_title, Err(BookshelfError::InvalidBook(_))));

        let empty_author = Book::new("Emma", "", ImageRef::new("x"));
        assert!(matches!(empty_author, Err(BookshelfError::InvalidBook(_))));
    }

    #[test]
    fn whitespace_title_is_not_empty() {
        assert!(Book::new(" ", "Anonymous", ImageRef::new("blank")).is_ok());
    }

    #[test]
    fn image_ref_displays_its_name() {
        assert_eq!(ImageRef::new("the_great_gatsby").to_string(), "the_great_gatsby");
    }
}
