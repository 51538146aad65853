//! Domain layer for the Bookshelf plugin.
//!
//! Holds the book model, the fixed catalog and the search filter, independent
//! of Zellij or any rendering concerns.
//!
//! # Organization
//!
//! - [`book`]: `Book` value type and its opaque `ImageRef` cover reference
//! - [`catalog`]: the ordered, shared, read-only `Catalog`
//! - [`search`]: case-insensitive substring filtering and match locations
//! - [`error`]: error types and result alias
//!
//! # Examples
//!
//! ```
//! use bookshelf::domain::{search, Catalog};
//!
//! let catalog = Catalog::builtin();
//! assert_eq!(search::filter_books(&catalog, "").len(), 5);
//! ```

pub mod book;
pub mod catalog;
pub mod error;
pub mod search;

pub use book::{Book, ImageRef};
pub use catalog::Catalog;
pub use error::{BookshelfError, Result};
