//! Error types for the Bookshelf plugin.
//!
//! This module defines the centralized error type [`BookshelfError`] and a type alias
//! [`Result`] used throughout the crate. The search filter itself is total and never
//! produces errors; these variants cover the fallible edges around it (book
//! construction, theme loading, configuration).

use thiserror::Error;

/// The main error type for Bookshelf operations.
///
/// # Examples
///
/// ```
/// use bookshelf::domain::BookshelfError;
///
/// fn validate_config() -> Result<(), BookshelfError> {
///     Err(BookshelfError::Config("Missing required field".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum BookshelfError {
    /// A book was constructed with an empty title or author.
    #[error("Invalid book: {0}")]
    InvalidBook(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Bookshelf operations.
pub type Result<T> = std::result::Result<T, BookshelfError>;
