//! Observable search state: the query and the books it currently shows.
//!
//! [`BookSearch`] owns the query text and the displayed set derived from it.
//! Every change to the query recomputes the displayed set synchronously and
//! then notifies subscribers, so a reader of [`BookSearch::current_displayed_set`]
//! always sees the result of the most recent query.
//!
//! # Example
//!
//! ```rust
//! use bookshelf::app::BookSearch;
//! use bookshelf::domain::Catalog;
//!
//! let mut search = BookSearch::new(Catalog::builtin());
//! search.subscribe(|books| println!("{} books shown", books.len()));
//! search.set_query("orwell");
//! assert_eq!(search.current_displayed_set().len(), 1);
//! ```

use crate::domain::{search, Book, Catalog};
use std::fmt;

/// Callback invoked with the new displayed set after each recomputation.
pub type DisplayObserver = Box<dyn FnMut(&[Book])>;

/// Query text plus the catalog subset it selects.
pub struct BookSearch {
    catalog: Catalog,
    query: String,
    displayed: Vec<Book>,
    observers: Vec<DisplayObserver>,
}

impl BookSearch {
    /// Starts with an empty query, showing the whole catalog.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let displayed = catalog.to_vec();
        Self {
            catalog,
            query: String::new(),
            displayed,
            observers: Vec::new(),
        }
    }

    /// Replaces the query with the full new text and recomputes the displayed set.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.refresh();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.refresh();
    }

    /// Removes the last character. Returns `false` if the query was already empty.
    pub fn pop_char(&mut self) -> bool {
        if self.query.pop().is_none() {
            return false;
        }
        self.refresh();
        true
    }

    pub fn clear(&mut self) {
        self.set_query(String::new());
    }

    /// Registers a callback run after every recomputation of the displayed set.
    pub fn subscribe(&mut self, observer: impl FnMut(&[Book]) + 'static) {
        self.observers.push(Box::new(observer));
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn current_displayed_set(&self) -> &[Book] {
        &self.displayed
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn refresh(&mut self) {
        self.displayed = search::filter_books(&self.catalog, &self.query);

        tracing::debug!(
            query = %self.query,
            displayed = self.displayed.len(),
            total = self.catalog.len(),
            "displayed set recomputed"
        );

        for observer in &mut self.observers {
            observer(&self.displayed);
        }
    }
}

impl fmt::Debug for BookSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookSearch")
            .field("query", &self.query)
            .field("displayed", &self.displayed.len())
            .field("catalog", &self.catalog.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}
