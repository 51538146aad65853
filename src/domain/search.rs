//! Case-insensitive substring search over books.
//!
//! A book matches a query when the query occurs, ignoring case, inside its
//! title or inside its author. The empty query matches everything. Whitespace
//! and punctuation are literal characters: nothing is trimmed or tokenized.
//!
//! Two characters are equal when they agree after uppercasing and then
//! lowercasing, so final sigma and the long s fold like their plain forms.
//! [`matches`] and [`match_ranges`] share the same folding and always agree on
//! what counts as an occurrence.
//!
//! # Example
//!
//! ```rust
//! use bookshelf::domain::{search, Catalog};
//!
//! let catalog = Catalog::builtin();
//! let found = search::filter_books(&catalog, "ORWELL");
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].title(), "1984");
//! ```

use super::book::Book;

fn fold_char(c: char) -> impl Iterator<Item = char> {
    c.to_uppercase().flat_map(char::to_lowercase)
}

fn fold_case(text: &str) -> String {
    text.chars().flat_map(fold_char).collect()
}

/// Returns whether `query` is a case-insensitive substring of the title or author.
#[must_use]
pub fn matches(book: &Book, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    matches_folded(book, &fold_case(query))
}

fn matches_folded(book: &Book, folded_query: &str) -> bool {
    fold_case(book.title()).contains(folded_query) || fold_case(book.author()).contains(folded_query)
}

/// Filters `books` down to those matching `query`, preserving their order.
///
/// Never fails and never reorders. With an empty query the result equals the
/// input.
#[must_use]
pub fn filter_books(books: &[Book], query: &str) -> Vec<Book> {
    let _span = tracing::debug_span!(
        "filter_books",
        total_books = books.len(),
        query_len = query.chars().count()
    )
    .entered();

    if query.is_empty() {
        return books.to_vec();
    }

    let folded_query = fold_case(query);
    let filtered: Vec<Book> = books
        .iter()
        .filter(|book| matches_folded(book, &folded_query))
        .cloned()
        .collect();

    tracing::trace!(matched = filtered.len(), "books filtered");
    filtered
}

/// Locates every non-overlapping, case-insensitive occurrence of `query` in `text`.
///
/// Ranges are `(start, end)` character indices into `text` with an exclusive
/// end, in ascending order. Returns an empty vector for an empty query or when
/// there is no occurrence.
///
/// # Example
///
/// ```rust
/// use bookshelf::domain::search::match_ranges;
///
/// assert_eq!(match_ranges("Pride and Prejudice", "PR"), vec![(0, 2), (10, 12)]);
/// ```
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }

    let needle: Vec<char> = fold_case(query).chars().collect();

    // Folding can expand one character into several; `origin` maps each folded
    // character back to its index in `text`.
    let mut folded = Vec::new();
    let mut origin = Vec::new();
    for (idx, c) in text.chars().enumerate() {
        for f in fold_char(c) {
            folded.push(f);
            origin.push(idx);
        }
    }

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    let mut pos = 0;
    while pos + needle.len() <= folded.len() {
        if folded[pos..pos + needle.len()] == needle[..] {
            let start = origin[pos];
            let end = origin[pos + needle.len() - 1] + 1;
            match ranges.last_mut() {
                Some(last) if start < last.1 => last.1 = last.1.max(end),
                _ => ranges.push((start, end)),
            }
            pos += needle.len();
        } else {
            pos += 1;
        }
    }

    ranges
}
