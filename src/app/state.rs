//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the screen: the observable
//! [`BookSearch`] (query and displayed books), the list cursor, the keyboard
//! focus and the active theme.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` turns a state snapshot into a [`UIViewModel`], handling
//! list windowing, match highlighting and truncation to the terminal width.
//!
//! # Example
//!
//! ```rust
//! use bookshelf::app::AppState;
//! use bookshelf::domain::Catalog;
//! use bookshelf::ui::theme::Theme;
//!
//! let mut state = AppState::new(Catalog::builtin(), Theme::default());
//! state.set_query("austen");
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.display_items.len(), 1);
//! ```

use super::modes::Focus;
use super::search::BookSearch;
use crate::domain::{search, Book, Catalog};
use crate::ui::helpers::truncate_chars;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel, AUTHOR_LABEL,
    COVER_COLUMN_WIDTH, ROW_HEIGHT, TITLE_LABEL,
};

/// Lines of chrome around the list: blank, header, border, search box (3),
/// border, footer, and one spare line at the bottom.
const CHROME_ROWS: usize = 9;

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Query text and the books it currently selects.
    pub search: BookSearch,

    /// Zero-based cursor position within the displayed set.
    ///
    /// Clamped after every query change; 0 when nothing is displayed.
    pub selected_index: usize,

    /// Which part of the screen receives keystrokes.
    pub focus: Focus,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates the state for a freshly opened screen: empty query, full list,
    /// cursor on the first book, focus in the search field.
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme) -> Self {
        Self {
            search: BookSearch::new(catalog),
            selected_index: 0,
            focus: Focus::SearchField,
            theme,
        }
    }

    #[must_use]
    pub fn displayed_books(&self) -> &[Book] {
        self.search.current_displayed_set()
    }

    /// Replaces the whole query and re-filters.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.search.set_query(text);
        self.clamp_selection();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.search.push_char(c);
        self.clamp_selection();
    }

    /// Returns `false` when the query was already empty.
    pub fn pop_query_char(&mut self) -> bool {
        let changed = self.search.pop_char();
        if changed {
            self.clamp_selection();
        }
        changed
    }

    pub fn clear_query(&mut self) {
        self.search.clear();
        self.clamp_selection();
    }

    /// Moves the cursor down by one, wrapping to the top. No-op on an empty list.
    pub fn move_selection_down(&mut self) {
        let len = self.displayed_books().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the cursor up by one, wrapping to the bottom. No-op on an empty list.
    pub fn move_selection_up(&mut self) {
        let len = self.displayed_books().len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_book(&self) -> Option<&Book> {
        self.displayed_books().get(self.selected_index)
    }

    fn clamp_selection(&mut self) {
        let len = self.displayed_books().len();
        self.selected_index = if len == 0 { 0 } else { self.selected_index.min(len - 1) };
    }

    /// Computes a renderable view model for a terminal of `rows` x `cols` cells.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Convert the lines left after chrome into a number of book rows
    /// 2. Center the window on the cursor
    /// 3. Slide the window back when it would run past the end of the list
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let books = self.displayed_books();

        let empty_state = if books.is_empty() { Some(self.compute_empty_state()) } else { None };

        let visible_rows = Self::calculate_visible_rows(rows);
        let mut visible_start = self.selected_index.saturating_sub(visible_rows / 2);
        let visible_end = (visible_start + visible_rows).min(books.len());

        if visible_end - visible_start < visible_rows && books.len() >= visible_rows {
            visible_start = visible_end.saturating_sub(visible_rows);
        }

        let display_items = books[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, book)| {
                self.compute_display_item(book, visible_start + relative_idx, cols)
            })
            .collect();

        UIViewModel {
            display_items,
            header: self.compute_header(),
            footer: self.compute_footer(),
            empty_state,
            search_bar: self.compute_search_bar(),
        }
    }

    fn compute_display_item(&self, book: &Book, absolute_idx: usize, cols: usize) -> DisplayItem {
        let text_width = cols.saturating_sub(COVER_COLUMN_WIDTH + 1);
        let query = self.search.query();

        let (title, title_kept) =
            truncate_chars(book.title(), text_width.saturating_sub(TITLE_LABEL.len()));
        let (author, author_kept) =
            truncate_chars(book.author(), text_width.saturating_sub(AUTHOR_LABEL.len()));

        DisplayItem {
            title,
            author,
            cover: book.cover().clone(),
            is_selected: self.focus == Focus::Results && absolute_idx == self.selected_index,
            title_highlights: Self::visible_ranges(search::match_ranges(book.title(), query), title_kept),
            author_highlights: Self::visible_ranges(search::match_ranges(book.author(), query), author_kept),
        }
    }

    /// Drops or shortens ranges that fall past the first `kept` characters.
    fn visible_ranges(ranges: Vec<(usize, usize)>, kept: usize) -> Vec<(usize, usize)> {
        ranges
            .into_iter()
            .filter(|&(start, _)| start < kept)
            .map(|(start, end)| (start, end.min(kept)))
            .collect()
    }

    fn compute_header(&self) -> HeaderInfo {
        let shown = self.displayed_books().len();
        let total = self.search.catalog().len();
        let title = if self.search.query().is_empty() {
            format!(" Bookshelf ({total}) ")
        } else {
            format!(" Bookshelf ({shown} of {total}) ")
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.focus {
            Focus::SearchField => {
                "Type to filter  Up/Down or Ctrl+n/p: scroll  Tab: results  Esc: clear/close"
            }
            Focus::Results => "j/k or Ctrl+n/p: scroll  / or Tab: search  Esc: back  q: close",
        };
        FooterInfo { keybindings: keybindings.to_string() }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        SearchBarInfo {
            query: self.search.query().to_string(),
            is_focused: self.focus == Focus::SearchField,
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        if self.search.catalog().is_empty() {
            return EmptyState {
                message: "The shelf is empty".to_string(),
                subtitle: String::new(),
            };
        }
        EmptyState {
            message: format!("No books match \"{}\"", self.search.query()),
            subtitle: "Backspace to edit the query, Esc to clear it".to_string(),
        }
    }

    /// Number of book rows that fit; the last row does not need its padding line.
    const fn calculate_visible_rows(total_rows: usize) -> usize {
        (total_rows.saturating_sub(CHROME_ROWS) + 1) / ROW_HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Catalog::builtin(), Theme::default())
    }

    #[test]
    fn opens_with_everything_shown() {
        let state = state();
        let vm = state.compute_viewmodel(40, 80);
        assert_eq!(vm.display_items.len(), 5);
        assert_eq!(vm.header.title, " Bookshelf (5) ");
        assert!(vm.empty_state.is_none());
        assert!(vm.search_bar.is_focused);
        assert_eq!(vm.display_items[0].title, "The Great Gatsby");
        assert_eq!(vm.display_items[0].author, "F. Scott Fitzgerald");
        assert_eq!(vm.display_items[0].cover.as_str(), "the_great_gatsby");
    }

    #[test]
    fn header_counts_matches() {
        let mut state = state();
        state.set_query("a");
        assert_eq!(state.compute_viewmodel(40, 80).header.title, " Bookshelf (4 of 5) ");
    }

    #[test]
    fn selection_wraps() {
        let mut state = state();
        state.move_selection_up();
        assert_eq!(state.selected_index, 4);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn selection_is_clamped_after_filtering() {
        let mut state = state();
        state.selected_index = 4;
        state.set_query("the");
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected_book().map(Book::title), Some("The Great Gatsby"));

        state.set_query("xyz123");
        assert_eq!(state.selected_index, 0);
        assert!(state.selected_book().is_none());
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn empty_result_has_message() {
        let mut state = state();
        state.set_query("xyz123");
        let vm = state.compute_viewmodel(40, 80);
        assert!(vm.display_items.is_empty());
        let empty = vm.empty_state.unwrap();
        assert_eq!(empty.message, "No books match \"xyz123\"");
    }

    #[test]
    fn empty_catalog_message() {
        let state = AppState::new(Catalog::new(vec![]), Theme::default());
        let vm = state.compute_viewmodel(40, 80);
        assert_eq!(vm.empty_state.unwrap().message, "The shelf is empty");
    }

    #[test]
    fn highlights_follow_query() {
        let mut state = state();
        state.set_query("ORWELL");
        let vm = state.compute_viewmodel(40, 80);
        let item = &vm.display_items[0];
        assert!(item.title_highlights.is_empty());
        assert_eq!(item.author_highlights, vec![(7, 13)]);
    }

    #[test]
    fn window_follows_cursor_on_short_terminal() {
        let mut state = state();
        state.focus = Focus::Results;
        // 9 chrome lines + 5 lines leaves room for two books.
        let rows = 14;
        assert_eq!(state.compute_viewmodel(rows, 80).display_items.len(), 2);

        state.selected_index = 4;
        let vm = state.compute_viewmodel(rows, 80);
        assert_eq!(vm.display_items.len(), 2);
        assert_eq!(vm.display_items[1].title, "Moby-Dick");
        assert!(vm.display_items[1].is_selected);
    }

    #[test]
    fn tiny_terminal_shows_no_rows() {
        let vm = state().compute_viewmodel(5, 80);
        assert!(vm.display_items.is_empty());
    }

    #[test]
    fn narrow_terminal_truncates_and_clips_highlights() {
        let mut state = state();
        state.set_query("mockingbird");
        // text width = 30 - 10 = 20, title budget = 13 chars
        let vm = state.compute_viewmodel(40, 30);
        let item = &vm.display_items[0];
        assert_eq!(item.title, "To Kill a ...");
        assert!(item.title_highlights.is_empty());

        state.set_query("kill");
        let vm = state.compute_viewmodel(40, 30);
        assert_eq!(vm.display_items[0].title_highlights, vec![(3, 7)]);
    }

    #[test]
    fn cursor_only_marked_when_results_focused() {
        let mut state = state();
        let vm = state.compute_viewmodel(40, 80);
        assert!(vm.display_items.iter().all(|item| !item.is_selected));

        state.focus = Focus::Results;
        let vm = state.compute_viewmodel(40, 80);
        assert!(vm.display_items[0].is_selected);
    }
}
