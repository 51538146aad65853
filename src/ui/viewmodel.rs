//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no logic, only display-ready data: truncated text,
//! highlight ranges and selection flags.

use crate::domain::ImageRef;

/// Label printed before each book title.
pub const TITLE_LABEL: &str = "Title: ";

/// Label printed before each book author.
pub const AUTHOR_LABEL: &str = "Author: ";

/// Terminal lines used by one book row: title, author, blank padding.
pub const ROW_HEIGHT: usize = 3;

/// Columns taken by the cover tile column: left margin, tile, gap.
pub const COVER_COLUMN_WIDTH: usize = COVER_MARGIN + COVER_TILE_WIDTH + COVER_GAP;

pub const COVER_MARGIN: usize = 1;
pub const COVER_TILE_WIDTH: usize = 6;
pub const COVER_GAP: usize = 2;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Book rows inside the visible window.
    pub display_items: Vec<DisplayItem>,

    pub header: HeaderInfo,

    pub footer: FooterInfo,

    /// Set when the displayed set is empty.
    pub empty_state: Option<EmptyState>,

    /// The search field is always on screen.
    pub search_bar: SearchBarInfo,
}

/// One book row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Title, truncated to fit after [`TITLE_LABEL`].
    pub title: String,

    /// Author, truncated to fit after [`AUTHOR_LABEL`].
    pub author: String,

    /// Cover asset to show in the tile column.
    pub cover: ImageRef,

    pub is_selected: bool,

    /// Character ranges of `title` matching the query, `(start, end)` exclusive end.
    pub title_highlights: Vec<(usize, usize)>,

    /// Character ranges of `author` matching the query.
    pub author_highlights: Vec<(usize, usize)>,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
///
/// Contains keybinding hints for the current focus.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Message shown in place of the list when no book is displayed.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Search input box contents.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current query text.
    pub query: String,

    /// Whether keystrokes go to the field (draws the caret).
    pub is_focused: bool,
}
