//! Search bar component renderer.
//!
//! Renders the query input box with a bordered frame. The field is always
//! visible; a caret marks it when it has keyboard focus.

use crate::ui::helpers::{position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

const PROMPT: &str = " Search: ";

const CARET: char = '▏';

/// Renders the 3-line search box at `row` and returns the row after it.
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────┐ [margin]
/// [margin] │ Search: ... │ [margin]
/// [margin] └─────────────┘ [margin]
/// ```
///
/// A query too long for the box shows its tail, keeping the end being typed visible.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let caret_len = usize::from(search.is_focused);
    let query_budget = inner_width.saturating_sub(PROMPT.len() + caret_len);
    let query = visible_tail(&search.query, query_budget);
    let text_len = PROMPT.len() + query.chars().count() + caret_len;
    let padding = inner_width.saturating_sub(text_len);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{PROMPT}");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{query}");
    if search.is_focused {
        print!("{}", Theme::fg(&theme.colors.search_bar_border));
        print!("{CARET}");
    }
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Last `max_chars` characters of `query`.
fn visible_tail(query: &str, max_chars: usize) -> String {
    let len = query.chars().count();
    if len <= max_chars {
        return query.to_string();
    }
    let reversed: String = query.chars().rev().collect();
    let (tail, _) = truncate_chars(&reversed, max_chars);
    tail.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_tail_keeps_end() {
        assert_eq!(visible_tail("orwell", 10), "orwell");
        assert_eq!(visible_tail("pride and prejudice", 8), "...udice");
    }
}
