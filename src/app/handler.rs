//! Event handling and state transition logic.
//!
//! [`handle_event`] applies one user input event to [`AppState`] and reports
//! whether the screen needs re-rendering together with any [`Action`]s for the
//! plugin shim. Events are processed strictly one at a time; each query edit
//! recomputes the displayed set before the function returns.
//!
//! # Example
//!
//! ```rust
//! use bookshelf::app::{handle_event, AppState, Event};
//! use bookshelf::domain::Catalog;
//! use bookshelf::ui::theme::Theme;
//!
//! let mut state = AppState::new(Catalog::builtin(), Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::Char('x'))?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), bookshelf::BookshelfError>(())
//! ```

use crate::app::{Action, AppState, Focus};
use crate::domain::error::Result;

/// User input events, already translated from host key codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the list cursor down by one (wraps to top).
    KeyDown,
    /// Moves the list cursor up by one (wraps to bottom).
    KeyUp,
    /// Appends a character to the query (search field focus only).
    Char(char),
    /// Removes the last query character (search field focus only).
    Backspace,
    /// Replaces the whole query, as a text-change event carrying the full field value.
    SetQuery(String),
    /// Steps back: results → field, non-empty query → cleared, empty query → close.
    Escape,
    /// Moves focus to the search field.
    FocusSearchBar,
    /// Moves focus to the results list.
    FocusResults,
    /// Hides the plugin.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. `should_render` is `false` when the event was
/// ignored in the current focus or left the state unchanged.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the shim's error path uniform.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, focus = ?state.focus).entered();

    match event {
        Event::KeyDown | Event::KeyUp if state.displayed_books().is_empty() => Ok((false, vec![])),
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.focus != Focus::SearchField {
                return Ok((false, vec![]));
            }
            state.push_query_char(*c);
            tracing::trace!(query = %state.search.query(), char = %c, "search query updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.focus != Focus::SearchField {
                return Ok((false, vec![]));
            }
            Ok((state.pop_query_char(), vec![]))
        }
        Event::SetQuery(text) => {
            if state.search.query() == text {
                return Ok((false, vec![]));
            }
            state.set_query(text.clone());
            Ok((true, vec![]))
        }
        Event::Escape => match state.focus {
            Focus::Results => {
                state.focus = Focus::SearchField;
                Ok((true, vec![]))
            }
            Focus::SearchField if !state.search.query().is_empty() => {
                tracing::debug!(query = %state.search.query(), "clearing search query");
                state.clear_query();
                Ok((true, vec![]))
            }
            Focus::SearchField => Ok((false, vec![Action::CloseFocus])),
        },
        Event::FocusSearchBar => {
            if state.focus == Focus::SearchField {
                return Ok((false, vec![]));
            }
            state.focus = Focus::SearchField;
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.focus == Focus::Results || state.displayed_books().is_empty() {
                return Ok((false, vec![]));
            }
            state.focus = Focus::Results;
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Book, Catalog};
    use crate::ui::theme::Theme;

    fn state() -> AppState {
        AppState::new(Catalog::builtin(), Theme::default())
    }

    fn titles(state: &AppState) -> Vec<&str> {
        state.displayed_books().iter().map(Book::title).collect()
    }

    fn type_str(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    #[test]
    fn typing_filters_on_every_keystroke() {
        let mut state = state();
        handle_event(&mut state, &Event::Char('o')).unwrap();
        assert_eq!(titles(&state).len(), 4);

        type_str(&mut state, "rwell");
        assert_eq!(titles(&state), vec!["1984"]);
    }

    #[test]
    fn backspace_widens_results() {
        let mut state = state();
        type_str(&mut state, "thex");
        assert!(titles(&state).is_empty());

        let (render, _) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(render);
        assert_eq!(titles(&state), vec!["The Great Gatsby"]);
    }

    #[test]
    fn backspace_on_empty_query_skips_render() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn navigation_on_empty_list_skips_render() {
        let mut state = state();
        type_str(&mut state, "xyz123");

        for event in [Event::KeyDown, Event::KeyUp] {
            let (render, actions) = handle_event(&mut state, &event).unwrap();
            assert!(!render);
            assert!(actions.is_empty());
        }
        assert_eq!(state.selected_index, 0);

        handle_event(&mut state, &Event::Escape).unwrap();
        let (render, _) = handle_event(&mut state, &Event::KeyDown).unwrap();
        assert!(render);
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn set_query_replaces_text() {
        let mut state = state();
        type_str(&mut state, "zzz");
        let (render, _) = handle_event(&mut state, &Event::SetQuery("Austen".to_string())).unwrap();
        assert!(render);
        assert_eq!(titles(&state), vec!["Pride and Prejudice"]);

        let (render, _) = handle_event(&mut state, &Event::SetQuery("Austen".to_string())).unwrap();
        assert!(!render);
    }

    #[test]
    fn escape_clears_then_closes() {
        let mut state = state();
        type_str(&mut state, "moby");

        let (render, actions) = handle_event(&mut state, &Event::Escape).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.search.query(), "");
        assert_eq!(titles(&state).len(), 5);

        let (render, actions) = handle_event(&mut state, &Event::Escape).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn results_focus_ignores_typing() {
        let mut state = state();
        handle_event(&mut state, &Event::FocusResults).unwrap();
        assert_eq!(state.focus, Focus::Results);

        let (render, _) = handle_event(&mut state, &Event::Char('j')).unwrap();
        assert!(!render);
        assert_eq!(state.search.query(), "");

        handle_event(&mut state, &Event::Escape).unwrap();
        assert_eq!(state.focus, Focus::SearchField);
    }

    #[test]
    fn cannot_focus_empty_results() {
        let mut state = state();
        type_str(&mut state, "xyz123");
        let (render, _) = handle_event(&mut state, &Event::FocusResults).unwrap();
        assert!(!render);
        assert_eq!(state.focus, Focus::SearchField);
    }

    #[test]
    fn navigation_moves_cursor() {
        let mut state = state();
        handle_event(&mut state, &Event::KeyDown).unwrap();
        handle_event(&mut state, &Event::KeyDown).unwrap();
        assert_eq!(state.selected_book().map(Book::title), Some("1984"));
        handle_event(&mut state, &Event::KeyUp).unwrap();
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn close_emits_action() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
