//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the Bookshelf library and the Zellij plugin
//! system: it maps key presses to library events, runs the event handler and
//! executes the resulting actions.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build `AppState`
//! 2. **Subscribe**: Register for `Key` events
//! 3. **Update**: Translate keys, delegate to `handle_event`
//! 4. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Down`: Move down
//! - `Ctrl+p` / `Up`: Move up
//! - `Tab`: Toggle between search field and results
//! - `Esc`: Back to the field, clear the query, or close when already empty
//!
//! In the search field:
//! - Printable characters: Edit the query
//! - `Backspace`: Delete the last character
//! - `Enter`: Move to the results
//!
//! In the results:
//! - `j`/`k`: Move down / up
//! - `/`: Return to the search field
//! - `q`: Close plugin

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use bookshelf::{handle_event, Action, Config, Event, Focus};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: bookshelf::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: bookshelf::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        bookshelf::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = bookshelf::initialize(&config);

        subscribe(&[EventType::Key]);

        tracing::debug!(books = self.app.displayed_books().len(), "plugin load complete");
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let zellij_tile::prelude::Event::Key(key) = event else {
            return false;
        };

        let Some(our_event) = self.map_key_event(&key) else {
            return false;
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        bookshelf::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        let focus = self.app.focus;
        Some(match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Esc => Event::Escape,
            BareKey::Tab => match focus {
                Focus::SearchField => Event::FocusResults,
                Focus::Results => Event::FocusSearchBar,
            },
            BareKey::Enter if focus == Focus::SearchField => Event::FocusResults,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) if focus == Focus::Results => match c {
                'j' => Event::KeyDown,
                'k' => Event::KeyUp,
                '/' => Event::FocusSearchBar,
                'q' => Event::CloseFocus,
                _ => return None,
            },
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Translates library actions to Zellij API calls.
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}
