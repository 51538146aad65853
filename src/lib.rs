//! Bookshelf: a Zellij plugin showing a small shelf of books with live search.
//!
//! The plugin displays a fixed catalog of five books (title, author, cover)
//! and filters it as you type. A book stays on screen when the query occurs,
//! ignoring case, in its title or its author.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling                                   │
//! │  - Observable query / displayed set (BookSearch)    │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                   │
//! ┌───────────────────────┐   ┌─────────────────────────┐
//! │ UI Layer (ui/)        │   │ Domain Layer (domain/)  │
//! │ - Rendering           │   │ - Book, ImageRef        │
//! │ - Theming             │   │ - Catalog               │
//! │ - Components          │   │ - Search filter         │
//! └───────────────────────┘   └─────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Book model, catalog and search filter
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/bookshelf.wasm" {
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use bookshelf::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! for c in "orwell".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! assert_eq!(state.displayed_books()[0].title(), "1984");
//! # Ok::<(), bookshelf::BookshelfError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, BookSearch, Event, Focus};
pub use domain::{Book, BookshelfError, Catalog, ImageRef, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/bookshelf.wasm" {
///     theme "catppuccin-latte"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing filter directive (`trace`, `debug`, `info`, ...). Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values are treated as unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use bookshelf::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-frappe".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-frappe"));
    /// assert!(config.trace_level.is_none());
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
        }
    }

    /// Resolves the configured theme, falling back to the default on any failure.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the screen state: the built-in catalog, an empty query and the
/// configured theme.
///
/// # Example
///
/// ```rust
/// use bookshelf::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.displayed_books().len(), 5);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing bookshelf plugin");
    AppState::new(Catalog::builtin(), config.load_theme())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn reads_all_keys() {
        let config = Config::from_zellij(&map(&[
            ("theme", "catppuccin-latte"),
            ("theme_file", "/tmp/theme.toml"),
            ("trace_level", " debug "),
            ("unknown", "ignored"),
        ]));
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file.as_deref(), Some("/tmp/theme.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn blank_values_are_unset() {
        let config = Config::from_zellij(&map(&[("theme", "  ")]));
        assert!(config.theme_name.is_none());
    }

    #[test]
    fn unknown_theme_falls_back() {
        let config = Config::from_zellij(&map(&[("theme", "nord")]));
        assert_eq!(config.load_theme().name, "catppuccin-mocha");
    }

    #[test]
    fn theme_file_wins_over_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let toml = include_str!("../themes/catppuccin-latte.toml").replace("catppuccin-latte", "custom");
        file.write_all(toml.as_bytes()).unwrap();

        let config = Config {
            theme_name: Some("catppuccin-frappe".to_string()),
            theme_file: Some(file.path().to_string_lossy().to_string()),
            trace_level: None,
        };
        assert_eq!(config.load_theme().name, "custom");
    }

    #[test]
    fn missing_theme_file_falls_back() {
        let config = Config {
            theme_file: Some("/nonexistent/bookshelf.toml".to_string()),
            ..Config::default()
        };
        assert_eq!(config.load_theme().name, "catppuccin-mocha");
    }

    #[test]
    fn initialize_shows_full_catalog() {
        let state = initialize(&Config::default());
        assert_eq!(state.displayed_books(), Catalog::builtin().books());
        assert_eq!(state.search.query(), "");
        assert_eq!(state.focus, Focus::SearchField);
    }
}
