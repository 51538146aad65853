//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` alongside its render flag. Query
//! edits never produce actions since they are applied to state directly; only
//! effects that reach outside the plugin state appear here.

/// Commands executed by the plugin shim after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,
}
