//! Keyboard focus state for the single screen.
//!
//! The screen has two focus targets: the search field, where printable keys
//! edit the query, and the results list, where letter keys act as commands.

/// Which part of the screen receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Printable characters are appended to the query.
    ///
    /// Arrow keys and Ctrl+n/p still move the list cursor.
    #[default]
    SearchField,

    /// Keys navigate the list: j/k move, `/` or Tab return to the field, q closes.
    Results,
}
