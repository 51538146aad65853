//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin shim (main.rs) and the domain layer. Data flows in
//! one direction:
//!
//! ```text
//! Key Input → Event → handle_event → BookSearch::set_query → filter_books
//!                                          │
//!                                          └→ observers, re-render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Keyboard focus state
//! - [`search`]: Observable query / displayed-set holder
//! - [`state`]: Central application state and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod search;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::Focus;
pub use search::{BookSearch, DisplayObserver};
pub use state::AppState;
