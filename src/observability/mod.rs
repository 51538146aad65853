//! Structured logging for the plugin.
//!
//! The crate logs through `tracing` spans and events (`handle_event`,
//! `filter_books`, query recomputation). [`init_tracing`] wires them to a
//! `tracing-subscriber` formatter on stderr, filtered by the `trace_level`
//! plugin option.
//!
//! # Configuration
//!
//! ```kdl
//! plugin location="file:/path/to/bookshelf.wasm" {
//!     trace_level "debug"
//! }
//! ```

mod init;

pub use init::init_tracing;
