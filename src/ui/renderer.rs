//! Top-level rendering coordinator.
//!
//! Computes the view model from application state and hands it to the screen
//! component. Output goes to stdout, which Zellij draws into the plugin pane.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout for a `rows` x `cols` pane.
///
/// Does not clear the screen; Zellij provides a fresh pane buffer per render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    tracing::trace!(
        rows,
        cols,
        items = viewmodel.display_items.len(),
        "rendering"
    );

    components::render_screen(&viewmodel, &state.theme, cols, rows);
}
