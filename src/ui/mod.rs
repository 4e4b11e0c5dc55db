//! UI rendering for the walletbar TUI.
//!
//! - `header` - Logo, network and connectivity
//! - `footer` - Keybinding hints
//! - `popups` - Help overlay
//! - `components` - Toast notifications
//! - `layout` - Layout calculations
//! - `helpers` - Styled block constructors
//!
//! The account sidebar itself lives in [`crate::components::account_info`].

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod popups;

use ratatui::Frame;

use crate::state::App;

/// Render one frame.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let layout = layout::calculate_app_layout(size);
    let snapshot = app.snapshot();

    header::render(frame, layout.header, &snapshot.network, snapshot.is_offline);
    app.account_info
        .render(frame, layout.sidebar, &snapshot, app.animation_tick);
    footer::render(frame, layout.footer, app.input_context());

    if app.ui.show_help {
        popups::render_help_popup(frame, size);
    }

    // Toast on top of everything (non-blocking overlay)
    if let Some((message, _)) = &app.ui.toast {
        components::render_toast(frame, size, message);
    }
}
