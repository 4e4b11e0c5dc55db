//! Layout calculations for the walletbar TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the header area in terminal rows
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer area in terminal rows
pub const FOOTER_HEIGHT: u16 = 1;

/// Widest the sidebar gets; a full address plus borders and padding.
pub const SIDEBAR_MAX_WIDTH: u16 = 56;

/// Main application layout areas
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    /// Logo, network and connectivity.
    pub header: Rect,
    /// The account sidebar.
    pub sidebar: Rect,
    /// Keybinding hints.
    pub footer: Rect,
}

/// Split the terminal into header, sidebar and footer.
///
/// The sidebar is pinned to the left and capped at [`SIDEBAR_MAX_WIDTH`].
#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Max(SIDEBAR_MAX_WIDTH), Constraint::Min(0)])
        .split(rows[1]);

    AppLayout {
        header: rows[0],
        sidebar: columns[0],
        footer: rows[2],
    }
}

/// Calculate a centered popup area within a parent area
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}
