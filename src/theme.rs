//! Theme and styling constants for the walletbar TUI.
//!
//! Tokyo Night-inspired colors and consistent styling.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements and highlights.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Secondary accent color - links.
pub const SECONDARY_COLOR: Color = Color::Blue;

/// Success indicator color - balances.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Warning indicator color - section headers and testnet markers.
pub const WARNING_COLOR: Color = Color::Yellow;

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

/// Accent color for hardware wallet prompts.
pub const ACCENT_COLOR: Color = Color::Magenta;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for unfocused elements.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for focused/active elements.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Title style for focused/active elements.
pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Section header style inside the sidebar.
pub const SECTION_HEADER_STYLE: Style = Style::new().fg(WARNING_COLOR).add_modifier(Modifier::BOLD);

/// Style for keybinding hints shown next to actions.
pub const KEY_HINT_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Style for outbound links.
pub const LINK_STYLE: Style = Style::new()
    .fg(SECONDARY_COLOR)
    .add_modifier(Modifier::UNDERLINED);
