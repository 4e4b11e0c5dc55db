//! Address display widget.
//!
//! Renders a checksummed address, truncated to the available width.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::PRIMARY_COLOR;
use crate::widgets::helpers::truncate_address;

// ============================================================================
// AddressDisplay Widget
// ============================================================================

/// Renders an address, middle-truncated when it does not fit.
///
/// # Example
///
/// ```text
/// 0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed
/// 0x5aAeb605...E7Ef1BeAed
/// ```
#[derive(Debug, Clone)]
pub struct AddressDisplay {
    address: String,
    max_len: usize,
}

impl AddressDisplay {
    /// Full length of a `0x`-prefixed 20-byte address.
    pub const FULL_LEN: usize = 42;

    /// Create a new address display, untruncated.
    #[must_use]
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            max_len: Self::FULL_LEN,
        }
    }

    /// Set the maximum length for truncation.
    #[must_use]
    pub const fn truncate(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Generate the display line.
    #[must_use]
    pub fn to_line(&self) -> Line<'static> {
        let truncated = truncate_address(&self.address, self.max_len);
        Line::from(Span::styled(truncated, Style::default().fg(PRIMARY_COLOR)))
    }
}

impl Widget for AddressDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_line(area.x, area.y, &self.to_line(), area.width);
    }
}

// ============================================================================
// Tests
// ============================================================================
