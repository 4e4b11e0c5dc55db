//! Unit display widget.
//!
//! Renders a base-unit amount (wei) in the native unit, in short or long
//! precision, with an optional symbol suffix.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::domain::ETHER_DECIMALS;
use crate::i18n::translate_raw;
use crate::theme::{MUTED_COLOR, SUCCESS_COLOR};
use crate::widgets::helpers::{
    SHORT_BALANCE_DIGITS, format_base_units, format_base_units_short, spinner_frame,
};

// ============================================================================
// UnitDisplay Widget
// ============================================================================

/// Renders a balance in the native unit.
///
/// # Example
///
/// ```text
/// 1.2346 ETH
/// 1.234567891234567891 ETH (Testnet)
/// Balance isn't available offline
/// ```
///
/// # Usage
///
/// ```ignore
/// let display = UnitDisplay::new(Some(wei))
///     .short(true)
///     .with_symbol("ETH");
/// ```
#[derive(Debug, Clone)]
pub struct UnitDisplay {
    value: Option<u128>,
    decimals: u32,
    short: bool,
    symbol: Option<String>,
    offline: bool,
    tick: u64,
}

impl UnitDisplay {
    /// Create a display for `value` wei.
    #[must_use]
    pub const fn new(value: Option<u128>) -> Self {
        Self {
            value,
            decimals: ETHER_DECIMALS,
            short: true,
            symbol: None,
            offline: false,
            tick: 0,
        }
    }

    /// Toggle the short (4 decimals) form.
    #[must_use]
    pub const fn short(mut self, short: bool) -> Self {
        self.short = short;
        self
    }

    /// Set the symbol suffix.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Render the "not available offline" text when no value is known.
    #[must_use]
    pub const fn check_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Animation tick for the loading spinner.
    #[must_use]
    pub const fn with_tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    /// The formatted amount without styling, or `None` when no value is known.
    #[must_use]
    pub fn formatted(&self) -> Option<String> {
        let value = self.value?;
        let amount = if self.short {
            format_base_units_short(value, self.decimals, SHORT_BALANCE_DIGITS)
        } else {
            format_base_units(value, self.decimals)
        };
        Some(match &self.symbol {
            Some(symbol) => format!("{amount} {symbol}"),
            None => amount,
        })
    }

    /// Generate the display line.
    #[must_use]
    pub fn to_line(&self) -> Line<'static> {
        match self.formatted() {
            Some(text) => Line::from(Span::styled(
                text,
                Style::default()
                    .fg(SUCCESS_COLOR)
                    .add_modifier(Modifier::BOLD),
            )),
            None if self.offline => Line::from(Span::styled(
                translate_raw("BALANCE_OFFLINE"),
                Style::default().fg(MUTED_COLOR),
            )),
            None => Line::from(vec![
                Span::styled(
                    format!("{} ", spinner_frame(self.tick)),
                    Style::default().fg(SUCCESS_COLOR),
                ),
                Span::styled(
                    translate_raw("BALANCE_LOADING"),
                    Style::default().fg(MUTED_COLOR),
                ),
            ]),
        }
    }
}

impl Widget for UnitDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.to_line())
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

// ============================================================================
// Tests
// ============================================================================
