//! Toast notification overlay in the bottom-right corner.
//!
//! Color follows the message prefix: `[+]` success, `[x]` error, anything
//! else plain.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::{ERROR_COLOR, SUCCESS_COLOR};

const MIN_TOAST_WIDTH: u16 = 20;
const TOAST_HEIGHT: u16 = 3;
const TOAST_PADDING_RIGHT: u16 = 2;
const TOAST_PADDING_BOTTOM: u16 = 2;
/// Borders plus one space either side.
const TOAST_WIDTH_PADDING: u16 = 4;

/// Renders `message` as a toast within `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = toast_position(area, message);
    frame.render_widget(Clear, toast_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(toast_area);
    frame.render_widget(block, toast_area);

    let text = Paragraph::new(message)
        .style(Style::default().fg(text_color(message)))
        .alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

fn toast_position(area: Rect, message: &str) -> Rect {
    let message_len = message.chars().count() as u16;
    let width = (message_len + TOAST_WIDTH_PADDING)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);

    let x = area.x + area.width.saturating_sub(width + TOAST_PADDING_RIGHT);
    let y = area.y + area.height.saturating_sub(TOAST_HEIGHT + TOAST_PADDING_BOTTOM);

    Rect::new(x, y, width, TOAST_HEIGHT.min(area.height))
}

fn text_color(message: &str) -> Color {
    if message.starts_with("[+]") {
        SUCCESS_COLOR
    } else if message.starts_with("[x]") {
        ERROR_COLOR
    } else {
        Color::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    #[case::short("Hi".to_string(), MIN_TOAST_WIDTH)]
    #[case::normal("[+] Address copied".to_string(), 22)]
    #[case::long_is_capped("x".repeat(80), 50)]
    fn test_toast_width(#[case] message: String, #[case] width: u16) {
        let toast = toast_position(Rect::new(0, 0, 100, 50), &message);
        assert_eq!(toast.width, width);
        assert_eq!(toast.height, TOAST_HEIGHT);
        assert_eq!(toast.x + toast.width + TOAST_PADDING_RIGHT, 100);
    }

    #[test]
    fn test_toast_stays_in_small_area() {
        let area = Rect::new(0, 0, 30, 10);
        let toast = toast_position(area, "Test");
        assert!(toast.right() <= area.right());
        assert!(toast.bottom() <= area.bottom());
    }

    #[rstest]
    #[case::success("[+] Opened in browser", SUCCESS_COLOR)]
    #[case::error("[x] Clipboard not available", ERROR_COLOR)]
    #[case::info("Network: ETC", Color::White)]
    fn test_text_color(#[case] message: &str, #[case] expected: Color) {
        assert_eq!(text_color(message), expected);
    }

    #[test]
    fn test_render_toast_text() {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|frame| render_toast(frame, frame.area(), "[+] Address copied"))
            .unwrap();
        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("[+] Address copied"));
    }
}
