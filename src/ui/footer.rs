//! Footer bar with keyboard shortcuts for the current context.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::theme::MUTED_COLOR;

const MAIN_HINTS: &str = "q:Quit  b:Precision  r:Refresh  c:Copy  n:Network  w:Wallet  ?:Help";
const HELP_HINTS: &str = "Esc:Close";

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, context: InputContext) {
    let text = match context {
        InputContext::Main => MAIN_HINTS,
        InputContext::HelpPopup => HELP_HINTS,
    };
    let footer = Paragraph::new(text)
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(width: u16, context: InputContext) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), context))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_footer_displays_all_shortcuts() {
        let content = rendered(100, InputContext::Main);
        for shortcut in ["q:Quit", "b:Precision", "r:Refresh", "c:Copy", "?:Help"] {
            assert!(content.contains(shortcut), "missing '{shortcut}': {content}");
        }
    }

    #[test]
    fn test_footer_is_centered() {
        let content = rendered(100, InputContext::HelpPopup);
        let leading = content.len() - content.trim_start().len();
        let trailing = content.len() - content.trim_end().len();
        assert!(leading.abs_diff(trailing) <= 1, "{content:?}");
        assert_eq!(content.trim(), "Esc:Close");
    }

    #[test]
    fn test_narrow_footer_does_not_panic() {
        assert_eq!(rendered(20, InputContext::Main).chars().count(), 20);
    }
}
