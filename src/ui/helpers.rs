//! Styled block helpers shared by the sidebar, header and popups.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, Borders},
};

use crate::theme::{BORDER_STYLE, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE};

/// Creates a bordered block styled by focus state.
///
/// Focused blocks get a double border and a `●` marker in the title;
/// unfocused ones a rounded, dimmed border.
///
/// # Example
///
/// ```ignore
/// let sidebar = create_border_block("Account", true);
/// let header = create_border_block("", false);
/// ```
#[must_use]
pub fn create_border_block(title: &str, focused: bool) -> Block<'static> {
    let (border_style, border_set, title_style, display_title) = if focused {
        (
            FOCUSED_BORDER_STYLE,
            border::DOUBLE,
            FOCUSED_TITLE_STYLE,
            if title.is_empty() {
                String::new()
            } else {
                format!(" ● {title} ")
            },
        )
    } else {
        (
            BORDER_STYLE,
            border::ROUNDED,
            Style::new()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            if title.is_empty() {
                String::new()
            } else {
                format!(" {title} ")
            },
        )
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(title_style)
        .border_set(border_set)
        .border_style(border_style)
}

/// Creates a popup block with a centered title and rounded borders.
#[must_use]
pub fn create_popup_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend, widgets::Block};
    use rstest::rstest;

    fn first_row(block: Block<'static>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(24, 3)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(block, frame.area()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    }

    #[rstest]
    #[case::focused(create_border_block("Account", true), "╔ ● Account ═")]
    #[case::unfocused(create_border_block("Account", false), "╭ Account ─")]
    #[case::untitled(create_border_block("", false), "╭──────")]
    fn test_border_block_titles(#[case] block: Block<'static>, #[case] prefix: &str) {
        let row = first_row(block);
        assert!(row.starts_with(prefix), "{row:?}");
    }

    #[test]
    fn test_popup_title_is_centered() {
        let row = first_row(create_popup_block("Help"));
        assert!(row.starts_with('╭'));
        assert!(row.ends_with('╮'));
        let start = row.find(" Help ").unwrap();
        let leading = row[..start].chars().count();
        let trailing = row.chars().count() - leading - " Help ".len();
        assert!(leading.abs_diff(trailing) <= 1, "{row:?}");
    }
}
