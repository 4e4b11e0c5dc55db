//! Help popup listing every keybinding. Opened with '?', closed by Esc/q/?.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::theme::ACCENT_COLOR;
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Account",
        &[
            ("b", "Toggle long balance"),
            ("r", "Refresh balance"),
            ("d", "Display address on device"),
            ("c", "Copy address"),
            ("1-3", "Open explorer link"),
        ],
    ),
    (
        "Application",
        &[
            ("n", "Next network"),
            ("w", "Next wallet"),
            ("o", "Toggle offline"),
            ("?", "Toggle help"),
            ("q", "Quit"),
        ],
    ),
];

const POPUP_WIDTH: u16 = 44;

/// Renders the help popup centered in `area`.
pub fn render(frame: &mut Frame, area: Rect) {
    let lines = help_lines();
    // Content plus borders.
    let height = lines.len() as u16 + 2;
    let popup_area = centered_popup_area(area, POPUP_WIDTH, height);

    frame.render_widget(Clear, popup_area);

    let block = create_popup_block("Help");
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, (title, bindings)) in HELP_SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(Span::styled(
            *title,
            Style::default()
                .fg(ACCENT_COLOR)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, description) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("{key:<8}"), Style::default().fg(ACCENT_COLOR)),
                Span::raw(*description),
            ]));
        }
    }
    lines
}
