//! Header rendering: logo, selected network and connectivity.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::domain::NetworkConfig;
use crate::i18n::translate_raw;
use crate::theme::{ERROR_COLOR, MUTED_COLOR, SUCCESS_COLOR, WARNING_COLOR};

use super::helpers::create_border_block;

/// Render the application header.
pub fn render(frame: &mut Frame, area: Rect, network: &NetworkConfig, is_offline: bool) {
    let header_block = create_border_block("", false);
    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    if inner.height == 0 {
        return;
    }

    frame.render_widget(Paragraph::new(logo()), inner);
    frame.render_widget(
        Paragraph::new(status_line(network, is_offline)).alignment(Alignment::Right),
        inner,
    );
}

fn logo() -> Line<'static> {
    Line::from(vec![
        "[".into(),
        "wallet".green().bold(),
        "bar".blue().bold(),
        "]".into(),
    ])
}

fn status_line(network: &NetworkConfig, is_offline: bool) -> Line<'static> {
    let mut spans = vec![Span::styled(
        network.name.clone(),
        Style::default()
            .fg(SUCCESS_COLOR)
            .add_modifier(Modifier::BOLD),
    )];
    if network.is_testnet {
        spans.push(Span::styled(
            format!(" ({})", translate_raw("TESTNET")),
            Style::default().fg(WARNING_COLOR),
        ));
    }
    spans.push(Span::styled(" · ", Style::default().fg(MUTED_COLOR)));
    spans.push(if is_offline {
        Span::styled("offline", Style::default().fg(ERROR_COLOR))
    } else {
        Span::styled("online", Style::default().fg(SUCCESS_COLOR))
    });
    spans.push(Span::raw(" "));
    Line::from(spans)
}
