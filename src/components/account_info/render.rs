//! Ratatui rendering of an [`AccountInfoView`].

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{AccountInfoView, BalanceAffordance, HardwarePrompt};
use crate::i18n::translate_raw;
use crate::theme::{
    ACCENT_COLOR, KEY_HINT_STYLE, LINK_STYLE, SECTION_HEADER_STYLE, SUCCESS_COLOR,
};
use crate::ui::helpers::create_border_block;
use crate::widgets::{AddressDisplay, UnitDisplay, spinner_frame};

/// Title of the sidebar block.
const SIDEBAR_TITLE: &str = "Account";

/// Render the sidebar for `view` into `area`.
///
/// `tick` drives spinner animation.
pub fn render_account_info(frame: &mut Frame, area: Rect, view: &AccountInfoView, tick: u64) {
    let block = create_border_block(SIDEBAR_TITLE, true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = account_info_lines(view, inner.width as usize, tick);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn section_header(key: &str) -> Line<'static> {
    Line::from(Span::styled(translate_raw(key), SECTION_HEADER_STYLE))
}

fn key_hint(key: &str) -> Span<'static> {
    Span::styled(format!("[{key}] "), KEY_HINT_STYLE)
}

/// Build the sidebar lines. Split out so tests can inspect text directly.
fn account_info_lines(view: &AccountInfoView, width: usize, tick: u64) -> Vec<Line<'static>> {
    let mut lines = vec![
        section_header("SIDEBAR_ACCOUNTADDR"),
        AddressDisplay::new(&view.address).truncate(width).to_line(),
    ];

    match &view.hardware {
        Some(HardwarePrompt::Trigger(label)) => lines.push(Line::from(vec![
            key_hint("d"),
            Span::styled(label.clone(), Style::default().fg(ACCENT_COLOR)),
        ])),
        Some(HardwarePrompt::Confirming(label)) => lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", spinner_frame(tick)),
                Style::default().fg(ACCENT_COLOR),
            ),
            Span::raw(label.clone()),
        ])),
        None => {}
    }

    lines.push(Line::default());
    lines.push(section_header("SIDEBAR_ACCOUNTBAL"));

    let mut amount = UnitDisplay::new(view.balance.wei)
        .short(!view.balance.show_long)
        .check_offline(view.balance.is_offline)
        .with_tick(tick);
    if let Some(symbol) = &view.balance.symbol {
        amount = amount.with_symbol(symbol.clone());
    }
    let mut balance_line = amount.to_line();
    match view.balance.affordance {
        BalanceAffordance::Spinner => balance_line.spans.push(Span::styled(
            format!("  {}", spinner_frame(tick)),
            Style::default().fg(SUCCESS_COLOR),
        )),
        BalanceAffordance::Refresh => {
            balance_line.spans.push(Span::raw("  "));
            balance_line.spans.push(key_hint("r"));
            balance_line
                .spans
                .push(Span::styled(translate_raw("REFRESH"), KEY_HINT_STYLE));
        }
        BalanceAffordance::None => {}
    }
    lines.push(balance_line);

    if !view.links.is_empty() {
        lines.push(Line::default());
        lines.push(section_header("SIDEBAR_TRANSHISTORY"));
        for (index, link) in view.links.iter().enumerate() {
            lines.push(Line::from(vec![
                key_hint(&(index + 1).to_string()),
                Span::styled(link.label.clone(), LINK_STYLE),
            ]));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::account_info::{BalanceView, ExplorerLink, ExplorerLinkKind};
    use crate::test_utils::{
        SnapshotMother, WalletMother, buffer_to_string, mounted, test_terminal,
    };
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn view(affordance: BalanceAffordance, links: Vec<ExplorerLink>) -> AccountInfoView {
        AccountInfoView {
            address: WalletMother::CHECKSUMMED.to_string(),
            hardware: None,
            balance: BalanceView {
                wei: Some(1_500_000_000_000_000_000),
                show_long: false,
                symbol: Some("ETH".into()),
                is_offline: false,
                affordance,
            },
            links,
        }
    }

    #[test]
    fn test_refresh_trigger_text() {
        let lines = text(&account_info_lines(
            &view(BalanceAffordance::Refresh, Vec::new()),
            60,
            0,
        ));
        assert!(lines.contains(&"1.5 ETH  [r] refresh".to_string()), "{lines:?}");
    }

    #[test]
    fn test_no_affordance_text() {
        let lines = text(&account_info_lines(
            &view(BalanceAffordance::None, Vec::new()),
            60,
            0,
        ));
        assert!(lines.contains(&"1.5 ETH".to_string()), "{lines:?}");
        assert!(!lines.iter().any(|l| l.contains("refresh")));
    }

    #[test]
    fn test_history_section_omitted_without_links() {
        let lines = text(&account_info_lines(
            &view(BalanceAffordance::None, Vec::new()),
            60,
            0,
        ));
        assert!(!lines.iter().any(|l| l == "Transaction History"));
    }

    #[test]
    fn test_links_are_numbered() {
        let link = ExplorerLink {
            kind: ExplorerLinkKind::Block,
            label: "ETH (https://etherscan.io)".into(),
            url: "https://etherscan.io/address/0x".into(),
        };
        let lines = text(&account_info_lines(
            &view(BalanceAffordance::None, vec![link]),
            60,
            0,
        ));
        assert!(lines.contains(&"Transaction History".to_string()));
        assert!(lines.contains(&"[1] ETH (https://etherscan.io)".to_string()));
    }

    #[rstest]
    fn test_renders_full_sidebar(mut test_terminal: Terminal<TestBackend>) {
        let (info, _) = mounted(WalletMother::ledger());
        let snapshot = SnapshotMother::eth_funded();

        test_terminal
            .draw(|frame| info.render(frame, frame.area(), &snapshot, 0))
            .unwrap();

        let content = buffer_to_string(test_terminal.backend().buffer());
        for expected in [
            "Account Address",
            WalletMother::CHECKSUMMED,
            "[d] Display address on Ledger",
            "Account Balance",
            "1.5 ETH  [r] refresh",
            "Transaction History",
            "[2] ETH (https://www.etherchain.org)",
            "[3] Tokens (Ethplorer.io)",
        ] {
            assert!(content.contains(expected), "missing '{expected}' in:\n{content}");
        }
    }

    #[test]
    fn test_narrow_area_truncates_address() {
        let mut terminal = Terminal::new(TestBackend::new(24, 12)).unwrap();
        let (info, _) = mounted(WalletMother::basic());
        let snapshot = SnapshotMother::eth_funded();

        terminal
            .draw(|frame| info.render(frame, frame.area(), &snapshot, 0))
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("0x5aAeb605...E7Ef1BeAed"), "{content}");
    }
}
