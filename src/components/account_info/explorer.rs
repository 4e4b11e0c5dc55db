//! Outbound explorer links for the current address.

use crate::domain::{ETHERCHAIN, NetworkConfig};
use crate::i18n::translate_raw;

/// Network id that additionally links to Etherchain.
const ETHERCHAIN_NETWORK_ID: &str = "ETH";

/// Which explorer a link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerLinkKind {
    /// The network's configured block explorer.
    Block,
    /// The fixed Etherchain explorer.
    Etherchain,
    /// The network's token explorer.
    Token,
}

/// A rendered explorer link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerLink {
    pub kind: ExplorerLinkKind,
    pub label: String,
    pub url: String,
}

/// Links for `address` on `network`, in display order.
///
/// Custom networks never get links.
#[must_use]
pub fn explorer_links(network: &NetworkConfig, address: &str) -> Vec<ExplorerLink> {
    if network.is_custom() {
        return Vec::new();
    }

    let mut links = Vec::with_capacity(3);
    if let Some(explorer) = network.block_explorer() {
        links.push(ExplorerLink {
            kind: ExplorerLinkKind::Block,
            label: format!("{} ({})", network.name, explorer.origin),
            url: explorer.address_url(address),
        });
    }
    if network.id == ETHERCHAIN_NETWORK_ID {
        links.push(ExplorerLink {
            kind: ExplorerLinkKind::Etherchain,
            label: format!("{} ({})", network.name, ETHERCHAIN.origin),
            url: ETHERCHAIN.address_url(address),
        });
    }
    if let Some(explorer) = network.token_explorer() {
        links.push(ExplorerLink {
            kind: ExplorerLinkKind::Token,
            label: format!("{} ({})", translate_raw("TOKENS"), explorer.name),
            url: explorer.address(address),
        });
    }
    links
}
