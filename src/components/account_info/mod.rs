//! Account sidebar: address, balance, hardware confirmation and explorer links.
//!
//! [`AccountInfo`] owns only local UI state. Everything else comes in from
//! outside: the wallet handle on [`AccountInfo::update`], a
//! [`StoreSnapshot`] on every view/render, and an [`ActionDispatch`] given at
//! construction.
//!
//! ```text
//! ┌ Account ──────────────────────────────┐
//! │ Account Address                       │
//! │ 0x5aAeb6053F3E94C9b9A09f33669435E7... │
//! │ [d] Display address on Ledger         │
//! │                                       │
//! │ Account Balance                       │
//! │ 1.5 ETH  [r] refresh                  │
//! │                                       │
//! │ Transaction History                   │
//! │ [1] ETH (https://etherscan.io)        │
//! └───────────────────────────────────────┘
//! ```

mod address;
mod balance;
mod confirm;
mod explorer;
mod render;

pub use address::AddressResolver;
pub use balance::{BalanceAffordance, BalanceDisplay, balance_symbol};
pub use confirm::{ConfirmState, HardwareConfirmFlow};
pub use explorer::{ExplorerLink, ExplorerLinkKind, explorer_links};
pub use render::render_account_info;

use ratatui::{Frame, layout::Rect};

use crate::domain::{WalletHandle, WalletKind};
use crate::i18n::translate;
use crate::state::store::{ActionDispatch, StoreSnapshot, WalletAction};

// ============================================================================
// View Model
// ============================================================================

/// Hardware prompt shown under the address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HardwarePrompt {
    /// Clickable "Display address on {wallet}".
    Trigger(String),
    /// Spinner plus "Confirm address on {wallet}".
    Confirming(String),
}

/// Balance section contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceView {
    /// Balance in wei, if known.
    pub wei: Option<u128>,
    /// Long precision instead of short.
    pub show_long: bool,
    /// Suffix; only present when `wei` is.
    pub symbol: Option<String>,
    /// Whether the app is offline.
    pub is_offline: bool,
    /// Spinner, refresh trigger or nothing.
    pub affordance: BalanceAffordance,
}

/// Everything the sidebar renders for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfoView {
    /// Checksummed address.
    pub address: String,
    /// Present only for hardware wallets.
    pub hardware: Option<HardwarePrompt>,
    /// Balance section.
    pub balance: BalanceView,
    /// Explorer links; the section is omitted when empty.
    pub links: Vec<ExplorerLink>,
}

// ============================================================================
// AccountInfo
// ============================================================================

/// The account sidebar component.
#[derive(Debug)]
pub struct AccountInfo {
    wallet: WalletHandle,
    dispatch: Box<dyn ActionDispatch>,
    resolver: AddressResolver,
    balance: BalanceDisplay,
    confirm: HardwareConfirmFlow,
}

impl AccountInfo {
    /// Create the component. Call [`AccountInfo::mount`] before rendering.
    #[must_use]
    pub fn new(wallet: WalletHandle, dispatch: Box<dyn ActionDispatch>) -> Self {
        Self {
            wallet,
            dispatch,
            resolver: AddressResolver::new(),
            balance: BalanceDisplay::default(),
            confirm: HardwareConfirmFlow::new(),
        }
    }

    /// First sync with the wallet. Returns `true` if a re-render is needed.
    pub fn mount(&mut self) -> bool {
        self.resolver.sync(&self.wallet)
    }

    /// Take the latest wallet handle and apply pending device results.
    /// Returns `true` if a re-render is needed.
    ///
    /// A new wallet version starts a fresh confirm flow; a late result from
    /// the previous wallet's device is dropped with the old one.
    pub fn update(&mut self, wallet: &WalletHandle) -> bool {
        let swapped = wallet.version() != self.wallet.version();
        if swapped {
            self.wallet = wallet.clone();
            self.confirm = HardwareConfirmFlow::new();
        }
        let settled = self.confirm.poll();
        let address_changed = self.resolver.sync(&self.wallet);
        swapped || settled || address_changed
    }

    /// Cached (non-checksummed) address.
    #[must_use]
    pub fn address(&self) -> &str {
        self.resolver.address()
    }

    /// Whether the long balance form is shown.
    #[must_use]
    pub const fn show_long_balance(&self) -> bool {
        self.balance.show_long_balance()
    }

    /// Hardware confirmation state.
    #[must_use]
    pub const fn confirm_state(&self) -> ConfirmState {
        self.confirm.state()
    }

    /// Flip between short and long balance precision.
    pub fn toggle_long_balance(&mut self) {
        self.balance.toggle();
    }

    /// Start the on-device address display. Returns `false` for non-hardware
    /// wallets or while a confirmation is already outstanding.
    pub fn request_display_address(&mut self) -> bool {
        let wallet = std::sync::Arc::clone(self.wallet.wallet());
        self.confirm.request(wallet.as_ref())
    }

    /// Wait for the outstanding device call, if any, and apply its result.
    #[cfg(test)]
    pub async fn wait_display_settled(&mut self) {
        self.confirm.wait_settled().await;
    }

    /// Dispatch a balance refresh if the refresh trigger is showing.
    pub fn refresh_balance(&self, snapshot: &StoreSnapshot) -> bool {
        let affordance = BalanceAffordance::for_balance(&snapshot.balance, snapshot.is_offline);
        if affordance != BalanceAffordance::Refresh {
            return false;
        }
        self.dispatch.dispatch(WalletAction::RefreshAccountBalance);
        true
    }

    /// Explorer links for the current address.
    #[must_use]
    pub fn links(&self, snapshot: &StoreSnapshot) -> Vec<ExplorerLink> {
        explorer_links(&snapshot.network, self.address())
    }

    /// Build the view model for this frame.
    #[must_use]
    pub fn view(&self, snapshot: &StoreSnapshot) -> AccountInfoView {
        let wallet = self.wallet.wallet();
        let hardware = match wallet.kind() {
            WalletKind::Basic => None,
            WalletKind::Hardware => {
                let params = [("wallet", wallet.wallet_type())];
                Some(match self.confirm.state() {
                    ConfirmState::Idle => {
                        HardwarePrompt::Trigger(translate("SIDEBAR_DISPLAY_ADDR", &params))
                    }
                    ConfirmState::Confirming => {
                        HardwarePrompt::Confirming(translate("SIDEBAR_CONFIRM_ADDR", &params))
                    }
                })
            }
        };

        let balance = &snapshot.balance;
        AccountInfoView {
            address: snapshot.to_checksum_address(self.address()),
            hardware,
            balance: BalanceView {
                wei: balance.wei,
                show_long: self.balance.show_long_balance(),
                symbol: balance.wei.map(|_| balance_symbol(&snapshot.network)),
                is_offline: snapshot.is_offline,
                affordance: BalanceAffordance::for_balance(balance, snapshot.is_offline),
            },
            links: self.links(snapshot),
        }
    }

    /// Render into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect, snapshot: &StoreSnapshot, tick: u64) {
        render_account_info(frame, area, &self.view(snapshot), tick);
    }
}

// ============================================================================
// Tests
// ============================================================================
