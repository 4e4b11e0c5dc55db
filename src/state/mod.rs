//! Application state for the walletbar TUI.
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │                        App                         │
//! ├───────────────┬──────────────────┬─────────────────┤
//! │ Store         │ AccountInfo      │ UiState         │
//! │  - network    │  - address cache │  - help popup   │
//! │  - balance    │  - long balance  │  - toast        │
//! │  - offline    │  - confirm flow  │                 │
//! │  - wallet     │                  │                 │
//! └───────────────┴──────────────────┴─────────────────┘
//! ```
//!
//! The sidebar reads the store only through [`store::StoreSnapshot`] and
//! writes to it only through [`store::ActionDispatch`]; dispatched actions
//! arrive back here on a channel and are applied in the main loop.

use std::sync::Arc;
use std::time::Duration;

use color_eyre::{Result, eyre::eyre};
use tokio::sync::mpsc;

use crate::components::AccountInfo;
use crate::constants::BALANCE_REFRESH_LATENCY;
use crate::domain::{Balance, Wallet};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod config;
pub mod platform;
pub mod store;
pub mod ui_state;

pub use config::AppConfig;
pub use platform::ClipboardManager;
pub use store::{ChannelDispatch, Store, StoreSnapshot, WalletAction};
pub use ui_state::UiState;

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background tasks to the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// A balance reload finished. `None` means the balance is unknown.
    BalanceLoaded(Option<u128>),
}

// ============================================================================
// Balance Source
// ============================================================================

/// Where reloaded balances come from.
///
/// Serves a fixed amount after a short delay, standing in for a node query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceSource {
    wei: Option<u128>,
    latency: Duration,
}

impl BalanceSource {
    #[must_use]
    pub const fn fixed(wei: Option<u128>) -> Self {
        Self {
            wei,
            latency: BALANCE_REFRESH_LATENCY,
        }
    }

    #[cfg(test)]
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Spawn a reload that reports back on `tx`.
    pub(crate) fn spawn_load(self, tx: mpsc::UnboundedSender<AppMessage>) {
        tokio::spawn(async move {
            tokio::time::sleep(self.latency).await;
            // Receiver may be dropped during shutdown - safe to ignore
            let _ = tx.send(AppMessage::BalanceLoaded(self.wei));
        });
    }
}

// ============================================================================
// Startup Options
// ============================================================================

/// Everything the binary decides before the TUI starts.
#[derive(Debug, Clone)]
pub struct StartupOptions {
    /// Wallets to cycle through; the first is selected. Must not be empty.
    pub wallets: Vec<Arc<dyn Wallet>>,
    /// Network id overriding the configured one.
    pub network: Option<String>,
    /// Offline flag overriding the configured one.
    pub offline: Option<bool>,
    /// Balance reload behaviour.
    pub balance: BalanceSource,
    /// Write config changes back to disk.
    pub persist_config: bool,
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    /// Network, balance, offline flag and wallet.
    pub store: Store,

    /// The account sidebar.
    pub account_info: AccountInfo,

    /// Help popup and toasts.
    pub ui: UiState,

    /// Settings, saved back when the network or offline flag changes.
    pub config: AppConfig,

    /// Whether the application should exit.
    pub exit: bool,

    /// Animation tick counter for spinners.
    pub animation_tick: u64,

    pub(crate) balance_source: BalanceSource,
    pub(crate) persist_config: bool,
    pub(crate) clipboard: ClipboardManager,

    // NOTE: Channel sends use `let _ = tx.send(...)`. Receivers may be
    // dropped during shutdown.
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,
    pub(crate) action_rx: mpsc::UnboundedReceiver<WalletAction>,
}

impl App {
    /// Build the application from `config` and startup `options`.
    ///
    /// # Errors
    ///
    /// Returns an error if no wallet was given or the requested network id is
    /// unknown. An unknown saved id falls back to the default network.
    pub fn new(mut config: AppConfig, options: StartupOptions) -> Result<Self> {
        let mut wallets = options.wallets.into_iter();
        let first_wallet = wallets.next().ok_or_else(|| eyre!("No wallet configured"))?;

        let network = config.resolve_network(options.network.as_deref())?;
        if let Some(offline) = options.offline {
            config.offline = offline;
        }

        let store = Store::new(
            config.networks(),
            &network,
            first_wallet,
            wallets.collect(),
            Balance::unknown(),
            config.offline,
        );

        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let mut account_info = AccountInfo::new(
            store.wallet().clone(),
            Box::new(ChannelDispatch::new(action_tx)),
        );
        account_info.mount();

        tracing::info!(
            network = %network.id,
            wallet = store.wallet().wallet().wallet_type(),
            offline = config.offline,
            "App initialized"
        );

        Ok(Self {
            store,
            account_info,
            ui: UiState::new(),
            config,
            exit: false,
            animation_tick: 0,
            balance_source: options.balance,
            persist_config: options.persist_config,
            clipboard: ClipboardManager::new(),
            message_tx,
            message_rx,
            action_rx,
        })
    }

    /// Snapshot of the store for this frame.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        self.store.snapshot()
    }
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Dispatched actions and background results
mod app_messages;

// Command execution, input handling
mod app_commands;

// Clipboard, browser, network and wallet switching
mod app_actions;

// ============================================================================
// Tests
// ============================================================================
