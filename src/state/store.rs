//! Application store: the read-only snapshot handed to the sidebar and the
//! dispatch seam it uses to ask for work.
//!
//! The sidebar never reaches into the store. Each frame it receives a
//! [`StoreSnapshot`] by value and holds a boxed [`ActionDispatch`] it was
//! constructed with.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::{Balance, ChecksumScheme, NetworkConfig, Wallet, WalletHandle};

// ============================================================================
// Actions
// ============================================================================

/// Actions the sidebar can dispatch to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletAction {
    /// Reload the account balance.
    RefreshAccountBalance,
}

/// Capability to dispatch [`WalletAction`]s.
pub trait ActionDispatch: Send + Sync + std::fmt::Debug {
    /// Dispatch `action`. Fire-and-forget.
    fn dispatch(&self, action: WalletAction);
}

/// Dispatches actions over an mpsc channel to the main loop.
#[derive(Debug, Clone)]
pub struct ChannelDispatch {
    tx: mpsc::UnboundedSender<WalletAction>,
}

impl ChannelDispatch {
    /// Wrap a sender.
    #[must_use]
    pub const fn new(tx: mpsc::UnboundedSender<WalletAction>) -> Self {
        Self { tx }
    }
}

impl ActionDispatch for ChannelDispatch {
    fn dispatch(&self, action: WalletAction) {
        tracing::debug!(?action, "dispatch");
        // The receiver only goes away during shutdown.
        let _ = self.tx.send(action);
    }
}

// ============================================================================
// Snapshot
// ============================================================================

/// Immutable view of the store for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSnapshot {
    /// Selected network.
    pub network: NetworkConfig,
    /// Whether the application is offline.
    pub is_offline: bool,
    /// Account balance.
    pub balance: Balance,
    /// Checksum function for the selected network.
    pub checksum: ChecksumScheme,
}

impl StoreSnapshot {
    /// Build a snapshot, deriving the checksum scheme from the network.
    #[must_use]
    pub fn new(network: NetworkConfig, balance: Balance, is_offline: bool) -> Self {
        let checksum = network.checksum_scheme();
        Self {
            network,
            is_offline,
            balance,
            checksum,
        }
    }

    /// Checksum `address` for the selected network.
    #[must_use]
    pub fn to_checksum_address(&self, address: &str) -> String {
        self.checksum.apply(address)
    }
}

// ============================================================================
// Store
// ============================================================================

/// Mutable application state behind the snapshot.
#[derive(Debug)]
pub struct Store {
    networks: Vec<NetworkConfig>,
    network_index: usize,
    balance: Balance,
    is_offline: bool,
    wallets: Vec<Arc<dyn Wallet>>,
    wallet_index: usize,
    wallet: WalletHandle,
}

impl Store {
    /// Create a store.
    ///
    /// `network` is appended to `networks` when missing. `first_wallet` is
    /// selected; `more_wallets` are reachable through [`Store::next_wallet`].
    #[must_use]
    pub fn new(
        mut networks: Vec<NetworkConfig>,
        network: &NetworkConfig,
        first_wallet: Arc<dyn Wallet>,
        more_wallets: Vec<Arc<dyn Wallet>>,
        balance: Balance,
        is_offline: bool,
    ) -> Self {
        let network_index = match networks.iter().position(|n| n == network) {
            Some(index) => index,
            None => {
                networks.push(network.clone());
                networks.len() - 1
            }
        };
        let wallet = WalletHandle::new(Arc::clone(&first_wallet));
        let mut wallets = vec![first_wallet];
        wallets.extend(more_wallets);

        Self {
            networks,
            network_index,
            balance,
            is_offline,
            wallets,
            wallet_index: 0,
            wallet,
        }
    }

    /// Snapshot for the current render pass.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot::new(self.network().clone(), self.balance, self.is_offline)
    }

    /// Selected network.
    #[must_use]
    pub fn network(&self) -> &NetworkConfig {
        &self.networks[self.network_index]
    }

    /// Select the next network, wrapping around. Returns the new network.
    pub fn next_network(&mut self) -> &NetworkConfig {
        self.network_index = (self.network_index + 1) % self.networks.len();
        self.network()
    }

    /// Current wallet handle.
    #[must_use]
    pub const fn wallet(&self) -> &WalletHandle {
        &self.wallet
    }

    /// Number of configured wallets.
    #[must_use]
    pub fn wallet_count(&self) -> usize {
        self.wallets.len()
    }

    /// Swap to the next configured wallet, wrapping around.
    ///
    /// The balance belongs to the previous wallet and is reset.
    pub fn next_wallet(&mut self) -> &WalletHandle {
        self.wallet_index = (self.wallet_index + 1) % self.wallets.len();
        self.wallet
            .swap(Arc::clone(&self.wallets[self.wallet_index]));
        self.balance = Balance::unknown();
        &self.wallet
    }

    /// Current balance.
    #[must_use]
    pub const fn balance(&self) -> Balance {
        self.balance
    }

    /// Mark the balance as refreshing.
    pub fn begin_refresh(&mut self) {
        self.balance = self.balance.pending();
    }

    /// Store a freshly loaded balance.
    pub fn set_balance(&mut self, wei: Option<u128>) {
        self.balance = Balance {
            wei,
            is_pending: false,
        };
    }

    /// Whether the application is offline.
    #[must_use]
    pub const fn is_offline(&self) -> bool {
        self.is_offline
    }

    /// Flip the offline flag. Returns the new value.
    pub fn toggle_offline(&mut self) -> bool {
        self.is_offline = !self.is_offline;
        self.is_offline
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AddressOnlyWallet, find_network};
    use crate::test_utils::{NetworkMother, WalletMother};

    fn store() -> Store {
        let eth = NetworkMother::eth();
        Store::new(
            vec![eth.clone(), NetworkMother::ropsten()],
            &eth,
            WalletMother::basic(),
            vec![WalletMother::ledger()],
            Balance::known(5),
            false,
        )
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let store = store();
        let snapshot = store.snapshot();
        assert_eq!(snapshot.network.id, "ETH");
        assert_eq!(snapshot.balance, Balance::known(5));
        assert!(!snapshot.is_offline);
        assert_eq!(snapshot.checksum, ChecksumScheme::Eip55);
    }

    #[test]
    fn test_snapshot_checksum_follows_network() {
        let rsk = find_network("RSK", &[]).unwrap();
        let snapshot = StoreSnapshot::new(rsk, Balance::unknown(), false);
        assert_eq!(snapshot.checksum, ChecksumScheme::Eip1191 { chain_id: 30 });
    }

    #[test]
    fn test_unlisted_network_is_appended() {
        let custom = NetworkMother::custom();
        let store = Store::new(
            vec![NetworkMother::eth()],
            &custom,
            Arc::new(AddressOnlyWallet::new(WalletMother::ADDRESS)),
            Vec::new(),
            Balance::unknown(),
            false,
        );
        assert_eq!(store.network(), &custom);
    }

    #[test]
    fn test_next_network_wraps() {
        let mut store = store();
        assert_eq!(store.next_network().id, "Ropsten");
        assert_eq!(store.next_network().id, "ETH");
    }

    #[test]
    fn test_next_wallet_bumps_version_and_resets_balance() {
        let mut store = store();
        let before = store.wallet().version();
        store.next_wallet();
        assert_eq!(store.wallet().version(), before + 1);
        assert_eq!(store.balance(), Balance::unknown());
        assert_eq!(store.wallet_count(), 2);
    }

    #[test]
    fn test_refresh_cycle() {
        let mut store = store();
        store.begin_refresh();
        assert!(store.balance().is_pending);
        assert_eq!(store.balance().wei, Some(5));

        store.set_balance(Some(9));
        assert_eq!(store.balance(), Balance::known(9));
    }

    #[test]
    fn test_toggle_offline() {
        let mut store = store();
        assert!(store.toggle_offline());
        assert!(store.snapshot().is_offline);
        assert!(!store.toggle_offline());
    }

    #[tokio::test]
    async fn test_channel_dispatch_delivers() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let dispatch = ChannelDispatch::new(tx);
        dispatch.dispatch(WalletAction::RefreshAccountBalance);
        assert_eq!(rx.recv().await, Some(WalletAction::RefreshAccountBalance));
    }
}
