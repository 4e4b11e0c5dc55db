//! Cached wallet address, re-derived when the wallet handle changes.

use crate::domain::WalletHandle;

/// Keeps a copy of the wallet's address in step with the wallet handle.
///
/// The wallet is only read when the handle's version differs from the last
/// synced one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressResolver {
    address: String,
    synced_version: Option<u64>,
}

impl AddressResolver {
    /// An empty resolver; nothing synced yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sync with `handle`. Returns `true` when the cached address changed.
    pub fn sync(&mut self, handle: &WalletHandle) -> bool {
        if self.synced_version == Some(handle.version()) {
            return false;
        }
        self.synced_version = Some(handle.version());

        let address = handle.wallet().address_string();
        if address == self.address {
            return false;
        }
        tracing::debug!(%address, version = handle.version(), "wallet address synced");
        self.address = address;
        true
    }

    /// The cached address. Empty before the first sync.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::domain::Wallet;
    use crate::test_utils::WalletMother;

    /// Wallet that counts address reads.
    #[derive(Debug, Default)]
    struct CountingWallet {
        reads: AtomicUsize,
    }

    impl Wallet for CountingWallet {
        fn address_string(&self) -> String {
            self.reads.fetch_add(1, Ordering::SeqCst);
            WalletMother::ADDRESS.to_string()
        }

        fn wallet_type(&self) -> &str {
            "Counting"
        }
    }

    #[test]
    fn test_first_sync_reads_address() {
        let mut resolver = AddressResolver::new();
        assert_eq!(resolver.address(), "");

        let handle = WalletMother::handle(WalletMother::basic());
        assert!(resolver.sync(&handle));
        assert_eq!(resolver.address(), WalletMother::ADDRESS);
    }

    #[test]
    fn test_same_version_skips_wallet_read() {
        let wallet = Arc::new(CountingWallet::default());
        let handle = WalletMother::handle(wallet.clone());
        let mut resolver = AddressResolver::new();

        resolver.sync(&handle);
        assert!(!resolver.sync(&handle));
        assert!(!resolver.sync(&handle));
        assert_eq!(wallet.reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_swap_resyncs_address() {
        let mut handle = WalletMother::handle(WalletMother::basic());
        let mut resolver = AddressResolver::new();
        resolver.sync(&handle);

        handle.swap(WalletMother::basic_with(WalletMother::OTHER_ADDRESS));
        assert!(resolver.sync(&handle));
        assert_eq!(resolver.address(), WalletMother::OTHER_ADDRESS);
    }

    #[test]
    fn test_swap_to_same_address_reports_no_change() {
        let mut handle = WalletMother::handle(WalletMother::basic());
        let mut resolver = AddressResolver::new();
        resolver.sync(&handle);

        handle.swap(WalletMother::ledger());
        assert!(!resolver.sync(&handle));
        assert_eq!(resolver.address(), WalletMother::ADDRESS);
    }
}
