//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting setup code across tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use rstest::fixture;

use crate::components::AccountInfo;
use crate::domain::{
    AddressOnlyWallet, Balance, CustomNetwork, DeviceModel, DeviceResponse, NetworkConfig,
    ScriptedDeviceWallet, Wallet, WalletHandle, find_network,
};
use crate::state::store::{ActionDispatch, StoreSnapshot, WalletAction};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct WalletMother;

impl WalletMother {
    /// Lowercase address used across tests.
    pub const ADDRESS: &'static str = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";
    /// EIP-55 form of [`Self::ADDRESS`].
    pub const CHECKSUMMED: &'static str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
    /// A second address for swap tests.
    pub const OTHER_ADDRESS: &'static str = "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359";

    #[must_use]
    pub fn basic() -> Arc<dyn Wallet> {
        Arc::new(AddressOnlyWallet::new(Self::ADDRESS))
    }

    #[must_use]
    pub fn basic_with(address: &str) -> Arc<dyn Wallet> {
        Arc::new(AddressOnlyWallet::new(address))
    }

    #[must_use]
    pub fn ledger() -> Arc<dyn Wallet> {
        Self::device(DeviceResponse::Confirm)
    }

    #[must_use]
    pub fn device(response: DeviceResponse) -> Arc<dyn Wallet> {
        Arc::new(
            ScriptedDeviceWallet::new(Self::ADDRESS, DeviceModel::Ledger)
                .with_delay(Duration::from_millis(5))
                .with_response(response),
        )
    }

    /// A confirming device of `model` that answers after `delay`.
    #[must_use]
    pub fn hardware(model: DeviceModel, delay: Duration) -> Arc<dyn Wallet> {
        Arc::new(ScriptedDeviceWallet::new(Self::ADDRESS, model).with_delay(delay))
    }

    #[must_use]
    pub fn handle(wallet: Arc<dyn Wallet>) -> WalletHandle {
        WalletHandle::new(wallet)
    }
}

pub struct NetworkMother;

impl NetworkMother {
    #[must_use]
    pub fn eth() -> NetworkConfig {
        find_network("ETH", &[]).expect("ETH is built in")
    }

    #[must_use]
    pub fn ropsten() -> NetworkConfig {
        find_network("Ropsten", &[]).expect("Ropsten is built in")
    }

    #[must_use]
    pub fn etc() -> NetworkConfig {
        find_network("ETC", &[]).expect("ETC is built in")
    }

    #[must_use]
    pub fn custom() -> NetworkConfig {
        NetworkConfig::from(&CustomNetwork::new("DEV", "Dev Chain", "DEV", 1337))
    }
}

pub struct SnapshotMother;

impl SnapshotMother {
    #[must_use]
    pub fn with(network: NetworkConfig, balance: Balance, is_offline: bool) -> StoreSnapshot {
        StoreSnapshot::new(network, balance, is_offline)
    }

    /// ETH mainnet, 1.5 ETH, online.
    #[must_use]
    pub fn eth_funded() -> StoreSnapshot {
        Self::with(
            NetworkMother::eth(),
            Balance::known(1_500_000_000_000_000_000),
            false,
        )
    }
}

// ============================================================================
// Recording Dispatch
// ============================================================================

/// Dispatch double that records every action.
#[derive(Debug, Clone, Default)]
pub struct RecordingDispatch {
    actions: Arc<Mutex<Vec<WalletAction>>>,
}

impl RecordingDispatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn actions(&self) -> Vec<WalletAction> {
        self.actions.lock().expect("lock poisoned").clone()
    }
}

impl ActionDispatch for RecordingDispatch {
    fn dispatch(&self, action: WalletAction) {
        self.actions.lock().expect("lock poisoned").push(action);
    }
}

/// A mounted sidebar plus the dispatch double it reports to.
#[must_use]
pub fn mounted(wallet: Arc<dyn Wallet>) -> (AccountInfo, RecordingDispatch) {
    let dispatch = RecordingDispatch::new();
    let mut info = AccountInfo::new(WalletHandle::new(wallet), Box::new(dispatch.clone()));
    info.mount();
    (info, dispatch)
}

// ============================================================================
// rstest Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(60, 20)).expect("terminal creation should succeed")
}

#[fixture]
pub fn test_terminal_80x24() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("terminal creation should succeed")
}

/// Flatten a buffer into newline-separated rows.
#[must_use]
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut result = String::new();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            result.push_str(buffer[(x, y)].symbol());
        }
        if y + 1 < area.y + area.height {
            result.push('\n');
        }
    }
    result
}
