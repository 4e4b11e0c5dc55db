//! Domain types for the wallet sidebar.
//!
//! # Module Organization
//!
//! - [`error`] - Error types for wallet and network operations
//! - [`wallet`] - Wallet traits, the versioned wallet handle and wallet implementations
//! - [`balance`] - Account balance snapshot
//! - [`network`] - Network configuration and explorer URL builders
//! - [`checksum`] - EIP-55 / EIP-1191 address checksums

pub mod balance;
pub mod checksum;
pub mod error;
pub mod network;
pub mod wallet;

pub use balance::{Balance, ETHER_DECIMALS, WEI_PER_ETHER};
pub use checksum::{ChecksumScheme, validate_address};
pub use error::{NetworkError, WalletError};
pub use network::{CustomNetwork, ETHERCHAIN, NetworkConfig, all_networks, find_network};
pub use wallet::{
    AddressOnlyWallet, DeviceModel, DeviceResponse, ScriptedDeviceWallet, Wallet, WalletHandle,
    WalletKind,
};
