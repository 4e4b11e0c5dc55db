//! Wallet abstraction consumed by the account sidebar.
//!
//! A wallet is anything that can report an address and a human readable type.
//! Hardware wallets additionally expose an asynchronous "show the address on
//! the device" operation. Which one a wallet is gets answered by
//! [`Wallet::as_hardware`], not by probing for methods.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::WalletError;

/// Future returned by [`HardwareWallet::display_address`].
pub type DisplayFuture = Pin<Box<dyn Future<Output = Result<(), WalletError>> + Send + 'static>>;

// ============================================================================
// Traits
// ============================================================================

/// Capability discriminant for wallets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalletKind {
    /// Address and type only.
    Basic,
    /// Needs on-device confirmation for sensitive operations.
    Hardware,
}

/// Read side of a wallet.
pub trait Wallet: Send + Sync + fmt::Debug {
    /// The wallet's address as a `0x`-prefixed hex string.
    fn address_string(&self) -> String;

    /// Human readable wallet type, e.g. "Ledger".
    fn wallet_type(&self) -> &str;

    /// Hardware capability, if this wallet has one.
    fn as_hardware(&self) -> Option<&dyn HardwareWallet> {
        None
    }

    /// Capability discriminant, derived from [`Wallet::as_hardware`].
    fn kind(&self) -> WalletKind {
        if self.as_hardware().is_some() {
            WalletKind::Hardware
        } else {
            WalletKind::Basic
        }
    }
}

/// Hardware capability of a wallet.
pub trait HardwareWallet: Wallet {
    /// Ask the device to show the address for confirmation.
    ///
    /// The returned future owns everything it needs so it can run on the
    /// runtime independently of the caller.
    fn display_address(&self) -> DisplayFuture;
}

// ============================================================================
// WalletHandle
// ============================================================================

/// Shared wallet reference plus a version bumped on every swap.
///
/// Consumers compare versions to decide whether anything derived from the
/// wallet must be recomputed.
#[derive(Debug, Clone)]
pub struct WalletHandle {
    wallet: Arc<dyn Wallet>,
    version: u64,
}

impl WalletHandle {
    /// Wrap a wallet at version 0.
    #[must_use]
    pub fn new(wallet: Arc<dyn Wallet>) -> Self {
        Self { wallet, version: 0 }
    }

    /// Replace the wallet, bumping the version.
    pub fn swap(&mut self, wallet: Arc<dyn Wallet>) {
        self.wallet = wallet;
        self.version = self.version.wrapping_add(1);
    }

    /// The current wallet.
    #[must_use]
    pub fn wallet(&self) -> &Arc<dyn Wallet> {
        &self.wallet
    }

    /// The current version.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }
}

// ============================================================================
// Wallet Implementations
// ============================================================================

/// A view-only wallet: an address and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressOnlyWallet {
    address: String,
}

impl AddressOnlyWallet {
    /// Create a view-only wallet for `address`.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

impl Wallet for AddressOnlyWallet {
    fn address_string(&self) -> String {
        self.address.clone()
    }

    fn wallet_type(&self) -> &str {
        "View Only"
    }
}

/// Supported hardware device models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceModel {
    Ledger,
    Trezor,
    SafeT,
}

impl DeviceModel {
    /// Display name of the device.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ledger => "Ledger",
            Self::Trezor => "Trezor",
            Self::SafeT => "Safe-T mini",
        }
    }
}

impl fmt::Display for DeviceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a scripted device answers a display request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceResponse {
    /// The user confirms on the device.
    Confirm,
    /// The user declines on the device.
    Reject,
    /// The transport fails with the given message.
    Fail(String),
}

/// A hardware wallet whose device answers are scripted.
///
/// Device transports are outside this crate; this wallet stands in for one,
/// answering display requests after `confirm_delay` with `response`.
#[derive(Debug, Clone)]
pub struct ScriptedDeviceWallet {
    address: String,
    model: DeviceModel,
    confirm_delay: Duration,
    response: DeviceResponse,
}

impl ScriptedDeviceWallet {
    /// Default time the simulated user takes to confirm.
    pub const DEFAULT_CONFIRM_DELAY: Duration = Duration::from_millis(1500);

    /// A device that confirms after the default delay.
    #[must_use]
    pub fn new(address: impl Into<String>, model: DeviceModel) -> Self {
        Self {
            address: address.into(),
            model,
            confirm_delay: Self::DEFAULT_CONFIRM_DELAY,
            response: DeviceResponse::Confirm,
        }
    }

    /// Override the confirmation delay.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.confirm_delay = delay;
        self
    }

    /// Override the device response.
    #[must_use]
    pub fn with_response(mut self, response: DeviceResponse) -> Self {
        self.response = response;
        self
    }
}

impl Wallet for ScriptedDeviceWallet {
    fn address_string(&self) -> String {
        self.address.clone()
    }

    fn wallet_type(&self) -> &str {
        self.model.as_str()
    }

    fn as_hardware(&self) -> Option<&dyn HardwareWallet> {
        Some(self)
    }
}

impl HardwareWallet for ScriptedDeviceWallet {
    fn display_address(&self) -> DisplayFuture {
        let delay = self.confirm_delay;
        let response = self.response.clone();
        let model = self.model;
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            match response {
                DeviceResponse::Confirm => Ok(()),
                DeviceResponse::Reject => Err(WalletError::DisplayRejected(format!(
                    "{model} user declined"
                ))),
                DeviceResponse::Fail(msg) => Err(WalletError::Device(msg)),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";

    #[test]
    fn test_address_only_is_basic() {
        let wallet = AddressOnlyWallet::new(ADDR);
        assert_eq!(wallet.kind(), WalletKind::Basic);
        assert!(wallet.as_hardware().is_none());
        assert_eq!(wallet.address_string(), ADDR);
    }

    #[test]
    fn test_device_is_hardware() {
        let wallet = ScriptedDeviceWallet::new(ADDR, DeviceModel::Ledger);
        assert_eq!(wallet.kind(), WalletKind::Hardware);
        assert!(wallet.as_hardware().is_some());
        assert_eq!(wallet.wallet_type(), "Ledger");
    }

    #[test]
    fn test_handle_swap_bumps_version() {
        let mut handle = WalletHandle::new(Arc::new(AddressOnlyWallet::new(ADDR)));
        assert_eq!(handle.version(), 0);

        handle.swap(Arc::new(AddressOnlyWallet::new("0x01")));
        assert_eq!(handle.version(), 1);
        assert_eq!(handle.wallet().address_string(), "0x01");
    }

    #[tokio::test]
    async fn test_display_address_outcomes() {
        let confirm =
            ScriptedDeviceWallet::new(ADDR, DeviceModel::Trezor).with_delay(Duration::ZERO);
        assert_eq!(confirm.display_address().await, Ok(()));

        let reject = confirm.clone().with_response(DeviceResponse::Reject);
        assert!(matches!(
            reject.display_address().await,
            Err(WalletError::DisplayRejected(_))
        ));

        let fail = confirm.with_response(DeviceResponse::Fail("unplugged".into()));
        assert_eq!(
            fail.display_address().await,
            Err(WalletError::Device("unplugged".into()))
        );
    }
}
