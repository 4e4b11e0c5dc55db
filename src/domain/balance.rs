//! Account balance as held by the store.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::WalletError;

/// Number of wei in one ether.
pub const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

/// Decimal places of the native unit.
pub const ETHER_DECIMALS: u32 = 18;

/// The account balance snapshot.
///
/// `wei` is `None` until the first balance has been loaded. While a refresh is
/// in flight `is_pending` is set and the previous value (if any) stays visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Balance in wei, if known.
    pub wei: Option<u128>,
    /// Whether a refresh is currently in flight.
    pub is_pending: bool,
}

impl Balance {
    /// A settled, known balance.
    #[must_use]
    pub const fn known(wei: u128) -> Self {
        Self {
            wei: Some(wei),
            is_pending: false,
        }
    }

    /// A balance that has never been loaded.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            wei: None,
            is_pending: false,
        }
    }

    /// Parse a balance from a decimal string of wei.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::InvalidBalance`] for empty, signed, fractional or
    /// overflowing input.
    pub fn from_wei_str(value: &str) -> Result<Self, WalletError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(WalletError::invalid_balance(value, "empty"));
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(WalletError::invalid_balance(value, "expected digits only"));
        }
        let wei = u128::from_str(trimmed)
            .map_err(|e| WalletError::invalid_balance(value, e.to_string()))?;
        Ok(Self::known(wei))
    }

    /// Mark the balance as refreshing, keeping the current value.
    #[must_use]
    pub const fn pending(self) -> Self {
        Self {
            wei: self.wei,
            is_pending: true,
        }
    }
}

impl FromStr for Balance {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wei_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(Balance::default(), Balance::unknown());
        assert!(Balance::default().wei.is_none());
    }

    #[rstest]
    #[case::zero("0", 0)]
    #[case::one_ether("1000000000000000000", WEI_PER_ETHER)]
    #[case::padded(" 42 ", 42)]
    fn test_parse_valid(#[case] input: &str, #[case] expected: u128) {
        let balance: Balance = input.parse().unwrap();
        assert_eq!(balance.wei, Some(expected));
        assert!(!balance.is_pending);
    }

    #[rstest]
    #[case::empty("")]
    #[case::negative("-1")]
    #[case::fraction("1.5")]
    #[case::hex("0x10")]
    #[case::overflow("999999999999999999999999999999999999999999")]
    fn test_parse_invalid(#[case] input: &str) {
        let err = Balance::from_wei_str(input).unwrap_err();
        assert!(matches!(err, WalletError::InvalidBalance { .. }));
    }

    #[test]
    fn test_pending_keeps_value() {
        let balance = Balance::known(7).pending();
        assert_eq!(balance.wei, Some(7));
        assert!(balance.is_pending);
    }
}
