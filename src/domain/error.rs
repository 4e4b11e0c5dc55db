//! Error types for wallet and network domain operations.
//!
//! These errors describe what can go wrong while talking to a wallet or
//! interpreting network configuration. UI code decides how (and whether) to
//! surface them.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors produced by wallet collaborators.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WalletError {
    /// The user declined the on-device address display.
    #[error("Address display rejected: {0}")]
    DisplayRejected(String),

    /// The device could not be reached or answered with garbage.
    #[error("Device error: {0}")]
    Device(String),

    /// An address string could not be parsed.
    #[error("Invalid address '{0}'")]
    InvalidAddress(String),

    /// A balance string was not a non-negative integer amount of wei.
    #[error("Invalid balance '{value}': {reason}")]
    InvalidBalance {
        /// The offending input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl WalletError {
    /// Create an invalid balance error.
    #[must_use]
    pub fn invalid_balance(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBalance {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Errors produced while resolving network configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NetworkError {
    /// No built-in or custom network carries this id.
    #[error("Unknown network '{0}'")]
    Unknown(String),

    /// A custom network reused the id of an existing network.
    #[error("Network '{0}' already exists")]
    Duplicate(String),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_error_display() {
        let rejected = WalletError::DisplayRejected("user declined".into());
        assert_eq!(
            rejected.to_string(),
            "Address display rejected: user declined"
        );

        let device = WalletError::Device("locked".into());
        assert_eq!(device.to_string(), "Device error: locked");

        let balance = WalletError::invalid_balance("12a", "not a number");
        assert_eq!(balance.to_string(), "Invalid balance '12a': not a number");
    }

    #[test]
    fn test_network_error_display() {
        assert_eq!(
            NetworkError::Unknown("XYZ".into()).to_string(),
            "Unknown network 'XYZ'"
        );
        assert_eq!(
            NetworkError::Duplicate("ETH".into()).to_string(),
            "Network 'ETH' already exists"
        );
    }
}
