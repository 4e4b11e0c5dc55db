//! Mixed-case checksum encoding for hex addresses.
//!
//! Most chains use EIP-55. RSK networks use EIP-1191, which mixes the chain id
//! into the hashed input so a checksum from one chain fails on another.

use sha3::{Digest, Keccak256};

use super::error::WalletError;

/// Length of an address body in hex characters, without the `0x` prefix.
const ADDRESS_HEX_LEN: usize = 40;

/// Chain ids that checksum with EIP-1191.
const EIP1191_CHAIN_IDS: [u64; 2] = [30, 31];

/// How addresses are checksummed on a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChecksumScheme {
    /// Keccak-256 of the lowercase address.
    #[default]
    Eip55,
    /// Keccak-256 of `"{chain_id}0x{lowercase}"`.
    Eip1191 {
        /// Chain id mixed into the hash.
        chain_id: u64,
    },
}

impl ChecksumScheme {
    /// Pick the scheme a chain uses.
    #[must_use]
    pub fn for_chain(chain_id: u64) -> Self {
        if EIP1191_CHAIN_IDS.contains(&chain_id) {
            Self::Eip1191 { chain_id }
        } else {
            Self::Eip55
        }
    }

    /// Checksum `address`.
    ///
    /// Input that is not a 20-byte hex address is returned unchanged.
    #[must_use]
    pub fn apply(&self, address: &str) -> String {
        let Some(body) = strip_hex_prefix(address) else {
            return address.to_string();
        };
        if body.len() != ADDRESS_HEX_LEN || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
            return address.to_string();
        }

        let lower = body.to_ascii_lowercase();
        let preimage = match self {
            Self::Eip55 => lower.clone(),
            Self::Eip1191 { chain_id } => format!("{chain_id}0x{lower}"),
        };
        let hash = hex::encode(Keccak256::digest(preimage.as_bytes()));

        let mut out = String::with_capacity(ADDRESS_HEX_LEN + 2);
        out.push_str("0x");
        for (ch, nibble) in lower.chars().zip(hash.chars()) {
            let upper = nibble.to_digit(16).is_some_and(|n| n >= 8);
            if ch.is_ascii_alphabetic() && upper {
                out.push(ch.to_ascii_uppercase());
            } else {
                out.push(ch);
            }
        }
        out
    }
}

/// Validate that `address` is a `0x`-prefixed 20-byte hex string.
///
/// # Errors
///
/// Returns [`WalletError::InvalidAddress`] otherwise.
pub fn validate_address(address: &str) -> Result<(), WalletError> {
    match strip_hex_prefix(address) {
        Some(body)
            if body.len() == ADDRESS_HEX_LEN && body.bytes().all(|b| b.is_ascii_hexdigit()) =>
        {
            Ok(())
        }
        _ => Err(WalletError::InvalidAddress(address.to_string())),
    }
}

fn strip_hex_prefix(address: &str) -> Option<&str> {
    address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
}
