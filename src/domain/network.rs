//! Network configuration and block explorer URL builders.
//!
//! Built-in networks carry explorer information; custom networks never do.
//! That rule lives in the type: [`Explorers::Custom`] has no explorer fields.

use serde::{Deserialize, Serialize};

use super::checksum::ChecksumScheme;
use super::error::NetworkError;

// ============================================================================
// Explorers
// ============================================================================

/// A block explorer that can link to an address page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockExplorer {
    /// Display name, e.g. "Etherscan".
    pub name: &'static str,
    /// Scheme and host, e.g. `https://etherscan.io`.
    pub origin: &'static str,
    /// Path segment in front of the address.
    pub address_path: &'static str,
}

impl BlockExplorer {
    /// Explorer whose address pages live under `/address/`.
    #[must_use]
    pub const fn new(name: &'static str, origin: &'static str) -> Self {
        Self {
            name,
            origin,
            address_path: "address",
        }
    }

    /// Override the address path segment.
    #[must_use]
    pub const fn with_address_path(mut self, path: &'static str) -> Self {
        self.address_path = path;
        self
    }

    /// URL of the address page.
    #[must_use]
    pub fn address_url(&self, address: &str) -> String {
        format!("{}/{}/{}", self.origin, self.address_path, address)
    }
}

/// Etherchain, linked in addition to the configured explorer on ETH.
pub const ETHERCHAIN: BlockExplorer =
    BlockExplorer::new("Etherchain", "https://www.etherchain.org").with_address_path("account");

/// A token explorer that can list an address's token holdings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenExplorer {
    /// Display name, e.g. "Ethplorer.io".
    pub name: &'static str,
    /// Base URL the address is appended to.
    pub address_base: &'static str,
}

impl TokenExplorer {
    /// URL listing the tokens held by `address`.
    #[must_use]
    pub fn address(&self, address: &str) -> String {
        format!("{}{}", self.address_base, address)
    }
}

const ETHPLORER: TokenExplorer = TokenExplorer {
    name: "Ethplorer.io",
    address_base: "https://ethplorer.io/address/",
};

/// Explorer information attached to a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Explorers {
    /// User-defined network; nothing is known about its explorers.
    Custom,
    /// Built-in network with optional explorers.
    BuiltIn {
        block_explorer: Option<BlockExplorer>,
        token_explorer: Option<TokenExplorer>,
    },
}

// ============================================================================
// NetworkConfig
// ============================================================================

/// Everything the sidebar needs to know about the selected network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Short identifier, e.g. "ETH".
    pub id: String,
    /// Display name.
    pub name: String,
    /// Native unit symbol.
    pub unit: String,
    /// Whether this is a test network.
    pub is_testnet: bool,
    /// EIP-155 chain id.
    pub chain_id: u64,
    /// Explorer information.
    pub explorers: Explorers,
}

impl NetworkConfig {
    /// Whether this network was defined by the user.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self.explorers, Explorers::Custom)
    }

    /// Block explorer, if any. Always `None` for custom networks.
    #[must_use]
    pub fn block_explorer(&self) -> Option<&BlockExplorer> {
        match &self.explorers {
            Explorers::BuiltIn { block_explorer, .. } => block_explorer.as_ref(),
            Explorers::Custom => None,
        }
    }

    /// Token explorer, if any. Always `None` for custom networks.
    #[must_use]
    pub fn token_explorer(&self) -> Option<&TokenExplorer> {
        match &self.explorers {
            Explorers::BuiltIn { token_explorer, .. } => token_explorer.as_ref(),
            Explorers::Custom => None,
        }
    }

    /// Checksum scheme addresses use on this network.
    #[must_use]
    pub fn checksum_scheme(&self) -> ChecksumScheme {
        ChecksumScheme::for_chain(self.chain_id)
    }

    fn built_in(
        id: &str,
        name: &str,
        unit: &str,
        chain_id: u64,
        is_testnet: bool,
        block_explorer: Option<BlockExplorer>,
        token_explorer: Option<TokenExplorer>,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            unit: unit.to_string(),
            is_testnet,
            chain_id,
            explorers: Explorers::BuiltIn {
                block_explorer,
                token_explorer,
            },
        }
    }
}

/// The networks shipped with the application, in display order.
#[must_use]
pub fn built_in_networks() -> Vec<NetworkConfig> {
    vec![
        NetworkConfig::built_in(
            "ETH",
            "ETH",
            "ETH",
            1,
            false,
            Some(BlockExplorer::new("Etherscan", "https://etherscan.io")),
            Some(ETHPLORER),
        ),
        NetworkConfig::built_in(
            "Ropsten",
            "Ropsten",
            "ETH",
            3,
            true,
            Some(BlockExplorer::new("Etherscan", "https://ropsten.etherscan.io")),
            None,
        ),
        NetworkConfig::built_in(
            "Rinkeby",
            "Rinkeby",
            "ETH",
            4,
            true,
            Some(BlockExplorer::new("Etherscan", "https://rinkeby.etherscan.io")),
            None,
        ),
        NetworkConfig::built_in(
            "Goerli",
            "Goerli",
            "ETH",
            5,
            true,
            Some(BlockExplorer::new("Etherscan", "https://goerli.etherscan.io")),
            None,
        ),
        NetworkConfig::built_in(
            "Kovan",
            "Kovan",
            "ETH",
            42,
            true,
            Some(BlockExplorer::new("Etherscan", "https://kovan.etherscan.io")),
            None,
        ),
        NetworkConfig::built_in(
            "ETC",
            "ETC",
            "ETC",
            61,
            false,
            Some(BlockExplorer::new(
                "BlockScout",
                "https://blockscout.com/etc/mainnet",
            )),
            None,
        ),
        NetworkConfig::built_in(
            "RSK",
            "RSK",
            "RBTC",
            30,
            false,
            Some(BlockExplorer::new("RSK Explorer", "https://explorer.rsk.co")),
            None,
        ),
        NetworkConfig::built_in(
            "RSK_TESTNET",
            "RSK Testnet",
            "RBTC",
            31,
            true,
            Some(BlockExplorer::new(
                "RSK Testnet Explorer",
                "https://explorer.testnet.rsk.co",
            )),
            None,
        ),
    ]
}

// ============================================================================
// Custom Networks
// ============================================================================

/// A user-defined network, as persisted in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomNetwork {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Native unit symbol.
    pub unit: String,
    /// EIP-155 chain id.
    pub chain_id: u64,
    /// Whether this is a test network.
    #[serde(default)]
    pub is_testnet: bool,
}

impl CustomNetwork {
    /// Create a mainnet-style custom network.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit: impl Into<String>, chain_id: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit: unit.into(),
            chain_id,
            is_testnet: false,
        }
    }

    /// Mark as a test network.
    #[must_use]
    pub const fn testnet(mut self) -> Self {
        self.is_testnet = true;
        self
    }
}

impl From<&CustomNetwork> for NetworkConfig {
    fn from(custom: &CustomNetwork) -> Self {
        Self {
            id: custom.id.clone(),
            name: custom.name.clone(),
            unit: custom.unit.clone(),
            is_testnet: custom.is_testnet,
            chain_id: custom.chain_id,
            explorers: Explorers::Custom,
        }
    }
}

/// All selectable networks: built-ins followed by `custom`.
#[must_use]
pub fn all_networks(custom: &[CustomNetwork]) -> Vec<NetworkConfig> {
    let mut networks = built_in_networks();
    networks.extend(custom.iter().map(NetworkConfig::from));
    networks
}

/// Find a network by id (case-insensitive) among built-ins and `custom`.
///
/// # Errors
///
/// Returns [`NetworkError::Unknown`] when nothing matches.
pub fn find_network(id: &str, custom: &[CustomNetwork]) -> Result<NetworkConfig, NetworkError> {
    all_networks(custom)
        .into_iter()
        .find(|n| n.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| NetworkError::Unknown(id.to_string()))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";

    #[test]
    fn test_block_explorer_urls() {
        let etherscan = BlockExplorer::new("Etherscan", "https://etherscan.io");
        assert_eq!(
            etherscan.address_url(ADDR),
            format!("https://etherscan.io/address/{ADDR}")
        );
        assert_eq!(
            ETHERCHAIN.address_url(ADDR),
            format!("https://www.etherchain.org/account/{ADDR}")
        );
    }

    #[test]
    fn test_token_explorer_url() {
        assert_eq!(
            ETHPLORER.address(ADDR),
            format!("https://ethplorer.io/address/{ADDR}")
        );
    }

    #[test]
    fn test_eth_has_both_explorers() {
        let eth = find_network("ETH", &[]).unwrap();
        assert!(!eth.is_custom());
        assert!(eth.block_explorer().is_some());
        assert!(eth.token_explorer().is_some());
        assert!(!eth.is_testnet);
    }

    #[test]
    fn test_testnets_are_flagged() {
        for id in ["Ropsten", "Rinkeby", "Goerli", "Kovan", "RSK_TESTNET"] {
            let network = find_network(id, &[]).unwrap();
            assert!(network.is_testnet, "{id} should be a testnet");
        }
    }

    #[test]
    fn test_custom_network_has_no_explorers() {
        let custom = CustomNetwork::new("DEV", "Dev Chain", "DEV", 1337).testnet();
        let network = find_network("dev", std::slice::from_ref(&custom)).unwrap();
        assert!(network.is_custom());
        assert!(network.block_explorer().is_none());
        assert!(network.token_explorer().is_none());
        assert!(network.is_testnet);
    }

    #[test]
    fn test_unknown_network() {
        assert_eq!(
            find_network("nope", &[]),
            Err(NetworkError::Unknown("nope".into()))
        );
    }

    #[test]
    fn test_rsk_uses_eip1191() {
        let rsk = find_network("RSK", &[]).unwrap();
        assert_eq!(
            rsk.checksum_scheme(),
            ChecksumScheme::Eip1191 { chain_id: 30 }
        );
    }

    #[test]
    fn test_custom_network_serialization() {
        let custom = CustomNetwork::new("DEV", "Dev Chain", "DEV", 1337);
        let json = serde_json::to_string(&custom).unwrap();
        let back: CustomNetwork = serde_json::from_str(&json).unwrap();
        assert_eq!(custom, back);
    }
}
