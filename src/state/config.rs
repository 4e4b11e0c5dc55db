//! Application configuration with persistence.
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/walletbar/config.json`
//! - macOS: `~/Library/Application Support/walletbar/config.json`
//! - Windows: `%APPDATA%/walletbar/config.json`

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{CustomNetwork, NetworkConfig, NetworkError, all_networks, find_network};
use crate::state::platform::AppPaths;

/// Network selected when nothing else is configured.
pub const DEFAULT_NETWORK_ID: &str = "ETH";

fn default_network() -> String {
    DEFAULT_NETWORK_ID.to_string()
}

// ============================================================================
// AppConfig
// ============================================================================

/// Persisted settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Id of the selected network.
    #[serde(default = "default_network")]
    pub network: String,
    /// User-defined networks. These never get explorer links.
    #[serde(default)]
    pub custom_networks: Vec<CustomNetwork>,
    /// Start in offline mode.
    #[serde(default)]
    pub offline: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network: default_network(),
            custom_networks: Vec::new(),
            offline: false,
        }
    }
}

impl AppConfig {
    /// Path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        AppPaths::new().config_file()
    }

    /// Load from disk, falling back to defaults on any failure.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(%err, "Config load failed, using defaults");
                Self::default()
            }
        }
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be located, read or parsed.
    pub fn try_load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be located, serialized or written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Add a custom network. Ids must be unique across built-in and custom
    /// networks, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Duplicate`] when the id is taken.
    pub fn add_custom_network(&mut self, network: CustomNetwork) -> Result<(), NetworkError> {
        if find_network(&network.id, &self.custom_networks).is_ok() {
            return Err(NetworkError::Duplicate(network.id));
        }
        self.custom_networks.push(network);
        Ok(())
    }

    /// All selectable networks: built-ins, then custom ones.
    #[must_use]
    pub fn networks(&self) -> Vec<NetworkConfig> {
        all_networks(&self.custom_networks)
    }

    /// The selected network.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Unknown`] when the stored id matches nothing.
    pub fn selected_network(&self) -> Result<NetworkConfig, NetworkError> {
        find_network(&self.network, &self.custom_networks)
    }

    /// Pick the startup network and store its canonical id.
    ///
    /// An explicitly `requested` id must resolve. A saved id that no longer
    /// does (say, a removed custom network) falls back to
    /// [`DEFAULT_NETWORK_ID`].
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Unknown`] when `requested` matches nothing.
    pub fn resolve_network(
        &mut self,
        requested: Option<&str>,
    ) -> Result<NetworkConfig, NetworkError> {
        let network = match requested {
            Some(id) => find_network(id, &self.custom_networks)?,
            None => match self.selected_network() {
                Ok(network) => network,
                Err(err) => {
                    tracing::warn!(%err, fallback = DEFAULT_NETWORK_ID, "Saved network unavailable");
                    find_network(DEFAULT_NETWORK_ID, &self.custom_networks)?
                }
            },
        };
        self.network = network.id.clone();
        Ok(network)
    }
}

// ============================================================================
// Tests
// ============================================================================
