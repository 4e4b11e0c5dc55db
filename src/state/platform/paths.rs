//! Platform-specific locations for the config file and the log file.
//!
//! | Platform | Config Dir | Data Dir |
//! |----------|------------|----------|
//! | Linux | `~/.config/walletbar` | `~/.local/share/walletbar` |
//! | macOS | `~/Library/Application Support/walletbar` | Same as config |
//! | Windows | `%APPDATA%/walletbar` | `%LOCALAPPDATA%/walletbar` |

use color_eyre::Result;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for directory naming.
pub const APP_NAME: &str = "walletbar";

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Log file name.
pub const LOG_FILE_NAME: &str = "walletbar.log";

// ============================================================================
// AppPaths
// ============================================================================

/// Resolves application directories and files, creating directories on demand.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppPaths;

impl AppPaths {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// The configuration directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn config_dir(&self) -> Result<PathBuf> {
        let mut path = dirs::config_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find config directory"))?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// The data directory, where the log file lives.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn data_dir(&self) -> Result<PathBuf> {
        let mut path = dirs::data_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find data directory"))?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Path to `config.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory is unavailable.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Path to the log file.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory is unavailable.
    pub fn log_file(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(LOG_FILE_NAME))
    }
}

// ============================================================================
// Tests
// ============================================================================
