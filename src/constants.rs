//! Application-wide constants.

use std::time::Duration;

use crate::domain::WEI_PER_ETHER;

/// Main loop tick; drives redraws and spinner animation.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Simulated latency of a balance reload.
pub const BALANCE_REFRESH_LATENCY: Duration = Duration::from_millis(600);

/// Balance used by `--demo` when `--wei` is not given: 1.5 ETH.
pub const DEMO_BALANCE_WEI: u128 = WEI_PER_ETHER * 3 / 2;

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "WALLETBAR_LOG";

/// Log filter used when [`LOG_ENV_VAR`] is unset.
pub const DEFAULT_LOG_FILTER: &str = "walletbar=info";
