use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::Result;

mod commands;
mod components;
mod constants;
mod domain;
mod i18n;
mod logging;
mod state;
mod theme;
mod tui;
mod ui;
mod widgets;

#[cfg(test)]
mod test_utils;

use crate::constants::DEMO_BALANCE_WEI;
use crate::domain::{
    AddressOnlyWallet, Balance, CustomNetwork, DeviceModel, DeviceResponse, ScriptedDeviceWallet,
    Wallet, WalletError, validate_address,
};
use crate::state::{App, AppConfig, BalanceSource, StartupOptions, platform::AppPaths};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Address shown when none is given.
const DEMO_ADDRESS: &str = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";

/// walletbar - account sidebar for Ethereum-style wallets
#[derive(Parser, Debug)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Account address (0x-prefixed, 40 hex digits)
    #[arg(short, long, default_value = DEMO_ADDRESS, value_parser = parse_address)]
    address: String,

    /// Kind of wallet holding the address
    #[arg(short, long, value_enum, default_value_t = WalletChoice::Address)]
    wallet: WalletChoice,

    /// Network id (see `walletbar networks`); overrides the saved selection
    #[arg(short, long)]
    network: Option<String>,

    /// Balance in wei served on every reload
    #[arg(long, value_name = "WEI")]
    wei: Option<Balance>,

    /// Start offline
    #[arg(long)]
    offline: bool,

    /// Hardware wallets decline the on-device address display
    #[arg(long)]
    reject_display: bool,

    /// Hardware wallets fail the on-device address display with this message
    #[arg(long, value_name = "MESSAGE", conflicts_with = "reject_display")]
    device_error: Option<String>,

    /// Time the simulated device takes to answer, in milliseconds
    #[arg(long, value_name = "MS")]
    confirm_delay: Option<u64>,

    /// Cycle through a view-only, a Ledger and a Trezor wallet with `w`
    #[arg(long)]
    demo: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the available networks
    Networks,
    /// Save a custom network to the config file
    AddNetwork {
        /// Unique id, e.g. DEV
        id: String,
        /// Display name
        name: String,
        /// Native unit symbol
        unit: String,
        /// EIP-155 chain id
        chain_id: u64,
        /// Mark as a test network
        #[arg(long)]
        testnet: bool,
    },
    /// Display version
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WalletChoice {
    /// View-only address
    Address,
    Ledger,
    Trezor,
    SafeT,
}

fn parse_address(value: &str) -> Result<String, WalletError> {
    validate_address(value).map(|()| value.to_string())
}

impl Cli {
    fn device_response(&self) -> DeviceResponse {
        match &self.device_error {
            Some(message) => DeviceResponse::Fail(message.clone()),
            None if self.reject_display => DeviceResponse::Reject,
            None => DeviceResponse::Confirm,
        }
    }

    fn hardware_wallet(&self, model: DeviceModel) -> Arc<dyn Wallet> {
        let mut wallet = ScriptedDeviceWallet::new(&self.address, model)
            .with_response(self.device_response());
        if let Some(ms) = self.confirm_delay {
            wallet = wallet.with_delay(Duration::from_millis(ms));
        }
        Arc::new(wallet)
    }

    fn wallets(&self) -> Vec<Arc<dyn Wallet>> {
        let view_only = || Arc::new(AddressOnlyWallet::new(&self.address)) as Arc<dyn Wallet>;
        let ledger = || self.hardware_wallet(DeviceModel::Ledger);
        let trezor = || self.hardware_wallet(DeviceModel::Trezor);

        let selected = match self.wallet {
            WalletChoice::Address => view_only(),
            WalletChoice::Ledger => ledger(),
            WalletChoice::Trezor => trezor(),
            WalletChoice::SafeT => self.hardware_wallet(DeviceModel::SafeT),
        };
        if !self.demo {
            return vec![selected];
        }

        let mut wallets = vec![selected];
        for choice in [WalletChoice::Address, WalletChoice::Ledger, WalletChoice::Trezor] {
            if choice == self.wallet {
                continue;
            }
            wallets.push(match choice {
                WalletChoice::Ledger => ledger(),
                WalletChoice::Trezor => trezor(),
                _ => view_only(),
            });
        }
        wallets
    }

    fn balance(&self) -> Option<u128> {
        match self.wei {
            Some(balance) => balance.wei,
            None if self.demo => Some(DEMO_BALANCE_WEI),
            None => Some(0),
        }
    }

    fn startup_options(&self) -> StartupOptions {
        StartupOptions {
            wallets: self.wallets(),
            network: self.network.clone(),
            offline: self.offline.then_some(true),
            balance: BalanceSource::fixed(self.balance()),
            persist_config: true,
        }
    }
}

/// Handles subcommands. Returns `true` if one ran and the app should exit.
///
/// `add-network` updates `config`; the caller saves it.
fn handle_cli_commands(cli: &Cli, config: &mut AppConfig) -> Result<bool> {
    match &cli.command {
        Some(Commands::Networks) => {
            for network in config.networks() {
                let marker = if network.id == config.network { "*" } else { " " };
                let kind = if network.is_custom() { "custom" } else { "built-in" };
                let testnet = if network.is_testnet { ", testnet" } else { "" };
                println!(
                    "{marker} {:<12} {:<14} {:<5} chain {:<6} ({kind}{testnet})",
                    network.id, network.name, network.unit, network.chain_id
                );
            }
            Ok(true)
        }
        Some(Commands::AddNetwork {
            id,
            name,
            unit,
            chain_id,
            testnet,
        }) => {
            let mut network =
                CustomNetwork::new(id.as_str(), name.as_str(), unit.as_str(), *chain_id);
            if *testnet {
                network = network.testnet();
            }
            config.add_custom_network(network)?;
            println!("Added network {id}");
            Ok(true)
        }
        Some(Commands::Version) => {
            println!("walletbar v{VERSION}");
            Ok(true)
        }
        None => Ok(false),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let log_file = logging::init(&AppPaths::new())?;
    tracing::info!(version = VERSION, log_file = %log_file.display(), "Starting walletbar");

    let mut config = AppConfig::load();
    if handle_cli_commands(&cli, &mut config)? {
        if matches!(cli.command, Some(Commands::AddNetwork { .. })) {
            config.save()?;
        }
        return Ok(());
    }

    let mut app = App::new(config, cli.startup_options())?;

    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal).await;
    tui::restore()?;

    result
}
