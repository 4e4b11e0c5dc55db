//! Balance section state: precision toggle, symbol and refresh affordance.

use crate::domain::{Balance, NetworkConfig};
use crate::i18n::translate_raw;

/// What sits next to the balance value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceAffordance {
    /// Nothing.
    None,
    /// A refresh is in flight.
    Spinner,
    /// The user may trigger a refresh.
    Refresh,
}

impl BalanceAffordance {
    /// Decide the affordance for `balance` given the online status.
    #[must_use]
    pub const fn for_balance(balance: &Balance, is_offline: bool) -> Self {
        if balance.wei.is_none() {
            Self::None
        } else if balance.is_pending {
            Self::Spinner
        } else if is_offline {
            Self::None
        } else {
            Self::Refresh
        }
    }
}

/// Symbol shown after the balance: the unit, marked on test networks.
#[must_use]
pub fn balance_symbol(network: &NetworkConfig) -> String {
    if network.is_testnet {
        format!("{} ({})", network.unit, translate_raw("TESTNET"))
    } else {
        network.unit.clone()
    }
}

/// Local short/long precision toggle. Not persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BalanceDisplay {
    show_long_balance: bool,
}

impl BalanceDisplay {
    /// Flip between short and long precision.
    pub fn toggle(&mut self) {
        self.show_long_balance = !self.show_long_balance;
    }

    /// Whether the long form is shown.
    #[must_use]
    pub const fn show_long_balance(&self) -> bool {
        self.show_long_balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::NetworkMother;
    use rstest::rstest;

    #[rstest]
    #[case::unknown(Balance::unknown(), false, BalanceAffordance::None)]
    #[case::unknown_offline(Balance::unknown(), true, BalanceAffordance::None)]
    #[case::unknown_pending(Balance::unknown().pending(), false, BalanceAffordance::None)]
    #[case::pending(Balance::known(1).pending(), false, BalanceAffordance::Spinner)]
    #[case::pending_offline(Balance::known(1).pending(), true, BalanceAffordance::Spinner)]
    #[case::offline(Balance::known(1), true, BalanceAffordance::None)]
    #[case::online(Balance::known(1), false, BalanceAffordance::Refresh)]
    #[case::zero_online(Balance::known(0), false, BalanceAffordance::Refresh)]
    fn test_affordance(
        #[case] balance: Balance,
        #[case] is_offline: bool,
        #[case] expected: BalanceAffordance,
    ) {
        assert_eq!(BalanceAffordance::for_balance(&balance, is_offline), expected);
    }

    #[test]
    fn test_symbol() {
        assert_eq!(balance_symbol(&NetworkMother::eth()), "ETH");
        assert_eq!(balance_symbol(&NetworkMother::ropsten()), "ETH (Testnet)");
    }

    #[test]
    fn test_toggle_flips_and_double_toggle_restores() {
        let mut display = BalanceDisplay::default();
        assert!(!display.show_long_balance());

        display.toggle();
        assert!(display.show_long_balance());

        display.toggle();
        assert!(!display.show_long_balance());
    }
}
