//! Dispatched sidebar actions and background task results.

use super::{App, AppMessage, WalletAction};

impl App {
    /// Drain both channels, then let the sidebar catch up with the store.
    pub(crate) fn process_messages(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            self.handle_action(action);
        }

        while let Ok(message) = self.message_rx.try_recv() {
            match message {
                AppMessage::BalanceLoaded(wei) => {
                    tracing::debug!(?wei, "Balance loaded");
                    self.store.set_balance(wei);
                }
            }
        }

        self.account_info.update(self.store.wallet());
    }

    pub(crate) fn handle_action(&mut self, action: WalletAction) {
        match action {
            WalletAction::RefreshAccountBalance => self.load_balance(),
        }
    }

    /// Start a balance reload unless offline.
    pub(crate) fn load_balance(&mut self) {
        if self.store.is_offline() {
            return;
        }
        self.store.begin_refresh();
        self.balance_source.spawn_load(self.message_tx.clone());
    }
}
