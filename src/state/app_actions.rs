//! Clipboard, browser, network and wallet actions.

use super::App;
use super::ui_state::TOAST_TICKS;

impl App {
    // ========================================================================
    // Clipboard & Browser
    // ========================================================================

    pub(crate) fn copy_address(&mut self) {
        let address = self
            .snapshot()
            .to_checksum_address(self.account_info.address());

        match self.clipboard.copy_text(&address) {
            Ok(()) => self.ui.show_toast("[+] Address copied", TOAST_TICKS),
            Err(e) => {
                tracing::warn!(error = %e, "Copy failed");
                self.ui.show_toast(format!("[x] {e}"), TOAST_TICKS);
            }
        }
    }

    pub(crate) fn open_link(&mut self, index: usize) {
        let links = self.account_info.links(&self.snapshot());
        let Some(link) = links.get(index) else {
            tracing::debug!(index, available = links.len(), "No explorer link");
            return;
        };

        tracing::info!(kind = ?link.kind, url = %link.url, "Opening explorer link");
        match open::that(&link.url) {
            Ok(()) => self.ui.show_toast("[+] Opened in browser", TOAST_TICKS),
            Err(e) => {
                tracing::warn!(url = %link.url, error = %e, "Failed to open browser");
                self.ui
                    .show_toast(format!("[x] Failed to open browser: {e}"), TOAST_TICKS);
            }
        }
    }

    // ========================================================================
    // Network & Config
    // ========================================================================

    pub(crate) fn toggle_offline(&mut self) {
        let offline = self.store.toggle_offline();
        self.config.offline = offline;
        self.save_config();
        self.ui.show_toast(
            if offline { "Offline" } else { "Online" },
            TOAST_TICKS,
        );
        if !offline {
            self.load_balance();
        }
    }

    pub(crate) fn next_network(&mut self) {
        let network = self.store.next_network().clone();
        tracing::info!(network = %network.id, "Network switched");
        self.config.network = network.id;
        self.save_config();
        self.ui.show_toast(format!("Network: {}", network.name), TOAST_TICKS);
        self.load_balance();
    }

    pub(crate) fn next_wallet(&mut self) {
        if self.store.wallet_count() < 2 {
            return;
        }
        let handle = self.store.next_wallet().clone();
        self.account_info.update(&handle);
        tracing::info!(
            wallet = handle.wallet().wallet_type(),
            version = handle.version(),
            "Wallet switched"
        );
        self.load_balance();
    }

    fn save_config(&self) {
        if !self.persist_config {
            return;
        }
        if let Err(err) = self.config.save() {
            tracing::warn!(%err, "Config save failed");
        }
    }
}
