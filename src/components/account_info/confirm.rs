//! Request/confirm flow for showing the address on a hardware device.

use tokio::sync::mpsc;

use crate::domain::{Wallet, WalletError};

/// Where the on-device confirmation stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmState {
    /// No request outstanding; the trigger is shown.
    #[default]
    Idle,
    /// Waiting for the device; a spinner is shown instead of the trigger.
    Confirming,
}

/// Drives [`ConfirmState`] and collects device results.
///
/// Device calls run as tokio tasks and report back over a channel owned by
/// this flow. Results arriving after the flow is dropped go nowhere.
#[derive(Debug)]
pub struct HardwareConfirmFlow {
    state: ConfirmState,
    result_tx: mpsc::UnboundedSender<Result<(), WalletError>>,
    result_rx: mpsc::UnboundedReceiver<Result<(), WalletError>>,
}

impl Default for HardwareConfirmFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl HardwareConfirmFlow {
    /// An idle flow.
    #[must_use]
    pub fn new() -> Self {
        let (result_tx, result_rx) = mpsc::unbounded_channel();
        Self {
            state: ConfirmState::Idle,
            result_tx,
            result_rx,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> ConfirmState {
        self.state
    }

    /// Ask `wallet` to display its address on the device.
    ///
    /// Moves to [`ConfirmState::Confirming`] before returning. Returns `false`
    /// and does nothing when the wallet has no hardware capability or a
    /// request is already outstanding. Must be called from within a tokio
    /// runtime.
    pub fn request(&mut self, wallet: &dyn Wallet) -> bool {
        if self.state == ConfirmState::Confirming {
            return false;
        }
        let Some(hardware) = wallet.as_hardware() else {
            return false;
        };

        self.state = ConfirmState::Confirming;
        let display = hardware.display_address();
        let result_tx = self.result_tx.clone();
        tokio::spawn(async move {
            let _ = result_tx.send(display.await);
        });
        true
    }

    /// Apply a device result. Any outcome returns the flow to idle.
    pub fn settle(&mut self, result: Result<(), WalletError>) {
        if let Err(error) = result {
            tracing::error!(%error, "Display address failed");
        }
        self.state = ConfirmState::Idle;
    }

    /// Apply every result that has arrived. Returns `true` if any did.
    pub fn poll(&mut self) -> bool {
        let mut settled = false;
        while let Ok(result) = self.result_rx.try_recv() {
            self.settle(result);
            settled = true;
        }
        settled
    }

    /// Wait for the outstanding request to settle. Returns at once when idle.
    #[cfg(test)]
    pub async fn wait_settled(&mut self) {
        if self.state == ConfirmState::Idle {
            return;
        }
        if let Some(result) = self.result_rx.recv().await {
            self.settle(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DeviceResponse;
    use crate::test_utils::WalletMother;

    #[tokio::test]
    async fn test_request_enters_confirming_synchronously() {
        let mut flow = HardwareConfirmFlow::new();
        let wallet = WalletMother::ledger();

        assert!(flow.request(wallet.as_ref()));
        assert_eq!(flow.state(), ConfirmState::Confirming);
    }

    #[tokio::test]
    async fn test_basic_wallet_is_ignored() {
        let mut flow = HardwareConfirmFlow::new();
        assert!(!flow.request(WalletMother::basic().as_ref()));
        assert_eq!(flow.state(), ConfirmState::Idle);
    }

    #[tokio::test]
    async fn test_second_request_while_confirming_is_ignored() {
        let mut flow = HardwareConfirmFlow::new();
        let wallet = WalletMother::ledger();
        assert!(flow.request(wallet.as_ref()));
        assert!(!flow.request(wallet.as_ref()));

        flow.wait_settled().await;
        assert_eq!(flow.state(), ConfirmState::Idle);
        assert!(!flow.poll(), "only one device call should have run");
    }

    #[tokio::test]
    async fn test_returns_to_idle_for_every_outcome() {
        for response in [
            DeviceResponse::Confirm,
            DeviceResponse::Reject,
            DeviceResponse::Fail("unplugged".into()),
        ] {
            let mut flow = HardwareConfirmFlow::new();
            let wallet = WalletMother::device(response.clone());
            flow.request(wallet.as_ref());
            flow.wait_settled().await;
            assert_eq!(flow.state(), ConfirmState::Idle, "{response:?}");
        }
    }

    #[test]
    fn test_settle_failure_does_not_panic() {
        let mut flow = HardwareConfirmFlow::new();
        flow.settle(Err(WalletError::Device("gone".into())));
        assert_eq!(flow.state(), ConfirmState::Idle);
    }

    #[tokio::test]
    async fn test_wait_while_idle_returns_immediately() {
        let mut flow = HardwareConfirmFlow::new();
        let waited =
            tokio::time::timeout(std::time::Duration::from_millis(300), flow.wait_settled()).await;
        assert!(waited.is_ok());
        assert_eq!(flow.state(), ConfirmState::Idle);
    }

    #[test]
    fn test_poll_without_results() {
        let mut flow = HardwareConfirmFlow::new();
        assert!(!flow.poll());
    }
}
