//! Command execution and input handling.

use crossterm::event::KeyEvent;

use crate::commands::{AppCommand, InputContext, KeyMapper};

use super::App;

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let command = KeyMapper::map_key(key_event, &self.input_context());
        self.execute_command(command);
    }

    /// Which keybindings are active right now.
    #[must_use]
    pub const fn input_context(&self) -> InputContext {
        if self.ui.show_help {
            InputContext::HelpPopup
        } else {
            InputContext::Main
        }
    }

    /// Apply `command` to the application.
    pub fn execute_command(&mut self, command: AppCommand) {
        match command {
            AppCommand::Quit => self.exit = true,
            AppCommand::ToggleHelp => self.ui.show_help = !self.ui.show_help,
            AppCommand::Dismiss => self.ui.dismiss(),
            AppCommand::ToggleLongBalance => self.account_info.toggle_long_balance(),
            AppCommand::RefreshBalance => {
                let snapshot = self.snapshot();
                self.account_info.refresh_balance(&snapshot);
            }
            AppCommand::DisplayAddress => {
                if !self.account_info.request_display_address() {
                    tracing::debug!(
                        state = ?self.account_info.confirm_state(),
                        "Display address ignored"
                    );
                }
            }
            AppCommand::CopyAddress => self.copy_address(),
            AppCommand::OpenLink(index) => self.open_link(index),
            AppCommand::ToggleOffline => self.toggle_offline(),
            AppCommand::NextNetwork => self.next_network(),
            AppCommand::NextWallet => self.next_wallet(),
            AppCommand::Noop => {}
        }
    }
}
