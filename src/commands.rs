//! Key events mapped to application commands.
//!
//! Mapping is a pure function of the key and the [`InputContext`], so
//! bindings are testable without a terminal.
//!
//! ```ignore
//! let command = KeyMapper::map_key(key_event, &app.input_context());
//! app.execute(command);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Which keybindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// The sidebar has focus.
    Main,
    /// The help popup is open.
    HelpPopup,
}

// ============================================================================
// App Commands
// ============================================================================

/// Everything a key press can ask the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    Quit,
    ToggleHelp,
    Dismiss,

    // === Sidebar ===
    /// Switch between short and long balance precision.
    ToggleLongBalance,
    /// Reload the balance, if the refresh trigger is showing.
    RefreshBalance,
    /// Ask a hardware wallet to show the address on its screen.
    DisplayAddress,
    /// Copy the checksummed address.
    CopyAddress,
    /// Open explorer link `n` (zero-based) in the browser.
    OpenLink(usize),

    // === Store ===
    ToggleOffline,
    NextNetwork,
    NextWallet,

    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Central place for all keybindings.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Map `key` to a command for `context`.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppCommand::Quit;
        }
        match context {
            InputContext::Main => Self::map_main_keys(key),
            InputContext::HelpPopup => Self::map_help_popup_keys(key),
        }
    }

    fn map_main_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('?') => AppCommand::ToggleHelp,
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Char('b') => AppCommand::ToggleLongBalance,
            KeyCode::Char('r') => AppCommand::RefreshBalance,
            KeyCode::Char('d') => AppCommand::DisplayAddress,
            KeyCode::Char('c') => AppCommand::CopyAddress,
            KeyCode::Char(c @ '1'..='9') => {
                AppCommand::OpenLink(c as usize - '1' as usize)
            }
            KeyCode::Char('o') => AppCommand::ToggleOffline,
            KeyCode::Char('n') => AppCommand::NextNetwork,
            KeyCode::Char('w') => AppCommand::NextWallet,
            _ => AppCommand::Noop,
        }
    }

    fn map_help_popup_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
