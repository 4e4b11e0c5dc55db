//! UI presentation state: the help popup and toast notifications.

/// Toast lifetimes, in ticks of the main loop (~100ms each).
pub const TOAST_TICKS: u8 = 20;

/// Presentation-only state. Nothing here is persisted.
#[derive(Debug, Default)]
pub struct UiState {
    /// Message and remaining ticks.
    pub toast: Option<(String, u8)>,
    /// Whether the help popup is visible.
    pub show_help: bool,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast that disappears after `ticks` ticks.
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Count the toast down. Returns `true` when it was removed.
    pub fn tick_toast(&mut self) -> bool {
        match &mut self.toast {
            Some((_, ticks)) if *ticks > 1 => {
                *ticks -= 1;
                false
            }
            Some(_) => {
                self.toast = None;
                true
            }
            None => false,
        }
    }

    /// Close whatever overlay is showing.
    pub fn dismiss(&mut self) {
        if self.show_help {
            self.show_help = false;
        } else {
            self.toast = None;
        }
    }
}
