//! Clipboard access for copying the account address.
//!
//! On Linux, external tools are tried first (`wl-copy`, `xclip`, `xsel`)
//! because they keep the clipboard content after the process exits. Everything
//! else goes through `arboard`.

use thiserror::Error;

/// Error type for clipboard operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard not available")]
    NotAvailable,
    #[error("Failed to copy: {0}")]
    CopyFailed(String),
}

pub type ClipboardResult<T> = Result<T, ClipboardError>;

/// Copies text to the system clipboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClipboardManager;

impl ClipboardManager {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Copy `text` to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if no clipboard is reachable or the copy fails.
    pub fn copy_text(&self, text: &str) -> ClipboardResult<()> {
        #[cfg(target_os = "linux")]
        if Self::copy_with_external_tool(text) {
            return Ok(());
        }

        let mut clipboard =
            arboard::Clipboard::new().map_err(|_| ClipboardError::NotAvailable)?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }

    #[cfg(target_os = "linux")]
    fn copy_with_external_tool(text: &str) -> bool {
        const TOOLS: [(&str, &[&str]); 3] = [
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
            ("xsel", &["--clipboard", "--input"]),
        ];
        TOOLS
            .iter()
            .any(|(tool, args)| Self::try_tool(tool, args, text))
    }

    #[cfg(target_os = "linux")]
    fn try_tool(tool: &str, args: &[&str], text: &str) -> bool {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let Ok(mut child) = Command::new(tool)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        else {
            return false;
        };

        let Some(mut stdin) = child.stdin.take() else {
            return false;
        };
        if stdin.write_all(text.as_bytes()).is_err() {
            return false;
        }
        drop(stdin);

        child.wait().map(|s| s.success()).unwrap_or(false)
    }
}
