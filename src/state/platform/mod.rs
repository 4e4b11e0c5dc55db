//! Platform-specific helpers: clipboard access and application paths.

pub mod clipboard;
pub mod paths;

pub use clipboard::ClipboardManager;
pub use paths::AppPaths;
