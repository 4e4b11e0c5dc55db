//! Modal overlays drawn on top of the main UI.

pub mod help;

pub use help::render as render_help_popup;
