//! Reusable widget components for the wallet sidebar.
//!
//! # Module Structure
//!
//! - [`helpers`]: Formatting for addresses and base-unit amounts, spinner frames
//! - [`common`]: Address and unit display widgets

pub mod common;
pub mod helpers;

pub use common::{AddressDisplay, UnitDisplay};
pub use helpers::spinner_frame;
