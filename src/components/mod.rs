//! Stateful UI components.
//!
//! - [`account_info`] - The account sidebar

pub mod account_info;

pub use account_info::AccountInfo;
