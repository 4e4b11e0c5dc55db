//! Common reusable widget components.
//!
//! - [`AddressDisplay`]: Truncated address display
//! - [`UnitDisplay`]: Balance in the native unit, short or long form

mod address;
mod amount;

pub use address::AddressDisplay;
pub use amount::UnitDisplay;
