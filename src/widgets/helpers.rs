//! Helper functions for formatting and displaying wallet data.
//!
//! This module contains utility functions used across various widgets for:
//! - Address truncation
//! - Base-unit amount formatting (wei to ether)
//! - Spinner animation frames

// ============================================================================
// Address Formatting
// ============================================================================

/// Truncate an address to fit in the given width.
///
/// If the address is longer than `max_len`, it will be truncated with an ellipsis
/// in the middle (e.g., "0x5aAe...1BeAed").
///
/// # Examples
///
/// ```ignore
/// let truncated = truncate_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed", 20);
/// assert!(truncated.len() <= 20);
/// assert!(truncated.contains("..."));
/// ```
#[must_use]
pub fn truncate_address(addr: &str, max_len: usize) -> String {
    if addr.len() <= max_len {
        return addr.to_string();
    }

    if max_len < 7 {
        return addr.chars().take(max_len).collect();
    }

    // Reserve 3 chars for "..."
    let available = max_len - 3;
    let prefix_len = available.div_ceil(2);
    let suffix_len = available / 2;

    let prefix: String = addr.chars().take(prefix_len).collect();
    let suffix: String = addr.chars().skip(addr.len() - suffix_len).collect();

    format!("{prefix}...{suffix}")
}

// ============================================================================
// Amount Formatting
// ============================================================================

/// Digits kept after the decimal point in the short balance form.
pub const SHORT_BALANCE_DIGITS: u32 = 4;

/// Format a number with commas for thousands separators.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_with_commas(1000), "1,000");
/// assert_eq!(format_with_commas(1_000_000), "1,000,000");
/// ```
#[must_use]
pub fn format_with_commas(n: u128) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Join an integer part and a zero-padded fraction, dropping trailing zeros.
fn join_trimmed(int_part: String, frac: u128, width: u32) -> String {
    if width == 0 || frac == 0 {
        return int_part;
    }
    let padded = format!("{frac:0width$}", width = width as usize);
    let trimmed = padded.trim_end_matches('0');
    format!("{int_part}.{trimmed}")
}

/// Full-precision decimal rendering of `value` base units.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_base_units(1_500_000_000_000_000_000, 18), "1.5");
/// ```
#[must_use]
pub fn format_base_units(value: u128, decimals: u32) -> String {
    let scale = 10u128.pow(decimals);
    join_trimmed((value / scale).to_string(), value % scale, decimals)
}

/// Short rendering of `value` base units: at most `digits` decimals, rounded
/// half-up, trailing zeros trimmed, thousands separated.
///
/// A non-zero amount that rounds to zero is shown as `~0`.
#[must_use]
pub fn format_base_units_short(value: u128, decimals: u32, digits: u32) -> String {
    if digits >= decimals {
        let scale = 10u128.pow(decimals);
        return join_trimmed(format_with_commas(value / scale), value % scale, decimals);
    }

    let step = 10u128.pow(decimals - digits);
    let mut rounded = value / step;
    if value % step >= step / 2 {
        rounded += 1;
    }

    let frac_scale = 10u128.pow(digits);
    let formatted = join_trimmed(
        format_with_commas(rounded / frac_scale),
        rounded % frac_scale,
        digits,
    );

    if rounded == 0 && value != 0 {
        format!("~{formatted}")
    } else {
        formatted
    }
}

// ============================================================================
// Spinner
// ============================================================================

/// Braille spinner frames.
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for the given animation tick.
#[must_use]
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}

// ============================================================================
// Tests
// ============================================================================
