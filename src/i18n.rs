//! Translation lookup for user-facing strings.
//!
//! Strings are addressed by key. Parameters are written as `{$name}` in the
//! template and substituted by [`translate`]. Unknown keys render as the key
//! itself so a missing entry is visible instead of blank.

/// English string table.
const EN: &[(&str, &str)] = &[
    ("SIDEBAR_ACCOUNTADDR", "Account Address"),
    ("SIDEBAR_ACCOUNTBAL", "Account Balance"),
    ("SIDEBAR_TRANSHISTORY", "Transaction History"),
    ("SIDEBAR_DISPLAY_ADDR", "Display address on {$wallet}"),
    ("SIDEBAR_CONFIRM_ADDR", "Confirm address on {$wallet}"),
    ("TESTNET", "Testnet"),
    ("BALANCE_OFFLINE", "Balance isn't available offline"),
    ("BALANCE_LOADING", "Loading balance"),
    ("REFRESH", "refresh"),
    ("TOKENS", "Tokens"),
];

/// Look up `key` without parameter substitution.
#[must_use]
pub fn translate_raw(key: &str) -> String {
    EN.iter()
        .find(|(k, _)| *k == key)
        .map_or_else(|| key.to_string(), |(_, v)| (*v).to_string())
}

/// Look up `key` and substitute `{$name}` placeholders from `params`.
///
/// Parameter names are given without the `$`.
#[must_use]
pub fn translate(key: &str, params: &[(&str, &str)]) -> String {
    params
        .iter()
        .fold(translate_raw(key), |text, (name, value)| {
            text.replace(&format!("{{${name}}}"), value)
        })
}
