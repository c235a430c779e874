//! Shared regex patterns for price mining.

use regex::Regex;

/// Currency pattern: a symbol from {$, €, £, ₹}, an optional single space,
/// then a digit run with optional thousands separators and decimal fraction.
/// The symbol is capture group 1.
pub(crate) fn currency() -> Regex {
    Regex::new(r"(\$|€|£|₹)\s?\d[\d,]*(?:\.\d+)?").unwrap()
}

/// Bare numeric run: digits with optional thousands separators and an
/// optional decimal fraction.
pub(crate) fn number() -> Regex {
    Regex::new(r"\d[\d,]*(?:\.\d+)?").unwrap()
}
