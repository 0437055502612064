//! Identifier resolution.
//!
//! Derives canonical integer route and stop IDs from the heterogeneous
//! string identifiers found in the feed. Resolution never falls back to a
//! default: an identifier that cannot be mapped is an error.

mod route;
mod stop;

use std::sync::LazyLock;

use regex::Regex;

pub use route::resolve_route_id;
pub use stop::{LegacyStopCodes, StopIdResolver, clean_original_stop_id, stop_code};

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

/// True for a non-empty string made only of ASCII digits.
pub(crate) fn is_digits_only(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// The first run of ASCII digits anywhere in `s`.
pub(crate) fn first_digit_run(s: &str) -> Option<&str> {
    DIGITS.find(s).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only() {
        assert!(is_digits_only("40"));
        assert!(is_digits_only("0"));
        assert!(!is_digits_only(""));
        assert!(!is_digits_only("40A"));
        assert!(!is_digits_only(" 40"));
        assert!(!is_digits_only("-4"));
    }

    #[test]
    fn first_run() {
        assert_eq!(first_digit_run("NRT-45"), Some("45"));
        assert_eq!(first_digit_run("AllNRT_40_12"), Some("40"));
        assert_eq!(first_digit_run("45A"), Some("45"));
        assert_eq!(first_digit_run("NRT"), None);
    }
}
