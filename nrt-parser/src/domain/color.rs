//! Route brand color type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid route color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route color: {reason}")]
pub struct InvalidRouteColor {
    reason: &'static str,
}

/// A 6-digit hexadecimal RGB color, stored uppercase and without a `#`.
///
/// # Examples
///
/// ```
/// use nrt_parser::domain::RouteColor;
///
/// let green = RouteColor::parse("1b5c28").unwrap();
/// assert_eq!(green.as_str(), "1B5C28");
///
/// assert!(RouteColor::parse("#1B5C28").is_err());
/// assert!(RouteColor::parse("1B5C2").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RouteColor([u8; 6]);

impl RouteColor {
    /// Parse a color from six hex digits. Lowercase digits are accepted and
    /// normalized to uppercase.
    pub fn parse(s: &str) -> Result<Self, InvalidRouteColor> {
        let bytes = s.as_bytes();

        if bytes.len() != 6 {
            return Err(InvalidRouteColor {
                reason: "must be exactly 6 characters",
            });
        }

        let mut out = [0u8; 6];
        for (slot, &b) in out.iter_mut().zip(bytes) {
            if !b.is_ascii_hexdigit() {
                return Err(InvalidRouteColor {
                    reason: "must be hexadecimal digits 0-9 A-F",
                });
            }
            *slot = b.to_ascii_uppercase();
        }

        Ok(RouteColor(out))
    }

    /// Build a color from a literal, checked at compile time when used in a
    /// `const` item.
    pub const fn from_static(hex: &[u8; 6]) -> Self {
        let mut i = 0;
        while i < 6 {
            assert!(
                hex[i].is_ascii_hexdigit() && !hex[i].is_ascii_lowercase(),
                "route color literal must be uppercase hex"
            );
            i += 1;
        }
        RouteColor(*hex)
    }

    /// Returns the color as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store ASCII hex digits
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl TryFrom<String> for RouteColor {
    type Error = InvalidRouteColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RouteColor::parse(&value)
    }
}

impl From<RouteColor> for String {
    fn from(color: RouteColor) -> Self {
        color.as_str().to_string()
    }
}

impl fmt::Debug for RouteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteColor({})", self.as_str())
    }
}

impl fmt::Display for RouteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any six hex digits parse, and the stored form is the uppercase input
        #[test]
        fn hex_always_parses(s in "[0-9a-fA-F]{6}") {
            let color = RouteColor::parse(&s).unwrap();
            prop_assert_eq!(color.as_str(), s.to_ascii_uppercase());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[0-9A-F]{0,5}|[0-9A-F]{7,10}") {
            prop_assert!(RouteColor::parse(&s).is_err());
        }
    }
}
