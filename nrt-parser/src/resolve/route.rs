//! Route ID resolution.

use super::{first_digit_run, is_digits_only};
use crate::domain::{RouteId, TransformError};

/// Short-name suffix marking a route variant ("45A").
const VARIANT_SUFFIX: char = 'A';

/// Offset applied to variant routes so they never collide with route numbers.
const VARIANT_OFFSET: i64 = 10_000;

/// Resolve the canonical ID of a route.
///
/// A purely numeric short name is the ID. Otherwise the first digit run of
/// the raw route id is used, offset by 10000, but only when the short name
/// carries the `A` variant suffix. Anything else is unresolved.
///
/// # Examples
///
/// ```
/// use nrt_parser::resolve::resolve_route_id;
///
/// assert_eq!(resolve_route_id("40", "NRT-40").unwrap().value(), 40);
/// assert_eq!(resolve_route_id("45A", "NRT-45").unwrap().value(), 10045);
/// assert!(resolve_route_id("45B", "NRT-45").is_err());
/// ```
pub fn resolve_route_id(short_name: &str, raw_route_id: &str) -> Result<RouteId, TransformError> {
    let record = || format!("{raw_route_id} (short name {short_name:?})");

    if is_digits_only(short_name) {
        return short_name
            .parse::<i64>()
            .ok()
            .and_then(RouteId::new)
            .ok_or_else(|| TransformError::unresolved_route(record(), "short name out of range"));
    }

    let digits = first_digit_run(raw_route_id)
        .ok_or_else(|| TransformError::unresolved_route(record(), "no digits in route id"))?;

    if !short_name.ends_with(VARIANT_SUFFIX) {
        return Err(TransformError::unresolved_route(
            record(),
            "non-numeric short name without variant suffix",
        ));
    }

    digits
        .parse::<i64>()
        .ok()
        .and_then(|n| n.checked_add(VARIANT_OFFSET))
        .and_then(RouteId::new)
        .ok_or_else(|| TransformError::unresolved_route(record(), "route id digits out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IdentifierKind;

    fn id(short: &str, raw: &str) -> i64 {
        resolve_route_id(short, raw).unwrap().value()
    }

    #[test]
    fn numeric_short_name_is_the_id() {
        assert_eq!(id("22", "NRT-22"), 22);
        assert_eq!(id("40", "whatever"), 40);
        assert_eq!(id("75", ""), 75);
    }

    #[test]
    fn variant_suffix_is_offset() {
        assert_eq!(id("45A", "NRT-45"), 10045);
        assert_eq!(id("40A", "AllNRT_40A"), 10040);
    }

    #[test]
    fn empty_short_name_needs_suffix() {
        let err = resolve_route_id("", "NRT-45").unwrap_err();
        assert!(matches!(
            err,
            TransformError::UnresolvedIdentifier {
                kind: IdentifierKind::Route,
                ..
            }
        ));
    }

    #[test]
    fn other_suffixes_are_unresolved() {
        assert!(resolve_route_id("45B", "NRT-45").is_err());
        assert!(resolve_route_id("45a", "NRT-45").is_err());
    }

    #[test]
    fn missing_digits_are_unresolved() {
        let err = resolve_route_id("A", "NRT-X").unwrap_err();
        assert!(err.to_string().contains("no digits in route id"));
    }

    #[test]
    fn overflow_is_unresolved() {
        assert!(resolve_route_id("99999999999999999999", "x").is_err());
        assert!(resolve_route_id("1A", "NRT-99999999999999999999").is_err());
    }
}
