//! Text normalization for route long names, trip headsigns and stop names.
//!
//! Every rule is a regex replacement applied once, in a fixed order. The
//! rule chains are idempotent: normalizing an already-normalized label
//! leaves it unchanged.

mod clean;
mod places;

use std::sync::LazyLock;

use regex::Regex;

use crate::resolve::first_digit_run;

pub use clean::{
    clean_label, clean_numbers, clean_street_types, is_uppercase_only, keep_to_and_remove_via,
    remove_points, space_out_and_at, title_case_all_caps,
};
pub use places::{PLACE_CHAINS, PlaceChain, canonicalize_places};

/// Inter-Municipal Transit marker.
static IMT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|\W)(?:imt -|imt)(\W|$)").expect("valid regex"));

static OPERATOR_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^NRT - ").expect("valid regex"));

static REGION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i) (?:nf|sc|we)$").expect("valid regex"));

/// Which label a string is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    RouteLongName,
    TripHeadsign,
    StopName,
}

/// Normalize a raw label of the given kind.
///
/// # Examples
///
/// ```
/// use nrt_parser::normalize::{NameKind, normalize};
///
/// assert_eq!(
///     normalize("45A TO NIAGARA FALLS VIA MAIN ST", NameKind::TripHeadsign),
///     "Niagara Falls"
/// );
/// assert_eq!(normalize("MAIN&KING ST.", NameKind::StopName), "Main & King Street");
/// ```
pub fn normalize(raw: &str, kind: NameKind) -> String {
    match kind {
        NameKind::RouteLongName => clean_route_long_name(raw),
        NameKind::TripHeadsign => clean_trip_headsign(raw),
        NameKind::StopName => clean_stop_name(raw),
    }
}

/// Route long name: operator prefix and region suffix go, then the generic
/// cleanups.
pub fn clean_route_long_name(raw: &str) -> String {
    let s = OPERATOR_PREFIX.replace(raw, "");
    let s = REGION_SUFFIX.replace(&s, "");
    let s = title_case_all_caps(&s);
    let s = remove_points(&s);
    let s = clean_numbers(&s);
    let s = clean_street_types(&s);
    clean_label(&s)
}

/// Trip headsign: IMT marker, place names and the via-clause.
pub fn clean_trip_headsign(raw: &str) -> String {
    let s = title_case_all_caps(raw);
    let s = IMT.replace_all(&s, "${1}${2}");
    let s = canonicalize_places(&s);
    let s = keep_to_and_remove_via(&s);
    let s = clean_numbers(&s);
    let s = clean_street_types(&s);
    clean_label(&s)
}

/// Trip headsign of a known route: its own route number echoed at the start
/// is dropped first.
pub fn clean_route_headsign(raw: &str, route_short_name: &str) -> String {
    clean_trip_headsign(strip_route_echo(raw, route_short_name))
}

/// Drop the route's own number from the start of a headsign. A variant
/// letter stays behind as the first word ("40A Campus" → "A Campus").
///
/// Only the number of `route_short_name` is stripped, so a headsign that
/// merely starts with digits ("12 Mile Creek") is left alone.
///
/// ```
/// use nrt_parser::normalize::strip_route_echo;
///
/// assert_eq!(strip_route_echo("40A NOTL CAMPUS", "40"), "A NOTL CAMPUS");
/// assert_eq!(strip_route_echo("40 ST. CATHARINES", "40A"), "ST. CATHARINES");
/// assert_eq!(strip_route_echo("12 MILE CREEK", "22"), "12 MILE CREEK");
/// ```
pub fn strip_route_echo<'a>(headsign: &'a str, route_short_name: &str) -> &'a str {
    let Some(number) = first_digit_run(route_short_name) else {
        return headsign;
    };
    let Some(rest) = headsign.strip_prefix(number) else {
        return headsign;
    };

    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(' '), _) => &rest[1..],
        (Some(letter), Some(' ')) if letter.is_ascii_alphabetic() => rest,
        _ => headsign,
    }
}

/// Stop name: spaced `&`/`@`, no abbreviation points, expanded street types.
pub fn clean_stop_name(raw: &str) -> String {
    let s = title_case_all_caps(raw);
    let s = space_out_and_at(&s);
    let s = remove_points(&s);
    let s = clean_numbers(&s);
    let s = clean_street_types(&s);
    clean_label(&s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headsign_end_to_end() {
        assert_eq!(
            clean_trip_headsign("45A TO NIAGARA FALLS VIA MAIN ST"),
            "Niagara Falls"
        );
    }

    #[test]
    fn truncated_st_catharines() {
        let out = normalize("ST. CATH TERMINAL", NameKind::TripHeadsign);
        assert!(out.contains("St Catharines"), "{out}");
        assert_eq!(out, "St Catharines Terminal");
    }

    #[test]
    fn route_echo_keeps_variant_letter() {
        assert_eq!(
            clean_route_headsign("40A NIAGARA COLLEGE NOTL CAMPUS", "40"),
            "A Niagara College NOTL Campus"
        );
        assert_eq!(clean_route_headsign("40 ST. CATHARINES", "40"), "St Catharines");
        assert_eq!(clean_route_headsign("60A Welland Campus", "60"), "A Welland Campus");
        assert_eq!(
            clean_route_headsign("45A TO NIAGARA FALLS VIA MAIN ST", "45A"),
            "Niagara Falls"
        );
    }

    #[test]
    fn route_echo_only_strips_own_number() {
        assert_eq!(clean_route_headsign("22 12 MILE CREEK", "22"), "12 Mile Creek");
        assert_eq!(clean_route_headsign("12 MILE CREEK", "22"), "12 Mile Creek");
        assert_eq!(clean_route_headsign("400 MARKET", "40"), "400 Market");
        assert_eq!(strip_route_echo("40A", "40"), "40A");
        assert_eq!(strip_route_echo("Brock", ""), "Brock");
    }

    #[test]
    fn route_headsigns_are_idempotent() {
        for (raw, short_name) in [
            ("22 12 MILE CREEK", "22"),
            ("40A NIAGARA COLLEGE NOTL CAMPUS", "40"),
            ("45A TO NIAGARA FALLS VIA MAIN ST", "45A"),
            ("70 IMT WELLAND", "70"),
        ] {
            let once = clean_route_headsign(raw, short_name);
            assert_eq!(clean_route_headsign(&once, short_name), once, "{raw}");
        }
    }

    #[test]
    fn imt_marker_is_stripped() {
        assert_eq!(clean_trip_headsign("IMT - Niagara Falls"), "Niagara Falls");
        assert_eq!(clean_route_headsign("70 IMT WELLAND", "70"), "Welland");
    }

    #[test]
    fn headsign_starting_with_via_is_kept() {
        assert_eq!(
            normalize("VIA RAIL STATION", NameKind::TripHeadsign),
            "Via Rail Station"
        );
        assert_eq!(
            normalize("Via Rail Niagara Falls", NameKind::TripHeadsign),
            "Via Rail Niagara Falls"
        );
        assert_eq!(
            normalize("NIAGARA FALLS VIA RAIL STATION", NameKind::TripHeadsign),
            "Niagara Falls"
        );
    }

    #[test]
    fn dash_variants_survive() {
        assert_eq!(clean_trip_headsign("A-NOTL CAMPUS"), "A-NOTL Campus");
        assert_eq!(clean_trip_headsign("B-ST. CATHARINES"), "B-St Catharines");
    }

    #[test]
    fn stop_names() {
        assert_eq!(clean_stop_name("GLENDALE AVE&TAYLOR RD"), "Glendale Avenue & Taylor Road");
        assert_eq!(clean_stop_name("Welland Bus Terminal"), "Welland Bus Terminal");
        assert_eq!(clean_stop_name("ONTARIO ST. @ 4TH AVE"), "Ontario Street @ 4th Avenue");
        assert_eq!(clean_stop_name("St. Paul St. & Geneva St."), "St Paul Street & Geneva Street");
    }

    #[test]
    fn route_long_names() {
        assert_eq!(
            clean_route_long_name("NRT - Niagara Falls - St. Catharines NF"),
            "Niagara Falls - St Catharines"
        );
        assert_eq!(
            clean_route_long_name("NRT - WELLAND - PORT COLBORNE WE"),
            "Welland - Port Colborne"
        );
        assert_eq!(clean_route_long_name("Brock - Niagara College"), "Brock - Niagara College");
    }

    #[test]
    fn normalize_dispatches_by_kind() {
        assert_eq!(normalize("NRT - Brock SC", NameKind::RouteLongName), "Brock");
        assert_eq!(normalize("NRT - Brock SC", NameKind::StopName), "NRT - Brock SC");
    }

    #[test]
    fn fixture_labels_are_idempotent() {
        let inputs = [
            ("45A TO NIAGARA FALLS VIA MAIN ST", NameKind::TripHeadsign),
            ("40A NIAGARA COLLEGE NOTL CAMPUS", NameKind::TripHeadsign),
            ("ST. CATH TERMINAL", NameKind::TripHeadsign),
            ("IMT - WELLAND BUS TERMINAL", NameKind::TripHeadsign),
            ("B-ST. CATHARINES", NameKind::TripHeadsign),
            ("OUTLET M", NameKind::TripHeadsign),
            ("GLENDALE AVE&TAYLOR RD", NameKind::StopName),
            ("ST. PAUL ST. & GENEVA ST.", NameKind::StopName),
            ("Fairview Mall ( North )", NameKind::StopName),
            ("NRT - WELLAND - PORT COLBORNE WE", NameKind::RouteLongName),
            ("NRT - Niagara Falls - St. Catharines NF", NameKind::RouteLongName),
        ];
        for (raw, kind) in inputs {
            let once = normalize(raw, kind);
            assert_eq!(normalize(&once, kind), once, "{raw}");
        }
    }
}
