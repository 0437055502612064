//! Generic label cleanups shared by every kind of name.
//!
//! Each function is a single pass of one rule over the whole string.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Words kept uppercase when an ALL-CAPS label is title-cased.
const ACRONYMS: [&str; 7] = ["NE", "NW", "SE", "SW", "GO", "NF", "NOTL"];

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{L}+").expect("valid regex"));

static AND: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*&\s*").expect("valid regex"));

static AT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*@\s*").expect("valid regex"));

static POINTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\p{L})\.").expect("valid regex"));

/// A via-clause needs a destination in front of it; a label that starts
/// with "Via" is a place name.
static VIA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\S)\s+via(?:\s.*)?$").expect("valid regex"));

static KEEP_TO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:.*\s)?to\s+").expect("valid regex"));

static ORDINALS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d+)(st|nd|rd|th)\b").expect("valid regex"));

static EMPTY_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\)|\[\s*\]").expect("valid regex"));

static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

static SPACE_BEFORE_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" ([,)\]])").expect("valid regex"));

static SPACE_AFTER_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([(\[]) ").expect("valid regex"));

static WORD_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[\s(/])(\p{Ll})").expect("valid regex"));

/// Street-type abbreviations that expand wherever they stand as a word.
static STREET_TYPES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)\b(?:ave|av)\b", "Avenue"),
        (r"(?i)\bblvd\b", "Boulevard"),
        (r"(?i)\bcres\b", "Crescent"),
        (r"(?i)\bhwy\b", "Highway"),
        (r"(?i)\bpkwy\b", "Parkway"),
        (r"(?i)\brd\b", "Road"),
        (r"(?i)\bln\b", "Lane"),
        (r"(?i)\bpl\b", "Place"),
        (r"(?i)\bct\b", "Court"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).expect("valid regex"), replacement))
    .collect()
});

/// `St` and `Dr` double as "Saint" and "Doctor" in front of a name, so they
/// only expand as the last word of a name or a cross-street.
static TRAILING_STREET_TYPES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [(r"st", "Street"), (r"dr", "Drive")]
        .into_iter()
        .map(|(abbr, full)| {
            let pattern = format!(r"(?i)\b{abbr}\b(\s*(?:$|[&@/,)\-]))");
            (Regex::new(&pattern).expect("valid regex"), full)
        })
        .collect()
});

const LEADING_NOISE: &[char] = &['-', ',', ';', ':', '/', ')', ']'];
const TRAILING_NOISE: &[char] = &['-', ',', ';', ':', '/', '(', '['];

/// True when the label has letters and none of them are lowercase.
pub fn is_uppercase_only(s: &str) -> bool {
    s.chars().any(char::is_alphabetic) && !s.chars().any(char::is_lowercase)
}

/// Title-case an ALL-CAPS label, keeping known acronyms uppercase.
/// Labels with any lowercase letter are returned unchanged.
pub fn title_case_all_caps(s: &str) -> String {
    if !is_uppercase_only(s) {
        return s.to_string();
    }
    WORD.replace_all(s, |caps: &Captures| {
        let word = &caps[0];
        if ACRONYMS.contains(&word) {
            word.to_string()
        } else {
            capitalize(&word.to_lowercase())
        }
    })
    .into_owned()
}

/// Put spaces around `&` and `@`.
pub fn space_out_and_at(s: &str) -> String {
    let s = AND.replace_all(s, " & ");
    AT.replace_all(&s, " @ ").into_owned()
}

/// Drop abbreviation points (`St.` → `St`).
pub fn remove_points(s: &str) -> String {
    POINTS.replace_all(s, "$1").into_owned()
}

/// Reduce "A to B via C" to "B".
pub fn keep_to_and_remove_via(s: &str) -> String {
    let s = VIA.replace(s, "$1");
    KEEP_TO.replace(&s, "").into_owned()
}

/// Lowercase ordinal suffixes on numbers (`3RD` → `3rd`).
pub fn clean_numbers(s: &str) -> String {
    ORDINALS
        .replace_all(s, |caps: &Captures| {
            format!("{}{}", &caps[1], caps[2].to_lowercase())
        })
        .into_owned()
}

/// Expand street-type abbreviations to their full word.
pub fn clean_street_types(s: &str) -> String {
    let mut out = s.to_string();
    for (pattern, full) in STREET_TYPES.iter() {
        out = pattern.replace_all(&out, *full).into_owned();
    }
    for (pattern, full) in TRAILING_STREET_TYPES.iter() {
        out = pattern
            .replace_all(&out, |caps: &Captures| format!("{full}{}", &caps[1]))
            .into_owned();
    }
    out
}

/// Final tidy-up of a label: bracket and separator noise, whitespace, and a
/// capital letter at the start of every word.
pub fn clean_label(s: &str) -> String {
    let s = EMPTY_BRACKETS.replace_all(s, "");
    let s = SPACES.replace_all(&s, " ");
    let s = SPACE_BEFORE_CLOSE.replace_all(&s, "$1");
    let s = SPACE_AFTER_OPEN.replace_all(&s, "$1");
    let s = s
        .trim_start_matches(|c: char| c.is_whitespace() || LEADING_NOISE.contains(&c))
        .trim_end_matches(|c: char| c.is_whitespace() || TRAILING_NOISE.contains(&c));
    WORD_START
        .replace_all(s, |caps: &Captures| format!("{}{}", &caps[1], caps[2].to_uppercase()))
        .into_owned()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_detection() {
        assert!(is_uppercase_only("ST. CATH TERMINAL"));
        assert!(is_uppercase_only("45A"));
        assert!(!is_uppercase_only("St Catharines"));
        assert!(!is_uppercase_only("1234"));
        assert!(!is_uppercase_only(""));
    }

    #[test]
    fn title_case_keeps_acronyms() {
        assert_eq!(title_case_all_caps("NOTL CAMPUS"), "NOTL Campus");
        assert_eq!(title_case_all_caps("GO STATION NE"), "GO Station NE");
        assert_eq!(title_case_all_caps("45A TO WELLAND"), "45A To Welland");
        assert_eq!(title_case_all_caps("Mixed CASE"), "Mixed CASE");
    }

    #[test]
    fn and_at_spacing() {
        assert_eq!(space_out_and_at("Main&King"), "Main & King");
        assert_eq!(space_out_and_at("Main &King"), "Main & King");
        assert_eq!(space_out_and_at("Main@King"), "Main @ King");
        assert_eq!(space_out_and_at("Main & King"), "Main & King");
    }

    #[test]
    fn points() {
        assert_eq!(remove_points("St. Paul St."), "St Paul St");
        assert_eq!(remove_points("Route 4.5"), "Route 4.5");
    }

    #[test]
    fn to_and_via() {
        assert_eq!(
            keep_to_and_remove_via("A To Niagara Falls Via Main St"),
            "Niagara Falls"
        );
        assert_eq!(keep_to_and_remove_via("Welland via Thorold"), "Welland");
        assert_eq!(keep_to_and_remove_via("to Welland"), "Welland");
        assert_eq!(keep_to_and_remove_via("Toronto"), "Toronto");
        assert_eq!(keep_to_and_remove_via("Viaduct Road"), "Viaduct Road");
    }

    #[test]
    fn leading_via_is_a_place_name() {
        assert_eq!(keep_to_and_remove_via("Via Rail Station"), "Via Rail Station");
        assert_eq!(keep_to_and_remove_via("Via Rail Niagara Falls"), "Via Rail Niagara Falls");
        assert_eq!(keep_to_and_remove_via("  Via Rail"), "  Via Rail");
        assert_eq!(
            keep_to_and_remove_via("Welland via Via Rail Station"),
            "Welland"
        );
    }

    #[test]
    fn ordinals() {
        assert_eq!(clean_numbers("1ST Avenue"), "1st Avenue");
        assert_eq!(clean_numbers("22ND St"), "22nd St");
        assert_eq!(clean_numbers("Route 40"), "Route 40");
    }

    #[test]
    fn street_types() {
        assert_eq!(clean_street_types("Lake Ave"), "Lake Avenue");
        assert_eq!(clean_street_types("Main St & King St"), "Main Street & King Street");
        assert_eq!(clean_street_types("Glendale Ave / Taylor Rd"), "Glendale Avenue / Taylor Road");
        assert_eq!(clean_street_types("St Catharines"), "St Catharines");
        assert_eq!(clean_street_types("Dr Martin Rd"), "Dr Martin Road");
        assert_eq!(clean_street_types("Burleigh Hill Dr"), "Burleigh Hill Drive");
        assert_eq!(clean_street_types("Main Street"), "Main Street");
    }

    #[test]
    fn label() {
        assert_eq!(clean_label("  welland   bus terminal  "), "Welland Bus Terminal");
        assert_eq!(clean_label("Brock University ()"), "Brock University");
        assert_eq!(clean_label("- Niagara Falls -"), "Niagara Falls");
        assert_eq!(clean_label("Fairview Mall ( north )"), "Fairview Mall (North)");
        assert_eq!(clean_label("A-NOTL Campus"), "A-NOTL Campus");
    }
}
