//! Place-name canonicalization.
//!
//! The feed truncates place names at arbitrary lengths ("ST. CATH",
//! "NIAG"). Each chain lists the fragments seen for one place, longest
//! first, and maps any of them to the canonical spelling.

use std::sync::LazyLock;

use regex::Regex;

/// A canonical place name and the fragments that denote it.
#[derive(Debug, Clone, Copy)]
pub struct PlaceChain {
    pub canonical: &'static str,
    /// Matched case-insensitively as whole words, in order.
    pub fragments: &'static [&'static str],
}

/// Chains in application order.
pub const PLACE_CHAINS: [PlaceChain; 5] = [
    PlaceChain {
        canonical: "St Catharines",
        fragments: &[
            "st. catharines",
            "st. catharine",
            "st. catharin",
            "st. cathari",
            "st. cathar",
            "st. catha",
            "st. cath",
            "st. cat",
            "st. ca",
            "st. c",
            "st. ",
        ],
    },
    PlaceChain {
        canonical: "Niagara Falls",
        fragments: &["niagara falls", "niagara fall", "niag", "nia. falls", "falls"],
    },
    PlaceChain {
        canonical: "NOTL",
        fragments: &["notl"],
    },
    PlaceChain {
        canonical: "Outlet Mall",
        fragments: &["outlet mall", "outlet m"],
    },
    PlaceChain {
        canonical: "Welland",
        fragments: &["welland", "wellan"],
    },
];

static COMPILED: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    PLACE_CHAINS
        .iter()
        .map(|chain| {
            let alternatives: Vec<String> =
                chain.fragments.iter().map(|f| regex::escape(f)).collect();
            let pattern = format!(r"(?i)(^|\W)(?:{})(\W|$)", alternatives.join("|"));
            let replacement = format!("${{1}}{}${{2}}", chain.canonical);
            (Regex::new(&pattern).expect("valid regex"), replacement)
        })
        .collect()
});

/// Replace every known place fragment with its canonical name.
pub fn canonicalize_places(s: &str) -> String {
    let mut out = s.to_string();
    for (pattern, replacement) in COMPILED.iter() {
        out = pattern.replace_all(&out, replacement.as_str()).into_owned();
    }
    out
}
