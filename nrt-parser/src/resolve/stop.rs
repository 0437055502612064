//! Stop ID resolution.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::is_digits_only;
use crate::domain::{StopId, TransformError};

/// Structural prefix carried by NRT stop identifiers: agency token, optional
/// route letters, 2-4 digit route body, optional 3-letter stop suffix and an
/// optional trailing `NFT` marker.
static STRUCTURAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:allnrt|nrt|)_(?:[a-z]{1,3})?\d{2,4}_?(?:[a-z]{3}stop)?(?:stop)?(?:nft)?")
        .expect("valid regex")
});

/// Stop code value that means "no code".
const NO_STOP_CODE: &str = "0";

/// Strip the structural prefix from a raw stop identifier.
///
/// ```
/// use nrt_parser::resolve::clean_original_stop_id;
///
/// assert_eq!(clean_original_stop_id("AllNRT_15_2101"), "2101");
/// assert_eq!(clean_original_stop_id("NRT_40_WEL"), "WEL");
/// assert_eq!(clean_original_stop_id("2101"), "2101");
/// ```
pub fn clean_original_stop_id(stop_id: &str) -> String {
    STRUCTURAL_PREFIX.replace(stop_id, "").into_owned()
}

/// The rider-facing stop code, or `None` when the feed has none.
///
/// A literal `"0"` is the feed's placeholder for a missing code.
pub fn stop_code(code: Option<&str>) -> Option<String> {
    code.map(str::trim)
        .filter(|c| !c.is_empty() && *c != NO_STOP_CODE)
        .map(str::to_string)
}

/// Fixed mapping from legacy alphabetic stop codes to stop IDs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LegacyStopCodes(BTreeMap<String, StopId>);

impl LegacyStopCodes {
    /// Build a table from explicit entries.
    pub fn new(entries: impl IntoIterator<Item = (String, StopId)>) -> Self {
        LegacyStopCodes(entries.into_iter().collect())
    }

    /// Look up a code. Matching is exact and case-sensitive.
    pub fn get(&self, code: &str) -> Option<StopId> {
        self.0.get(code).copied()
    }

    /// Iterate over all `(code, id)` entries in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, StopId)> {
        self.0.iter().map(|(code, id)| (code.as_str(), *id))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for LegacyStopCodes {
    fn default() -> Self {
        // WEL keeps its historical value.
        const ENTRIES: [(&str, i32); 16] = [
            ("DTT", 100_000),
            ("NFT", 100_001),
            ("PEN", 100_002),
            ("SWM", 100_003),
            ("WEL", 100004),
            ("BRU", 100_006),
            ("FVM", 100_008),
            ("GDC", 100_020),
            ("WLC", 100_021),
            ("CTO", 100_035),
            ("OUT", 100_044),
            ("MCC", 100_045),
            ("NiagSqua", 200_000),
            ("Concentrix", 200_001),
            ("FortErie", 200_002),
            ("PCH", 9_000_016),
        ];

        LegacyStopCodes(
            ENTRIES
                .iter()
                .filter_map(|&(code, id)| StopId::new(id).map(|id| (code.to_string(), id)))
                .collect(),
        )
    }
}

/// Resolves stop records to canonical stop IDs.
#[derive(Debug, Clone, Copy)]
pub struct StopIdResolver<'a> {
    legacy: &'a LegacyStopCodes,
}

impl<'a> StopIdResolver<'a> {
    pub fn new(legacy: &'a LegacyStopCodes) -> Self {
        Self { legacy }
    }

    /// Resolve a stop to its canonical ID.
    ///
    /// The stop code is used when present; a missing code (or `"0"`) falls
    /// through to the stop id. The structural prefix is stripped, then the
    /// remainder must be numeric or an exact legacy code.
    pub fn resolve(&self, stop_id: &str, code: Option<&str>) -> Result<StopId, TransformError> {
        let source = stop_code(code).unwrap_or_else(|| stop_id.to_string());
        let record = || match code {
            Some(c) => format!("{stop_id} (code {c:?})"),
            None => stop_id.to_string(),
        };

        let remainder = clean_original_stop_id(&source);
        if remainder.is_empty() {
            return Err(TransformError::unresolved_stop(
                record(),
                "nothing left after stripping the structural prefix",
            ));
        }

        if is_digits_only(&remainder) {
            return remainder
                .parse::<i32>()
                .ok()
                .and_then(StopId::new)
                .ok_or_else(|| TransformError::unresolved_stop(record(), "stop number out of range"));
        }

        self.legacy.get(&remainder).ok_or_else(|| {
            TransformError::unresolved_stop(record(), format!("unknown legacy code {remainder:?}"))
        })
    }
}
