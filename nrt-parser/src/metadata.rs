//! Route brand colors and agency metadata.
//!
//! The agency's route set is closed: a route number without a color means
//! the feed changed and the table needs updating.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{RouteColor, TransformError};
use crate::feed::AgencyMetadata;
use crate::resolve::first_digit_run;

/// Agency green (from the printed system map).
pub const AGENCY_COLOR: RouteColor = RouteColor::from_static(b"6CB33F");

/// GTFS route type for bus service.
pub const ROUTE_TYPE_BUS: u16 = 3;

/// Metadata for the whole agency.
pub fn agency_metadata() -> AgencyMetadata {
    AgencyMetadata {
        color: AGENCY_COLOR,
        route_type: ROUTE_TYPE_BUS,
    }
}

/// Route number → brand color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteColors(BTreeMap<u32, RouteColor>);

impl RouteColors {
    pub fn new(entries: impl IntoIterator<Item = (u32, RouteColor)>) -> Self {
        RouteColors(entries.into_iter().collect())
    }

    /// Color for a route, keyed by the first digit run of its short name
    /// ("45A" uses route 45's color).
    pub fn color_for(&self, route_id: &str, short_name: &str) -> Result<RouteColor, TransformError> {
        first_digit_run(short_name)
            .and_then(|digits| digits.parse::<u32>().ok())
            .and_then(|number| self.0.get(&number).copied())
            .ok_or_else(|| TransformError::UnmappedMetadata {
                route_id: route_id.to_string(),
                short_name: short_name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for RouteColors {
    fn default() -> Self {
        const ENTRIES: [(u32, RouteColor); 10] = [
            (22, RouteColor::from_static(b"766A24")),
            (25, RouteColor::from_static(b"00AAA0")), // Welland Transit
            (40, RouteColor::from_static(b"1B5C28")),
            (45, RouteColor::from_static(b"1B5C28")),
            (50, RouteColor::from_static(b"F1471C")),
            (55, RouteColor::from_static(b"F1471C")),
            (60, RouteColor::from_static(b"1378C7")),
            (65, RouteColor::from_static(b"1378C7")),
            (70, RouteColor::from_static(b"62B92C")),
            (75, RouteColor::from_static(b"62B92C")),
        ];

        RouteColors(ENTRIES.into_iter().collect())
    }
}
