//! Trip headsign assignment and merging.
//!
//! Each trip takes its headsign text and direction from the feed, then the
//! text is normalized. Once every trip of a route is known, sibling trips
//! (same route, same direction) carrying different labels are merged to one
//! canonical label through the route's equivalence classes.

mod merge;

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::domain::{Direction, RouteId, TransformError};
use crate::feed::{NormalizedTrip, TripRecord};
use crate::normalize::clean_route_headsign;

pub use merge::{EquivalenceClass, MergeTable, Merged};

/// A cleaned headsign label.
///
/// Computed once per trip; overwritten at most once, by the merge step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedHeadsign {
    value: String,
    merged: bool,
}

impl NormalizedHeadsign {
    fn new(value: String) -> Self {
        Self {
            value,
            merged: false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// True once the merge step has rewritten this label.
    pub fn is_merged(&self) -> bool {
        self.merged
    }

    fn merge_into(&mut self, canonical: &str) {
        debug_assert!(!self.merged, "headsign merged twice");
        self.value = canonical.to_string();
        self.merged = true;
    }
}

/// A trip with its direction and normalized headsign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedTrip {
    pub trip_id: String,
    pub route_id: RouteId,
    pub service_id: String,
    pub direction: Direction,
    /// Headsign text exactly as the feed had it.
    pub raw_headsign: String,
    pub headsign: NormalizedHeadsign,
}

impl AssignedTrip {
    /// Take the direction and headsign from the feed and normalize the text.
    ///
    /// `route_short_name` is the short name of the trip's route; its number
    /// echoed at the start of the headsign is dropped.
    pub fn assign(trip: &TripRecord, route_id: RouteId, route_short_name: &str) -> Self {
        let raw_headsign = trip.trip_headsign.clone().unwrap_or_default();
        let direction = Direction::from_flag(trip.direction_id);
        let headsign = NormalizedHeadsign::new(clean_route_headsign(&raw_headsign, route_short_name));
        trace!(
            trip_id = %trip.trip_id,
            raw = %raw_headsign,
            headsign = headsign.as_str(),
            "assigned headsign"
        );

        Self {
            trip_id: trip.trip_id.clone(),
            route_id,
            service_id: trip.service_id.clone(),
            direction,
            raw_headsign,
            headsign,
        }
    }

    pub fn into_normalized(self) -> NormalizedTrip {
        NormalizedTrip {
            trip_id: self.trip_id,
            route_id: self.route_id,
            direction: self.direction,
            service_id: self.service_id,
            headsign: self.headsign.value,
        }
    }
}

/// Collapse sibling trips with different labels onto one canonical label.
///
/// Siblings share a route and a direction. Their distinct labels are resolved
/// together through [`MergeTable::merge_group`], so the result does not depend
/// on trip order; a group no canonical label covers aborts with
/// [`TransformError::UnexpectedMergeInput`].
pub fn merge_siblings(trips: &mut [AssignedTrip], merges: &MergeTable) -> Result<(), TransformError> {
    let mut groups: BTreeMap<(RouteId, Direction), Vec<usize>> = BTreeMap::new();
    for (idx, trip) in trips.iter().enumerate() {
        groups
            .entry((trip.route_id, trip.direction))
            .or_default()
            .push(idx);
    }

    for ((route_id, direction), members) in groups {
        // Distinct labels in first-seen order, with the first trip carrying each
        let mut distinct: Vec<(&str, &str)> = Vec::new();
        for &idx in &members {
            let trip = &trips[idx];
            if !distinct.iter().any(|(_, h)| *h == trip.headsign.as_str()) {
                distinct.push((trip.trip_id.as_str(), trip.headsign.as_str()));
            }
        }

        let Some((&first, rest)) = distinct.split_first() else {
            continue;
        };
        if rest.is_empty() {
            continue;
        }

        let canonical = merges.merge_group(route_id, first, rest)?.to_string();

        debug!(
            %route_id,
            %direction,
            variants = distinct.len(),
            canonical = %canonical,
            "merged headsign variants"
        );

        for idx in members {
            let headsign = &mut trips[idx].headsign;
            if headsign.as_str() != canonical {
                headsign.merge_into(&canonical);
            }
        }
    }

    Ok(())
}
