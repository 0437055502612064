//! Normalized records produced by the transform.

use serde::{Deserialize, Serialize};

use super::{AgencyRecord, CalendarDateRecord, CalendarRecord};
use crate::domain::{Direction, RouteColor, RouteId, StopId};

/// Agency-wide values carried on every output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgencyMetadata {
    pub color: RouteColor,
    /// GTFS route type; 3 is bus.
    pub route_type: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRoute {
    pub id: RouteId,
    pub source_id: String,
    pub short_name: String,
    pub long_name: String,
    pub color: RouteColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedStop {
    pub id: StopId,
    /// Source stop id with the structural prefix stripped.
    pub original_id: String,
    pub name: String,
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTrip {
    pub trip_id: String,
    pub route_id: RouteId,
    pub direction: Direction,
    pub service_id: String,
    pub headsign: String,
}

/// The full result of a transform run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformOutput {
    pub agency: AgencyMetadata,
    pub agencies: Vec<AgencyRecord>,
    pub routes: Vec<NormalizedRoute>,
    pub stops: Vec<NormalizedStop>,
    pub trips: Vec<NormalizedTrip>,
    pub calendars: Vec<CalendarRecord>,
    pub calendar_dates: Vec<CalendarDateRecord>,
}

impl TransformOutput {
    /// An output with no records, used when every record is excluded.
    pub fn empty(agency: AgencyMetadata) -> Self {
        Self {
            agency,
            agencies: Vec::new(),
            routes: Vec::new(),
            stops: Vec::new(),
            trips: Vec::new(),
            calendars: Vec::new(),
            calendar_dates: Vec::new(),
        }
    }
}
