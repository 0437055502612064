//! Feed records.
//!
//! `Feed` is the already-parsed GTFS snapshot handed to the transform;
//! `TransformOutput` is what the transform produces. Field names follow the
//! GTFS column names.

mod output;

use serde::{Deserialize, Serialize};

use crate::domain::Direction;

pub use output::{AgencyMetadata, NormalizedRoute, NormalizedStop, NormalizedTrip, TransformOutput};

/// A parsed feed snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Feed {
    pub agencies: Vec<AgencyRecord>,
    pub routes: Vec<RouteRecord>,
    pub stops: Vec<StopRecord>,
    pub trips: Vec<TripRecord>,
    pub calendars: Vec<CalendarRecord>,
    pub calendar_dates: Vec<CalendarDateRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgencyRecord {
    pub agency_id: String,
    #[serde(default)]
    pub agency_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub route_id: String,
    #[serde(default)]
    pub agency_id: String,
    #[serde(default)]
    pub route_short_name: String,
    #[serde(default)]
    pub route_long_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopRecord {
    pub stop_id: String,
    #[serde(default)]
    pub stop_code: Option<String>,
    #[serde(default)]
    pub stop_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRecord {
    pub trip_id: String,
    pub route_id: String,
    pub service_id: String,
    #[serde(default)]
    pub trip_headsign: Option<String>,
    /// Absent in some feeds; treated as outbound.
    #[serde(default)]
    pub direction_id: Option<Direction>,
}

/// A `calendar.txt` row. Passed through untouched when its service is useful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarRecord {
    pub service_id: String,
    #[serde(default)]
    pub monday: u8,
    #[serde(default)]
    pub tuesday: u8,
    #[serde(default)]
    pub wednesday: u8,
    #[serde(default)]
    pub thursday: u8,
    #[serde(default)]
    pub friday: u8,
    #[serde(default)]
    pub saturday: u8,
    #[serde(default)]
    pub sunday: u8,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

/// A `calendar_dates.txt` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDateRecord {
    pub service_id: String,
    pub date: String,
    pub exception_type: u8,
}
