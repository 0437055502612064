//! Record inclusion rules.
//!
//! Decides which agencies, routes, trips and calendar entries belong to
//! Niagara Region Transit. The set of useful service IDs is computed
//! upstream and handed in at construction; it is never mutated here.

mod config;

use std::collections::HashSet;

use tracing::trace;

use crate::feed::{AgencyRecord, CalendarDateRecord, CalendarRecord, RouteRecord, TripRecord};
use crate::resolve::is_digits_only;

pub use config::FilterConfig;

/// Service IDs referenced by in-scope, currently active trips.
///
/// `None` disables service filtering. An empty set rejects everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsefulServiceIds(Option<HashSet<String>>);

impl UsefulServiceIds {
    /// No service filtering.
    pub fn unrestricted() -> Self {
        UsefulServiceIds(None)
    }

    /// Restrict to the given service IDs.
    pub fn only<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        UsefulServiceIds(Some(ids.into_iter().map(Into::into).collect()))
    }

    pub fn is_useful(&self, service_id: &str) -> bool {
        match &self.0 {
            Some(ids) => ids.contains(service_id),
            None => true,
        }
    }

    /// True when a set was supplied and it is empty.
    pub fn excludes_all(&self) -> bool {
        self.0.as_ref().is_some_and(HashSet::is_empty)
    }
}

/// The inclusion rules for one transform run.
#[derive(Debug, Clone)]
pub struct FeedFilter {
    config: FilterConfig,
    services: UsefulServiceIds,
}

impl FeedFilter {
    pub fn new(config: FilterConfig, services: UsefulServiceIds) -> Self {
        Self { config, services }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// True when the run must produce no records at all.
    pub fn excluding_all(&self) -> bool {
        self.services.excludes_all()
    }

    pub fn is_useful(&self, service_id: &str) -> bool {
        self.services.is_useful(service_id)
    }

    fn matches_agency(&self, agency_id: &str) -> bool {
        self.config
            .agency_markers
            .iter()
            .any(|marker| agency_id.contains(marker.as_str()))
    }

    /// Route inclusion, first matching rule wins:
    /// 1. the agency must match one of the configured markers;
    /// 2. on the aggregated multi-agency feed, the short name must be a
    ///    number no greater than the threshold;
    /// 3. foreign-operator route prefixes are rejected.
    pub fn include(&self, agency_id: &str, route_id: &str, short_name: &str) -> bool {
        if !self.matches_agency(agency_id) {
            trace!(agency_id, route_id, "excluded route: foreign agency");
            return false;
        }

        if agency_id.contains(self.config.aggregated_feed_marker.as_str()) {
            let within_threshold = is_digits_only(short_name)
                && short_name
                    .parse::<u32>()
                    .is_ok_and(|n| n <= self.config.max_aggregated_route_number);
            if !within_threshold {
                trace!(route_id, short_name, "excluded route: sibling agency on shared feed");
                return false;
            }
        }

        if self
            .config
            .excluded_route_prefixes
            .iter()
            .any(|prefix| route_id.starts_with(prefix.as_str()))
        {
            trace!(route_id, "excluded route: foreign operator prefix");
            return false;
        }

        true
    }

    pub fn include_agency(&self, agency: &AgencyRecord) -> bool {
        !self.excluding_all() && self.matches_agency(&agency.agency_id)
    }

    pub fn include_route(&self, route: &RouteRecord) -> bool {
        !self.excluding_all()
            && self.include(&route.agency_id, &route.route_id, &route.route_short_name)
    }

    pub fn include_calendar(&self, calendar: &CalendarRecord) -> bool {
        self.is_useful(&calendar.service_id)
    }

    pub fn include_calendar_date(&self, date: &CalendarDateRecord) -> bool {
        self.is_useful(&date.service_id)
    }

    /// Trip service filtering only; the caller also drops trips whose route
    /// was excluded.
    pub fn include_trip(&self, trip: &TripRecord) -> bool {
        self.is_useful(&trip.service_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> FeedFilter {
        FeedFilter::new(FilterConfig::default(), UsefulServiceIds::unrestricted())
    }

    fn calendar(service_id: &str) -> CalendarRecord {
        CalendarRecord {
            service_id: service_id.to_string(),
            monday: 1,
            tuesday: 1,
            wednesday: 1,
            thursday: 1,
            friday: 1,
            saturday: 0,
            sunday: 0,
            start_date: "20240101".to_string(),
            end_date: "20241231".to_string(),
        }
    }

    fn trip(service_id: &str) -> TripRecord {
        TripRecord {
            trip_id: "t1".to_string(),
            route_id: "NRT-40".to_string(),
            service_id: service_id.to_string(),
            trip_headsign: None,
            direction_id: None,
        }
    }

    #[test]
    fn agency_must_match_a_marker() {
        let f = filter();
        assert!(f.include("Niagara Region Transit", "NRT-40", "40"));
        assert!(!f.include("St. Catharines Transit", "NRT-40", "40"));
        assert!(!f.include("", "NRT-40", "40"));
    }

    #[test]
    fn aggregated_feed_keeps_low_numeric_routes() {
        let f = filter();
        assert!(f.include("AllNRT_NRT", "NRT-40", "40"));
        assert!(f.include("AllNRT_NRT", "NRT-100", "100"));
        assert!(!f.include("AllNRT_NRT", "WT-101", "101"));
        assert!(!f.include("AllNRT_NRT", "NRT-45", "45A"));
        assert!(!f.include("AllNRT_NRT", "NRT-X", ""));
    }

    #[test]
    fn standalone_feed_keeps_variant_routes() {
        let f = filter();
        assert!(f.include("Niagara Region Transit", "NRT-45", "45A"));
        assert!(f.include("Niagara Region Transit", "NRT-301", "301"));
    }

    #[test]
    fn foreign_operator_prefix_is_rejected() {
        let f = filter();
        assert!(!f.include("Niagara Region Transit", "STC_40", "40"));
        assert!(!f.include("AllNRT_NRT", "STC_12", "12"));
    }

    #[test]
    fn agency_records() {
        let f = filter();
        let nrt = AgencyRecord {
            agency_id: "AllNRT_NRT".to_string(),
            agency_name: "Niagara Region Transit".to_string(),
        };
        let other = AgencyRecord {
            agency_id: "AllNRT".to_string(),
            agency_name: "Welland Transit".to_string(),
        };
        assert!(f.include_agency(&nrt));
        assert!(!f.include_agency(&other));
    }

    #[test]
    fn unrestricted_services_keep_everything() {
        let f = filter();
        assert!(!f.excluding_all());
        assert!(f.include_calendar(&calendar("anything")));
        assert!(f.include_trip(&trip("anything")));
    }

    #[test]
    fn useful_services_filter_calendars_and_trips() {
        let f = FeedFilter::new(FilterConfig::default(), UsefulServiceIds::only(["WK"]));
        assert!(f.include_calendar(&calendar("WK")));
        assert!(!f.include_calendar(&calendar("SAT")));
        assert!(f.include_trip(&trip("WK")));
        assert!(!f.include_trip(&trip("SAT")));

        let date = CalendarDateRecord {
            service_id: "SAT".to_string(),
            date: "20240704".to_string(),
            exception_type: 2,
        };
        assert!(!f.include_calendar_date(&date));
    }

    #[test]
    fn empty_service_set_fails_closed() {
        let f = FeedFilter::new(FilterConfig::default(), UsefulServiceIds::only(Vec::<String>::new()));
        assert!(f.excluding_all());
        assert!(!f.include_calendar(&calendar("WK")));
        assert!(!f.include_trip(&trip("WK")));

        let route = RouteRecord {
            route_id: "NRT-40".to_string(),
            agency_id: "Niagara Region Transit".to_string(),
            route_short_name: "40".to_string(),
            route_long_name: String::new(),
        };
        assert!(!f.include_route(&route));
    }
}
