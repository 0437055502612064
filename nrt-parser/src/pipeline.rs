//! Whole-feed transform.
//!
//! Records pass through the filter first; in-scope routes and stops are
//! resolved and normalized, then trips get their headsigns and are merged
//! per route and direction. `run` stops at the first error, `audit` keeps
//! going and reports every error it finds.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info, trace, warn};

use crate::domain::{RouteId, StopId, TransformError};
use crate::feed::{Feed, NormalizedRoute, NormalizedStop, TransformOutput};
use crate::filter::FeedFilter;
use crate::headsign::{AssignedTrip, merge_siblings};
use crate::metadata::agency_metadata;
use crate::normalize::{clean_route_long_name, clean_stop_name};
use crate::resolve::{StopIdResolver, clean_original_stop_id, resolve_route_id, stop_code};
use crate::rules::RuleTables;

/// How errors are handled during a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    FailFast,
    Collect,
}

/// Error sink for one transform.
#[derive(Debug)]
struct Errors {
    mode: Mode,
    collected: Vec<TransformError>,
}

impl Errors {
    fn new(mode: Mode) -> Self {
        Self {
            mode,
            collected: Vec::new(),
        }
    }

    /// Pass a value through; on error either abort or record and skip.
    fn check<T>(&mut self, result: Result<T, TransformError>) -> Result<Option<T>, TransformError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(err) if self.mode == Mode::FailFast => Err(err),
            Err(err) => {
                warn!(error = %err, "transform error");
                self.collected.push(err);
                Ok(None)
            }
        }
    }
}

/// Applies the filter and rule tables to a feed.
#[derive(Debug, Clone)]
pub struct Transformer {
    filter: FeedFilter,
    rules: RuleTables,
}

impl Transformer {
    pub fn new(filter: FeedFilter, rules: RuleTables) -> Self {
        Self { filter, rules }
    }

    pub fn filter(&self) -> &FeedFilter {
        &self.filter
    }

    pub fn rules(&self) -> &RuleTables {
        &self.rules
    }

    /// Transform a feed, aborting on the first unresolvable record.
    pub fn run(&self, feed: &Feed) -> Result<TransformOutput, TransformError> {
        let mut errors = Errors::new(Mode::FailFast);
        self.transform(feed, &mut errors)
    }

    /// Transform a feed and report every error instead of stopping.
    ///
    /// Merge stops at the first failing route/direction group, so at most one
    /// merge error is reported.
    pub fn audit(&self, feed: &Feed) -> Vec<TransformError> {
        let mut errors = Errors::new(Mode::Collect);
        if let Err(err) = self.transform(feed, &mut errors) {
            // Collect mode never aborts, but keep the error if it ever does
            errors.collected.push(err);
        }
        errors.collected
    }

    fn transform(&self, feed: &Feed, errors: &mut Errors) -> Result<TransformOutput, TransformError> {
        let agency = agency_metadata();

        if self.filter.excluding_all() {
            warn!("useful service set is empty; excluding every record");
            return Ok(TransformOutput::empty(agency));
        }

        let agencies = feed
            .agencies
            .iter()
            .filter(|a| self.filter.include_agency(a))
            .cloned()
            .collect();

        let (routes, route_ids) = self.transform_routes(feed, errors)?;
        let stops = self.transform_stops(feed, errors)?;

        let mut trips = Vec::new();
        for trip in &feed.trips {
            let Some(&(route_id, short_name)) = route_ids.get(trip.route_id.as_str()) else {
                trace!(trip_id = %trip.trip_id, route = %trip.route_id, "excluded trip: route not in scope");
                continue;
            };
            if !self.filter.include_trip(trip) {
                trace!(trip_id = %trip.trip_id, service_id = %trip.service_id, "excluded trip: service not useful");
                continue;
            }
            trips.push(AssignedTrip::assign(trip, route_id, short_name));
        }
        errors.check(merge_siblings(&mut trips, &self.rules.merge_classes))?;

        let calendars = feed
            .calendars
            .iter()
            .filter(|c| self.filter.include_calendar(c))
            .cloned()
            .collect::<Vec<_>>();
        let calendar_dates = feed
            .calendar_dates
            .iter()
            .filter(|d| self.filter.include_calendar_date(d))
            .cloned()
            .collect::<Vec<_>>();

        info!(
            routes = routes.len(),
            stops = stops.len(),
            trips = trips.len(),
            calendars = calendars.len(),
            calendar_dates = calendar_dates.len(),
            "transformed feed"
        );

        Ok(TransformOutput {
            agency,
            agencies,
            routes,
            stops,
            trips: trips.into_iter().map(AssignedTrip::into_normalized).collect(),
            calendars,
            calendar_dates,
        })
    }

    /// In-scope routes sorted by ID, plus the source route ID → (route ID,
    /// short name) map used to attach trips.
    fn transform_routes<'f>(
        &self,
        feed: &'f Feed,
        errors: &mut Errors,
    ) -> Result<(Vec<NormalizedRoute>, HashMap<&'f str, (RouteId, &'f str)>), TransformError> {
        let mut by_id: BTreeMap<RouteId, NormalizedRoute> = BTreeMap::new();
        let mut route_ids = HashMap::new();

        for route in &feed.routes {
            if !self.filter.include_route(route) {
                continue;
            }

            let short_name = route.route_short_name.as_str();
            let Some(id) = errors.check(resolve_route_id(short_name, &route.route_id))? else {
                continue;
            };
            let Some(color) = errors.check(self.rules.route_colors.color_for(&route.route_id, short_name))?
            else {
                continue;
            };

            if let Some(existing) = by_id.get(&id) {
                let collision = TransformError::unresolved_route(
                    route.route_id.as_str(),
                    format!("route ID {id} already assigned to {:?}", existing.source_id),
                );
                errors.check(Err::<(), _>(collision))?;
                continue;
            }

            debug!(source = %route.route_id, %id, "resolved route");
            route_ids.insert(route.route_id.as_str(), (id, short_name));
            by_id.insert(
                id,
                NormalizedRoute {
                    id,
                    source_id: route.route_id.clone(),
                    short_name: route.route_short_name.clone(),
                    long_name: clean_route_long_name(&route.route_long_name),
                    color,
                },
            );
        }

        Ok((by_id.into_values().collect(), route_ids))
    }

    /// All stops, sorted by ID.
    fn transform_stops(&self, feed: &Feed, errors: &mut Errors) -> Result<Vec<NormalizedStop>, TransformError> {
        let resolver = StopIdResolver::new(&self.rules.legacy_stop_codes);
        let mut by_id: BTreeMap<StopId, NormalizedStop> = BTreeMap::new();

        for stop in &feed.stops {
            let Some(id) = errors.check(resolver.resolve(&stop.stop_id, stop.stop_code.as_deref()))? else {
                continue;
            };

            if let Some(existing) = by_id.get(&id) {
                let collision = TransformError::unresolved_stop(
                    stop.stop_id.as_str(),
                    format!("stop ID {id} already assigned to {:?}", existing.original_id),
                );
                errors.check(Err::<(), _>(collision))?;
                continue;
            }

            by_id.insert(
                id,
                NormalizedStop {
                    id,
                    original_id: clean_original_stop_id(&stop.stop_id),
                    name: clean_stop_name(&stop.stop_name),
                    code: stop_code(stop.stop_code.as_deref()),
                },
            );
        }

        Ok(by_id.into_values().collect())
    }
}
