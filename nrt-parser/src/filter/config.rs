//! Filter configuration.

/// Marker in agency IDs of the aggregated multi-agency feed.
const AGGREGATED_FEED_MARKER: &str = "AllNRT_";

/// Configuration for which feed records are in scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// An agency ID is in scope when it contains any of these.
    pub agency_markers: Vec<String>,

    /// Agency IDs containing this belong to the aggregated feed shared with
    /// sibling agencies.
    pub aggregated_feed_marker: String,

    /// On the aggregated feed, route numbers above this belong to sibling
    /// agencies.
    pub max_aggregated_route_number: u32,

    /// Route IDs starting with any of these belong to other operators.
    pub excluded_route_prefixes: Vec<String>,
}

impl FilterConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        agency_markers: Vec<String>,
        aggregated_feed_marker: impl Into<String>,
        max_aggregated_route_number: u32,
        excluded_route_prefixes: Vec<String>,
    ) -> Self {
        Self {
            agency_markers,
            aggregated_feed_marker: aggregated_feed_marker.into(),
            max_aggregated_route_number,
            excluded_route_prefixes,
        }
    }

    /// Add another foreign-operator route prefix.
    pub fn with_excluded_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.excluded_route_prefixes.push(prefix.into());
        self
    }

    /// Set a custom route-number threshold for the aggregated feed.
    pub fn with_max_aggregated_route_number(mut self, max: u32) -> Self {
        self.max_aggregated_route_number = max;
        self
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            agency_markers: vec![
                "Niagara Region Transit".to_string(),
                AGGREGATED_FEED_MARKER.to_string(),
            ],
            aggregated_feed_marker: AGGREGATED_FEED_MARKER.to_string(),
            max_aggregated_route_number: 100,
            // St. Catharines Transit Commission routes bundled in the feed
            excluded_route_prefixes: vec!["STC_".to_string()],
        }
    }
}
