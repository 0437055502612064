//! Canonical numeric identifiers for routes and stops.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A canonical route identifier.
///
/// Route IDs are non-negative. Plain route numbers map to themselves
/// (route "40" is `RouteId(40)`), variant routes live above 10000.
///
/// # Examples
///
/// ```
/// use nrt_parser::domain::RouteId;
///
/// let id = RouteId::new(10045).unwrap();
/// assert_eq!(id.value(), 10045);
///
/// // Negative values are rejected
/// assert!(RouteId::new(-1).is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct RouteId(i64);

impl RouteId {
    /// Wrap a raw value, returning `None` if it is negative.
    pub fn new(value: i64) -> Option<Self> {
        (value >= 0).then_some(RouteId(value))
    }

    /// Returns the numeric value.
    pub fn value(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for RouteId {
    type Error = &'static str;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        RouteId::new(value).ok_or("route ID must be non-negative")
    }
}

impl From<RouteId> for i64 {
    fn from(id: RouteId) -> Self {
        id.0
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A canonical stop identifier.
///
/// Digit-derived stop IDs come straight from the feed. Legacy alphabetic
/// codes are mapped into reserved ranges (1xxxxx, 2xxxxx, 9xxxxxx) so they
/// cannot collide with real stop numbers.
///
/// # Examples
///
/// ```
/// use nrt_parser::domain::StopId;
///
/// let id = StopId::new(100_004).unwrap();
/// assert_eq!(id.to_string(), "100004");
/// assert!(StopId::new(-5).is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct StopId(i32);

impl StopId {
    /// Wrap a raw value, returning `None` if it is negative.
    pub fn new(value: i32) -> Option<Self> {
        (value >= 0).then_some(StopId(value))
    }

    /// Returns the numeric value.
    pub fn value(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for StopId {
    type Error = &'static str;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        StopId::new(value).ok_or("stop ID must be non-negative")
    }
}

impl From<StopId> for i32 {
    fn from(id: StopId) -> Self {
        id.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
