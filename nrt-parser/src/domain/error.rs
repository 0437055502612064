//! Transform error types.
//!
//! Every condition here is fatal for a transform run: a rule table has a gap
//! and must be updated. None of them is recovered from locally.

use std::fmt;

use super::RouteId;

/// Which kind of record failed identifier resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Route,
    Stop,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierKind::Route => f.write_str("route"),
            IdentifierKind::Stop => f.write_str("stop"),
        }
    }
}

/// Errors raised while transforming feed records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// A route or stop could not be mapped to a canonical numeric ID
    #[error("unresolved {kind} identifier {record:?}: {reason}")]
    UnresolvedIdentifier {
        kind: IdentifierKind,
        record: String,
        reason: String,
    },

    /// Two headsign variants on one route are not a configured equivalence
    #[error("unexpected trips to merge on route {route_id}: {first:?} ({first_trip}) & {second:?} ({second_trip})")]
    UnexpectedMergeInput {
        route_id: RouteId,
        first_trip: String,
        first: String,
        second_trip: String,
        second: String,
    },

    /// A route number has no configured color
    #[error("unmapped route color for route {short_name:?} ({route_id:?})")]
    UnmappedMetadata { route_id: String, short_name: String },
}

impl TransformError {
    pub(crate) fn unresolved_route(record: impl Into<String>, reason: impl Into<String>) -> Self {
        TransformError::UnresolvedIdentifier {
            kind: IdentifierKind::Route,
            record: record.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unresolved_stop(record: impl Into<String>, reason: impl Into<String>) -> Self {
        TransformError::UnresolvedIdentifier {
            kind: IdentifierKind::Stop,
            record: record.into(),
            reason: reason.into(),
        }
    }
}
