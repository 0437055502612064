//! Trip direction type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned for a direction flag other than 0 or 1.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction flag {0}: must be 0 or 1")]
pub struct InvalidDirection(pub u8);

/// The GTFS `direction_id` of a trip.
///
/// Feeds that omit the flag are treated as [`Direction::Outbound`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Direction {
    /// `direction_id = 0`
    #[default]
    Outbound,
    /// `direction_id = 1`
    Inbound,
}

impl Direction {
    /// Resolve an optional feed flag, defaulting to outbound when absent.
    pub fn from_flag(flag: Option<Direction>) -> Self {
        flag.unwrap_or_default()
    }

    /// Returns the numeric GTFS flag.
    pub fn flag(self) -> u8 {
        match self {
            Direction::Outbound => 0,
            Direction::Inbound => 1,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = InvalidDirection;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::Outbound),
            1 => Ok(Direction::Inbound),
            other => Err(InvalidDirection(other)),
        }
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction.flag()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flag())
    }
}
