//! Domain types for the Niagara Region Transit feed transform.
//!
//! This module contains the validated values the transform produces.
//! All types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod color;
mod direction;
mod error;
mod ids;

pub use color::{InvalidRouteColor, RouteColor};
pub use direction::{Direction, InvalidDirection};
pub use error::{IdentifierKind, TransformError};
pub use ids::{RouteId, StopId};
