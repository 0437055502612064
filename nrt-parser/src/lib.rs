//! Niagara Region Transit feed transform.
//!
//! Takes an already-parsed GTFS snapshot and decides which records belong
//! to the agency, derives stable numeric route and stop IDs, cleans route,
//! stop and headsign labels, merges equivalent headsign variants and
//! attaches route colors.

pub mod domain;
pub mod feed;
pub mod filter;
pub mod headsign;
pub mod metadata;
pub mod normalize;
pub mod pipeline;
pub mod resolve;
pub mod rules;
