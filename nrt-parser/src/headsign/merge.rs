//! Per-route headsign equivalence classes.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::{RouteId, TransformError};

/// A set of headsigns that all denote the same destination on one route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquivalenceClass {
    /// Label every member is rewritten to.
    pub canonical: String,
    pub members: BTreeSet<String>,
}

impl EquivalenceClass {
    pub fn new<I, S>(canonical: &str, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            canonical: canonical.to_string(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// True when both headsigns belong to this class.
    pub fn covers(&self, first: &str, second: &str) -> bool {
        self.members.contains(first) && self.members.contains(second)
    }

    /// A class must contain its own canonical label, otherwise a merged
    /// trip could not be merged again with a third variant.
    pub fn is_consistent(&self) -> bool {
        self.members.contains(&self.canonical)
    }
}

/// A merge outcome for one headsign pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Merged<'a> {
    pub canonical: &'a str,
}

/// Equivalence classes keyed by route ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MergeTable(BTreeMap<i64, Vec<EquivalenceClass>>);

impl MergeTable {
    /// An empty table: every merge attempt is unexpected.
    pub fn empty() -> Self {
        MergeTable(BTreeMap::new())
    }

    /// Register a class for a route.
    pub fn with_class(mut self, route_id: RouteId, class: EquivalenceClass) -> Self {
        self.0.entry(route_id.value()).or_default().push(class);
        self
    }

    /// Classes configured for a route.
    pub fn classes(&self, route_id: RouteId) -> &[EquivalenceClass] {
        self.0
            .get(&route_id.value())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All classes with their route keys.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &EquivalenceClass)> {
        self.0
            .iter()
            .flat_map(|(route, classes)| classes.iter().map(move |c| (*route, c)))
    }

    /// Decide the label two sibling headsigns collapse to.
    ///
    /// The pair must sit inside a single configured class for the route; the
    /// first matching class wins.
    pub fn merge(&self, route_id: RouteId, first: &str, second: &str) -> Option<Merged<'_>> {
        self.classes(route_id)
            .iter()
            .find(|class| class.covers(first, second))
            .map(|class| Merged {
                canonical: &class.canonical,
            })
    }

    /// Like [`MergeTable::merge`], but a miss is an [`TransformError::UnexpectedMergeInput`].
    pub fn merge_trips(
        &self,
        route_id: RouteId,
        first: (&str, &str),
        second: (&str, &str),
    ) -> Result<&str, TransformError> {
        self.merge(route_id, first.1, second.1)
            .map(|m| m.canonical)
            .ok_or_else(|| unexpected(route_id, first, second))
    }

    /// Decide the label a whole group of sibling headsigns collapses to.
    ///
    /// Labels are `(trip_id, headsign)` pairs. The first canonical label, in
    /// table order, that shares a class naming it canonical with every label
    /// of the group wins. The outcome depends only on the set of labels,
    /// never on their order. When no canonical label fits, the error names
    /// `first` and the first sibling it cannot be merged with.
    pub fn merge_group(
        &self,
        route_id: RouteId,
        first: (&str, &str),
        rest: &[(&str, &str)],
    ) -> Result<&str, TransformError> {
        let classes = self.classes(route_id);
        let fits = |canonical: &str, label: &str| {
            classes
                .iter()
                .any(|class| class.canonical == canonical && class.covers(label, canonical))
        };

        let target = classes.iter().map(|class| class.canonical.as_str()).find(|&canonical| {
            fits(canonical, first.1) && rest.iter().all(|&(_, label)| fits(canonical, label))
        });
        if let Some(canonical) = target {
            return Ok(canonical);
        }

        let second = rest
            .iter()
            .copied()
            .find(|&(_, label)| self.merge(route_id, first.1, label).is_none())
            .or_else(|| rest.first().copied())
            .unwrap_or(first);
        Err(unexpected(route_id, first, second))
    }
}

fn unexpected(
    route_id: RouteId,
    (first_trip, first): (&str, &str),
    (second_trip, second): (&str, &str),
) -> TransformError {
    TransformError::UnexpectedMergeInput {
        route_id,
        first_trip: first_trip.to_string(),
        first: first.to_string(),
        second_trip: second_trip.to_string(),
        second: second.to_string(),
    }
}

impl Default for MergeTable {
    fn default() -> Self {
        const ST_CATHARINES: &str = "St Catharines";
        const NIAGARA_FALLS: &str = "Niagara Falls";
        const WELLAND: &str = "Welland";

        MergeTable(BTreeMap::from([
            (
                40,
                vec![
                    EquivalenceClass::new(
                        ST_CATHARINES,
                        ["A Niagara College NOTL Campus", ST_CATHARINES],
                    ),
                    EquivalenceClass::new(
                        ST_CATHARINES,
                        ["A-NOTL Campus", "B-St Catharines", ST_CATHARINES],
                    ),
                ],
            ),
            (
                45,
                vec![EquivalenceClass::new(
                    NIAGARA_FALLS,
                    ["A Niagara Falls", "A-Niagara Falls", "B-NOTL Campus", NIAGARA_FALLS],
                )],
            ),
            (
                60,
                vec![EquivalenceClass::new(
                    WELLAND,
                    ["A Welland Campus", "Welland Campus", "Welland Bus Terminal", WELLAND],
                )],
            ),
            (
                65,
                vec![EquivalenceClass::new(
                    NIAGARA_FALLS,
                    ["A Niagara Falls", NIAGARA_FALLS],
                )],
            ),
        ]))
    }
}
