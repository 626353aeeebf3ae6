//! Side ledger for tokens that must not enter the categorical code space.
//!
//! Each dimension keeps, for every invalid token, the full set of coordinates
//! where it was seen, plus a running count of recorded occurrences. The
//! ledger is diagnostic state for the current ingestion pass and is never
//! persisted.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Value written into the output matrix for every invalid cell.
pub const INVALID_SENTINEL: f64 = f64::NAN;

/// Position of a single cell in the dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Coordinate {
    pub dimension: usize,
    pub row: usize,
}

impl Coordinate {
    pub fn new(dimension: usize, row: usize) -> Self {
        Self { dimension, row }
    }
}

#[derive(Clone, Debug, Default)]
struct DimensionEntries {
    by_token: BTreeMap<String, BTreeSet<Coordinate>>,
    occurrences: usize,
}

/// Invalid tokens per dimension with their coordinates.
#[derive(Clone, Debug, Default)]
pub struct InvalidLedger {
    dimensions: BTreeMap<usize, DimensionEntries>,
}

impl InvalidLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `token` as invalid at (`dimension`, `row`).
    ///
    /// Never fails. Returns [`INVALID_SENTINEL`] for the caller to store in
    /// the output slot.
    pub fn record(&mut self, token: &str, dimension: usize, row: usize) -> f64 {
        let entries = self.dimensions.entry(dimension).or_default();
        entries
            .by_token
            .entry(token.to_string())
            .or_default()
            .insert(Coordinate::new(dimension, row));
        entries.occurrences += 1;
        INVALID_SENTINEL
    }

    /// Number of invalid occurrences recorded for `dimension`.
    pub fn count(&self, dimension: usize) -> usize {
        self.dimensions
            .get(&dimension)
            .map_or(0, |entries| entries.occurrences)
    }

    /// All coordinates where `token` was recorded in `dimension`.
    pub fn coordinates(&self, token: &str, dimension: usize) -> Option<&BTreeSet<Coordinate>> {
        self.dimensions
            .get(&dimension)
            .and_then(|entries| entries.by_token.get(token))
    }

    pub fn contains(&self, token: &str, dimension: usize) -> bool {
        self.coordinates(token, dimension).is_some()
    }

    /// Distinct invalid tokens recorded in `dimension`, in sorted order.
    pub fn tokens(&self, dimension: usize) -> impl Iterator<Item = &str> + '_ {
        self.dimensions
            .get(&dimension)
            .into_iter()
            .flat_map(|entries| entries.by_token.keys().map(String::as_str))
    }

    /// Iterate every `(token, coordinate)` pair, ordered by dimension then token.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Coordinate)> + '_ {
        self.dimensions.values().flat_map(|entries| {
            entries
                .by_token
                .iter()
                .flat_map(|(token, coords)| coords.iter().map(move |&c| (token.as_str(), c)))
        })
    }

    /// Dimensions with at least one recorded occurrence.
    pub fn dimensions(&self) -> impl Iterator<Item = usize> + '_ {
        self.dimensions.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }
}
