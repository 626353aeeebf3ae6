//! Mapper configuration.

use crate::error::MappingError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Markers treated as missing by [`MapperConfig::with_predefined_missing`].
pub const PREDEFINED_MISSING: [&str; 5] = ["nan", "NaN", "null", "Null", "NULL"];

/// Configuration for a [`DatasetMapper`](crate::DatasetMapper).
///
/// # Example
/// ```
/// use dataset_mapper::MapperConfig;
///
/// let config = MapperConfig::new()
///     .with_dimensionality(3)
///     .with_missing_value("NA")
///     .with_predefined_missing();
/// assert!(config.missing_values.contains("NULL"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Number of dimensions known up front.
    pub dimensionality: usize,
    /// Tokens that are always recorded as invalid.
    pub missing_values: BTreeSet<String>,
}

impl MapperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dimensionality(mut self, dimensionality: usize) -> Self {
        self.dimensionality = dimensionality;
        self
    }

    pub fn with_missing_value(mut self, token: impl Into<String>) -> Self {
        self.missing_values.insert(token.into());
        self
    }

    pub fn with_missing_values<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.missing_values.extend(tokens.into_iter().map(Into::into));
        self
    }

    /// Add the usual spellings of missing markers (`nan`, `NULL`, ...).
    pub fn with_predefined_missing(self) -> Self {
        self.with_missing_values(PREDEFINED_MISSING)
    }

    pub fn from_json(json: &str) -> Result<Self, MappingError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, MappingError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
