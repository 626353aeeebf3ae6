//! Dataset mapper: per-dimension type inference and categorical encoding.
//!
//! The mapper is handed the raw tokens of one dimension at a time and writes
//! one `f64` per token into a caller-owned row. Numeric dimensions keep their
//! parsed values, categorical tokens are replaced by dense codes, and invalid
//! tokens become [`INVALID_SENTINEL`](crate::INVALID_SENTINEL) with their
//! coordinates kept in the ledger.
//!
//! # Example
//! ```
//! use dataset_mapper::{DatasetMapper, Datatype};
//!
//! let mut mapper = DatasetMapper::new(2);
//! let data = mapper
//!     .map_dimensions(&[vec!["red", "blue", "red"], vec!["1.5", "2.0", "3.0"]])
//!     .unwrap();
//!
//! assert_eq!(data[[0, 2]], 0.0);
//! assert_eq!(data[[1, 1]], 2.0);
//! assert_eq!(mapper.datatype(0).unwrap(), Datatype::Categorical);
//! assert_eq!(mapper.unmap_token(1, 0).unwrap(), "blue");
//! ```

use crate::config::MapperConfig;
use crate::datatype::{Datatype, TypeRegistry};
use crate::error::MappingError;
use crate::ledger::{Coordinate, InvalidLedger};
use crate::policy::{AssignPolicy, MapPolicy, TokenContext, ValidatePolicy};
use crate::serialization::SerializableParams;
use crate::state::MappingState;
use crate::table::{CodeBook, MappingTable};
use crate::tokens::{classify, looks_numeric, parse_numeric, BatchKind};
use ndarray::{Array2, ArrayViewMut1};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Persisted `(token, code)` pairs of one dimension, in code order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionTableParams {
    pub dimension: usize,
    pub mappings: Vec<(String, usize)>,
}

/// Serializable state of a mapper: type flags and codebooks.
///
/// The invalid ledger and the missing set are not part of it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapperParams {
    /// Type of every dimension, in dimension order.
    pub types: Vec<Datatype>,
    /// Codebooks in ascending dimension order.
    pub tables: Vec<DimensionTableParams>,
}

/// Per-dimension overview of an ingestion pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DimensionSummary {
    pub dimension: usize,
    pub datatype: Datatype,
    pub mappings: usize,
    pub invalid: usize,
}

/// Maps raw dataset tokens to numbers, one dimension at a time.
///
/// The policy `P` is fixed at construction and decides how each routed token
/// is mapped; see [`AssignPolicy`] and [`ValidatePolicy`].
#[derive(Clone, Debug)]
pub struct DatasetMapper<P: MapPolicy = AssignPolicy> {
    state: MappingState,
    missing_set: BTreeSet<String>,
    policy: P,
}

impl DatasetMapper<AssignPolicy> {
    /// Create a mapper with the assigning policy and `dimensionality`
    /// numeric dimensions.
    pub fn new(dimensionality: usize) -> Self {
        Self::with_policy(AssignPolicy, dimensionality)
    }
}

impl Default for DatasetMapper<AssignPolicy> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl DatasetMapper<ValidatePolicy> {
    /// Create a validating mapper that records every token of `missing` as
    /// invalid.
    pub fn validating<I, S>(missing: I, dimensionality: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_policy(ValidatePolicy, dimensionality).with_missing_set(missing)
    }
}

impl<P: MapPolicy> DatasetMapper<P> {
    pub fn with_policy(policy: P, dimensionality: usize) -> Self {
        Self {
            state: MappingState::new(dimensionality),
            missing_set: BTreeSet::new(),
            policy,
        }
    }

    /// Build the mapper and its policy from configuration.
    pub fn from_config(config: &MapperConfig) -> Self {
        Self::with_policy(P::from_config(config), config.dimensionality)
            .with_missing_set(config.missing_values.iter().cloned())
    }

    /// Add tokens that are always recorded as invalid.
    ///
    /// The mapper's missing set is the only one; policies see membership as
    /// [`TokenContext::force_invalid`], and replacing the policy keeps it.
    pub fn with_missing_set<I, S>(mut self, missing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.missing_set.extend(missing.into_iter().map(Into::into));
        self
    }

    /// Add a missing marker. Returns false if it was already present.
    pub fn insert_missing(&mut self, token: impl Into<String>) -> bool {
        self.missing_set.insert(token.into())
    }

    pub fn missing_set(&self) -> &BTreeSet<String> {
        &self.missing_set
    }

    /// Return the code of `token` in `dimension`, assigning one if needed.
    ///
    /// This bypasses the policy and the missing set.
    pub fn map_token(&mut self, token: &str, dimension: usize) -> usize {
        self.state.assign(token, dimension)
    }

    /// Route a single token through the active policy.
    ///
    /// Missing markers are forced invalid. The token counts as part of a
    /// categorical batch when `dimension` is already categorical.
    pub fn resolve(&mut self, token: &str, dimension: usize, row: usize) -> f64 {
        let context = TokenContext {
            force_invalid: self.missing_set.contains(token),
            looks_numeric: looks_numeric(token),
            categorical_batch: self.state.types.is_categorical(dimension),
            numeric_batch: false,
        };
        self.policy
            .resolve(&mut self.state, token, dimension, row, context)
    }

    /// Map every token of `dimension` into `out`, one value per token.
    ///
    /// The batch is classified by majority vote first. In a categorical batch
    /// every token goes through the policy. In a numeric batch only tokens
    /// that fail to parse, or are missing markers, do; the rest are written
    /// as parsed. Classification is redone on each call.
    pub fn map_tokens<S: AsRef<str>>(
        &mut self,
        tokens: &[S],
        dimension: usize,
        mut out: ArrayViewMut1<'_, f64>,
    ) -> Result<BatchKind, MappingError> {
        if out.len() != tokens.len() {
            return Err(MappingError::ShapeMismatch {
                expected: tokens.len(),
                got: out.len(),
            });
        }
        self.state.types.ensure(dimension);

        let kind = classify(tokens);
        debug!(dimension, tokens = tokens.len(), kind = ?kind, "classified batch");

        for (row, (token, slot)) in tokens.iter().zip(out.iter_mut()).enumerate() {
            let token = token.as_ref();
            let missing = self.missing_set.contains(token);
            let parsed = parse_numeric(token);

            *slot = match (kind, parsed) {
                (BatchKind::Numeric, Some(value)) if !missing => value,
                (BatchKind::Numeric, _) => {
                    let context = TokenContext {
                        force_invalid: missing,
                        looks_numeric: parsed.is_some(),
                        categorical_batch: false,
                        numeric_batch: true,
                    };
                    self.policy
                        .resolve(&mut self.state, token, dimension, row, context)
                }
                (BatchKind::Categorical, _) => {
                    let context = TokenContext {
                        force_invalid: missing,
                        looks_numeric: parsed.is_some(),
                        categorical_batch: true,
                        numeric_batch: false,
                    };
                    self.policy
                        .resolve(&mut self.state, token, dimension, row, context)
                }
            };
        }
        Ok(kind)
    }

    /// Map a whole dataset given as one token list per dimension.
    ///
    /// Returns a `(dimensions, points)` matrix. All dimensions must have the
    /// same number of points.
    pub fn map_dimensions<S: AsRef<str>>(
        &mut self,
        dimensions: &[Vec<S>],
    ) -> Result<Array2<f64>, MappingError> {
        let points = dimensions.first().map_or(0, Vec::len);
        if let Some(ragged) = dimensions.iter().find(|d| d.len() != points) {
            return Err(MappingError::ShapeMismatch {
                expected: points,
                got: ragged.len(),
            });
        }

        let mut matrix = Array2::zeros((dimensions.len(), points));
        for (dimension, tokens) in dimensions.iter().enumerate() {
            self.map_tokens(tokens, dimension, matrix.row_mut(dimension))?;
        }
        Ok(matrix)
    }

    /// Token assigned `code` in `dimension`.
    pub fn unmap_token(&self, code: usize, dimension: usize) -> Result<&str, MappingError> {
        self.state.table.unmap_token(code, dimension)
    }

    /// Code assigned to `token` in `dimension`.
    pub fn unmap_value(&self, token: &str, dimension: usize) -> Result<usize, MappingError> {
        self.state.table.unmap_value(token, dimension)
    }

    /// Type of `dimension`; fails if the mapper does not know the dimension.
    pub fn datatype(&self, dimension: usize) -> Result<Datatype, MappingError> {
        self.state.types.get(dimension)
    }

    /// Modify the type of `dimension` (be careful!).
    ///
    /// Out-of-range dimensions grow the mapper, filling new slots as numeric.
    pub fn datatype_mut(&mut self, dimension: usize) -> &mut Datatype {
        self.state.types.get_mut(dimension)
    }

    /// Number of codes in `dimension`; 0 for numeric dimensions.
    pub fn count_mappings(&self, dimension: usize) -> usize {
        self.state.table.count(dimension)
    }

    pub fn dimensionality(&self) -> usize {
        self.state.types.len()
    }

    /// Number of invalid occurrences recorded in `dimension`.
    pub fn count_invalid(&self, dimension: usize) -> usize {
        self.state.ledger.count(dimension)
    }

    pub fn invalid_coordinates(
        &self,
        token: &str,
        dimension: usize,
    ) -> Option<&BTreeSet<Coordinate>> {
        self.state.ledger.coordinates(token, dimension)
    }

    pub fn ledger(&self) -> &InvalidLedger {
        &self.state.ledger
    }

    pub fn summary(&self) -> Vec<DimensionSummary> {
        self.state
            .types
            .as_slice()
            .iter()
            .enumerate()
            .map(|(dimension, &datatype)| DimensionSummary {
                dimension,
                datatype,
                mappings: self.count_mappings(dimension),
                invalid: self.count_invalid(dimension),
            })
            .collect()
    }

    /// Dimensions with at least one code or ledger entry.
    pub fn dirty_dimensions(&self) -> Vec<usize> {
        let mut dirty: BTreeSet<usize> = self.state.table.iter().map(|(d, _)| d).collect();
        dirty.extend(self.state.ledger.dimensions());
        dirty.into_iter().collect()
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Modify the policy of the mapper (be careful!).
    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    pub fn set_policy(&mut self, policy: P) {
        self.policy = policy;
    }

    /// Extract the persisted state.
    pub fn extract_params(&self) -> MapperParams {
        MapperParams {
            types: self.state.types.as_slice().to_vec(),
            tables: self
                .state
                .table
                .iter()
                .map(|(dimension, book)| DimensionTableParams {
                    dimension,
                    mappings: book
                        .iter()
                        .map(|(token, code)| (token.to_string(), code))
                        .collect(),
                })
                .collect(),
        }
    }

    /// Rebuild a mapper from persisted state with the given policy.
    ///
    /// Rejects codebooks whose codes are not contiguous from zero, repeated
    /// tokens or dimensions, empty codebooks, and codebooks for dimensions
    /// outside `types`.
    pub fn from_params_with_policy(params: MapperParams, policy: P) -> Result<Self, MappingError> {
        let types = TypeRegistry::from_vec(params.types);
        let mut table = MappingTable::new();

        for entry in &params.tables {
            if entry.dimension >= types.len() {
                return Err(MappingError::InvalidParams(format!(
                    "table for dimension {} but only {} dimensions",
                    entry.dimension,
                    types.len()
                )));
            }
            if table.book(entry.dimension).is_some() {
                return Err(MappingError::InvalidParams(format!(
                    "dimension {} has more than one table",
                    entry.dimension
                )));
            }
            if entry.mappings.is_empty() {
                return Err(MappingError::InvalidParams(format!(
                    "empty table for dimension {}",
                    entry.dimension
                )));
            }
            table.insert_book(entry.dimension, CodeBook::from_pairs(&entry.mappings)?);
        }

        Ok(Self {
            state: MappingState {
                types,
                table,
                ledger: InvalidLedger::new(),
            },
            missing_set: BTreeSet::new(),
            policy,
        })
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, MappingError> {
        Ok(self.extract_params().to_bytes()?)
    }

    pub fn from_bytes_with_policy(bytes: &[u8], policy: P) -> Result<Self, MappingError> {
        let params = MapperParams::from_bytes(bytes)?;
        Self::from_params_with_policy(params, policy)
    }

    /// Save to file.
    pub fn save_to_file<Q: AsRef<std::path::Path>>(&self, path: Q) -> std::io::Result<()> {
        let params = self.extract_params();
        let bytes = params.to_bytes().map_err(std::io::Error::other)?;
        std::fs::write(path, bytes)
    }
}

impl<P: MapPolicy + Default> DatasetMapper<P> {
    /// Rebuild a mapper from persisted state with a default policy.
    pub fn from_params(params: MapperParams) -> Result<Self, MappingError> {
        Self::from_params_with_policy(params, P::default())
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MappingError> {
        Self::from_bytes_with_policy(bytes, P::default())
    }

    /// Load from file.
    pub fn load_from_file<Q: AsRef<std::path::Path>>(path: Q) -> Result<Self, MappingError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }
}
