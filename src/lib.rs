//! # dataset-mapper
//!
//! Per-dimension type inference and categorical encoding for tabular data.
//!
//! A loader hands raw textual tokens to a [`DatasetMapper`], one dimension
//! (column) at a time. The mapper decides whether the dimension is numeric or
//! categorical, gives each distinct categorical token a dense integer code,
//! and keeps invalid tokens (missing markers, numeric noise in categorical
//! columns) out of the code space in a separate ledger.
//!
//! ## Core Design Principles
//!
//! - **Dense, stable codes**: codes in a dimension are `0..n` in first-seen
//!   order, and token↔code lookups are exact in both directions.
//! - **Pluggable policies**: the [`MapPolicy`] chosen at construction decides
//!   what happens to each routed token ([`AssignPolicy`], [`ValidatePolicy`]).
//! - **Build once, read many**: ingestion mutates; lookups and serialization
//!   only read.
//!
//! ## Quick Start
//!
//! ```rust
//! use dataset_mapper::{DatasetMapper, Datatype};
//! use ndarray::Array1;
//!
//! let mut mapper = DatasetMapper::validating(["NA"], 1);
//! let mut row = Array1::zeros(3);
//! mapper.map_tokens(&["x", "NA", "y"], 0, row.view_mut()).unwrap();
//!
//! assert_eq!(row[0], 0.0);
//! assert!(row[1].is_nan());
//! assert_eq!(row[2], 1.0);
//! assert_eq!(mapper.datatype(0).unwrap(), Datatype::Categorical);
//! assert_eq!(mapper.count_invalid(0), 1);
//! ```
//!
//! ## Module Structure
//!
//! - `mapper` — the [`DatasetMapper`] orchestrating everything below
//! - `policy` — mapping policies
//! - `datatype` — per-dimension type flags
//! - `table` — bijective token/code codebooks
//! - `ledger` — invalid value ledger
//! - `tokens` — numeric parsing and majority classification
//! - `config` — mapper configuration
//! - `serialization` — byte-level persistence

/// Mapper configuration.
pub mod config;

/// Per-dimension datatype flags.
pub mod datatype;

pub mod error;

/// Invalid value ledger.
pub mod ledger;

/// The dataset mapper.
pub mod mapper;

/// Mapping policies.
pub mod policy;

/// Persistence of mapper state.
pub mod serialization;

pub mod state;

/// Token/code tables.
pub mod table;

pub mod tokens;

pub use config::{MapperConfig, PREDEFINED_MISSING};
pub use datatype::{Datatype, TypeRegistry};
pub use error::MappingError;
pub use ledger::{Coordinate, InvalidLedger, INVALID_SENTINEL};
pub use mapper::{DatasetMapper, DimensionSummary, DimensionTableParams, MapperParams};
pub use policy::{AssignPolicy, MapPolicy, TokenContext, ValidatePolicy};
pub use serialization::SerializableParams;
pub use state::MappingState;
pub use table::{CodeBook, MappingTable};
pub use tokens::BatchKind;
