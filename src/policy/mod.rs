//! Mapping policies.
//!
//! A policy decides, for one token of one cell, whether it receives a
//! categorical code or is recorded in the invalid ledger.
//!
//! # Available Policies
//!
//! ## AssignPolicy
//! Plain categorical encoding. Every token that is not forced invalid is
//! assigned a code.
//!
//! ## ValidatePolicy
//! Records missing markers, numeric noise in categorical dimensions, and
//! unparseable tokens in numeric batches as invalid, and never changes a
//! dimension's type for them.
//!
//! Missing markers are owned by the mapper and reach the policy as
//! [`TokenContext::force_invalid`].

mod assign;
mod validate;

pub use assign::AssignPolicy;
pub use validate::ValidatePolicy;

use crate::config::MapperConfig;
use crate::state::MappingState;
use std::fmt::Debug;

/// Facts about a token gathered by the caller before resolving it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenContext {
    /// Route the token to the ledger regardless of table state.
    pub force_invalid: bool,
    /// The token parses as a finite number.
    pub looks_numeric: bool,
    /// The enclosing batch was classified as predominantly categorical.
    pub categorical_batch: bool,
    /// The enclosing batch was classified as predominantly numeric.
    pub numeric_batch: bool,
}

impl TokenContext {
    pub fn forced() -> Self {
        Self {
            force_invalid: true,
            ..Self::default()
        }
    }
}

/// Strategy used by a [`DatasetMapper`](crate::DatasetMapper) to map tokens.
pub trait MapPolicy: Clone + Debug {
    /// Map `token` found at (`dimension`, `row`) to the value stored in the
    /// output matrix: a categorical code, or the NaN sentinel for invalid
    /// tokens.
    fn resolve(
        &self,
        state: &mut MappingState,
        token: &str,
        dimension: usize,
        row: usize,
        context: TokenContext,
    ) -> f64;

    /// Build the policy from mapper configuration.
    fn from_config(config: &MapperConfig) -> Self;
}
