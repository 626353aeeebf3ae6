//! Encoding with missing-value validation.

use super::{MapPolicy, TokenContext};
use crate::config::MapperConfig;
use crate::state::MappingState;
use tracing::warn;

/// Records tokens that do not fit their dimension in the invalid ledger;
/// encodes everything else.
///
/// A token is invalid when the caller forces it (missing markers), when it
/// looks numeric in a categorical dimension, or when it fails to parse in a
/// predominantly numeric batch. Invalid tokens never change a dimension's type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidatePolicy;

impl ValidatePolicy {
    pub fn new() -> Self {
        Self
    }
}

impl MapPolicy for ValidatePolicy {
    fn resolve(
        &self,
        state: &mut MappingState,
        token: &str,
        dimension: usize,
        row: usize,
        context: TokenContext,
    ) -> f64 {
        if context.force_invalid {
            warn!(dimension, row, token, "invalid value");
            return state.record_invalid(token, dimension, row);
        }
        if context.numeric_batch && !context.looks_numeric {
            warn!(dimension, row, token, "non-numeric value in numeric dimension");
            return state.record_invalid(token, dimension, row);
        }
        let categorical = context.categorical_batch || state.types().is_categorical(dimension);
        if context.looks_numeric && categorical {
            warn!(dimension, row, token, "numeric value in categorical dimension");
            return state.record_invalid(token, dimension, row);
        }
        state.assign(token, dimension) as f64
    }

    fn from_config(_config: &MapperConfig) -> Self {
        Self
    }
}
