//! Plain categorical encoding.

use super::{MapPolicy, TokenContext};
use crate::config::MapperConfig;
use crate::state::MappingState;

/// Assigns dense codes in first-seen order.
///
/// Tokens are only recorded as invalid when the caller forces it; numeric
/// looking tokens in categorical dimensions are encoded like any other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AssignPolicy;

impl AssignPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl MapPolicy for AssignPolicy {
    fn resolve(
        &self,
        state: &mut MappingState,
        token: &str,
        dimension: usize,
        row: usize,
        context: TokenContext,
    ) -> f64 {
        if context.force_invalid {
            return state.record_invalid(token, dimension, row);
        }
        state.assign(token, dimension) as f64
    }

    fn from_config(_config: &MapperConfig) -> Self {
        Self
    }
}
