//! Mutable mapping state shared between the mapper and its policy.

use crate::datatype::{Datatype, TypeRegistry};
use crate::ledger::InvalidLedger;
use crate::table::MappingTable;
use tracing::debug;

/// Type registry, mapping table, and invalid ledger of one mapper.
///
/// Policies receive `&mut MappingState` and may only change it through
/// [`assign`](Self::assign) and [`record_invalid`](Self::record_invalid), which
/// keep the type flags and codebooks consistent.
#[derive(Clone, Debug, Default)]
pub struct MappingState {
    pub(crate) types: TypeRegistry,
    pub(crate) table: MappingTable,
    pub(crate) ledger: InvalidLedger,
}

impl MappingState {
    pub fn new(dimensionality: usize) -> Self {
        Self {
            types: TypeRegistry::new(dimensionality),
            table: MappingTable::new(),
            ledger: InvalidLedger::new(),
        }
    }

    /// Code for `token` in `dimension`, assigning the next free code if unseen.
    ///
    /// The first code assigned in a dimension marks it categorical.
    pub fn assign(&mut self, token: &str, dimension: usize) -> usize {
        let (code, inserted) = self.table.get_or_insert(token, dimension);
        if inserted {
            debug!(dimension, code, token, "assigned categorical code");
            if code == 0 {
                *self.types.get_mut(dimension) = Datatype::Categorical;
            }
        }
        code
    }

    /// Record `token` at (`dimension`, `row`) in the ledger and return the sentinel.
    pub fn record_invalid(&mut self, token: &str, dimension: usize, row: usize) -> f64 {
        debug!(dimension, row, token, "recorded invalid value");
        self.ledger.record(token, dimension, row)
    }

    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    pub fn table(&self) -> &MappingTable {
        &self.table
    }

    pub fn ledger(&self) -> &InvalidLedger {
        &self.ledger
    }
}
