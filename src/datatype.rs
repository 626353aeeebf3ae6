//! Per-dimension datatype flags.

use crate::error::MappingError;
use serde::{Deserialize, Serialize};

/// Kind of data held by one dimension of a dataset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Datatype {
    /// Values are used as parsed numbers.
    #[default]
    Numeric,
    /// Values are tokens replaced by dense integer codes.
    Categorical,
}

/// Ordered per-dimension type flags.
///
/// The registry only ever grows: read-only lookups past the end fail, while
/// mutable lookups past the end extend it with [`Datatype::Numeric`] slots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRegistry {
    types: Vec<Datatype>,
}

impl TypeRegistry {
    /// Create a registry with `dimensionality` numeric dimensions.
    pub fn new(dimensionality: usize) -> Self {
        Self {
            types: vec![Datatype::Numeric; dimensionality],
        }
    }

    pub fn from_vec(types: Vec<Datatype>) -> Self {
        Self { types }
    }

    /// Type of `dimension`, or an error if the registry does not cover it.
    pub fn get(&self, dimension: usize) -> Result<Datatype, MappingError> {
        self.types
            .get(dimension)
            .copied()
            .ok_or(MappingError::DimensionOutOfRange {
                dimension,
                dimensionality: self.types.len(),
            })
    }

    /// Mutable type of `dimension`, growing the registry if needed.
    pub fn get_mut(&mut self, dimension: usize) -> &mut Datatype {
        self.ensure(dimension);
        &mut self.types[dimension]
    }

    /// Grow the registry so that it covers `dimension`.
    pub fn ensure(&mut self, dimension: usize) {
        if dimension >= self.types.len() {
            self.types.resize(dimension + 1, Datatype::Numeric);
        }
    }

    pub fn is_categorical(&self, dimension: usize) -> bool {
        matches!(self.types.get(dimension), Some(Datatype::Categorical))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn as_slice(&self) -> &[Datatype] {
        &self.types
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_numeric() {
        assert_eq!(Datatype::default(), Datatype::Numeric);
        let registry = TypeRegistry::new(3);
        assert_eq!(registry.len(), 3);
        assert!(registry.as_slice().iter().all(|&t| t == Datatype::Numeric));
    }

    #[test]
    fn test_get_out_of_range() {
        let registry = TypeRegistry::new(2);
        let err = registry.get(2).unwrap_err();
        assert!(matches!(
            err,
            MappingError::DimensionOutOfRange {
                dimension: 2,
                dimensionality: 2
            }
        ));
    }

    #[test]
    fn test_get_mut_grows() {
        let mut registry = TypeRegistry::new(1);
        *registry.get_mut(4) = Datatype::Categorical;
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.get(3).unwrap(), Datatype::Numeric);
        assert_eq!(registry.get(4).unwrap(), Datatype::Categorical);
        assert!(registry.is_categorical(4));
        assert!(!registry.is_categorical(9));
    }

    #[test]
    fn test_get_mut_in_range_does_not_grow() {
        let mut registry = TypeRegistry::new(3);
        *registry.get_mut(1) = Datatype::Categorical;
        assert_eq!(registry.len(), 3);
    }
}
