//! Byte-level persistence of mapper state.
//!
//! A mapper persists as [`MapperParams`](crate::MapperParams): the ordered
//! per-dimension type flags and, for every categorical dimension, its
//! `(token, code)` pairs in code order. The invalid ledger and the missing set
//! are ingestion-time state and are never written. Decoding only restores the
//! plain params; [`DatasetMapper::from_params`](crate::DatasetMapper::from_params)
//! then checks that each dimension's codes run contiguously from zero.

use std::error::Error;

/// Plain-data state that round-trips through a byte buffer.
///
/// Every `serde` type gets a bincode-backed implementation, so
/// `from_bytes(to_bytes(params)) == params` for mapper params.
pub trait SerializableParams: Sized {
    /// The error type returned during (de)serialization.
    type Error: Error + Send + Sync + 'static;

    /// Encode the params.
    fn to_bytes(&self) -> Result<Vec<u8>, Self::Error>;

    /// Decode params; fails on truncated or malformed input.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error>;
}

impl<T> SerializableParams for T
where
    T: serde::Serialize + for<'de> serde::Deserialize<'de>,
{
    type Error = bincode::Error;

    fn to_bytes(&self) -> Result<Vec<u8>, Self::Error> {
        bincode::serialize(self)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error> {
        bincode::deserialize(bytes)
    }
}
