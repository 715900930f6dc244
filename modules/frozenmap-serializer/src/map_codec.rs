//! Generic mutable-map codec shared by every staged serializer.
//!
//! The wire format is exactly what this codec emits: staged serializers add no
//! framing, versioning or representation tags of their own.

use alloc::{string::ToString, vec::Vec};
use core::hash::Hash;

use hashbrown::HashMap;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::SerializationError;

/// Encodes the working copy with the standard wire configuration.
///
/// # Errors
///
/// Returns [`SerializationError::SerializationFailed`] if encoding fails.
pub fn encode_map<K, V>(working: &HashMap<K, V>) -> Result<Vec<u8>, SerializationError>
where
  K: Serialize + Eq + Hash,
  V: Serialize, {
  bincode::serde::encode_to_vec(working, bincode::config::standard().with_fixed_int_encoding())
    .map_err(|error| SerializationError::SerializationFailed(error.to_string()))
}

/// Decodes a working copy previously written by [`encode_map`].
///
/// # Errors
///
/// Returns [`SerializationError::DeserializationFailed`] if the byte source is
/// malformed or does not describe a map of the requested element types.
pub fn decode_map<K, V>(bytes: &[u8]) -> Result<HashMap<K, V>, SerializationError>
where
  K: DeserializeOwned + Eq + Hash,
  V: DeserializeOwned, {
  bincode::serde::decode_from_slice(bytes, bincode::config::standard().with_fixed_int_encoding())
    .map(|(working, _)| working)
    .map_err(|error| SerializationError::DeserializationFailed(error.to_string()))
}
