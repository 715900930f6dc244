//! Staged serializer adapting [`FrozenMap`] to the generic map codec.

use alloc::{boxed::Box, vec::Vec};
use core::{any::Any, hash::Hash, marker::PhantomData};

use hashbrown::HashMap;
use serde::{Serialize, de::DeserializeOwned};

use crate::{
  error::SerializationError, frozen_map::FrozenMap, map_codec, registry::BindingKey, serializer::TypeSerializer,
};

#[cfg(test)]
mod tests;

const DOES_NOT_ACCEPT_NIL: bool = true;
const VALUES_IMMUTABLE: bool = true;

/// Serializes [`FrozenMap`] by staging entries through a mutable working copy.
///
/// The frozen type offers no incremental construction path, so both directions
/// round-trip through an ordinary [`HashMap`] owned by the current call: copy
/// in, delegate to [`map_codec`], copy out, discard. One instance is stateless
/// and shared by every binding of a given `K, V` monomorphization.
pub struct FrozenMapSerializer<K, V> {
  _marker: PhantomData<fn() -> (K, V)>,
}

impl<K, V> FrozenMapSerializer<K, V> {
  /// Creates a stateless adapter instance.
  #[must_use]
  pub fn new() -> Self {
    Self { _marker: PhantomData }
  }
}

impl<K, V> Default for FrozenMapSerializer<K, V> {
  fn default() -> Self {
    Self::new()
  }
}

impl<K, V> TypeSerializer for FrozenMapSerializer<K, V>
where
  K: Serialize + DeserializeOwned + Eq + Hash + Clone + Send + Sync + 'static,
  V: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
  fn accepts_nil(&self) -> bool {
    !DOES_NOT_ACCEPT_NIL
  }

  fn values_immutable(&self) -> bool {
    VALUES_IMMUTABLE
  }

  fn to_binary(&self, value: &(dyn Any + Send + Sync)) -> Result<Vec<u8>, SerializationError> {
    let map = value
      .downcast_ref::<FrozenMap<K, V>>()
      .ok_or(SerializationError::UnexpectedValueType(core::any::type_name::<FrozenMap<K, V>>()))?;
    let working: HashMap<K, V> = map.iter().map(|(key, value)| (key.clone(), value.clone())).collect();
    map_codec::encode_map(&working)
  }

  fn from_binary(&self, bytes: &[u8], _expected: &BindingKey) -> Result<Box<dyn Any + Send>, SerializationError> {
    let working = map_codec::decode_map::<K, V>(bytes)?;
    Ok(Box::new(FrozenMap::copy_of(working)))
  }
}
