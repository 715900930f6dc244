//! Registration of every concrete [`FrozenMap`] shape against one shared adapter.

use core::hash::Hash;

use serde::{Serialize, de::DeserializeOwned};

use crate::{
  frozen_map::{EnumKey, FrozenMap},
  frozen_map_serializer::FrozenMapSerializer,
  registry::{BindingKey, SerializerRegistry},
  serializer::SerializerHandle,
};


/// Binds all concrete shapes of `FrozenMap<K, V>` to one shared staged serializer.
///
/// Shapes are discovered by constructing throwaway instances through the public
/// factories and reading back their discriminant, never by hardcoding internal
/// numbering: the bindings stay correct across representation renumbering as
/// long as the factory surface is stable. Entries registered, in order:
///
/// 1. the base binding, covering any shape not enumerated below (the general
///    shape resolves through it),
/// 2. the empty shape,
/// 3. the single-entry shape,
/// 4. the two-entry shape,
/// 5. the enum-keyed shape, probed with a two-value key domain because the
///    enum-keyed selection is sensitive to domain size.
///
/// Expected to run once during setup, before concurrent encode/decode traffic.
pub fn register_frozen_map_serializers<K, V>(registry: &SerializerRegistry)
where
  K: Serialize + DeserializeOwned + Eq + Hash + Clone + Send + Sync + 'static,
  V: Serialize + DeserializeOwned + Clone + Send + Sync + 'static, {
  let handle = SerializerHandle::new(FrozenMapSerializer::<K, V>::new());

  registry.register(BindingKey::base::<FrozenMap<K, V>>(), handle.clone());

  let empty = FrozenMap::<ProbeKey, u8>::new();
  registry.register(BindingKey::shaped::<FrozenMap<K, V>>(empty.shape_id()), handle.clone());

  let single = FrozenMap::of(ProbeKey::First, 0u8);
  registry.register(BindingKey::shaped::<FrozenMap<K, V>>(single.shape_id()), handle.clone());

  let dual = FrozenMap::copy_of([(ProbeKey::First, 0u8), (ProbeKey::Second, 0u8)]);
  registry.register(BindingKey::shaped::<FrozenMap<K, V>>(dual.shape_id()), handle.clone());

  let enum_keyed = FrozenMap::from_enum_entries([(ProbeKey::First, 0u8), (ProbeKey::Second, 0u8)]);
  registry.register(BindingKey::shaped::<FrozenMap<K, V>>(enum_keyed.shape_id()), handle);
}

/// Throwaway two-value key domain used only to probe shape discriminants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ProbeKey {
  First,
  Second,
}

impl EnumKey for ProbeKey {
  const CARDINALITY: usize = 2;

  fn ordinal(&self) -> usize {
    *self as usize
  }
}
