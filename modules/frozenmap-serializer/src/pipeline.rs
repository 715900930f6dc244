//! Host-side entry point wiring registry lookups, capability checks and dispatch.

use alloc::{sync::Arc, vec::Vec};
use core::{any::Any, hash::Hash};

use crate::{
  element::Element,
  error::SerializationError,
  frozen_map::FrozenMap,
  registry::{BindingKey, SerializerRegistry},
  telemetry::{NoopSerializationTelemetry, SerializationTelemetry},
};


/// Serializes and deserializes frozen maps through registered bindings.
///
/// Each call allocates its own intermediates and holds no shared mutable
/// state, so concurrent calls on distinct maps are safe.
pub struct SerializationPipeline {
  registry:  Arc<SerializerRegistry>,
  telemetry: Arc<dyn SerializationTelemetry>,
}

impl SerializationPipeline {
  /// Creates a pipeline over the provided registry with no-op telemetry.
  #[must_use]
  pub fn new(registry: Arc<SerializerRegistry>) -> Self {
    Self::with_telemetry(registry, Arc::new(NoopSerializationTelemetry))
  }

  /// Creates a pipeline with an explicit telemetry backend.
  #[must_use]
  pub fn with_telemetry(registry: Arc<SerializerRegistry>, telemetry: Arc<dyn SerializationTelemetry>) -> Self {
    Self { registry, telemetry }
  }

  /// Returns the registry backing this pipeline.
  #[must_use]
  pub fn registry(&self) -> Arc<SerializerRegistry> {
    self.registry.clone()
  }

  /// Serializes the provided map through the binding matching its concrete shape.
  ///
  /// When the bound serializer declares it accepts no nil elements, entries
  /// are screened here and the serializer never sees a violating map.
  ///
  /// # Errors
  ///
  /// Returns an error when no binding exists, when a nil key or value is
  /// rejected on the serializer's behalf, or when encoding fails.
  pub fn serialize<K, V>(&self, map: &FrozenMap<K, V>) -> Result<Vec<u8>, SerializationError>
  where
    K: Element + Eq + Hash + Send + Sync + 'static,
    V: Element + Send + Sync + 'static, {
    let type_name = core::any::type_name::<FrozenMap<K, V>>();
    let handle = match self.registry.resolve_shaped::<FrozenMap<K, V>>(map.shape_id()) {
      | Ok(handle) => handle,
      | Err(error) => {
        self.telemetry.record_failure(type_name, &error);
        return Err(error);
      },
    };
    if !handle.accepts_nil() {
      if let Some(error) = nil_violation(map, type_name) {
        self.telemetry.record_failure(type_name, &error);
        return Err(error);
      }
    }
    match handle.to_binary(map as &(dyn Any + Send + Sync)) {
      | Ok(bytes) => {
        self.telemetry.record_encode(type_name, bytes.len());
        Ok(bytes)
      },
      | Err(error) => {
        self.telemetry.record_failure(type_name, &error);
        Err(error)
      },
    }
  }

  /// Deserializes bytes previously produced for `FrozenMap<K, V>`.
  ///
  /// # Errors
  ///
  /// Returns an error when no base binding exists, when decoding fails, or
  /// when the bound serializer produced an unexpected type.
  pub fn deserialize<K, V>(&self, bytes: &[u8]) -> Result<FrozenMap<K, V>, SerializationError>
  where
    K: Eq + Hash + Send + Sync + 'static,
    V: Send + Sync + 'static, {
    let type_name = core::any::type_name::<FrozenMap<K, V>>();
    let key = BindingKey::base::<FrozenMap<K, V>>();
    let handle = match self.registry.resolve_base::<FrozenMap<K, V>>() {
      | Ok(handle) => handle,
      | Err(error) => {
        self.telemetry.record_failure(type_name, &error);
        return Err(error);
      },
    };
    let boxed = match handle.from_binary(bytes, &key) {
      | Ok(boxed) => boxed,
      | Err(error) => {
        self.telemetry.record_failure(type_name, &error);
        return Err(error);
      },
    };
    match boxed.downcast::<FrozenMap<K, V>>() {
      | Ok(map) => {
        self.telemetry.record_decode(type_name, bytes.len());
        Ok(*map)
      },
      | Err(_) => {
        let error = SerializationError::UnexpectedValueType(type_name);
        self.telemetry.record_failure(type_name, &error);
        Err(error)
      },
    }
  }
}

fn nil_violation<K, V>(map: &FrozenMap<K, V>, type_name: &'static str) -> Option<SerializationError>
where
  K: Element + Eq + Hash,
  V: Element, {
  map
    .iter()
    .any(|(key, value)| key.is_nil() || value.is_nil())
    .then(|| SerializationError::NilElementRejected(type_name))
}
