//! Serializer registry.

use core::any::{Any, TypeId};

use hashbrown::HashMap;
use spin::Mutex;

use crate::{error::SerializationError, frozen_map::ShapeId, serializer::SerializerHandle};


/// Identifies one registry binding: a runtime type plus an optional concrete shape.
///
/// Keys without a shape act as the base binding for their type and cover every
/// shape not bound explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingKey {
  type_id: TypeId,
  shape:   Option<ShapeId>,
}

impl BindingKey {
  /// Key covering every shape of `T` not bound explicitly.
  #[must_use]
  pub fn base<T: Any>() -> Self {
    Self { type_id: TypeId::of::<T>(), shape: None }
  }

  /// Key covering one concrete shape of `T`.
  #[must_use]
  pub fn shaped<T: Any>(shape: ShapeId) -> Self {
    Self { type_id: TypeId::of::<T>(), shape: Some(shape) }
  }

  /// Returns the shape discriminant carried by this key, if any.
  #[must_use]
  pub fn shape(&self) -> Option<ShapeId> {
    self.shape
  }
}

/// Stores serializer bindings keyed by runtime type and concrete shape.
///
/// Registration is expected to complete single-threaded before concurrent
/// lookups begin; lookups clone handles out and never hold the lock across
/// dispatch.
pub struct SerializerRegistry {
  bindings: Mutex<HashMap<BindingKey, SerializerHandle>>,
}

impl Default for SerializerRegistry {
  fn default() -> Self {
    Self::new()
  }
}

impl SerializerRegistry {
  /// Creates an empty registry.
  #[must_use]
  pub fn new() -> Self {
    Self { bindings: Mutex::new(HashMap::new()) }
  }

  /// Registers a serializer under the provided key.
  ///
  /// Overlapping registrations are permitted; the last one for a key wins.
  pub fn register(&self, key: BindingKey, handle: SerializerHandle) {
    self.bindings.lock().insert(key, handle);
  }

  /// Resolves the binding for one concrete shape of `T`.
  ///
  /// Falls back to the base binding when the shape is not bound explicitly.
  ///
  /// # Errors
  ///
  /// Returns [`SerializationError::NoSerializerForType`] when neither binding exists.
  pub fn resolve_shaped<T: Any>(&self, shape: ShapeId) -> Result<SerializerHandle, SerializationError> {
    let bindings = self.bindings.lock();
    bindings
      .get(&BindingKey::shaped::<T>(shape))
      .or_else(|| bindings.get(&BindingKey::base::<T>()))
      .cloned()
      .ok_or(SerializationError::NoSerializerForType(core::any::type_name::<T>()))
  }

  /// Resolves the base binding for `T`.
  ///
  /// # Errors
  ///
  /// Returns [`SerializationError::NoSerializerForType`] when no base binding exists.
  pub fn resolve_base<T: Any>(&self) -> Result<SerializerHandle, SerializationError> {
    self
      .bindings
      .lock()
      .get(&BindingKey::base::<T>())
      .cloned()
      .ok_or(SerializationError::NoSerializerForType(core::any::type_name::<T>()))
  }

  /// Returns `true` when the exact key is bound.
  #[must_use]
  pub fn is_registered(&self, key: &BindingKey) -> bool {
    self.bindings.lock().contains_key(key)
  }

  /// Number of live bindings.
  #[must_use]
  pub fn binding_count(&self) -> usize {
    self.bindings.lock().len()
  }
}
