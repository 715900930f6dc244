//! Object-safe serializer contract and shared handles.

use alloc::{boxed::Box, sync::Arc, vec::Vec};
use core::any::Any;

use crate::{error::SerializationError, registry::BindingKey};

/// Abstraction implemented by concrete serializer backends.
///
/// The two capability methods are contract declarations: the host consults
/// them before dispatch and may enable optimizations (nil-check elision,
/// reference-graph caching) based on what the serializer promises.
pub trait TypeSerializer: Send + Sync {
  /// Declares whether the serializer tolerates nil keys or values.
  ///
  /// Defaults to `true`. Serializers answering `false` are shielded by the
  /// host, which rejects nil elements before dispatch.
  fn accepts_nil(&self) -> bool {
    true
  }

  /// Declares whether produced values are immutable.
  ///
  /// Defaults to `false`.
  fn values_immutable(&self) -> bool {
    false
  }

  /// Converts the provided value into a byte buffer.
  ///
  /// # Errors
  ///
  /// Returns [`SerializationError`] if encoding fails.
  fn to_binary(&self, value: &(dyn Any + Send + Sync)) -> Result<Vec<u8>, SerializationError>;

  /// Restores a value from its binary representation.
  ///
  /// The `expected` key names the dispatch target; serializers that recover
  /// the concrete type themselves may ignore it.
  ///
  /// # Errors
  ///
  /// Returns [`SerializationError`] if decoding fails.
  fn from_binary(&self, bytes: &[u8], expected: &BindingKey) -> Result<Box<dyn Any + Send>, SerializationError>;
}

/// Cloneable handle sharing one serializer across registry bindings.
#[derive(Clone)]
pub struct SerializerHandle {
  inner: Arc<dyn TypeSerializer>,
}

impl core::fmt::Debug for SerializerHandle {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("SerializerHandle").finish_non_exhaustive()
  }
}

impl SerializerHandle {
  /// Wraps the provided serializer into a shared handle.
  #[must_use]
  pub fn new<S>(serializer: S) -> Self
  where
    S: TypeSerializer + 'static, {
    Self { inner: Arc::new(serializer) }
  }

  /// Returns the wrapped serializer's nil-acceptance declaration.
  #[must_use]
  pub fn accepts_nil(&self) -> bool {
    self.inner.accepts_nil()
  }

  /// Returns the wrapped serializer's immutability declaration.
  #[must_use]
  pub fn values_immutable(&self) -> bool {
    self.inner.values_immutable()
  }

  /// Encodes through the wrapped serializer.
  ///
  /// # Errors
  ///
  /// Returns [`SerializationError`] if encoding fails.
  pub fn to_binary(&self, value: &(dyn Any + Send + Sync)) -> Result<Vec<u8>, SerializationError> {
    self.inner.to_binary(value)
  }

  /// Decodes through the wrapped serializer.
  ///
  /// # Errors
  ///
  /// Returns [`SerializationError`] if decoding fails.
  pub fn from_binary(&self, bytes: &[u8], expected: &BindingKey) -> Result<Box<dyn Any + Send>, SerializationError> {
    self.inner.from_binary(bytes, expected)
  }
}
