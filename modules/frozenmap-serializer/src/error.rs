//! Errors originating from the map serialization plugin.

use alloc::string::String;
use core::fmt;

/// Errors surfaced by registry lookups, capability checks and the map codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializationError {
  /// No binding exists for the requested type.
  NoSerializerForType(&'static str),
  /// Value passed through the dyn seam did not match the bound type.
  UnexpectedValueType(&'static str),
  /// A nil key or value reached a serializer that declares it accepts none.
  NilElementRejected(&'static str),
  /// Encoding failed inside the generic map codec.
  SerializationFailed(String),
  /// Decoding failed inside the generic map codec.
  DeserializationFailed(String),
}

impl fmt::Display for SerializationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::NoSerializerForType(ty) => write!(f, "no serializer registered for type {ty}"),
      | Self::UnexpectedValueType(ty) => write!(f, "value does not match bound type {ty}"),
      | Self::NilElementRejected(ty) => {
        write!(f, "nil key or value rejected by the serializer bound to {ty}")
      },
      | Self::SerializationFailed(reason) => write!(f, "serialization failed: {reason}"),
      | Self::DeserializationFailed(reason) => write!(f, "deserialization failed: {reason}"),
    }
  }
}
