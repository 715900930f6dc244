//! Telemetry hooks invoked around encode and decode dispatch.

use crate::error::SerializationError;

/// Records serialization outcomes for observability backends.
pub trait SerializationTelemetry: Send + Sync {
  /// Records that a value finished encoding successfully.
  fn record_encode(&self, type_name: &'static str, size_bytes: usize);

  /// Records that a value finished decoding successfully.
  fn record_decode(&self, type_name: &'static str, size_bytes: usize);

  /// Records a failed encode or decode dispatch.
  fn record_failure(&self, type_name: &'static str, error: &SerializationError);
}

/// Telemetry backend that drops every observation.
pub struct NoopSerializationTelemetry;

impl SerializationTelemetry for NoopSerializationTelemetry {
  fn record_encode(&self, _type_name: &'static str, _size_bytes: usize) {}

  fn record_decode(&self, _type_name: &'static str, _size_bytes: usize) {}

  fn record_failure(&self, _type_name: &'static str, _error: &SerializationError) {}
}
