//! Serialization plugin that teaches a pluggable binary serializer stack how to
//! encode and decode [`FrozenMap`], an immutable key-value mapping with several
//! hidden concrete representations.
//!
//! The adapter stages entries through a transient mutable working copy because
//! the frozen type exposes no incremental construction path; the registrar
//! discovers every concrete shape by probing throwaway instances built through
//! the public factories instead of hardcoding shape discriminants.

#![no_std]

extern crate alloc;

/// Element-nullability contract for map keys and values.
mod element;
/// Error types for serialization failures.
mod error;
/// Immutable mapping with a closed representation set.
mod frozen_map;
/// Staged serializer adapting frozen maps to the generic map codec.
mod frozen_map_serializer;
/// Generic mutable-map codec built on the standard wire configuration.
pub mod map_codec;
/// Host-side dispatch pipeline.
mod pipeline;
/// Shape probing and registry binding.
mod registration;
/// Serializer registry and binding keys.
mod registry;
/// Object-safe serializer contract and shared handles.
mod serializer;
/// Telemetry hooks for encode/decode dispatch.
mod telemetry;

pub use element::Element;
pub use error::SerializationError;
pub use frozen_map::{EnumKey, FrozenMap, Iter, ShapeId};
pub use frozen_map_serializer::FrozenMapSerializer;
pub use pipeline::SerializationPipeline;
pub use registration::register_frozen_map_serializers;
pub use registry::{BindingKey, SerializerRegistry};
pub use serializer::{SerializerHandle, TypeSerializer};
pub use telemetry::{NoopSerializationTelemetry, SerializationTelemetry};
