use alloc::string::{String, ToString};
use core::any::Any;

use super::FrozenMapSerializer;
use crate::{BindingKey, FrozenMap, SerializationError, TypeSerializer};

type MapOfStrings = FrozenMap<String, u32>;

fn erase(map: &MapOfStrings) -> &(dyn Any + Send + Sync) {
  map
}

#[test]
fn declares_the_capability_flags() {
  let serializer = FrozenMapSerializer::<String, u32>::new();
  assert!(!serializer.accepts_nil());
  assert!(serializer.values_immutable());
}

#[test]
fn round_trips_through_the_working_copy() {
  let serializer = FrozenMapSerializer::<String, u32>::new();
  let map = MapOfStrings::copy_of([("a".to_string(), 1u32), ("b".to_string(), 2u32), ("c".to_string(), 3u32)]);

  let bytes = serializer.to_binary(erase(&map)).expect("encode");
  let boxed = serializer.from_binary(&bytes, &BindingKey::base::<MapOfStrings>()).expect("decode");
  let decoded = boxed.downcast::<MapOfStrings>().expect("downcast");

  assert_eq!(*decoded, map);
}

#[test]
fn rejects_values_of_a_foreign_type() {
  let serializer = FrozenMapSerializer::<String, u32>::new();
  let err = serializer.to_binary(&7u32).expect_err("should reject");
  assert!(matches!(err, SerializationError::UnexpectedValueType(_)));
}

#[test]
fn surfaces_codec_failures_unchanged() {
  let serializer = FrozenMapSerializer::<String, u32>::new();
  let err = serializer.from_binary(&[0xFF, 0xFF, 0xFF], &BindingKey::base::<MapOfStrings>()).expect_err("truncated");
  assert!(matches!(err, SerializationError::DeserializationFailed(_)));
}
