use std::{sync::Arc, thread};

use frozenmap_serializer_rs::{
  Element, EnumKey, FrozenMap, SerializationPipeline, SerializerRegistry, register_frozen_map_serializers,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
enum Side {
  Left,
  Right,
}

impl EnumKey for Side {
  const CARDINALITY: usize = 2;

  fn ordinal(&self) -> usize {
    *self as usize
  }
}

impl Element for Side {}

fn pipeline_for<K, V>() -> SerializationPipeline
where
  K: Serialize + serde::de::DeserializeOwned + Eq + std::hash::Hash + Clone + Send + Sync + 'static,
  V: Serialize + serde::de::DeserializeOwned + Clone + Send + Sync + 'static, {
  let registry = Arc::new(SerializerRegistry::new());
  register_frozen_map_serializers::<K, V>(&registry);
  SerializationPipeline::new(registry)
}

#[test]
fn empty_map_round_trips_to_zero_entries() {
  let pipeline = pipeline_for::<String, u32>();
  let bytes = pipeline.serialize(&FrozenMap::<String, u32>::new()).expect("encode");
  let decoded: FrozenMap<String, u32> = pipeline.deserialize(&bytes).expect("decode");
  assert!(decoded.is_empty());
}

#[test]
fn singleton_map_round_trips_exactly() {
  let pipeline = pipeline_for::<String, u32>();
  let map = FrozenMap::of("a".to_string(), 1u32);
  let bytes = pipeline.serialize(&map).expect("encode");
  let decoded: FrozenMap<String, u32> = pipeline.deserialize(&bytes).expect("decode");

  assert_eq!(decoded.len(), 1);
  assert_eq!(decoded.get(&"a".to_string()), Some(&1));
}

#[test]
fn two_entry_and_large_maps_round_trip_as_pair_sets() {
  let pipeline = pipeline_for::<String, u32>();

  let dual = FrozenMap::copy_of([("a".to_string(), 1u32), ("b".to_string(), 2u32)]);
  let bytes = pipeline.serialize(&dual).expect("encode dual");
  let decoded: FrozenMap<String, u32> = pipeline.deserialize(&bytes).expect("decode dual");
  assert_eq!(decoded, dual);

  let large = FrozenMap::copy_of((0..64u32).map(|n| (n.to_string(), n)));
  let bytes = pipeline.serialize(&large).expect("encode large");
  let decoded: FrozenMap<String, u32> = pipeline.deserialize(&bytes).expect("decode large");
  assert_eq!(decoded, large);
}

#[test]
fn enum_keyed_map_keeps_both_keys_bound_to_equal_values() {
  let pipeline = pipeline_for::<Side, String>();
  let shared = "same value".to_string();
  let map = FrozenMap::from_enum_entries([(Side::Left, shared.clone()), (Side::Right, shared.clone())]);

  let bytes = pipeline.serialize(&map).expect("encode");
  let decoded: FrozenMap<Side, String> = pipeline.deserialize(&bytes).expect("decode");

  assert_eq!(decoded.len(), 2);
  assert_eq!(decoded.get(&Side::Left), Some(&shared));
  assert_eq!(decoded.get(&Side::Right), Some(&shared));
}

#[test]
fn decoded_maps_are_structurally_frozen() {
  let pipeline = pipeline_for::<String, u32>();
  let map = FrozenMap::copy_of([("a".to_string(), 1u32), ("b".to_string(), 2u32)]);
  let bytes = pipeline.serialize(&map).expect("encode");
  let decoded: FrozenMap<String, u32> = pipeline.deserialize(&bytes).expect("decode");

  assert_eq!(decoded, FrozenMap::copy_of([("a".to_string(), 1u32), ("b".to_string(), 2u32)]));

  let grown = decoded.inserting("c".to_string(), 3u32);
  assert_eq!(decoded.len(), 2);
  assert!(!decoded.contains_key(&"c".to_string()));
  assert_eq!(grown.len(), 3);
}

#[test]
fn concurrent_round_trips_on_distinct_maps_succeed() {
  let pipeline = Arc::new(pipeline_for::<String, u32>());

  thread::scope(|scope| {
    for worker in 0..8u32 {
      let pipeline = Arc::clone(&pipeline);
      scope.spawn(move || {
        let map = FrozenMap::copy_of((0..worker + 1).map(|n| (format!("{worker}-{n}"), n)));
        let bytes = pipeline.serialize(&map).expect("encode");
        let decoded: FrozenMap<String, u32> = pipeline.deserialize(&bytes).expect("decode");
        assert_eq!(decoded, map);
      });
    }
  });
}
