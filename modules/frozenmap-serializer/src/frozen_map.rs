//! Immutable key-value mapping with a closed set of concrete representations.

use alloc::vec::Vec;
use core::{fmt, hash::Hash};

use hashbrown::HashMap;


/// Opaque discriminant identifying the concrete representation of a [`FrozenMap`].
///
/// The payload is private: callers obtain ids exclusively through
/// [`FrozenMap::shape_id`], which keeps registrations tied to the public
/// construction paths rather than to internal numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(u8);

/// Keys drawn from a closed, enumerable domain.
///
/// Maps constructed from such keys may adopt the enum-keyed representation,
/// which stores entries ordered by ordinal.
pub trait EnumKey {
  /// Number of distinct values in the key domain.
  const CARDINALITY: usize;

  /// Stable zero-based position of this key within its domain.
  fn ordinal(&self) -> usize;
}

/// Read-only, key-unique associative collection.
///
/// Once constructed an instance never changes; every transformation such as
/// [`inserting`](Self::inserting) produces a new map. Entries are logically
/// unordered and equality is pair-set equality, independent of the concrete
/// representation the factories selected.
#[derive(Clone)]
pub struct FrozenMap<K, V> {
  repr: Repr<K, V>,
}

#[derive(Clone)]
enum Repr<K, V> {
  Empty,
  Single(K, V),
  Dual([(K, V); 2]),
  General(HashMap<K, V>),
  EnumKeyed(Vec<(K, V)>),
}

impl<K, V> FrozenMap<K, V> {
  /// Creates the empty map.
  #[must_use]
  pub fn new() -> Self {
    Self { repr: Repr::Empty }
  }

  /// Creates a single-entry map.
  #[must_use]
  pub fn of(key: K, value: V) -> Self {
    Self { repr: Repr::Single(key, value) }
  }

  /// Number of entries.
  #[must_use]
  pub fn len(&self) -> usize {
    match &self.repr {
      | Repr::Empty => 0,
      | Repr::Single(..) => 1,
      | Repr::Dual(_) => 2,
      | Repr::General(table) => table.len(),
      | Repr::EnumKeyed(entries) => entries.len(),
    }
  }

  /// Returns `true` when the map holds no entries.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Returns the discriminant of the concrete representation backing this map.
  #[must_use]
  pub fn shape_id(&self) -> ShapeId {
    ShapeId(match &self.repr {
      | Repr::Empty => 0,
      | Repr::Single(..) => 1,
      | Repr::Dual(_) => 2,
      | Repr::General(_) => 3,
      | Repr::EnumKeyed(_) => 4,
    })
  }

  /// Iterates over entries in representation order.
  pub fn iter(&self) -> Iter<'_, K, V> {
    Iter(match &self.repr {
      | Repr::Empty => IterRepr::Empty,
      | Repr::Single(key, value) => IterRepr::Single(Some((key, value))),
      | Repr::Dual(entries) => IterRepr::Slice(entries.iter()),
      | Repr::General(table) => IterRepr::Table(table.iter()),
      | Repr::EnumKeyed(entries) => IterRepr::Slice(entries.iter()),
    })
  }
}

impl<K, V> FrozenMap<K, V>
where
  K: Eq + Hash,
{
  /// Creates a map from arbitrary entries, deduplicating keys (last write wins).
  ///
  /// The concrete representation is selected from the deduplicated entry count.
  #[must_use]
  pub fn copy_of<I>(entries: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>, {
    let staged: HashMap<K, V> = entries.into_iter().collect();
    Self::from_staged(staged)
  }

  /// Creates a map over an enumerable key domain, deduplicating keys.
  ///
  /// The enum-keyed representation is only selected once the deduplicated
  /// domain holds at least two distinct keys; smaller inputs fall back to the
  /// count-based selection of [`copy_of`](Self::copy_of).
  #[must_use]
  pub fn from_enum_entries<I>(entries: I) -> Self
  where
    K: EnumKey,
    I: IntoIterator<Item = (K, V)>, {
    let staged: HashMap<K, V> = entries.into_iter().collect();
    if staged.len() < 2 {
      return Self::from_staged(staged);
    }
    let mut ordered: Vec<(K, V)> = staged.into_iter().collect();
    debug_assert!(ordered.iter().all(|entry| entry.0.ordinal() < K::CARDINALITY));
    ordered.sort_unstable_by_key(|entry| entry.0.ordinal());
    Self { repr: Repr::EnumKeyed(ordered) }
  }

  /// Looks up the value stored under `key`.
  #[must_use]
  pub fn get(&self, key: &K) -> Option<&V> {
    match &self.repr {
      | Repr::Empty => None,
      | Repr::Single(stored, value) => (stored == key).then_some(value),
      | Repr::Dual(entries) => entries.iter().find(|(stored, _)| stored == key).map(|(_, value)| value),
      | Repr::General(table) => table.get(key),
      | Repr::EnumKeyed(entries) => entries.iter().find(|(stored, _)| stored == key).map(|(_, value)| value),
    }
  }

  /// Returns `true` when an entry exists under `key`.
  #[must_use]
  pub fn contains_key(&self, key: &K) -> bool {
    self.get(key).is_some()
  }

  /// Returns a new map holding all current entries plus `key` bound to `value`.
  ///
  /// The receiver is left untouched.
  #[must_use]
  pub fn inserting(&self, key: K, value: V) -> Self
  where
    K: Clone,
    V: Clone, {
    let mut staged: HashMap<K, V> = self.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
    staged.insert(key, value);
    Self::from_staged(staged)
  }

  fn from_staged(staged: HashMap<K, V>) -> Self {
    if staged.len() > 2 {
      return Self { repr: Repr::General(staged) };
    }
    let mut drained = staged.into_iter();
    let repr = match (drained.next(), drained.next()) {
      | (Some(first), Some(second)) => Repr::Dual([first, second]),
      | (Some((key, value)), None) => Repr::Single(key, value),
      | _ => Repr::Empty,
    };
    Self { repr }
  }
}

impl<K, V> Default for FrozenMap<K, V> {
  fn default() -> Self {
    Self::new()
  }
}

impl<K, V> PartialEq for FrozenMap<K, V>
where
  K: Eq + Hash,
  V: PartialEq,
{
  fn eq(&self, other: &Self) -> bool {
    self.len() == other.len() && self.iter().all(|(key, value)| other.get(key) == Some(value))
  }
}

impl<K, V> Eq for FrozenMap<K, V>
where
  K: Eq + Hash,
  V: Eq,
{
}

impl<K, V> fmt::Debug for FrozenMap<K, V>
where
  K: fmt::Debug,
  V: fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map().entries(self.iter()).finish()
  }
}

/// Borrowing iterator over the entries of a [`FrozenMap`].
pub struct Iter<'a, K, V>(IterRepr<'a, K, V>);

enum IterRepr<'a, K, V> {
  Empty,
  Single(Option<(&'a K, &'a V)>),
  Slice(core::slice::Iter<'a, (K, V)>),
  Table(hashbrown::hash_map::Iter<'a, K, V>),
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
  type Item = (&'a K, &'a V);

  fn next(&mut self) -> Option<Self::Item> {
    match &mut self.0 {
      | IterRepr::Empty => None,
      | IterRepr::Single(slot) => slot.take(),
      | IterRepr::Slice(entries) => entries.next().map(|(key, value)| (key, value)),
      | IterRepr::Table(entries) => entries.next(),
    }
  }
}
