//! Element-nullability contract consumed by capability-checked serializers.

use alloc::string::String;

/// Marks a type usable as a map key or value under the nil-element contract.
///
/// Serializers declaring [`accepts_nil`](crate::TypeSerializer::accepts_nil)
/// as `false` rely on the host rejecting any element reporting `true` here
/// before dispatch, which lets them skip per-element presence checks.
pub trait Element {
  /// Returns `true` when the value represents an absent element.
  fn is_nil(&self) -> bool {
    false
  }
}

impl<T: Element> Element for Option<T> {
  fn is_nil(&self) -> bool {
    self.is_none()
  }
}

macro_rules! plain_element {
  ($($ty:ty),* $(,)?) => {
    $(impl Element for $ty {})*
  };
}

plain_element!(
  u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, f32, f64, String, &str,
);
