//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity: two instances with the same attributes are
/// the same value. An item's freshness reading or a shelf position are values;
/// the item itself is an [`Entity`](crate::Entity).
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Vitals { health: u8, happiness: u8 }
///
/// impl ValueObject for Vitals {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
