//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Item fields
/// (name, type, quantity, priority) are value objects: they are checked once
/// when constructed and never change afterwards. To "modify" one, build a new
/// one.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Priority(u8);
///
/// impl ValueObject for Priority {}
///
/// assert_eq!(Priority(3), Priority(3));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
