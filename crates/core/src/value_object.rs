//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two ticket lines
/// asking for the same number of tickets of the same category are the same line.
/// To "modify" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Seats(u32);
///
/// impl ValueObject for Seats {}
///
/// assert_eq!(Seats(2), Seats(2));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
