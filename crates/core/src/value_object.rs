//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity and are compared by their attribute values.
/// Item kinds are the typical case: two `ItemKind::EventPass` are the same
/// thing no matter which item they were resolved from.
///
/// The trait requires `Copy`, so every value object is a plain value that can
/// be handed around without borrowing.
pub trait ValueObject: Copy + PartialEq + core::fmt::Debug {}
