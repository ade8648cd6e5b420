//! Serde support for partial updates.

use serde::{Deserialize, Deserializer};

/// Marks a key as present even when its value is `null`.
///
/// Used with `#[serde(default)]` on `Option<Option<T>>` fields: an absent key
/// stays `None`, `null` becomes `Some(None)`, and a value becomes
/// `Some(Some(value))`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
