//! Serde helpers for request payloads.

use serde::{Deserialize, Deserializer};

/// Deserializes `null` as an empty string so that absent and null text fields
/// reach validation as blanks. Pair with `#[serde(default)]`.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Optional field on an update payload.
///
/// Both an absent key and an explicit `null` leave the stored value alone.
/// Use with `#[serde(default)]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    #[default]
    Unchanged,
    Set(T),
}

impl<T> FieldUpdate<T> {
    /// Overwrites `target` when a value was supplied.
    pub fn apply_to(self, target: &mut T) {
        if let FieldUpdate::Set(value) = self {
            *target = value;
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldUpdate::Unchanged, FieldUpdate::Set)
    }
}

impl<'de, T> Deserialize<'de> for FieldUpdate<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(FieldUpdate::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "null_as_empty")]
        title: String,
        #[serde(default)]
        rank: FieldUpdate<u8>,
    }

    #[test]
    fn test_absent_and_null_are_unchanged() {
        let patch: Patch = serde_json::from_str(r#"{"title": "a"}"#).unwrap();
        assert_eq!(patch.rank, FieldUpdate::Unchanged);

        let patch: Patch = serde_json::from_str(r#"{"title": "a", "rank": null}"#).unwrap();
        assert_eq!(patch.rank, FieldUpdate::Unchanged);
    }

    #[test]
    fn test_value_is_set() {
        let patch: Patch = serde_json::from_str(r#"{"rank": 3}"#).unwrap();
        assert_eq!(patch.rank, FieldUpdate::Set(3));
        assert_eq!(patch.title, "");
    }

    #[test]
    fn test_null_text_becomes_empty() {
        let patch: Patch = serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert_eq!(patch.title, "");
    }

    #[test]
    fn test_apply_to() {
        let mut current = 1;
        FieldUpdate::Unchanged.apply_to(&mut current);
        assert_eq!(current, 1);
        FieldUpdate::Set(4).apply_to(&mut current);
        assert_eq!(current, 4);
    }
}
