//! Custom serde helpers for poe.ninja wire formats.

/// Deserializes `null` (or an absent field, with `#[serde(default)]`) as `T::default()`.
///
/// poe.ninja sends explicit `null` for numbers it has no sample for, which plain
/// `#[serde(default)]` rejects.
pub mod null_as_default {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}

/// Deserializes an optional field that reads as `None` when its kind is wrong.
///
/// The surrounding record survives a drifted field; only that field is lost.
/// Pair with `#[serde(default)]` so an absent field is `None` too.
pub mod lenient_option {
    use crate::shared::JsonShape;
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let Some(raw) = Option::<Value>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let found = JsonShape::of(&raw);
        match serde_json::from_value(raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::debug!(
                    found = %found,
                    error = %e,
                    "optional field has the wrong kind, reading it as absent"
                );
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "super::null_as_default::deserialize")]
        total: f64,
        #[serde(default, deserialize_with = "super::null_as_default::deserialize")]
        tags: Vec<String>,
    }

    #[test]
    fn test_null_and_absent_become_default() {
        let s: Sample = serde_json::from_str(r#"{"total": null}"#).unwrap();
        assert_eq!(s.total, 0.0);
        assert!(s.tags.is_empty());
    }

    #[test]
    fn test_present_value_kept() {
        let s: Sample = serde_json::from_str(r#"{"total": 4, "tags": ["a"]}"#).unwrap();
        assert_eq!(s.total, 4.0);
        assert_eq!(s.tags, vec!["a".to_string()]);
    }

    #[test]
    fn test_wrong_kind_still_fails() {
        assert!(serde_json::from_str::<Sample>(r#"{"total": "4"}"#).is_err());
    }

    #[derive(Deserialize)]
    struct Lenient {
        #[serde(default, deserialize_with = "super::lenient_option::deserialize")]
        size: Option<i64>,
        #[serde(default, deserialize_with = "super::lenient_option::deserialize")]
        label: Option<String>,
    }

    #[test]
    fn test_lenient_option_wrong_kind_is_none() {
        let s: Lenient = serde_json::from_str(r#"{"size": 10.5, "label": "kept"}"#).unwrap();
        assert_eq!(s.size, None);
        assert_eq!(s.label.as_deref(), Some("kept"));
    }

    #[test]
    fn test_lenient_option_absent_null_and_present() {
        let s: Lenient = serde_json::from_str(r#"{"label": null}"#).unwrap();
        assert_eq!(s.size, None);
        assert_eq!(s.label, None);

        let s: Lenient = serde_json::from_str(r#"{"size": 3, "label": "x"}"#).unwrap();
        assert_eq!(s.size, Some(3));
        assert_eq!(s.label.as_deref(), Some("x"));
    }
}
