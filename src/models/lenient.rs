//! Field deserializers for request bodies
//!
//! A field holding a value of the wrong JSON type reads as `null` instead of
//! failing the whole body.

use serde::{Deserialize, Deserializer};
use serde_with::{DefaultOnError, DeserializeAs, Same};

/// `null` or wrong-typed values become `None`
pub fn or_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    DefaultOnError::<Same>::deserialize_as(deserializer)
}

/// For update bodies: a present key always yields `Some`, holding `None` when
/// the value is `null` or of the wrong type. Pair with `#[serde(default)]` so an
/// absent key stays `None`.
pub fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    or_null(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "or_null")]
        name: Option<String>,
        #[serde(default, deserialize_with = "present_or_null")]
        email: Option<Option<String>>,
    }

    fn parse(value: serde_json::Value) -> Fields {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn wrong_type_reads_as_null() {
        let parsed = parse(serde_json::json!({ "name": 123, "email": ["a"] }));
        assert_eq!(parsed.name, None);
        assert_eq!(parsed.email, Some(None));
    }

    #[test]
    fn absent_and_present_keys_are_distinguished() {
        let parsed = parse(serde_json::json!({ "name": "Ada" }));
        assert_eq!(parsed.name.as_deref(), Some("Ada"));
        assert_eq!(parsed.email, None);

        let parsed = parse(serde_json::json!({ "email": null }));
        assert_eq!(parsed.email, Some(None));

        let parsed = parse(serde_json::json!({ "email": "ada@example.org" }));
        assert_eq!(parsed.email, Some(Some("ada@example.org".to_string())));
    }
}
