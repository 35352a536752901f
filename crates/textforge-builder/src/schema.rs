//! Serialization boundary: a builder serializes as its materialized string.
//!
//! Fragmentation is an in-memory detail, so on the wire a [`Text`] is
//! indistinguishable from a plain JSON string.  Deserializing produces a
//! single-fragment builder:
//!
//! ```rust
//! use textforge_builder::Text;
//!
//! let text = Text::make(("Hel", "lo"));
//! assert_eq!(serde_json::to_value(&text).unwrap(), serde_json::json!("Hello"));
//!
//! let parsed: Text = serde_json::from_value(serde_json::json!("world")).unwrap();
//! assert_eq!(parsed, "world");
//! ```

use schemars::r#gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::text::Text;

impl Serialize for Text {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Text::from)
    }
}

/// Schema-wise the builder is a plain string.
impl JsonSchema for Text {
    fn schema_name() -> String {
        "Text".to_string()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        String::json_schema(generator)
    }

    fn is_referenceable() -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_the_materialized_string() {
        let text = Text::make(("answer: ", 42));
        assert_eq!(
            serde_json::to_value(&text).unwrap(),
            serde_json::json!("answer: 42")
        );
    }

    #[test]
    fn deserializes_into_a_single_fragment() {
        let text: Text = serde_json::from_str("\"Hello\"").unwrap();
        assert_eq!(text.fragments(), ["Hello"]);
    }

    #[test]
    fn schema_is_a_plain_string() {
        let schema = serde_json::to_value(schemars::schema_for!(Text)).unwrap();
        assert_eq!(schema["type"], "string");
    }
}
