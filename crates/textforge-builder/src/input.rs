//! The closed input union accepted by the builder.
//!
//! Statically typed callers never need this type: [`IntoFragments`] rejects
//! unsupported values at compile time.  [`Input`] exists for the *dynamic*
//! boundary: values arriving as JSON, where only strings and numbers are
//! acceptable and everything else must fail at coercion time:
//!
//! ```rust
//! use textforge_builder::{Input, Text};
//!
//! let value: serde_json::Value = serde_json::json!(42);
//! let input = Input::try_from(value).unwrap();
//! assert_eq!(Text::make(input).to_string(), "42");
//!
//! let rejected = Input::try_from(serde_json::json!(true));
//! assert!(rejected.is_err());
//! ```

use textforge_core::error::TextError;
use textforge_core::fragment::{Fragment, IntoFragments};

use crate::text::Text;

/// Tagged union of everything a builder accepts: a string, a number or a
/// nested builder.  Each variant carries its own stringification rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Passed through verbatim.
    Text(String),
    /// Stringified through `Display`, the standard decimal form.
    Number(f64),
    /// Materialized through the nested builder's own concatenation.
    Builder(Text),
}

impl IntoFragments for Input {
    fn into_fragments(self) -> Vec<Fragment> {
        match self {
            Input::Text(value) => vec![value],
            Input::Number(value) => vec![value.to_string()],
            Input::Builder(builder) => builder.into_fragments(),
        }
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::Text(value.to_string())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::Text(value)
    }
}

impl From<f64> for Input {
    fn from(value: f64) -> Self {
        Input::Number(value)
    }
}

impl From<i32> for Input {
    fn from(value: i32) -> Self {
        Input::Number(value.into())
    }
}

impl From<Text> for Input {
    fn from(value: Text) -> Self {
        Input::Builder(value)
    }
}

/// The dynamic coercion boundary.  JSON strings and numbers are accepted,
/// every other JSON shape fails with [`TextError::InvalidInput`].
impl TryFrom<serde_json::Value> for Input {
    type Error = TextError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::String(value) => Ok(Input::Text(value)),
            serde_json::Value::Number(number) => number
                .as_f64()
                .map(Input::Number)
                .ok_or(TextError::InvalidInput { found: "number" }),
            other => Err(TextError::InvalidInput {
                found: json_kind(&other),
            }),
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_carry_their_own_stringification() {
        assert_eq!(Input::from("hi").into_fragments(), vec!["hi"]);
        assert_eq!(Input::from(42.0).into_fragments(), vec!["42"]);
        assert_eq!(Input::from(3.5).into_fragments(), vec!["3.5"]);
        assert_eq!(
            Input::from(Text::make(("a", "b"))).into_fragments(),
            vec!["ab"]
        );
    }

    #[test]
    fn json_strings_and_numbers_coerce() {
        assert_eq!(
            Input::try_from(serde_json::json!("hello")).unwrap(),
            Input::Text("hello".to_string())
        );
        assert_eq!(
            Input::try_from(serde_json::json!(1.5)).unwrap(),
            Input::Number(1.5)
        );
    }

    #[test]
    fn other_json_shapes_are_rejected() {
        for value in [
            serde_json::json!(null),
            serde_json::json!(true),
            serde_json::json!([1, 2]),
            serde_json::json!({"a": 1}),
        ] {
            assert!(matches!(
                Input::try_from(value),
                Err(TextError::InvalidInput { .. })
            ));
        }
    }
}
