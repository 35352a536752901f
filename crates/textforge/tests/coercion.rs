//! Coercion at the crate boundary: tuples, numbers, nesting and the dynamic
//! JSON path.

use textforge::{Input, Text, TextError};

#[test]
fn tuples_coerce_in_argument_order() {
    assert_eq!(Text::make(("a", 1, "b", 2.5)), "a1b2.5");
    assert_eq!(Text::make(()).append(("x", "y")), "xy");
}

#[test]
fn nested_builders_materialize_on_coercion() {
    let inner = Text::make(("Hel", "lo"));
    assert_eq!(Text::make((inner, " world")), "Hello world");
}

#[test]
fn json_values_cross_the_dynamic_boundary() {
    let input = Input::try_from(serde_json::json!("Hello")).unwrap();
    assert_eq!(Text::make(input), "Hello");

    let input = Input::try_from(serde_json::json!(42)).unwrap();
    assert_eq!(Text::make(input), "42");
}

#[test]
fn unsupported_json_shapes_fail_with_a_named_kind() {
    let error = Input::try_from(serde_json::json!([1, 2])).unwrap_err();
    assert!(matches!(error, TextError::InvalidInput { found: "array" }));
    assert_eq!(
        error.to_string(),
        "cannot coerce `array` into a fragment, expected a string, a number or a nested builder"
    );
}

#[test]
fn builders_round_trip_through_serde() {
    let text = Text::make(("Hel", "lo"));
    let encoded = serde_json::to_string(&text).unwrap();
    assert_eq!(encoded, "\"Hello\"");

    let decoded: Text = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, text);
}

#[test]
fn builders_deserialize_inside_larger_documents() {
    #[derive(serde::Deserialize, schemars::JsonSchema)]
    struct Payload {
        title: Text,
    }

    let payload: Payload = serde_json::from_str(r#"{"title": "Hello"}"#).unwrap();
    assert_eq!(payload.title, "Hello");

    let schema = serde_json::to_value(schemars::schema_for!(Payload)).unwrap();
    assert_eq!(schema["properties"]["title"]["type"], "string");
}
