//! Attribute updates and the coercion rules for loosely typed input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FieldsError;

/// The editable attributes of a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKey {
    Label,
    Required,
    Options,
}

impl FieldKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Label => "label",
            FieldKey::Required => "required",
            FieldKey::Options => "options",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = FieldsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "label" => Ok(FieldKey::Label),
            "required" => Ok(FieldKey::Required),
            "options" => Ok(FieldKey::Options),
            other => Err(FieldsError::unknown_attribute(other)),
        }
    }
}

/// A replacement for one attribute of a descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "key", content = "value", rename_all = "kebab-case")]
pub enum FieldUpdate {
    Label(String),
    Required(bool),
    Options(Vec<String>),
}

impl FieldUpdate {
    pub fn key(&self) -> FieldKey {
        match self {
            FieldUpdate::Label(_) => FieldKey::Label,
            FieldUpdate::Required(_) => FieldKey::Required,
            FieldUpdate::Options(_) => FieldKey::Options,
        }
    }

    /// Coerce an arbitrary JSON value into an update for `key`.
    ///
    /// Never fails: a non-array `options` value becomes an empty list,
    /// `required` follows truthiness and `label` is stringified.
    pub fn coerce(key: FieldKey, value: &Value) -> Self {
        match key {
            FieldKey::Label => FieldUpdate::Label(coerce_string(value)),
            FieldKey::Required => FieldUpdate::Required(truthy(value)),
            FieldKey::Options => FieldUpdate::Options(match value {
                Value::Array(items) => items.iter().map(coerce_string).collect(),
                _ => Vec::new(),
            }),
        }
    }
}

fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn key_parsing() {
        assert_eq!("label".parse::<FieldKey>().unwrap(), FieldKey::Label);
        assert_eq!("options".parse::<FieldKey>().unwrap(), FieldKey::Options);
        assert!(matches!(
            "color".parse::<FieldKey>(),
            Err(FieldsError::UnknownAttribute { .. })
        ));
    }

    #[test]
    fn options_from_array() {
        let update = FieldUpdate::coerce(FieldKey::Options, &json!(["A", 2, null, true]));
        assert_eq!(
            update,
            FieldUpdate::Options(vec!["A".into(), "2".into(), "".into(), "true".into()])
        );
    }

    #[rstest]
    #[case(json!("A,B"))]
    #[case(json!(null))]
    #[case(json!({"a": 1}))]
    #[case(json!(3))]
    fn options_from_non_array_is_empty(#[case] value: Value) {
        assert_eq!(
            FieldUpdate::coerce(FieldKey::Options, &value),
            FieldUpdate::Options(Vec::new())
        );
    }

    #[rstest]
    #[case(json!(true), true)]
    #[case(json!(false), false)]
    #[case(json!(null), false)]
    #[case(json!(0), false)]
    #[case(json!(1), true)]
    #[case(json!(""), false)]
    #[case(json!("no"), true)]
    #[case(json!([]), true)]
    fn required_follows_truthiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(
            FieldUpdate::coerce(FieldKey::Required, &value),
            FieldUpdate::Required(expected)
        );
    }

    #[test]
    fn label_is_stringified() {
        assert_eq!(
            FieldUpdate::coerce(FieldKey::Label, &json!("Name")),
            FieldUpdate::Label("Name".into())
        );
        assert_eq!(
            FieldUpdate::coerce(FieldKey::Label, &json!(12)),
            FieldUpdate::Label("12".into())
        );
        assert_eq!(
            FieldUpdate::coerce(FieldKey::Label, &json!(null)),
            FieldUpdate::Label(String::new())
        );
    }

    #[test]
    fn update_serializes_key_and_value() {
        let json = serde_json::to_value(FieldUpdate::Required(false)).unwrap();
        assert_eq!(json, json!({"key": "required", "value": false}));
    }
}
