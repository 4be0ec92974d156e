//! Entered values.

use serde::{Deserialize, Serialize};

use crate::types::Archetype;

/// A value entered into a field by the end user.
///
/// Serialized untagged so payloads read naturally: `"Ann"`, `42.0`, `null`,
/// `true`. `Number(None)` is the canonical empty number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(Option<f64>),
    Text(String),
}

impl FieldValue {
    /// The value a field of this archetype holds when nothing was entered.
    pub fn empty_for(archetype: Archetype) -> Self {
        match archetype {
            Archetype::Text | Archetype::Select | Archetype::Radio => {
                FieldValue::Text(String::new())
            }
            Archetype::Number => FieldValue::Number(None),
            Archetype::Checkbox => FieldValue::Bool(false),
        }
    }

    /// Parse raw number-input text. Blank or unparsable text is the empty number.
    pub fn from_number_input(input: &str) -> Self {
        FieldValue::Number(input.trim().parse::<f64>().ok().filter(|n| n.is_finite()))
    }

    /// Bring an entered value into the canonical shape for `archetype`.
    ///
    /// Text typed into a number field is parsed, so `""` becomes the empty
    /// number and `"42"` becomes `42.0`.
    pub fn normalized_for(self, archetype: Archetype) -> Self {
        match (archetype, self) {
            (Archetype::Number, FieldValue::Text(text)) => FieldValue::from_number_input(&text),
            (_, value) => value,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => *n,
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(Some(n))
    }
}
