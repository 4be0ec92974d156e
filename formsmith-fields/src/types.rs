//! Core field types for the schema store.
//!
//! A form is an ordered list of [`FieldDescriptor`]s. Each descriptor carries
//! a [`FieldKind`], a tagged variant over the five archetypes where only the
//! choice archetypes (select, radio) own an option list.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::FieldsError;

/// The fixed set of field archetypes a form can be built from.
///
/// Deserialization goes through [`FromStr`], so `"Checkbox"` and `" radio "`
/// are accepted as well as the canonical lower-case names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Archetype {
    Text,
    Number,
    Checkbox,
    Select,
    Radio,
}

impl Archetype {
    /// All archetypes, in the order a builder toolbar offers them.
    pub const ALL: [Archetype; 5] = [
        Archetype::Text,
        Archetype::Number,
        Archetype::Checkbox,
        Archetype::Select,
        Archetype::Radio,
    ];

    /// Lower-case name, also used as the id prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Text => "text",
            Archetype::Number => "number",
            Archetype::Checkbox => "checkbox",
            Archetype::Select => "select",
            Archetype::Radio => "radio",
        }
    }

    /// Select and radio fields pick from an option list.
    pub fn is_choice(&self) -> bool {
        matches!(self, Archetype::Select | Archetype::Radio)
    }

    /// An unchecked checkbox is a meaningful answer, so checkboxes start optional.
    pub fn required_by_default(&self) -> bool {
        !matches!(self, Archetype::Checkbox)
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = FieldsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Archetype::ALL
            .into_iter()
            .find(|a| a.as_str() == name)
            .ok_or_else(|| FieldsError::unknown_archetype(s))
    }
}

impl TryFrom<String> for Archetype {
    type Error = FieldsError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Opaque field identifier, the join key between schema, values and errors.
///
/// Generated ids look like `text-01JAB...`: the archetype name followed by a
/// ULID, which encodes the creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    /// Build an id from an archetype and a ULID.
    pub fn generated(archetype: Archetype, ulid: Ulid) -> Self {
        Self(format!("{archetype}-{ulid}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FieldId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for FieldId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FieldId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Archetype-specific shape of a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FieldKind {
    Text,
    Number,
    Checkbox,
    Select { options: Vec<String> },
    Radio { options: Vec<String> },
}

impl FieldKind {
    /// An empty kind for the archetype, with `options` filled in for choices.
    pub fn for_archetype(archetype: Archetype, options: Vec<String>) -> Self {
        match archetype {
            Archetype::Text => FieldKind::Text,
            Archetype::Number => FieldKind::Number,
            Archetype::Checkbox => FieldKind::Checkbox,
            Archetype::Select => FieldKind::Select { options },
            Archetype::Radio => FieldKind::Radio { options },
        }
    }

    pub fn archetype(&self) -> Archetype {
        match self {
            FieldKind::Text => Archetype::Text,
            FieldKind::Number => Archetype::Number,
            FieldKind::Checkbox => Archetype::Checkbox,
            FieldKind::Select { .. } => Archetype::Select,
            FieldKind::Radio { .. } => Archetype::Radio,
        }
    }

    /// Option list; always empty for non-choice kinds.
    pub fn options(&self) -> &[String] {
        match self {
            FieldKind::Select { options } | FieldKind::Radio { options } => options,
            _ => &[],
        }
    }

    /// Mutable option list, `None` for non-choice kinds.
    pub fn options_mut(&mut self) -> Option<&mut Vec<String>> {
        match self {
            FieldKind::Select { options } | FieldKind::Radio { options } => Some(options),
            _ => None,
        }
    }
}

/// A field definition: everything the builder edits about one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub id: FieldId,
    pub label: String,
    pub required: bool,
    #[serde(rename = "type")]
    pub type_: FieldKind,
}

impl FieldDescriptor {
    pub fn new(
        id: impl Into<FieldId>,
        type_: FieldKind,
        label: impl Into<String>,
        required: bool,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            required,
            type_,
        }
    }

    pub fn archetype(&self) -> Archetype {
        self.type_.archetype()
    }

    pub fn options(&self) -> &[String] {
        self.type_.options()
    }

    /// Placeholder shown inside empty text and number inputs.
    pub fn placeholder(&self) -> String {
        format!("Enter {}", self.label)
    }
}
