//! Default attributes for newly added fields.

use serde::{Deserialize, Serialize};

use crate::types::{Archetype, FieldDescriptor, FieldId, FieldKind};
use crate::value::FieldValue;

/// Default label for each archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchetypeLabels {
    pub text: String,
    pub number: String,
    pub checkbox: String,
    pub select: String,
    pub radio: String,
}

impl ArchetypeLabels {
    pub fn get(&self, archetype: Archetype) -> &str {
        match archetype {
            Archetype::Text => &self.text,
            Archetype::Number => &self.number,
            Archetype::Checkbox => &self.checkbox,
            Archetype::Select => &self.select,
            Archetype::Radio => &self.radio,
        }
    }

    fn slot(&mut self, archetype: Archetype) -> &mut String {
        match archetype {
            Archetype::Text => &mut self.text,
            Archetype::Number => &mut self.number,
            Archetype::Checkbox => &mut self.checkbox,
            Archetype::Select => &mut self.select,
            Archetype::Radio => &mut self.radio,
        }
    }
}

impl Default for ArchetypeLabels {
    fn default() -> Self {
        Self {
            text: "Text Input".into(),
            number: "Number Input".into(),
            checkbox: "Checkbox".into(),
            select: "Select".into(),
            radio: "Radio Group".into(),
        }
    }
}

/// Defaults applied when a field is added to a schema.
///
/// ```rust
/// use formsmith_fields::{Archetype, FieldDefaults};
///
/// let defaults = FieldDefaults::new()
///     .with_label(Archetype::Text, "Full name")
///     .with_options(["Yes", "No"]);
/// assert_eq!(defaults.label_for(Archetype::Text), "Full name");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDefaults {
    pub labels: ArchetypeLabels,
    /// Starting options for select and radio fields
    pub options: Vec<String>,
    /// Text of an option appended from the builder
    pub new_option: String,
}

impl FieldDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the default label of one archetype.
    pub fn with_label(mut self, archetype: Archetype, label: impl Into<String>) -> Self {
        *self.labels.slot(archetype) = label.into();
        self
    }

    /// Override the starting options of choice fields.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Override the text of appended options.
    pub fn with_new_option(mut self, text: impl Into<String>) -> Self {
        self.new_option = text.into();
        self
    }

    pub fn label_for(&self, archetype: Archetype) -> &str {
        self.labels.get(archetype)
    }

    /// Build a descriptor for a freshly added field.
    pub fn descriptor(&self, id: FieldId, archetype: Archetype) -> FieldDescriptor {
        let options = if archetype.is_choice() {
            self.options.clone()
        } else {
            Vec::new()
        };
        FieldDescriptor::new(
            id,
            FieldKind::for_archetype(archetype, options),
            self.label_for(archetype),
            archetype.required_by_default(),
        )
    }

    /// Value the runtime records as soon as a field of this archetype appears.
    pub fn initial_value(&self, archetype: Archetype) -> Option<FieldValue> {
        match archetype {
            Archetype::Checkbox => Some(FieldValue::Bool(false)),
            _ => None,
        }
    }
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self {
            labels: ArchetypeLabels::default(),
            options: vec!["Option 1".into(), "Option 2".into()],
            new_option: "New Option".into(),
        }
    }
}
