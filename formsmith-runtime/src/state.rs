//! FormState: what the end user has entered and which fields currently fail.

use std::collections::HashMap;

use formsmith_fields::{FieldDescriptor, FieldId, FieldValue, Schema, SchemaEvent};
use tracing::{debug, info, trace, warn};

use crate::emptiness::is_empty;
use crate::submission::{required_message, FieldErrors, Payload, PayloadKey, Submission};

/// Session-scoped runtime state of one form.
///
/// Both maps are keyed by field id. A missing value is the archetype's empty
/// value; a present error means the field failed the last validation pass
/// and has not been fixed since.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: HashMap<FieldId, FieldValue>,
    errors: FieldErrors,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &HashMap<FieldId, FieldValue> {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn value(&self, id: &str) -> Option<&FieldValue> {
        self.values.get(id)
    }

    pub fn error(&self, id: &str) -> Option<&str> {
        self.errors.get(id).map(String::as_str)
    }

    /// Bring the maps in line with a schema mutation.
    pub fn apply(&mut self, event: &SchemaEvent) {
        match event {
            SchemaEvent::FieldAdded {
                id,
                initial_value: Some(value),
                ..
            } => {
                self.values.insert(id.clone(), value.clone());
            }
            SchemaEvent::FieldAdded { .. } | SchemaEvent::FieldChanged { .. } => {}
            SchemaEvent::RequirementLifted { id } => {
                self.errors.shift_remove(id.as_str());
            }
            SchemaEvent::FieldRemoved { id } => {
                self.values.remove(id.as_str());
                self.errors.shift_remove(id.as_str());
            }
            SchemaEvent::SchemaCleared => self.reset(),
        }
    }

    pub fn apply_all<'a>(&mut self, events: impl IntoIterator<Item = &'a SchemaEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    /// Record an entered value and drop the field's error once it is filled in.
    ///
    /// Text entered into a number field is parsed first. Returns `false`
    /// without recording anything when `id` is not in the schema.
    pub fn set_value(&mut self, schema: &Schema, id: &str, value: FieldValue) -> bool {
        let Some(field) = schema.get(id) else {
            trace!(%id, "value ignored, unknown field");
            return false;
        };
        let value = value.normalized_for(field.archetype());
        let filled = !is_empty(field.archetype(), Some(&value));
        self.values.insert(field.id.clone(), value);
        if filled && self.errors.shift_remove(id).is_some() {
            debug!(%id, "error cleared by new value");
        }
        true
    }

    /// Compute the error map for the current values without changing anything.
    pub fn validate(&self, schema: &Schema) -> FieldErrors {
        schema
            .iter()
            .filter(|field| self.is_missing(field))
            .map(|field| (field.id.clone(), required_message(&field.label)))
            .collect()
    }

    /// Validate every field and either reject with errors or accept with a payload.
    ///
    /// The error map is replaced wholesale by this pass. On rejection the
    /// entered values are kept; on acceptance both maps are emptied.
    pub fn validate_and_submit(&mut self, schema: &Schema, key: PayloadKey) -> Submission {
        self.errors = self.validate(schema);

        if let Some(first_invalid_id) = self.errors.keys().next().cloned() {
            debug!(
                failures = self.errors.len(),
                first = %first_invalid_id,
                "submission rejected"
            );
            return Submission::Rejected {
                errors: self.errors.clone(),
                first_invalid_id,
            };
        }

        let payload = self.payload(schema, key);
        info!(fields = payload.len(), %key, "form submitted");
        self.reset();
        Submission::Accepted { payload }
    }

    /// Empty both maps.
    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
    }

    fn is_missing(&self, field: &FieldDescriptor) -> bool {
        field.required && is_empty(field.archetype(), self.values.get(field.id.as_str()))
    }

    fn payload(&self, schema: &Schema, key: PayloadKey) -> Payload {
        let mut payload = Payload::with_capacity(schema.len());
        for field in schema.iter() {
            let value = self
                .values
                .get(field.id.as_str())
                .cloned()
                .unwrap_or_else(|| FieldValue::empty_for(field.archetype()));
            let slot = match key {
                PayloadKey::Id => field.id.to_string(),
                PayloadKey::Label => field.label.clone(),
            };
            if payload.insert(slot, value).is_some() {
                warn!(label = %field.label, id = %field.id, "duplicate payload key, earlier value replaced");
            }
        }
        payload
    }
}
