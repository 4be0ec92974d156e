//! FormSession: one schema, one runtime state, one configuration.
//!
//! The session is the only place where schema events reach the runtime
//! state, so every method leaves the two consistent before it returns.

use std::collections::HashMap;

use formsmith_fields::{
    Archetype, FieldDescriptor, FieldId, FieldUpdate, FieldValue, Schema, SchemaEvent,
};
use formsmith_runtime::{FieldErrors, FormState, Submission};
use serde_json::Value;
use tracing::trace;

use crate::config::FormConfig;
use crate::error::Result;

/// Controller for one form being built and filled in.
///
/// ```rust
/// use formsmith::{Archetype, FormSession};
///
/// let mut session = FormSession::new();
/// let name = session.add_field(Archetype::Text);
///
/// let rejected = session.validate_and_submit();
/// assert_eq!(rejected.first_invalid_id(), Some(&name));
///
/// session.set_value(name.as_str(), "Ann");
/// assert!(session.validate_and_submit().is_accepted());
/// ```
#[derive(Debug, Clone)]
pub struct FormSession {
    schema: Schema,
    state: FormState,
    config: FormConfig,
}

impl FormSession {
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    pub fn with_config(config: FormConfig) -> Self {
        Self {
            schema: Schema::with_defaults(config.fields.clone()),
            state: FormState::new(),
            config,
        }
    }

    // --- Reads ---

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn field(&self, id: &str) -> Option<&FieldDescriptor> {
        self.schema.get(id)
    }

    pub fn values(&self) -> &HashMap<FieldId, FieldValue> {
        self.state.values()
    }

    pub fn errors(&self) -> &FieldErrors {
        self.state.errors()
    }

    pub fn value(&self, id: &str) -> Option<&FieldValue> {
        self.state.value(id)
    }

    pub fn error(&self, id: &str) -> Option<&str> {
        self.state.error(id)
    }

    // --- Schema editing ---

    /// Append a field with default attributes and return its id.
    pub fn add_field(&mut self, archetype: Archetype) -> FieldId {
        let (id, event) = self.schema.add(archetype);
        self.state.apply(&event);
        id
    }

    /// Append a descriptor built by the caller. Returns `false` if the id is taken.
    pub fn insert_field(&mut self, field: FieldDescriptor) -> bool {
        let events = self.schema.insert(field);
        let inserted = !events.is_empty();
        self.dispatch(events);
        inserted
    }

    pub fn update_field(&mut self, id: &str, update: FieldUpdate) -> &Schema {
        let events = self.schema.update(id, update);
        self.dispatch(events)
    }

    /// Update from a loosely typed key/value pair; only an unknown key fails.
    pub fn update_field_raw(&mut self, id: &str, key: &str, value: &Value) -> Result<&Schema> {
        let events = self.schema.update_raw(id, key, value)?;
        Ok(self.dispatch(events))
    }

    pub fn delete_field(&mut self, id: &str) -> &Schema {
        let events = self.schema.delete(id);
        self.dispatch(events)
    }

    /// Remove every field together with all entered values and errors.
    pub fn clear_all(&mut self) -> &Schema {
        let events = self.schema.clear();
        self.dispatch(events)
    }

    pub fn append_option(&mut self, id: &str) -> &Schema {
        let events = self.schema.append_option(id);
        self.dispatch(events)
    }

    pub fn set_option_at(&mut self, id: &str, index: usize, value: impl Into<String>) -> &Schema {
        let events = self.schema.set_option_at(id, index, value);
        self.dispatch(events)
    }

    pub fn remove_option_at(&mut self, id: &str, index: usize) -> &Schema {
        let events = self.schema.remove_option_at(id, index);
        self.dispatch(events)
    }

    pub fn move_option(&mut self, id: &str, from: usize, to: usize) -> &Schema {
        let events = self.schema.move_option(id, from, to);
        self.dispatch(events)
    }

    // --- Filling in ---

    /// Record an entered value. Unknown ids are ignored and return `false`.
    pub fn set_value(&mut self, id: &str, value: impl Into<FieldValue>) -> bool {
        self.state.set_value(&self.schema, id, value.into())
    }

    /// Errors the form would get if submitted now.
    pub fn validate(&self) -> FieldErrors {
        self.state.validate(&self.schema)
    }

    pub fn validate_and_submit(&mut self) -> Submission {
        self.state
            .validate_and_submit(&self.schema, self.config.payload_key)
    }

    fn dispatch(&mut self, events: Vec<SchemaEvent>) -> &Schema {
        if events.is_empty() {
            trace!("schema unchanged");
        }
        self.state.apply_all(&events);
        &self.schema
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}
