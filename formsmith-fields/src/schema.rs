//! Schema: the ordered store of field descriptors.
//!
//! Insertion order is render order and validation order. An index from id to
//! position keeps lookups cheap; it is rebuilt whenever positions shift.

use std::collections::HashMap;

use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::{debug, trace};
use ulid::Ulid;

use crate::defaults::FieldDefaults;
use crate::error::Result;
use crate::event::SchemaEvent;
use crate::types::{Archetype, FieldDescriptor, FieldId};
use crate::update::{FieldKey, FieldUpdate};

/// Ordered list of field descriptors with unique ids.
///
/// Every mutation returns the [`SchemaEvent`]s it caused. A mutation that
/// names an unknown id or an out-of-range option index changes nothing and
/// returns no events.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldDescriptor>,
    id_index: HashMap<FieldId, usize>,
    defaults: FieldDefaults,
    last_ulid: Option<Ulid>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty schema that uses `defaults` for added fields.
    pub fn with_defaults(defaults: FieldDefaults) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    pub fn defaults(&self) -> &FieldDefaults {
        &self.defaults
    }

    // --- Reads ---

    pub fn get(&self, id: &str) -> Option<&FieldDescriptor> {
        self.id_index.get(id).map(|&i| &self.fields[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.id_index.contains_key(id)
    }

    /// Position of a field in schema order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.id_index.get(id).copied()
    }

    /// All descriptors, in schema order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldDescriptor> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // --- Field mutations ---

    /// Append a new field of `archetype` with default attributes.
    ///
    /// Returns the generated id along with the event to apply.
    pub fn add(&mut self, archetype: Archetype) -> (FieldId, SchemaEvent) {
        let id = self.next_id(archetype);
        let field = self.defaults.descriptor(id.clone(), archetype);
        self.push(field);
        debug!(%id, %archetype, position = self.fields.len() - 1, "field added");

        let event = SchemaEvent::FieldAdded {
            id: id.clone(),
            archetype,
            initial_value: self.defaults.initial_value(archetype),
        };
        (id, event)
    }

    /// Append a caller-built descriptor. Ignored if its id is already taken.
    pub fn insert(&mut self, field: FieldDescriptor) -> Vec<SchemaEvent> {
        if self.contains(field.id.as_str()) {
            trace!(id = %field.id, "insert skipped, id already present");
            return Vec::new();
        }
        let id = field.id.clone();
        let archetype = field.archetype();
        self.push(field);
        debug!(%id, %archetype, "field inserted");

        vec![SchemaEvent::FieldAdded {
            id,
            archetype,
            initial_value: self.defaults.initial_value(archetype),
        }]
    }

    /// Replace one attribute of a field.
    ///
    /// Setting options on a non-choice field is ignored. Turning `required`
    /// off additionally reports [`SchemaEvent::RequirementLifted`].
    pub fn update(&mut self, id: &str, update: FieldUpdate) -> Vec<SchemaEvent> {
        let Some(field) = self.field_mut(id) else {
            return Vec::new();
        };
        let key = update.key();
        let mut lifted = false;

        match update {
            FieldUpdate::Label(label) => field.label = label,
            FieldUpdate::Required(required) => {
                lifted = field.required && !required;
                field.required = required;
            }
            FieldUpdate::Options(options) => match field.type_.options_mut() {
                Some(current) => *current = options,
                None => {
                    trace!(%id, "options ignored on non-choice field");
                    return Vec::new();
                }
            },
        }

        let id = field.id.clone();
        debug!(%id, %key, "field updated");
        let mut events = vec![SchemaEvent::FieldChanged {
            id: id.clone(),
            key,
        }];
        if lifted {
            events.push(SchemaEvent::RequirementLifted { id });
        }
        events
    }

    /// Replace one attribute from a loosely typed key/value pair.
    ///
    /// The value is coerced, never rejected; only an unknown key is an error.
    pub fn update_raw(&mut self, id: &str, key: &str, value: &Value) -> Result<Vec<SchemaEvent>> {
        let key: FieldKey = key.parse()?;
        Ok(self.update(id, FieldUpdate::coerce(key, value)))
    }

    /// Remove a field.
    pub fn delete(&mut self, id: &str) -> Vec<SchemaEvent> {
        let Some(idx) = self.position(id) else {
            trace!(%id, "delete skipped, unknown field");
            return Vec::new();
        };
        let field = self.fields.remove(idx);
        self.reindex();
        debug!(id = %field.id, "field deleted");

        vec![SchemaEvent::FieldRemoved { id: field.id }]
    }

    /// Remove every field. Safe to call on an empty schema.
    pub fn clear(&mut self) -> Vec<SchemaEvent> {
        let removed = self.fields.len();
        self.fields.clear();
        self.id_index.clear();
        debug!(removed, "schema cleared");

        vec![SchemaEvent::SchemaCleared]
    }

    // --- Option edits ---

    /// Append the placeholder option to a choice field.
    pub fn append_option(&mut self, id: &str) -> Vec<SchemaEvent> {
        let text = self.defaults.new_option.clone();
        self.edit_options(id, |options| {
            options.push(text);
            true
        })
    }

    /// Replace the option at `index`.
    pub fn set_option_at(
        &mut self,
        id: &str,
        index: usize,
        value: impl Into<String>,
    ) -> Vec<SchemaEvent> {
        let value = value.into();
        self.edit_options(id, |options| match options.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        })
    }

    /// Remove the option at `index`.
    pub fn remove_option_at(&mut self, id: &str, index: usize) -> Vec<SchemaEvent> {
        self.edit_options(id, |options| {
            if index < options.len() {
                options.remove(index);
                true
            } else {
                false
            }
        })
    }

    /// Move the option at `from` so it ends up at `to`.
    pub fn move_option(&mut self, id: &str, from: usize, to: usize) -> Vec<SchemaEvent> {
        self.edit_options(id, |options| {
            if from >= options.len() || to >= options.len() {
                return false;
            }
            let option = options.remove(from);
            options.insert(to, option);
            true
        })
    }

    // --- Internal ---

    fn push(&mut self, field: FieldDescriptor) {
        self.id_index.insert(field.id.clone(), self.fields.len());
        self.fields.push(field);
    }

    fn field_mut(&mut self, id: &str) -> Option<&mut FieldDescriptor> {
        match self.id_index.get(id) {
            Some(&i) => Some(&mut self.fields[i]),
            None => {
                trace!(%id, "update skipped, unknown field");
                None
            }
        }
    }

    fn edit_options<F>(&mut self, id: &str, edit: F) -> Vec<SchemaEvent>
    where
        F: FnOnce(&mut Vec<String>) -> bool,
    {
        let Some(field) = self.field_mut(id) else {
            return Vec::new();
        };
        let Some(options) = field.type_.options_mut() else {
            return Vec::new();
        };
        if !edit(options) {
            trace!(%id, "option edit out of range");
            return Vec::new();
        }
        debug!(%id, options = options.len(), "options edited");

        vec![SchemaEvent::FieldChanged {
            id: field.id.clone(),
            key: FieldKey::Options,
        }]
    }

    fn reindex(&mut self) {
        self.id_index = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, f)| (f.id.clone(), i))
            .collect();
    }

    /// Monotonic ULIDs keep ids distinct even within one millisecond.
    fn next_id(&mut self, archetype: Archetype) -> FieldId {
        loop {
            let now = Ulid::new();
            let ulid = match self.last_ulid {
                Some(last) if now <= last => last.increment().unwrap_or(now),
                _ => now,
            };
            self.last_ulid = Some(ulid);
            let id = FieldId::generated(archetype, ulid);
            if !self.contains(id.as_str()) {
                return id;
            }
        }
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}
