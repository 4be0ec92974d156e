//! Events emitted by schema mutations.
//!
//! The schema store never touches entered values or error messages. Each
//! mutation instead reports what happened, and whoever owns the runtime
//! state applies the events to it.

use serde::Serialize;

use crate::types::{Archetype, FieldId};
use crate::update::FieldKey;
use crate::value::FieldValue;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum SchemaEvent {
    /// A field was appended. `initial_value` is the value the runtime should
    /// record straight away, if any (checkboxes start unchecked).
    FieldAdded {
        id: FieldId,
        archetype: Archetype,
        initial_value: Option<FieldValue>,
    },
    /// One attribute of a field was replaced.
    FieldChanged { id: FieldId, key: FieldKey },
    /// `required` went from true to false.
    RequirementLifted { id: FieldId },
    FieldRemoved { id: FieldId },
    SchemaCleared,
}

impl SchemaEvent {
    /// The field the event is about, if it concerns a single field.
    pub fn field_id(&self) -> Option<&FieldId> {
        match self {
            SchemaEvent::FieldAdded { id, .. }
            | SchemaEvent::FieldChanged { id, .. }
            | SchemaEvent::RequirementLifted { id }
            | SchemaEvent::FieldRemoved { id } => Some(id),
            SchemaEvent::SchemaCleared => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleared_has_no_field() {
        assert!(SchemaEvent::SchemaCleared.field_id().is_none());
    }

    #[test]
    fn event_serializes_with_tag() {
        let event = SchemaEvent::FieldAdded {
            id: "checkbox-1".into(),
            archetype: Archetype::Checkbox,
            initial_value: Some(FieldValue::Bool(false)),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "field-added");
        assert_eq!(json["archetype"], "checkbox");
        assert_eq!(json["initial_value"], false);
    }
}
