//! The per-archetype emptiness rule used by required-field validation.

use formsmith_fields::{Archetype, FieldValue};

/// Whether `value` counts as "nothing entered" for a field of `archetype`.
///
/// Absent values and empty strings are empty for every archetype. A number
/// field is also empty when it holds no number, and a checkbox is empty when
/// unchecked. An unchecked checkbox value on any other archetype is a real
/// answer.
pub fn is_empty(archetype: Archetype, value: Option<&FieldValue>) -> bool {
    match value {
        None => true,
        Some(FieldValue::Text(s)) => s.is_empty(),
        Some(FieldValue::Number(n)) => n.is_none(),
        Some(FieldValue::Bool(checked)) => archetype == Archetype::Checkbox && !checked,
    }
}
