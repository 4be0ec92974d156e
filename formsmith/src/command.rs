//! Scriptable commands over a [`FormSession`].
//!
//! A script is a list of commands, each tagged by `op`:
//!
//! ```json
//! [
//!   {"op": "add-field", "archetype": "text"},
//!   {"op": "submit"}
//! ]
//! ```
//!
//! Executing a command returns a JSON result describing what it did.

use std::path::Path;

use formsmith_fields::{Archetype, FieldDescriptor, FieldValue};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::error::{FormError, Result};
use crate::session::FormSession;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Command {
    AddField {
        archetype: Archetype,
    },
    /// Append a fully specified descriptor, e.g. one with a fixed id.
    InsertField {
        field: FieldDescriptor,
    },
    UpdateField {
        id: String,
        key: String,
        #[serde(default)]
        value: Value,
    },
    DeleteField {
        id: String,
    },
    ClearAll,
    AppendOption {
        id: String,
    },
    SetOption {
        id: String,
        index: usize,
        value: String,
    },
    RemoveOption {
        id: String,
        index: usize,
    },
    MoveOption {
        id: String,
        from: usize,
        to: usize,
    },
    SetValue {
        id: String,
        value: FieldValue,
    },
    Validate,
    Submit,
}

impl Command {
    /// The `op` tag of this command.
    pub fn op(&self) -> &'static str {
        match self {
            Command::AddField { .. } => "add-field",
            Command::InsertField { .. } => "insert-field",
            Command::UpdateField { .. } => "update-field",
            Command::DeleteField { .. } => "delete-field",
            Command::ClearAll => "clear-all",
            Command::AppendOption { .. } => "append-option",
            Command::SetOption { .. } => "set-option",
            Command::RemoveOption { .. } => "remove-option",
            Command::MoveOption { .. } => "move-option",
            Command::SetValue { .. } => "set-value",
            Command::Validate => "validate",
            Command::Submit => "submit",
        }
    }

    pub fn execute(&self, session: &mut FormSession) -> Result<Value> {
        debug!(op = self.op(), "executing command");
        match self {
            Command::AddField { archetype } => {
                let id = session.add_field(*archetype);
                field_json(session, id.as_str())
            }
            Command::InsertField { field } => {
                let inserted = session.insert_field(field.clone());
                Ok(json!({ "inserted": inserted, "id": field.id }))
            }
            Command::UpdateField { id, key, value } => {
                session.update_field_raw(id, key, value)?;
                field_json(session, id)
            }
            Command::DeleteField { id } => {
                let deleted = session.field(id).is_some();
                session.delete_field(id);
                Ok(json!({ "deleted": deleted, "id": id }))
            }
            Command::ClearAll => {
                session.clear_all();
                Ok(json!({ "cleared": true }))
            }
            Command::AppendOption { id } => {
                session.append_option(id);
                field_json(session, id)
            }
            Command::SetOption { id, index, value } => {
                session.set_option_at(id, *index, value.as_str());
                field_json(session, id)
            }
            Command::RemoveOption { id, index } => {
                session.remove_option_at(id, *index);
                field_json(session, id)
            }
            Command::MoveOption { id, from, to } => {
                session.move_option(id, *from, *to);
                field_json(session, id)
            }
            Command::SetValue { id, value } => {
                let recorded = session.set_value(id, value.clone());
                Ok(json!({
                    "id": id,
                    "recorded": recorded,
                    "error": session.error(id),
                }))
            }
            Command::Validate => Ok(json!({ "errors": session.validate() })),
            Command::Submit => Ok(serde_json::to_value(session.validate_and_submit())?),
        }
    }
}

/// The descriptor as JSON, or `null` when no field has that id.
fn field_json(session: &FormSession, id: &str) -> Result<Value> {
    Ok(serde_json::to_value(session.field(id))?)
}

/// Encoding of a command script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptFormat {
    Json,
    Yaml,
}

impl ScriptFormat {
    /// Pick the format from a file extension. Anything that is not YAML is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                ScriptFormat::Yaml
            }
            _ => ScriptFormat::Json,
        }
    }
}

pub fn parse_script(text: &str, format: ScriptFormat) -> Result<Vec<Command>> {
    match format {
        ScriptFormat::Json => Ok(serde_json::from_str(text)?),
        ScriptFormat::Yaml => Ok(serde_yaml_ng::from_str(text)?),
    }
}

/// Read a script file, choosing the format from its extension.
pub fn load_script(path: &Path) -> Result<Vec<Command>> {
    let text = std::fs::read_to_string(path)?;
    parse_script(&text, ScriptFormat::from_path(path))
}

/// Run every command in order, stopping at the first failure.
pub fn run_script(session: &mut FormSession, commands: &[Command]) -> Result<Vec<Value>> {
    commands
        .iter()
        .map(|command| command.execute(session))
        .collect::<std::result::Result<Vec<_>, FormError>>()
}
