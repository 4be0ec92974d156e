//! Field archetypes and the schema store
//!
//! `formsmith-fields` owns the definition side of a form: which fields exist,
//! in which order, and what their labels, required flags and options are. It
//! knows nothing about what the end user typed; that lives in
//! `formsmith-runtime`.
//!
//! # Architecture
//!
//! - **Tagged descriptors**: [`FieldKind`] only gives select and radio fields an option list
//! - **Unique ids**: `<archetype>-<ULID>`, generated monotonically per schema
//! - **No-op tolerant**: unknown ids and bad option indexes change nothing
//! - **Event reporting**: mutations return [`SchemaEvent`]s for the runtime to apply

pub mod defaults;
pub mod error;
pub mod event;
pub mod schema;
pub mod types;
pub mod update;
pub mod value;

pub use defaults::{ArchetypeLabels, FieldDefaults};
pub use error::{FieldsError, Result};
pub use event::SchemaEvent;
pub use schema::Schema;
pub use types::{Archetype, FieldDescriptor, FieldId, FieldKind};
pub use update::{FieldKey, FieldUpdate};
pub use value::FieldValue;
