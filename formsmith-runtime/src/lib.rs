//! Form runtime: entered values, required-field validation and submission
//!
//! The runtime reads a [`Schema`](formsmith_fields::Schema) but never changes
//! it. It owns two maps keyed by field id (entered values and error
//! messages) and keeps them consistent with the schema by applying the
//! [`SchemaEvent`](formsmith_fields::SchemaEvent)s that schema mutations return.
//!
//! ```rust
//! use formsmith_fields::{FieldDescriptor, FieldKind, Schema};
//! use formsmith_runtime::{FormState, PayloadKey};
//!
//! let mut schema = Schema::new();
//! schema.insert(FieldDescriptor::new("f1", FieldKind::Text, "Name", true));
//!
//! let mut state = FormState::new();
//! let rejected = state.validate_and_submit(&schema, PayloadKey::Id);
//! assert_eq!(rejected.errors().unwrap()["f1"], "Name is required");
//!
//! state.set_value(&schema, "f1", "Ann".into());
//! let accepted = state.validate_and_submit(&schema, PayloadKey::Id);
//! assert!(accepted.is_accepted());
//! ```

pub mod emptiness;
pub mod error;
pub mod state;
pub mod submission;

pub use emptiness::is_empty;
pub use error::{Result, RuntimeError};
pub use state::FormState;
pub use submission::{required_message, FieldErrors, Payload, PayloadKey, Submission};
