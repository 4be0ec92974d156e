//! Form builder sessions
//!
//! A [`FormSession`] pairs a [`Schema`] with the [`FormState`] of the form it
//! describes. Editing the schema (adding, relabelling, reordering options,
//! deleting fields) keeps entered values and error messages consistent, and
//! [`FormSession::validate_and_submit`] either reports every missing required
//! field or hands back the payload.
//!
//! ```rust
//! use formsmith::{Archetype, FieldValue, FormSession, Submission};
//!
//! let mut session = FormSession::new();
//! let agree = session.add_field(Archetype::Checkbox);
//!
//! // Checkboxes start optional, so an empty form submits.
//! match session.validate_and_submit() {
//!     Submission::Accepted { payload } => assert_eq!(payload[agree.as_str()], FieldValue::Bool(false)),
//!     Submission::Rejected { .. } => unreachable!(),
//! }
//! ```
//!
//! Sessions can also be driven by [`Command`] scripts in JSON or YAML, which is
//! how the `formsmith` binary works.

pub mod command;
pub mod config;
pub mod error;
pub mod session;

pub use command::{load_script, parse_script, run_script, Command, ScriptFormat};
pub use config::{ConfigLoader, FormConfig, ENV_PREFIX};
pub use error::{ConfigError, FormError, Result};
pub use session::FormSession;

pub use formsmith_fields::{
    Archetype, FieldDefaults, FieldDescriptor, FieldId, FieldKind, FieldUpdate, FieldValue, Schema,
    SchemaEvent,
};
pub use formsmith_runtime::{FieldErrors, FormState, Payload, PayloadKey, Submission};
