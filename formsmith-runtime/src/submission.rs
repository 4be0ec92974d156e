//! Submission outcomes and payloads.

use std::fmt;
use std::str::FromStr;

use formsmith_fields::{FieldId, FieldValue};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::RuntimeError;

/// Error message per failing field, in schema order.
pub type FieldErrors = IndexMap<FieldId, String>;

/// Submitted values in schema order, keyed per [`PayloadKey`].
pub type Payload = IndexMap<String, FieldValue>;

/// Message shown under a required field that was left empty.
pub fn required_message(label: &str) -> String {
    format!("{label} is required")
}

/// How submitted values are keyed.
///
/// Labels are friendlier for consumers but are not unique; with
/// `Label`, a later field silently takes over an earlier field's slot.
/// Parsed case-insensitively, from config files and the command line alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum PayloadKey {
    #[default]
    Id,
    Label,
}

impl fmt::Display for PayloadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadKey::Id => f.write_str("id"),
            PayloadKey::Label => f.write_str("label"),
        }
    }
}

impl FromStr for PayloadKey {
    type Err = RuntimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(PayloadKey::Id),
            "label" => Ok(PayloadKey::Label),
            _ => Err(RuntimeError::UnknownPayloadKey { name: s.into() }),
        }
    }
}

impl TryFrom<String> for PayloadKey {
    type Error = RuntimeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Submission {
    /// At least one required field is empty. Entered values are kept.
    Rejected {
        errors: FieldErrors,
        /// First failing field in schema order, for focusing
        #[serde(rename = "firstInvalidId")]
        first_invalid_id: FieldId,
    },
    /// Every required field has a value. The form state has been reset.
    Accepted { payload: Payload },
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted { .. })
    }

    pub fn payload(&self) -> Option<&Payload> {
        match self {
            Submission::Accepted { payload } => Some(payload),
            Submission::Rejected { .. } => None,
        }
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Submission::Rejected { errors, .. } => Some(errors),
            Submission::Accepted { .. } => None,
        }
    }

    pub fn first_invalid_id(&self) -> Option<&FieldId> {
        match self {
            Submission::Rejected {
                first_invalid_id, ..
            } => Some(first_invalid_id),
            Submission::Accepted { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_key_parsing() {
        assert_eq!("id".parse::<PayloadKey>().unwrap(), PayloadKey::Id);
        assert_eq!("Label".parse::<PayloadKey>().unwrap(), PayloadKey::Label);
        assert!("name".parse::<PayloadKey>().is_err());
        assert_eq!(PayloadKey::default(), PayloadKey::Id);
    }

    #[test]
    fn payload_key_deserializes_like_from_str() {
        let key: PayloadKey = serde_json::from_str(r#""Label""#).unwrap();
        assert_eq!(key, PayloadKey::Label);
        assert_eq!(serde_json::to_value(PayloadKey::Label).unwrap(), "label");
        assert!(serde_json::from_str::<PayloadKey>(r#""name""#).is_err());
    }

    #[test]
    fn rejected_json_shape() {
        let mut errors = FieldErrors::new();
        errors.insert("f1".into(), required_message("Name"));
        let submission = Submission::Rejected {
            errors,
            first_invalid_id: "f1".into(),
        };
        assert_eq!(
            serde_json::to_value(&submission).unwrap(),
            json!({
                "status": "rejected",
                "errors": {"f1": "Name is required"},
                "firstInvalidId": "f1"
            })
        );
        assert!(submission.payload().is_none());
        assert_eq!(submission.first_invalid_id().unwrap().as_str(), "f1");
    }

    #[test]
    fn accepted_json_shape() {
        let mut payload = Payload::new();
        payload.insert("f1".into(), FieldValue::from("Ann"));
        payload.insert("c1".into(), FieldValue::Bool(false));
        let submission = Submission::Accepted { payload };
        assert_eq!(
            serde_json::to_string(&submission).unwrap(),
            r#"{"status":"accepted","payload":{"f1":"Ann","c1":false}}"#
        );
        assert!(submission.is_accepted());
    }
}
