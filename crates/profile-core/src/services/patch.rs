//! Partial update documents.
//!
//! A patch is applied to a blank template, never to the stored record: every
//! field the caller wants to keep must be supplied again as an operation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::UserDraft;

/// One `{op, path, value}` instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchOperation {
    pub op: String,
    pub path: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl PatchOperation {
    pub fn replace(path: &str, value: &str) -> Self {
        Self {
            op: "replace".to_string(),
            path: path.to_string(),
            value: Some(value.to_string()),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PatchError {
    #[error("Patch document has no operations")]
    EmptyDocument,

    #[error("Unsupported patch operation: {0}")]
    UnsupportedOperation(String),

    #[error("Unknown patch path: {0}")]
    UnknownPath(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatchField {
    Login,
    FirstName,
    LastName,
}

impl PatchField {
    fn from_path(path: &str) -> Option<Self> {
        let name = path.strip_prefix('/').unwrap_or(path);
        match name.to_ascii_lowercase().as_str() {
            "login" => Some(PatchField::Login),
            "firstname" => Some(PatchField::FirstName),
            "lastname" => Some(PatchField::LastName),
            _ => None,
        }
    }
}

/// Applies `operations` in order to an empty draft. Later operations on the same
/// field overwrite earlier ones. A document without operations is rejected.
pub fn apply_patch(operations: &[PatchOperation]) -> Result<UserDraft, PatchError> {
    if operations.is_empty() {
        return Err(PatchError::EmptyDocument);
    }

    let mut draft = UserDraft::default();

    for operation in operations {
        if !operation.op.eq_ignore_ascii_case("replace") {
            return Err(PatchError::UnsupportedOperation(operation.op.clone()));
        }

        let field = PatchField::from_path(&operation.path)
            .ok_or_else(|| PatchError::UnknownPath(operation.path.clone()))?;

        let value = operation.value.clone();
        match field {
            PatchField::Login => draft.login = value,
            PatchField::FirstName => draft.first_name = value,
            PatchField::LastName => draft.last_name = value,
        }
    }

    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_all_fields() {
        let draft = apply_patch(&[
            PatchOperation::replace("login", "Anon"),
            PatchOperation::replace("firstName", "Vendetta"),
            PatchOperation::replace("lastName", "V"),
        ])
        .unwrap();

        assert_eq!(draft, UserDraft::new("Anon", "Vendetta", "V"));
    }

    #[test]
    fn test_untouched_fields_stay_blank() {
        let draft = apply_patch(&[PatchOperation::replace("login", "Anon")]).unwrap();
        assert_eq!(draft.login.as_deref(), Some("Anon"));
        assert!(draft.first_name.is_none());
        assert!(draft.last_name.is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let draft = apply_patch(&[
            PatchOperation::replace("login", "First"),
            PatchOperation::replace("/Login", "Second"),
        ])
        .unwrap();
        assert_eq!(draft.login.as_deref(), Some("Second"));
    }

    #[test]
    fn test_json_pointer_paths() {
        let draft = apply_patch(&[PatchOperation::replace("/lastName", "V")]).unwrap();
        assert_eq!(draft.last_name.as_deref(), Some("V"));
    }

    #[test]
    fn test_unknown_path_rejected() {
        let result = apply_patch(&[PatchOperation::replace("gamesPlayed", "5")]);
        assert_eq!(result, Err(PatchError::UnknownPath("gamesPlayed".to_string())));
    }

    #[test]
    fn test_empty_document_rejected() {
        assert_eq!(apply_patch(&[]), Err(PatchError::EmptyDocument));
    }

    #[test]
    fn test_unsupported_operation_rejected() {
        let operation = PatchOperation {
            op: "remove".to_string(),
            path: "login".to_string(),
            value: None,
        };
        let result = apply_patch(&[operation]);
        assert_eq!(result, Err(PatchError::UnsupportedOperation("remove".to_string())));
    }

    #[test]
    fn test_parse_document() {
        let operations: Vec<PatchOperation> = serde_json::from_str(
            r#"[{"op":"replace","path":"login","value":""},{"op":"replace","path":"firstName","value":null}]"#,
        )
        .unwrap();
        let draft = apply_patch(&operations).unwrap();
        assert_eq!(draft.login.as_deref(), Some(""));
        assert!(draft.first_name.is_none());
    }
}
