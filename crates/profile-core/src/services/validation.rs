// ============================================================================
// Profile Core - Validation Rules
// File: crates/profile-core/src/services/validation.rs
// ============================================================================
//! Field rules for user drafts.
//!
//! The same rule list serves creation, replacement, and patching. Only the
//! requirement on the name fields changes with the mode.

use std::borrow::Cow;
use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{ValidationError, ValidationErrors};

use crate::domain::UserDraft;

static LOGIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}\p{Nd}]+$").expect("LOGIN_REGEX is a valid regex pattern")
});

pub const LOGIN_FIELD: &str = "login";
pub const FIRST_NAME_FIELD: &str = "firstName";
pub const LAST_NAME_FIELD: &str = "lastName";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Names were already defaulted; only the login is checked.
    Creation,
    /// Login, first name and last name must all be present and non-empty.
    FullFields,
}

pub fn validate_user(draft: &UserDraft, mode: ValidationMode) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    match non_empty(draft.login.as_deref()) {
        None => errors.add(LOGIN_FIELD, field_error("required", "Login is required")),
        Some(login) if !LOGIN_REGEX.is_match(login) => errors.add(
            LOGIN_FIELD,
            field_error("login_format", "Login should contain only letters or digits"),
        ),
        Some(_) => {}
    }

    if mode == ValidationMode::FullFields {
        if non_empty(draft.first_name.as_deref()).is_none() {
            errors.add(FIRST_NAME_FIELD, field_error("required", "First name is required"));
        }
        if non_empty(draft.last_name.as_deref()).is_none() {
            errors.add(LAST_NAME_FIELD, field_error("required", "Last name is required"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Flattens validator errors into `{field: [message, ...]}`.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(login: Option<&str>, first: Option<&str>, last: Option<&str>) -> UserDraft {
        UserDraft {
            login: login.map(String::from),
            first_name: first.map(String::from),
            last_name: last.map(String::from),
        }
    }

    #[test]
    fn test_valid_full_fields() {
        let result = validate_user(&draft(Some("Anon"), Some("Vendetta"), Some("V")), ValidationMode::FullFields);
        assert!(result.is_ok());
    }

    #[test]
    fn test_unicode_letters_and_digits_allowed() {
        let result = validate_user(&draft(Some("Пользователь42"), None, None), ValidationMode::Creation);
        assert!(result.is_ok());
    }

    #[test]
    fn test_creation_ignores_missing_names() {
        let result = validate_user(&draft(Some("anonymous"), None, None), ValidationMode::Creation);
        assert!(result.is_ok());
    }

    #[test]
    fn test_missing_login() {
        let errors = validate_user(&draft(None, Some("Michael"), Some("Jackson")), ValidationMode::Creation)
            .unwrap_err();
        let messages = field_messages(&errors);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages["login"], vec!["Login is required".to_string()]);
    }

    #[test]
    fn test_empty_login_is_missing() {
        let errors = validate_user(&draft(Some(""), Some("a"), Some("b")), ValidationMode::FullFields)
            .unwrap_err();
        assert!(field_messages(&errors).contains_key("login"));
    }

    #[test]
    fn test_login_with_disallowed_chars() {
        for login in ["!jackson!", "john doe", "a-b", "user_1", "mail@host"] {
            for mode in [ValidationMode::Creation, ValidationMode::FullFields] {
                let candidate = draft(Some(login), Some("Michael"), Some("Jackson"));
                let errors = validate_user(&candidate, mode).unwrap_err();
                let messages = field_messages(&errors);
                assert_eq!(messages.len(), 1);
                assert_eq!(
                    messages["login"],
                    vec!["Login should contain only letters or digits".to_string()],
                    "login {:?} should be rejected in {:?}",
                    login,
                    mode
                );
            }
        }
    }

    #[test]
    fn test_full_fields_requires_names() {
        let errors = validate_user(&draft(Some("Anon"), Some(""), None), ValidationMode::FullFields)
            .unwrap_err();
        let messages = field_messages(&errors);
        assert!(!messages.contains_key("login"));
        assert_eq!(messages["firstName"], vec!["First name is required".to_string()]);
        assert_eq!(messages["lastName"], vec!["Last name is required".to_string()]);
    }

    #[test]
    fn test_blank_template_reports_every_field() {
        let errors = validate_user(&UserDraft::default(), ValidationMode::FullFields).unwrap_err();
        let messages = field_messages(&errors);
        assert_eq!(messages.len(), 3);
    }
}
