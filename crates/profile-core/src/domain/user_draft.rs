//! Candidate user fields supplied by a caller, before validation

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use profile_shared::constants::{DEFAULT_FIRST_NAME, DEFAULT_LAST_NAME};

use super::User;

/// Caller-supplied profile fields. Absent and explicitly-null fields are both `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub login: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Names given to users created without them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDefaults {
    pub first_name: String,
    pub last_name: String,
}

impl Default for UserDefaults {
    fn default() -> Self {
        Self {
            first_name: DEFAULT_FIRST_NAME.to_string(),
            last_name: DEFAULT_LAST_NAME.to_string(),
        }
    }
}

impl UserDraft {
    pub fn new(login: &str, first_name: &str, last_name: &str) -> Self {
        Self {
            login: Some(login.to_string()),
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
        }
    }

    /// Fills absent names from `defaults`; present values, even empty ones, are kept.
    pub fn with_creation_defaults(mut self, defaults: &UserDefaults) -> Self {
        self.first_name.get_or_insert_with(|| defaults.first_name.clone());
        self.last_name.get_or_insert_with(|| defaults.last_name.clone());
        self
    }

    pub fn into_user(self, id: Uuid) -> User {
        User::with_id(
            id,
            self.login.unwrap_or_default(),
            self.first_name.unwrap_or_default(),
            self.last_name.unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_defaults_fill_missing_names() {
        let draft = UserDraft {
            login: Some("anonymous".into()),
            ..Default::default()
        }
        .with_creation_defaults(&UserDefaults::default());

        assert_eq!(draft.first_name.as_deref(), Some("John"));
        assert_eq!(draft.last_name.as_deref(), Some("Doe"));
    }

    #[test]
    fn test_creation_defaults_keep_supplied_names() {
        let draft = UserDraft::new("mjackson", "Michael", "").with_creation_defaults(&UserDefaults::default());
        assert_eq!(draft.first_name.as_deref(), Some("Michael"));
        assert_eq!(draft.last_name.as_deref(), Some(""));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let draft: UserDraft =
            serde_json::from_str(r#"{"login":"Anon","firstName":"Vendetta","lastName":null}"#).unwrap();
        assert_eq!(draft.login.as_deref(), Some("Anon"));
        assert_eq!(draft.first_name.as_deref(), Some("Vendetta"));
        assert!(draft.last_name.is_none());
    }
}
