use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

pub mod response;

pub use response::{messages, ApiResponse, HealthResponse};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Body of a create or full replace request.
///
/// Missing fields deserialize to the empty string so that a create request
/// without a name or email reaches validation instead of failing to parse.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct UserInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl UserInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Both fields must be non-empty. Whitespace counts as content.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() || self.email.is_empty() {
            return Err(StoreError::Validation(
                "name and email are required".into(),
            ));
        }
        Ok(())
    }
}

/// Partial update: only the fields present are written.
///
/// Any other key in the incoming JSON, `id` included, is dropped during
/// deserialization, so a patch can never change a user's identity.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }

    pub fn apply(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
    }
}

/// The records a fresh service starts with.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "Juan Pérez", "juan@example.com"),
        User::new(2, "María García", "maria@example.com"),
        User::new(3, "Carlos López", "carlos@example.com"),
    ]
}

// Current time as an ISO 8601 UTC string with millisecond precision
pub fn now_str() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_rejects_empty_fields() {
        assert!(UserInput::new("", "a@x.com").validate().is_err());
        assert!(UserInput::new("A", "").validate().is_err());
        assert!(UserInput::default().validate().is_err());
        assert!(UserInput::new(" ", "a@x.com").validate().is_ok());
    }

    #[test]
    fn test_input_missing_fields_default_to_empty() {
        let input: UserInput = serde_json::from_value(json!({ "name": "A" })).unwrap();
        assert_eq!(input.name, "A");
        assert_eq!(input.email, "");
    }

    #[test]
    fn test_patch_ignores_id_and_unknown_keys() {
        let patch: UserPatch =
            serde_json::from_value(json!({ "id": 99, "email": "new@x.com", "age": 3 })).unwrap();
        assert_eq!(patch.name, None);
        assert_eq!(patch.email.as_deref(), Some("new@x.com"));

        let mut user = User::new(7, "Ana", "ana@x.com");
        patch.apply(&mut user);
        assert_eq!(user, User::new(7, "Ana", "new@x.com"));
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let patch = UserPatch::default();
        assert!(patch.is_empty());

        let mut user = User::new(1, "Ana", "ana@x.com");
        patch.apply(&mut user);
        assert_eq!(user, User::new(1, "Ana", "ana@x.com"));
    }

    #[test]
    fn test_seed_users_have_unique_increasing_ids() {
        let ids: Vec<u64> = seed_users().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_now_str_is_parseable_utc() {
        let now = now_str();
        assert!(now.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&now).is_ok());
    }
}
