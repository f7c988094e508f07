use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod content;
pub mod protocol;

pub use content::*;

// =========================================================
// 账户模型 (Account Models)
// =========================================================

/// Platform role attached to every account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
    Moderator,
    Host,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::User, Role::Admin, Role::Moderator, Role::Host];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Moderator => "moderator",
            Role::Host => "host",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The account as the backend serializes it.
///
/// The client only ever holds a cached copy; the backend owns the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    /// "first last", or the username when both are blank.
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub points: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.username
        } else {
            &self.name
        }
    }
}

/// Partial user record merged into the cached user without a round trip.
///
/// Every `None` field leaves the cached value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserPatch {
    pub fn points(points: i64) -> Self {
        Self {
            points: Some(points),
            ..Default::default()
        }
    }

    pub fn apply(self, user: &mut User) {
        if let Some(v) = self.username {
            user.username = v;
        }
        if let Some(v) = self.name {
            user.name = v;
        }
        if let Some(v) = self.email {
            user.email = v;
        }
        if let Some(v) = self.first_name {
            user.first_name = v;
        }
        if let Some(v) = self.last_name {
            user.last_name = v;
        }
        if let Some(v) = self.role {
            user.role = v;
        }
        if let Some(v) = self.avatar {
            user.avatar = Some(v);
        }
        if let Some(v) = self.points {
            user.points = v;
        }
        if let Some(v) = self.updated_at {
            user.updated_at = v;
        }
    }
}

// =========================================================
// 凭据 (Credentials)
// =========================================================

/// Login form input. Lives only for the duration of a submit.
#[derive(Clone, Default, PartialEq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Registration form input.
#[derive(Clone, Default, PartialEq)]
pub struct RegisterCredentials {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for RegisterCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterCredentials")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

// =========================================================
// 通用响应 (Common Responses)
// =========================================================

/// `{ "user": ..., "message": ... }` returned by login and register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    #[serde(default)]
    pub message: Option<String>,
}

/// `{ "user": ... }` returned by the current-user probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEnvelope {
    pub user: User,
}

/// `{ "message": ... }` returned by action endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn user_json() -> serde_json::Value {
        json!({
            "id": 7,
            "username": "sara",
            "name": "Sara Q",
            "email": "sara@example.com",
            "first_name": "Sara",
            "last_name": "Q",
            "role": "host",
            "avatar": null,
            "points": 120,
            "created_at": "2024-03-01T10:00:00.123456Z",
            "updated_at": "2024-03-02T10:00:00Z"
        })
    }

    #[test]
    fn decodes_backend_user() {
        let user: User = serde_json::from_value(user_json()).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.role, Role::Host);
        assert_eq!(user.points, 120);
        assert_eq!(user.avatar, None);
        assert_eq!(user.display_name(), "Sara Q");
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let mut user: User = serde_json::from_value(user_json()).unwrap();
        user.name = "  ".into();
        assert_eq!(user.display_name(), "sara");
    }

    #[test]
    fn missing_role_defaults_to_user() {
        let mut value = user_json();
        value.as_object_mut().unwrap().remove("role");
        let user: User = serde_json::from_value(value).unwrap();
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn patch_only_touches_given_fields() {
        let original: User = serde_json::from_value(user_json()).unwrap();
        let mut patched = original.clone();
        UserPatch::points(500).apply(&mut patched);

        assert_eq!(patched.points, 500);
        assert_eq!(
            User {
                points: original.points,
                ..patched.clone()
            },
            original
        );
    }

    #[test]
    fn credentials_debug_hides_password() {
        let creds = LoginCredentials::new("a@b.c", "hunter2");
        let printed = format!("{:?}", creds);
        assert!(printed.contains("a@b.c"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn role_roundtrips_lowercase() {
        for role in Role::ALL {
            let encoded = serde_json::to_value(role).unwrap();
            assert_eq!(encoded, json!(role.as_str()));
        }
    }
}
