use serde::{Deserialize, Serialize};

/// Identifier sent in create requests so the backend assigns a real one
pub const NEW_USER_ID: i64 = -1;

/// A user record as exchanged with the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub user_status: String,
    #[serde(default)]
    pub department: Option<String>,
}

impl User {
    /// Whether this record has not been created on the backend yet
    pub fn is_new(&self) -> bool {
        self.user_id == NEW_USER_ID
    }

    /// Full display name ("First Last")
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A partial user record. Only the fields that are set are serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl UserPatch {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none()
            && self.user_name.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.user_status.is_none()
            && self.department.is_none()
    }
}

impl From<User> for UserPatch {
    fn from(user: User) -> Self {
        Self {
            user_id: Some(user.user_id),
            user_name: Some(user.user_name),
            first_name: Some(user.first_name),
            last_name: Some(user.last_name),
            email: Some(user.email),
            user_status: Some(user.user_status),
            department: user.department,
        }
    }
}
