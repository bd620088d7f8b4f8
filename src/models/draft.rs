use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use crate::error::{Result, UserDeskError};
use crate::models::{User, UserPatch};

/// Form field of a user draft, named after its wire field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Field {
    UserId,
    UserName,
    FirstName,
    LastName,
    Email,
    UserStatus,
    Department,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::UserId,
        Field::UserName,
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::UserStatus,
        Field::Department,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::UserId => "user_id",
            Field::UserName => "user_name",
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Email => "email",
            Field::UserStatus => "user_status",
            Field::Department => "department",
        }
    }

    /// Column header shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            Field::UserId => "User Id",
            Field::UserName => "User Name",
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::UserStatus => "User Status",
            Field::Department => "Department",
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, Field::UserId)
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Field::UserId | Field::Department)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validation rule a draft field can break
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Required,
    Email,
    StatusLength,
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub rule: Rule,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rule {
            Rule::Required => write!(f, "{} is required", self.field),
            Rule::Email => write!(f, "{} must be a valid email address", self.field),
            Rule::StatusLength => write!(f, "{} must be a single character", self.field),
        }
    }
}

/// Result of validating a draft: pass, or fail with field-level reasons
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DraftValidation {
    errors: Vec<FieldError>,
}

impl DraftValidation {
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Errors reported for one field
    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &FieldError> {
        self.errors.iter().filter(move |e| e.field == field)
    }

    /// `Ok(())` when valid, otherwise the validation itself as the error
    pub fn into_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(UserDeskError::Validation(self))
        }
    }
}

impl fmt::Display for DraftValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return f.write_str("draft is valid");
        }
        let reasons: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        write!(f, "Invalid user: {}", reasons.join("; "))
    }
}

impl std::error::Error for DraftValidation {}

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(
            r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        )
        .expect("email regex must compile")
    })
}

/// Check email-address syntax (local part up to 64 chars, whole address up to 254)
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, _)) = value.split_once('@') else {
        return false;
    };
    if value.len() > 254 || local.is_empty() || local.len() > 64 {
        return false;
    }
    email_regex().is_match(value)
}

/// In-memory, form-bound copy of a user record being created or edited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    user_id: Option<i64>,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub user_status: String,
    pub department: String,
}

impl UserDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only identifier, set only from backend data
    pub fn user_id(&self) -> Option<i64> {
        self.user_id
    }

    /// Current value of a field as text
    pub fn get(&self, field: Field) -> String {
        match field {
            Field::UserId => self.user_id.map(|id| id.to_string()).unwrap_or_default(),
            Field::UserName => self.user_name.clone(),
            Field::FirstName => self.first_name.clone(),
            Field::LastName => self.last_name.clone(),
            Field::Email => self.email.clone(),
            Field::UserStatus => self.user_status.clone(),
            Field::Department => self.department.clone(),
        }
    }

    /// Edit a field. The identifier cannot be edited.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        match field {
            Field::UserId => return Err(UserDeskError::ReadOnlyField(field)),
            Field::UserName => self.user_name = value,
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::UserStatus => self.user_status = value,
            Field::Department => self.department = value,
        }
        Ok(())
    }

    /// Merge the fields present in `patch`; absent fields keep their value
    pub fn apply(&mut self, patch: &UserPatch) {
        if let Some(id) = patch.user_id {
            self.user_id = Some(id);
        }
        if let Some(v) = &patch.user_name {
            self.user_name = v.clone();
        }
        if let Some(v) = &patch.first_name {
            self.first_name = v.clone();
        }
        if let Some(v) = &patch.last_name {
            self.last_name = v.clone();
        }
        if let Some(v) = &patch.email {
            self.email = v.clone();
        }
        if let Some(v) = &patch.user_status {
            self.user_status = v.clone();
        }
        if let Some(v) = &patch.department {
            self.department = v.clone();
        }
    }

    /// Run every field rule against the draft
    pub fn validate(&self) -> DraftValidation {
        let mut errors = Vec::new();

        for field in Field::ALL.iter().filter(|f| f.is_required()) {
            if self.get(*field).trim().is_empty() {
                errors.push(FieldError {
                    field: *field,
                    rule: Rule::Required,
                });
            }
        }

        let email = self.email.trim();
        if !email.is_empty() && !is_valid_email(email) {
            errors.push(FieldError {
                field: Field::Email,
                rule: Rule::Email,
            });
        }

        if self.user_status.trim().chars().count() > 1 {
            errors.push(FieldError {
                field: Field::UserStatus,
                rule: Rule::StatusLength,
            });
        }

        DraftValidation::from_errors(errors)
    }

    /// Build the request body for the given identifier
    pub fn to_user(&self, user_id: i64) -> User {
        let department = self.department.trim();
        User {
            user_id,
            user_name: self.user_name.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            user_status: self.user_status.trim().to_string(),
            department: if department.is_empty() {
                None
            } else {
                Some(department.to_string())
            },
        }
    }
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        let mut draft = UserDraft::new();
        draft.apply(&UserPatch::from(user.clone()));
        draft
    }
}
