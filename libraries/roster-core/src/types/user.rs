/// User domain types
use crate::types::UserId;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Account role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Administrative account
    Admin,
    /// Regular account (the default)
    #[default]
    User,
}

/// User account record
///
/// Wire format is camelCase JSON; optional fields are omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, assigned at creation and immutable thereafter
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Primary contact key; required non-empty at creation
    pub email: String,

    /// Account role
    pub role: Role,

    /// Optional ISO date of birth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    /// Creation timestamp (RFC 3339), stamped once
    pub created_at: String,

    /// Optional given name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Optional family name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Optional contact phone, carried but not validated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Payload for creating a user
///
/// Only `email` is required; everything else falls back to a default at
/// creation time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    /// Explicit display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Contact email; creation fails without it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Account role, defaults to `user`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    /// Optional ISO date of birth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    /// Optional given name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Optional family name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Optional contact phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl CreateUser {
    /// Resolve the display name: explicit `name`, else first/last joined and
    /// trimmed, else the literal fallback.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref() {
            if !name.is_empty() {
                return name.to_string();
            }
        }

        let full = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        );
        let full = full.trim();

        if full.is_empty() {
            "Unknown User".to_string()
        } else {
            full.to_string()
        }
    }

    /// Build a full record with a freshly generated id and creation timestamp.
    pub fn into_user(self) -> User {
        let name = self.display_name();
        User {
            id: UserId::generate(),
            name,
            email: self.email.unwrap_or_default(),
            role: self.role.unwrap_or_default(),
            date_of_birth: self.date_of_birth,
            created_at: Utc::now().to_rfc3339(),
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
        }
    }
}

/// Partial update for a user
///
/// Shallow merge semantics: only fields present in the payload overwrite the
/// stored record. `id` and `created_at` are never merge targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    /// New display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New contact email (not re-validated)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// New role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    /// New date of birth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,

    /// New given name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// New family name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// New contact phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UpdateUser {
    /// Shallow-merge this payload into an existing record.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(date_of_birth) = &self.date_of_birth {
            user.date_of_birth = Some(date_of_birth.clone());
        }
        if let Some(first_name) = &self.first_name {
            user.first_name = Some(first_name.clone());
        }
        if let Some(last_name) = &self.last_name {
            user.last_name = Some(last_name.clone());
        }
        if let Some(phone) = &self.phone {
            user.phone = Some(phone.clone());
        }
    }
}
