//! Wire DTOs for the project REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the server's camelCase JSON. Audit fields arrive either
//! as JSON `null` or as the literal string `"null"`; both decode to `None`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// A project as returned by `/v1/projects` endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project identifier (UUID string).
    pub id: String,
    pub short_code: String,
    pub short_name: String,
    pub long_name: String,
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub created_by: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub changed_at: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub changed_by: Option<String>,
    /// Set once the project has been soft-deleted.
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub deleted_at: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub deleted_by: Option<String>,
}

impl Project {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// The writable fields of this project, e.g. to prefill an edit form.
    pub fn draft(&self) -> ProjectDraft {
        ProjectDraft {
            short_code: self.short_code.clone(),
            short_name: self.short_name.clone(),
            long_name: self.long_name.clone(),
            description: self.description.clone(),
        }
    }
}

/// Request body for create (`POST`) and edit (`PUT`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub short_code: String,
    pub short_name: String,
    pub long_name: String,
    pub description: String,
}

impl ProjectDraft {
    pub fn new(
        short_code: impl Into<String>,
        short_name: impl Into<String>,
        long_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            short_code: short_code.into(),
            short_name: short_name.into(),
            long_name: long_name.into(),
            description: description.into(),
        }
    }
}

/// Externally authenticated user. `token` is the bearer JWT sent with every
/// API call made on the user's behalf.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub token: String,
}

/// Options accepted by the project-list call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Ask for soft-deleted projects too. Not sent on the wire; see
    /// `net::api::list_projects_request`.
    pub include_deleted: bool,
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty() && s != "null"))
}
