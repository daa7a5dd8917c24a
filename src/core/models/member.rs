//! Team member model
//!
//! Members come from the team directory and are attached to the graph nodes of
//! the tasks they are assigned to.

use serde::{Deserialize, Serialize};

/// A member of the team directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    /// Unique identifier, referenced by `Task::assigned_members`
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Role on the team (e.g., "designer")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl TeamMember {
    /// Create a member with just an ID and a name
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: None,
            role: None,
            avatar: None,
        }
    }
}
