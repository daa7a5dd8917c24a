//! Task model
//!
//! A task is one card on the kanban board. The layout engine treats tasks as
//! immutable values: they are produced by the task backend and only read here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A task record as delivered by the task backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier
    pub id: String,

    /// Short title shown on the card
    #[serde(default)]
    pub title: String,

    /// Optional longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Kanban column the task sits in
    #[serde(default)]
    pub status: TaskStatus,

    /// Priority level
    #[serde(default)]
    pub priority: Priority,

    /// Optional due date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,

    /// When the task was created (absent timestamps sort first)
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// IDs of team members working on the task
    #[serde(default)]
    pub assigned_members: Vec<String>,

    /// Free-text tags
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Task status
///
/// The four board columns are known by their exact wire names; anything else
/// the backend sends (including other spellings such as `Done`) is kept
/// verbatim in [`TaskStatus::Other`] so it can form its own bucket. A `null`
/// status reads as `todo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "String")]
pub enum TaskStatus {
    /// Not started
    #[default]
    Todo,
    /// Being worked on
    InProgress,
    /// Waiting for review
    Review,
    /// Finished
    Done,
    /// A status outside the board's fixed set
    Other(String),
}

impl TaskStatus {
    /// The known statuses in board order
    pub const PROGRESSION: [Self; 4] = [Self::Todo, Self::InProgress, Self::Review, Self::Done];

    /// Canonical wire name (`todo`, `in-progress`, `review`, `done`)
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Review => "review",
            Self::Done => "done",
            Self::Other(s) => s,
        }
    }

    /// Whether this is the terminal `done` status
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Whether this is one of the four board columns
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TaskStatus {
    fn from(s: &str) -> Self {
        match s {
            "todo" => Self::Todo,
            "in-progress" => Self::InProgress,
            "review" => Self::Review,
            "done" => Self::Done,
            _ => Self::Other(s.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for TaskStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.map_or_else(Self::default, Self::from))
    }
}

impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait
    Low,
    /// Normal priority (default)
    #[default]
    Medium,
    /// Should be picked up soon
    High,
    /// Drop everything
    Urgent,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Urgent => write!(f, "urgent"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" | "med" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" | "critical" => Ok(Self::Urgent),
            _ => Err(format!("Invalid priority: {s}. Use: low, medium, high, urgent")),
        }
    }
}

impl Task {
    /// Create a `todo` task with no creation timestamp
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            status: TaskStatus::default(),
            priority: Priority::default(),
            due_date: None,
            created_at: None,
            assigned_members: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Set the status
    #[must_use]
    pub fn with_status(mut self, status: impl Into<TaskStatus>) -> Self {
        self.status = status.into();
        self
    }

    /// Set the creation timestamp
    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Set the assigned member IDs
    #[must_use]
    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assigned_members = members.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this task and `other` share at least one assigned member
    #[must_use]
    pub fn shares_member_with(&self, other: &Self) -> bool {
        self.assigned_members.iter().any(|m| other.assigned_members.contains(m))
    }
}
