//! Layout settings
//!
//! Tunables for position assignment and edge styling. The defaults reproduce
//! the board's stock layout; `crate::config` layers user files on top.

use serde::{Deserialize, Serialize};

use super::{Position, TaskStatus};

/// All tunables, in the shape of the config file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Positioning and edge density
    pub layout: LayoutSettings,
    /// Edge colors
    pub palette: Palette,
}

/// Positioning and edge density tunables
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Base coordinate of each status column
    pub columns: ColumnPositions,
    /// Vertical distance between consecutive tasks of a column
    pub row_spacing: f64,
    /// Horizontal shift applied to odd rows
    pub stagger: f64,
    /// Maximum collaboration edges leaving one task (0 disables them)
    pub collaboration_cap: usize,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            columns: ColumnPositions::default(),
            row_spacing: 200.0,
            stagger: 50.0,
            collaboration_cap: 1,
        }
    }
}

/// Base coordinate of each known status column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnPositions {
    /// `todo` column (also used for unknown statuses)
    pub todo: Position,
    /// `in-progress` column
    pub in_progress: Position,
    /// `review` column
    pub review: Position,
    /// `done` column
    pub done: Position,
}

impl Default for ColumnPositions {
    fn default() -> Self {
        Self {
            todo: Position::new(50.0, 50.0),
            in_progress: Position::new(350.0, 50.0),
            review: Position::new(650.0, 50.0),
            done: Position::new(950.0, 50.0),
        }
    }
}

impl ColumnPositions {
    /// Base coordinate for a status; unknown statuses share the `todo` column
    #[must_use]
    pub const fn base_for(&self, status: &TaskStatus) -> Position {
        match status {
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Review => self.review,
            TaskStatus::Done => self.done,
            TaskStatus::Todo | TaskStatus::Other(_) => self.todo,
        }
    }
}

/// Stroke colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// `todo` edges
    pub todo: String,
    /// `in-progress` edges
    pub in_progress: String,
    /// `review` edges
    pub review: String,
    /// `done` edges
    pub done: String,
    /// Collaboration edges
    pub collaboration: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            todo: "#64748b".to_string(),
            in_progress: "#3b82f6".to_string(),
            review: "#f59e0b".to_string(),
            done: "#10b981".to_string(),
            collaboration: "#8b5cf6".to_string(),
        }
    }
}

impl Palette {
    /// Stroke color for edges keyed off a status
    #[must_use]
    pub fn color_for(&self, status: &TaskStatus) -> &str {
        match status {
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Review => &self.review,
            TaskStatus::Done => &self.done,
            TaskStatus::Todo | TaskStatus::Other(_) => &self.todo,
        }
    }
}
