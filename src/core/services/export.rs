//! Export document
//!
//! The file a user downloads from the flow view: workflow name, current node
//! positions with their tasks, the edge list and a timestamp.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::core::models::{FlowEdge, Layout, Position, Task};

/// Suffix appended to the workflow name to form the export filename
pub const EXPORT_SUFFIX: &str = "-task-flow.json";

/// A node as written to the export file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportNode {
    /// Task ID
    pub id: String,
    /// Position at export time
    pub position: Position,
    /// Task payload
    pub task: Task,
}

/// The exported flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Workflow name
    pub workflow: String,
    /// Nodes with positions and tasks
    pub nodes: Vec<ExportNode>,
    /// Edges, verbatim
    pub edges: Vec<FlowEdge>,
    /// Export time, RFC 3339 with millisecond precision
    pub timestamp: String,
}

impl ExportDocument {
    /// Snapshot a layout
    #[must_use]
    pub fn from_layout(layout: &Layout, workflow: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            workflow: workflow.to_string(),
            nodes: layout
                .nodes
                .iter()
                .map(|n| ExportNode {
                    id: n.id.clone(),
                    position: n.position,
                    task: n.data.task.clone(),
                })
                .collect(),
            edges: layout.edges.clone(),
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Filename this document should be saved under
    #[must_use]
    pub fn filename(&self) -> String {
        export_filename(&self.workflow)
    }
}

/// `<workflow-name>-task-flow.json`, with path separators replaced by `-`
#[must_use]
pub fn export_filename(workflow: &str) -> String {
    let name: String = workflow.chars().map(|c| if matches!(c, '/' | '\\') { '-' } else { c }).collect();
    format!("{name}{EXPORT_SUFFIX}")
}
