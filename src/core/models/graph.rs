//! Graph model
//!
//! The node/edge shapes handed to the graph presenter. Field names follow the
//! presenter's JSON contract (`strokeWidth`, `teamMembers`, ...).

use serde::{Deserialize, Serialize};

use super::{Task, TeamMember};

/// A 2-D coordinate on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Position {
    /// Create a position
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which heuristic produced an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Consecutive tasks within one status, by creation time
    Continuation,
    /// A task flowing into the next status column
    Progression,
    /// Two tasks sharing an assigned member
    Collaboration,
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Continuation => write!(f, "continuation"),
            Self::Progression => write!(f, "progression"),
            Self::Collaboration => write!(f, "collaboration"),
        }
    }
}

/// Stroke styling for an edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    /// Stroke color (CSS color string)
    pub stroke: String,
    /// Stroke width in pixels
    pub stroke_width: u32,
    /// Dash pattern; `None` draws a solid line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_dasharray: Option<String>,
    /// Opacity between 0 and 1; `None` means fully opaque
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

/// A directed edge between two tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEdge {
    /// Edge identifier (not guaranteed unique across heuristics)
    pub id: String,
    /// Source task ID
    pub source: String,
    /// Target task ID
    pub target: String,
    /// Stroke styling
    pub style: EdgeStyle,
    /// Whether the presenter animates the edge
    pub animated: bool,
    /// Optional text drawn on the edge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Heuristic that produced the edge
    pub kind: EdgeKind,
}

/// Payload attached to a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    /// The task the node represents
    pub task: Task,
    /// Directory entries for the task's assigned members
    pub team_members: Vec<TeamMember>,
}

/// A positioned node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    /// Task ID
    pub id: String,
    /// Canvas position
    pub position: Position,
    /// Task payload
    pub data: NodeData,
}

/// Result of one layout pass
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    /// One node per input task, in input order
    pub nodes: Vec<FlowNode>,
    /// Synthesized edges, grouped by heuristic
    pub edges: Vec<FlowEdge>,
}

impl Layout {
    /// Look up a node by task ID
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Edges produced by one heuristic
    pub fn edges_of(&self, kind: EdgeKind) -> impl Iterator<Item = &FlowEdge> {
        self.edges.iter().filter(move |e| e.kind == kind)
    }

    /// Whether the layout has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
