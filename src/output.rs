//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{EdgeKind, Layout, TaskStatus};
use crate::core::services::group_by_status;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn status_heading(status: &TaskStatus) -> String {
    let name = status.as_str();
    match status {
        TaskStatus::Todo => name.bold().to_string(),
        TaskStatus::InProgress => name.blue().bold().to_string(),
        TaskStatus::Review => name.yellow().bold().to_string(),
        TaskStatus::Done => name.green().bold().to_string(),
        TaskStatus::Other(_) => name.dimmed().to_string(),
    }
}

/// Result of a layout computation
#[derive(Debug, Serialize)]
pub struct LayoutResult {
    /// The computed layout
    #[serde(flatten)]
    pub layout: Layout,
}

impl LayoutResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.layout.nodes.is_empty() {
            println!("No tasks.");
            return;
        }

        let tasks: Vec<_> = self.layout.nodes.iter().map(|n| n.data.task.clone()).collect();
        for bucket in &group_by_status(&tasks) {
            println!("{} ({})", status_heading(bucket.status()), bucket.len());
            for task in bucket.tasks() {
                let position = self.layout.node(&task.id).map(|n| n.position).unwrap_or_default();
                println!("  [{}] {} @ ({}, {})", task.id, task.title, position.x, position.y);
            }
            println!();
        }

        println!("Edges: {}", self.layout.edges.len());
        for edge in &self.layout.edges {
            println!("  {} -> {} ({})", edge.source, edge.target, edge.kind);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Tasks counted for one status
#[derive(Debug, Serialize)]
pub struct BucketCount {
    /// Status name
    pub status: String,
    /// Number of tasks holding it
    pub count: usize,
}

/// Edges counted per heuristic
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct EdgeCounts {
    /// Same-status continuation edges
    pub continuation: usize,
    /// Cross-status progression edges
    pub progression: usize,
    /// Shared-assignee collaboration edges
    pub collaboration: usize,
}

/// Result of a summary operation
#[derive(Debug, Serialize)]
pub struct SummaryResult {
    /// Number of tasks
    pub total: usize,
    /// Task counts per status, in first-appearance order
    pub buckets: Vec<BucketCount>,
    /// Edge counts per heuristic
    pub edges: EdgeCounts,
}

impl SummaryResult {
    /// Summarize a layout
    #[must_use]
    pub fn from_layout(layout: &Layout) -> Self {
        let tasks: Vec<_> = layout.nodes.iter().map(|n| n.data.task.clone()).collect();
        let buckets = group_by_status(&tasks)
            .iter()
            .map(|b| BucketCount {
                status: b.status().to_string(),
                count: b.len(),
            })
            .collect();

        Self {
            total: tasks.len(),
            buckets,
            edges: EdgeCounts {
                continuation: layout.edges_of(EdgeKind::Continuation).count(),
                progression: layout.edges_of(EdgeKind::Progression).count(),
                collaboration: layout.edges_of(EdgeKind::Collaboration).count(),
            },
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Tasks: {}", self.total);
        for bucket in &self.buckets {
            println!("  {:<12} {}", bucket.status, bucket.count);
        }
        println!("\nEdges:");
        println!("  {:<12} {}", "continuation", self.edges.continuation);
        println!("  {:<12} {}", "progression", self.edges.progression);
        println!("  {:<12} {}", "collaboration", self.edges.collaboration);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of an export operation
#[derive(Debug, Serialize)]
pub struct ExportResult {
    /// Where the file was written
    pub path: String,
    /// Workflow name
    pub workflow: String,
    /// Number of exported nodes
    pub nodes: usize,
    /// Number of exported edges
    pub edges: usize,
}

impl ExportResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Exported {} to {}", self.workflow, self.path.green());
                println!("  Nodes: {}", self.nodes);
                println!("  Edges: {}", self.edges);
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
