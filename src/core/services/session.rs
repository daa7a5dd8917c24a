//! Flow session
//!
//! Presenter-side state for one flow view. Nodes can be dragged around, but
//! moves never feed back into position assignment: `reset` recomputes the
//! layout from the original input and drops every move.

use chrono::{DateTime, Utc};
use log::debug;

use crate::core::models::{Layout, Position, Settings, Task, TeamMember};
use crate::core::ports::{MemberDirectory, TaskSource};
use crate::error::{FlowError, Result};

use super::export::ExportDocument;
use super::layout::compute_layout;

/// State of one flow view
#[derive(Debug, Clone)]
pub struct FlowSession {
    tasks: Vec<Task>,
    members: Vec<TeamMember>,
    settings: Settings,
    layout: Layout,
}

impl FlowSession {
    /// Start a session over an input
    #[must_use]
    pub fn new(tasks: Vec<Task>, members: Vec<TeamMember>, settings: Settings) -> Self {
        let layout = compute_layout(&tasks, &members, &settings);
        Self {
            tasks,
            members,
            settings,
            layout,
        }
    }

    /// Start a session from a task source and a member directory
    pub fn load(
        source: &dyn TaskSource,
        directory: &dyn MemberDirectory,
        settings: Settings,
    ) -> Result<Self> {
        let tasks = source.load_tasks()?;
        let members = directory.load_members()?;
        debug!("Loaded {} tasks and {} members", tasks.len(), members.len());
        Ok(Self::new(tasks, members, settings))
    }

    /// Current nodes and edges
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The input the layout was computed from
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Move a node, as a drag in the presenter would
    pub fn move_node(&mut self, id: &str, position: Position) -> Result<()> {
        let node = self
            .layout
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| FlowError::UnknownNode(id.to_string()))?;
        node.position = position;
        Ok(())
    }

    /// Replace the input; the new layout supersedes the old one
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.reset();
    }

    /// Discard moves by recomputing from the original input
    pub fn reset(&mut self) {
        self.layout = compute_layout(&self.tasks, &self.members, &self.settings);
    }

    /// Export the current positions and edges
    #[must_use]
    pub fn export(&self, workflow: &str, timestamp: DateTime<Utc>) -> ExportDocument {
        ExportDocument::from_layout(&self.layout, workflow, timestamp)
    }
}
