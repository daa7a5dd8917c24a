//! Layout computation
//!
//! Composes position assignment and edge synthesis into the node/edge graph
//! handed to the presenter.

use log::debug;

use crate::core::models::{FlowNode, Layout, NodeData, Settings, Task, TeamMember};

use super::edges::synthesize_edges;
use super::positions::assign_positions;

/// Directory entries for a task's assignees, in assignment order
///
/// Unknown member IDs are skipped, repeated IDs are listed once.
#[must_use]
pub fn members_for(task: &Task, directory: &[TeamMember]) -> Vec<TeamMember> {
    let mut found: Vec<TeamMember> = Vec::new();
    for id in &task.assigned_members {
        if found.iter().any(|m| m.id == *id) {
            continue;
        }
        if let Some(member) = directory.iter().find(|m| m.id == *id) {
            found.push(member.clone());
        }
    }
    found
}

/// Compute the full layout for a task list
///
/// Pure and deterministic: the same input always gives the same nodes and
/// the same edges in the same order.
#[must_use]
pub fn compute_layout(tasks: &[Task], members: &[TeamMember], settings: &Settings) -> Layout {
    let positions = assign_positions(tasks, &settings.layout);
    let edges = synthesize_edges(tasks, settings);

    let nodes: Vec<FlowNode> = tasks
        .iter()
        .zip(positions)
        .map(|(task, position)| FlowNode {
            id: task.id.clone(),
            position,
            data: NodeData {
                task: task.clone(),
                team_members: members_for(task, members),
            },
        })
        .collect();

    debug!("Computed layout: {} nodes, {} edges", nodes.len(), edges.len());

    Layout { nodes, edges }
}
