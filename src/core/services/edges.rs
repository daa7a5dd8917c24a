//! Edge synthesis
//!
//! Three independent heuristics connect tasks. Their results are concatenated
//! in a fixed order (continuation, progression, collaboration) and never
//! deduplicated, so one ordered pair may appear under several kinds.

use crate::core::models::{EdgeKind, EdgeStyle, FlowEdge, Palette, Settings, Task, TaskStatus};

use super::grouping::{StatusBuckets, group_by_status};

const DASHED: &str = "5,5";
const DOTTED: &str = "2,4";
const COLLABORATION_OPACITY: f64 = 0.4;
const COLLABORATION_LABEL: &str = "Collaboration";

/// Style and animation for edges keyed off a status
///
/// Edges into or within `done` are animated, solid and thicker.
fn status_style(status: &TaskStatus, palette: &Palette) -> (EdgeStyle, bool) {
    let stroke = palette.color_for(status).to_string();
    if status.is_done() {
        let style = EdgeStyle {
            stroke,
            stroke_width: 3,
            stroke_dasharray: None,
            opacity: None,
        };
        (style, true)
    } else {
        let style = EdgeStyle {
            stroke,
            stroke_width: 2,
            stroke_dasharray: Some(DASHED.to_string()),
            opacity: None,
        };
        (style, false)
    }
}

/// Connect consecutive tasks of each status, oldest first
///
/// A bucket of `n` tasks yields `n - 1` edges. The sort is stable, so tasks
/// with equal (or missing) timestamps keep their input order.
#[must_use]
pub fn continuation_edges(buckets: &StatusBuckets<'_>, palette: &Palette) -> Vec<FlowEdge> {
    let mut edges = Vec::new();

    for bucket in buckets {
        let mut ordered = bucket.tasks().to_vec();
        ordered.sort_by_key(|t| t.created_at);

        let (style, animated) = status_style(bucket.status(), palette);
        for pair in ordered.windows(2) {
            if let [source, target] = pair {
                edges.push(FlowEdge {
                    id: format!("{}{}", source.id, target.id),
                    source: source.id.clone(),
                    target: target.id.clone(),
                    style: style.clone(),
                    animated,
                    label: None,
                    kind: EdgeKind::Continuation,
                });
            }
        }
    }

    edges
}

/// Connect each task to a task of the next status column
///
/// Task `i` of the earlier status links to task `i % m` of the later one, so
/// a smaller later column is reused cyclically. Nothing is produced for a
/// pair of statuses where either side is empty.
#[must_use]
pub fn progression_edges(buckets: &StatusBuckets<'_>, palette: &Palette) -> Vec<FlowEdge> {
    let mut edges = Vec::new();

    for pair in TaskStatus::PROGRESSION.windows(2) {
        let [from, to] = pair else { continue };
        let earlier = buckets.get(from);
        let later = buckets.get(to);
        if earlier.is_empty() || later.is_empty() {
            continue;
        }

        let (style, animated) = status_style(to, palette);
        for (i, source) in earlier.iter().enumerate() {
            let Some(target) = later.get(i % later.len()) else {
                continue;
            };
            edges.push(FlowEdge {
                id: format!("{}-{}", source.id, target.id),
                source: source.id.clone(),
                target: target.id.clone(),
                style: style.clone(),
                animated,
                label: None,
                kind: EdgeKind::Progression,
            });
        }
    }

    edges
}

/// Connect tasks that share an assigned member
///
/// Each task with assignees links to at most `cap` other tasks sharing a
/// member, taking the first ones in input order.
#[must_use]
pub fn collaboration_edges(tasks: &[Task], cap: usize, palette: &Palette) -> Vec<FlowEdge> {
    let style = EdgeStyle {
        stroke: palette.collaboration.clone(),
        stroke_width: 1,
        stroke_dasharray: Some(DOTTED.to_string()),
        opacity: Some(COLLABORATION_OPACITY),
    };

    tasks
        .iter()
        .filter(|t| !t.assigned_members.is_empty())
        .flat_map(|task| {
            tasks
                .iter()
                .filter(move |other| other.id != task.id && task.shares_member_with(other))
                .take(cap)
                .map(move |other| (task, other))
        })
        .map(|(source, target)| FlowEdge {
            id: format!("collab-{}-{}", source.id, target.id),
            source: source.id.clone(),
            target: target.id.clone(),
            style: style.clone(),
            animated: false,
            label: Some(COLLABORATION_LABEL.to_string()),
            kind: EdgeKind::Collaboration,
        })
        .collect()
}

/// Run all three heuristics over `tasks`
#[must_use]
pub fn synthesize_edges(tasks: &[Task], settings: &Settings) -> Vec<FlowEdge> {
    let buckets = group_by_status(tasks);

    let mut edges = continuation_edges(&buckets, &settings.palette);
    edges.extend(progression_edges(&buckets, &settings.palette));
    edges.extend(collaboration_edges(
        tasks,
        settings.layout.collaboration_cap,
        &settings.palette,
    ));
    edges
}
