//! Tests for position assignment

use std::collections::HashSet;

use taskflow::core::models::{LayoutSettings, Position, Settings, TaskStatus};
use taskflow::core::services::{assign_positions, compute_layout};

use crate::common::task;

#[test]
fn one_position_per_task() {
    let tasks = vec![
        task("a", "todo", 0),
        task("b", "in-progress", 0),
        task("c", "done", 0),
        task("d", "todo", 0),
    ];

    let positions = assign_positions(&tasks, &LayoutSettings::default());
    assert_eq!(positions.len(), tasks.len());

    let layout = compute_layout(&tasks, &[], &Settings::default());
    let ids: HashSet<&str> = layout.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids.len(), tasks.len());
}

#[test]
fn empty_input_yields_no_positions() {
    assert!(assign_positions(&[], &LayoutSettings::default()).is_empty());
}

#[test]
fn shared_status_shares_base_x() {
    let settings = LayoutSettings::default();
    let tasks: Vec<_> = (0..5).map(|i| task(&format!("r{i}"), "review", i)).collect();

    let positions = assign_positions(&tasks, &settings);

    for (row, position) in positions.iter().enumerate() {
        let shift = if row % 2 == 0 { 0.0 } else { settings.stagger };
        assert_eq!(position.x - shift, settings.columns.review.x);
    }
}

#[test]
fn y_offsets_step_by_row_spacing() {
    let tasks: Vec<_> = (0..4).map(|i| task(&format!("t{i}"), "in-progress", i)).collect();

    let ys: Vec<f64> = assign_positions(&tasks, &LayoutSettings::default())
        .iter()
        .map(|p| p.y - 50.0)
        .collect();

    assert_eq!(ys, [0.0, 200.0, 400.0, 600.0]);
}

#[test]
fn rows_follow_input_order_not_creation_order() {
    let tasks = vec![task("late", "todo", 100), task("early", "todo", 1)];

    let positions = assign_positions(&tasks, &LayoutSettings::default());

    assert_eq!(positions, [Position::new(50.0, 50.0), Position::new(100.0, 250.0)]);
}

#[test]
fn unknown_status_falls_back_to_todo_column() {
    let tasks = vec![task("x", "archived", 0)];

    let positions = assign_positions(&tasks, &LayoutSettings::default());

    assert_eq!(positions, [LayoutSettings::default().columns.base_for(&TaskStatus::Todo)]);
}

#[test]
fn custom_settings_move_columns() {
    let mut settings = LayoutSettings::default();
    settings.columns.done = Position::new(2000.0, 10.0);
    settings.row_spacing = 100.0;
    settings.stagger = 0.0;

    let tasks = vec![task("a", "done", 0), task("b", "done", 1)];
    let positions = assign_positions(&tasks, &settings);

    assert_eq!(positions, [Position::new(2000.0, 10.0), Position::new(2000.0, 110.0)]);
}
