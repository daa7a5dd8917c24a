//! Tests for output formatting

use taskflow::core::models::Settings;
use taskflow::core::services::compute_layout;
use taskflow::output::{ExportResult, LayoutResult, OperationResult, SummaryResult};

use crate::common::{TaskBuilder, task};

#[test]
fn summary_counts_buckets_and_edges() {
    let tasks = vec![
        TaskBuilder::new("a").status("todo").created(0).members(&["u1"]).build(),
        TaskBuilder::new("b").status("todo").created(1).members(&["u1"]).build(),
        task("c", "in-progress", 0),
        task("d", "odd", 0),
    ];
    let layout = compute_layout(&tasks, &[], &Settings::default());

    let summary = SummaryResult::from_layout(&layout);

    assert_eq!(summary.total, 4);
    assert_eq!(summary.buckets.len(), 3);
    assert_eq!(summary.buckets[0].status, "todo");
    assert_eq!(summary.buckets[0].count, 2);
    assert_eq!(summary.buckets[2].status, "odd");
    assert_eq!(summary.edges.continuation, 1);
    assert_eq!(summary.edges.progression, 2);
    assert_eq!(summary.edges.collaboration, 2);
}

#[test]
fn layout_result_serializes_flat() {
    let layout = compute_layout(&[task("a", "todo", 0)], &[], &Settings::default());
    let result = LayoutResult { layout };

    let json = serde_json::to_value(&result).unwrap();

    assert!(json.get("nodes").is_some());
    assert!(json.get("edges").is_some());
    assert!(json.get("layout").is_none());
}

#[test]
fn export_result_serialization() {
    let result = ExportResult {
        path: "out/wf-task-flow.json".to_string(),
        workflow: "wf".to_string(),
        nodes: 3,
        edges: 2,
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"path\":\"out/wf-task-flow.json\""));
    assert!(json.contains("\"nodes\":3"));
}

#[test]
fn operation_result_serialization() {
    let result = OperationResult {
        success: false,
        message: "Already initialized".to_string(),
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":false"));
    assert!(json.contains("Already initialized"));
}
