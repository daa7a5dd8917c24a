//! Tests for the full layout computation

use taskflow::core::models::{EdgeKind, Position, Settings, Task};
use taskflow::core::services::compute_layout;

use crate::common::{TaskBuilder, task, team};

#[test]
fn two_todo_tasks_end_to_end() {
    let tasks = vec![
        TaskBuilder::new("A").status("todo").created(0).members(&["u1"]).build(),
        TaskBuilder::new("B").status("todo").created(1).members(&["u1"]).build(),
    ];

    let layout = compute_layout(&tasks, &[], &Settings::default());

    assert_eq!(layout.node("A").map(|n| n.position), Some(Position::new(50.0, 50.0)));
    assert_eq!(layout.node("B").map(|n| n.position), Some(Position::new(100.0, 250.0)));

    let continuation: Vec<_> = layout.edges_of(EdgeKind::Continuation).collect();
    assert_eq!(continuation.len(), 1);
    assert_eq!((continuation[0].source.as_str(), continuation[0].target.as_str()), ("A", "B"));

    let collaboration: Vec<_> = layout.edges_of(EdgeKind::Collaboration).collect();
    assert_eq!(collaboration.len(), 2);
    assert!(collaboration.iter().any(|e| e.source == "A" && e.target == "B"));
    assert!(collaboration.iter().any(|e| e.source == "B" && e.target == "A"));
}

#[test]
fn computing_twice_is_identical() {
    let tasks = vec![
        TaskBuilder::new("1").status("todo").created(5).members(&["u1"]).build(),
        TaskBuilder::new("2").status("in-progress").created(3).members(&["u1", "u2"]).build(),
        TaskBuilder::new("3").status("todo").created(1).members(&["u2"]).build(),
        TaskBuilder::new("4").status("done").created(2).build(),
        TaskBuilder::new("5").status("review").created(4).members(&["u3"]).build(),
    ];

    let first = compute_layout(&tasks, &team(), &Settings::default());
    let second = compute_layout(&tasks, &team(), &Settings::default());

    assert_eq!(first, second);
}

#[test]
fn empty_input_gives_empty_layout() {
    let layout = compute_layout(&[], &team(), &Settings::default());
    assert!(layout.is_empty());
    assert!(layout.edges.is_empty());
}

#[test]
fn nodes_follow_input_order_and_carry_tasks() {
    let tasks = vec![task("z", "done", 0), task("y", "todo", 0), task("x", "review", 0)];

    let layout = compute_layout(&tasks, &[], &Settings::default());
    let ids: Vec<&str> = layout.nodes.iter().map(|n| n.id.as_str()).collect();

    assert_eq!(ids, ["z", "y", "x"]);
    for (node, task) in layout.nodes.iter().zip(&tasks) {
        assert_eq!(&node.data.task, task);
    }
}

#[test]
fn nodes_carry_assigned_team_members() {
    let tasks = vec![TaskBuilder::new("a").members(&["u3", "ghost", "u1"]).build()];

    let layout = compute_layout(&tasks, &team(), &Settings::default());
    let names: Vec<&str> =
        layout.nodes[0].data.team_members.iter().map(|m| m.name.as_str()).collect();

    assert_eq!(names, ["Sam", "Ada"]);
}

#[test]
fn json_matches_presenter_contract() {
    let tasks = vec![
        TaskBuilder::new("A").status("done").created(0).members(&["u1"]).build(),
        TaskBuilder::new("B").status("done").created(1).members(&["u1"]).build(),
    ];

    let layout = compute_layout(&tasks, &team(), &Settings::default());
    let json = serde_json::to_value(&layout).unwrap();

    let node = &json["nodes"][0];
    assert_eq!(node["id"], "A");
    assert_eq!(node["position"]["x"], 950.0);
    assert_eq!(node["data"]["task"]["status"], "done");
    assert_eq!(node["data"]["teamMembers"][0]["name"], "Ada");

    let edge = &json["edges"][0];
    assert_eq!(edge["source"], "A");
    assert_eq!(edge["target"], "B");
    assert_eq!(edge["animated"], true);
    assert_eq!(edge["style"]["strokeWidth"], 3);
    assert_eq!(edge["kind"], "continuation");
    assert!(edge.get("label").is_none());
}

#[test]
fn collaboration_cap_from_settings_is_honoured() {
    let tasks = vec![
        TaskBuilder::new("a").members(&["u1"]).build(),
        TaskBuilder::new("b").members(&["u1"]).build(),
    ];
    let mut settings = Settings::default();
    settings.layout.collaboration_cap = 0;

    let layout = compute_layout(&tasks, &[], &settings);

    assert_eq!(layout.edges_of(EdgeKind::Collaboration).count(), 0);
}

#[test]
fn capitalised_done_is_its_own_bucket() {
    let tasks: Vec<Task> = serde_json::from_str(
        r#"[
            {"id": "A", "status": "Done", "createdAt": "2024-01-01T00:00:00Z"},
            {"id": "B", "status": "done", "createdAt": "2024-01-02T00:00:00Z"}
        ]"#,
    )
    .unwrap();

    let layout = compute_layout(&tasks, &[], &Settings::default());

    assert_eq!(layout.node("A").map(|n| n.position), Some(Position::new(50.0, 50.0)));
    assert_eq!(layout.node("B").map(|n| n.position), Some(Position::new(950.0, 50.0)));
    assert!(layout.edges.is_empty());
    assert_eq!(layout.node("A").map(|n| n.data.task.status.as_str()), Some("Done"));
}
