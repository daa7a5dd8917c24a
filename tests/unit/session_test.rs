//! Tests for the flow session

use taskflow::core::models::{Position, Settings};
use taskflow::core::services::FlowSession;
use taskflow::error::FlowError;

use crate::common::{FailingSource, at, task, team};

fn session() -> FlowSession {
    let tasks = vec![task("a", "todo", 0), task("b", "todo", 1), task("c", "done", 0)];
    FlowSession::new(tasks, team(), Settings::default())
}

#[test]
fn load_reads_through_ports() {
    let tasks = vec![task("a", "todo", 0), task("b", "review", 0)];

    let session = FlowSession::load(&tasks, &team(), Settings::default()).unwrap();

    assert_eq!(session.layout().nodes.len(), 2);
    assert_eq!(session.tasks(), tasks.as_slice());
}

#[test]
fn load_propagates_source_errors() {
    let result = FlowSession::load(&FailingSource, &team(), Settings::default());
    assert!(matches!(result, Err(FlowError::NoInput(_))));
}

#[test]
fn move_node_changes_only_that_node() {
    let mut session = session();
    let before = session.layout().clone();

    session.move_node("b", Position::new(-10.0, 999.0)).unwrap();

    let after = session.layout();
    assert_eq!(after.node("b").map(|n| n.position), Some(Position::new(-10.0, 999.0)));
    assert_eq!(after.node("a"), before.node("a"));
    assert_eq!(after.edges, before.edges);
}

#[test]
fn move_unknown_node_is_an_error() {
    let mut session = session();

    let err = session.move_node("nope", Position::default()).unwrap_err();

    assert_eq!(err.to_string(), "unknown node: nope");
}

#[test]
fn reset_discards_moves() {
    let mut session = session();
    let original = session.layout().clone();

    session.move_node("a", Position::new(1.0, 1.0)).unwrap();
    session.move_node("c", Position::new(2.0, 2.0)).unwrap();
    session.reset();

    assert_eq!(session.layout(), &original);
}

#[test]
fn export_uses_current_positions() {
    let mut session = session();
    session.move_node("c", Position::new(7.0, 8.0)).unwrap();

    let doc = session.export("Release", at(0));

    let exported = doc.nodes.iter().find(|n| n.id == "c").unwrap();
    assert_eq!(exported.position, Position::new(7.0, 8.0));
    assert_eq!(doc.edges, session.layout().edges);
    assert_eq!(doc.workflow, "Release");
}

#[test]
fn replacing_tasks_supersedes_layout() {
    let mut session = session();
    session.move_node("a", Position::new(5.0, 5.0)).unwrap();

    session.replace_tasks(vec![task("a", "done", 0)]);

    assert_eq!(session.layout().nodes.len(), 1);
    assert_eq!(session.layout().node("a").map(|n| n.position), Some(Position::new(950.0, 50.0)));
}
