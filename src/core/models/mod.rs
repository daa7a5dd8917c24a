//! Domain models for taskflow
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Task`] - A kanban card with status, priority and assignees
//! - [`TeamMember`] - A directory entry referenced by task assignments
//! - [`Layout`] - Positioned nodes plus synthesized edges
//! - [`Settings`] - Column coordinates, spacing, edge density and colors

mod graph;
mod member;
mod settings;
mod task;

pub use graph::{EdgeKind, EdgeStyle, FlowEdge, FlowNode, Layout, NodeData, Position};
pub use member::TeamMember;
pub use settings::{ColumnPositions, LayoutSettings, Palette, Settings};
pub use task::{Priority, Task, TaskStatus};
