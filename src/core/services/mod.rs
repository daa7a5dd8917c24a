//! Business logic services
//!
//! Pure logic that operates on domain models. Apart from [`session`], which
//! can pull its input through the port traits, these services have no I/O
//! dependencies: they take data and return results.
//!
//! - [`grouping`] - Partition tasks into status buckets
//! - [`positions`] - Assign a canvas position to every task
//! - [`edges`] - Synthesize continuation, progression and collaboration edges
//! - [`layout`] - Combine positions and edges into nodes for the presenter
//! - [`session`] - Presenter state: moves, reset, export
//! - [`export`] - The export document and its filename

pub mod edges;
pub mod export;
pub mod grouping;
pub mod layout;
pub mod positions;
pub mod session;

pub use edges::{collaboration_edges, continuation_edges, progression_edges, synthesize_edges};
pub use export::{EXPORT_SUFFIX, ExportDocument, ExportNode, export_filename};
pub use grouping::{Bucket, StatusBuckets, group_by_status};
pub use layout::{compute_layout, members_for};
pub use positions::{assign_positions, slot};
pub use session::FlowSession;
