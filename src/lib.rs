//! taskflow - Turn kanban task lists into laid-out flow graphs
//!
//! This library groups tasks by status, assigns every task a canvas position,
//! synthesizes continuation, progression and collaboration edges, and produces
//! the export file of the flow visualizer.
//!
//! ```
//! use taskflow::core::models::{Settings, Task};
//! use taskflow::core::services::compute_layout;
//!
//! let tasks = vec![Task::new("A", "Design"), Task::new("B", "Build").with_status("done")];
//! let layout = compute_layout(&tasks, &[], &Settings::default());
//! assert_eq!(layout.nodes.len(), 2);
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod paths;

pub use error::{FlowError, Result};
