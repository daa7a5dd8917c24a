//! File-backed task source and member directory
//!
//! Implements the `TaskSource` and `MemberDirectory` ports over JSON files.

use std::path::PathBuf;

use crate::core::models::{Task, TeamMember};
use crate::core::ports::{MemberDirectory, TaskSource};
use crate::error::Result;

use super::reader::{expand_inputs, read_members, read_tasks};

/// Tasks read from one or more JSON files
///
/// Inputs may be paths or glob patterns. Files are read in argument order
/// (glob matches sorted) and their tasks concatenated.
#[derive(Debug, Clone)]
pub struct JsonTaskFiles {
    inputs: Vec<String>,
}

impl JsonTaskFiles {
    /// Create a source over the given paths or patterns
    #[must_use]
    pub const fn new(inputs: Vec<String>) -> Self {
        Self { inputs }
    }
}

impl TaskSource for JsonTaskFiles {
    fn load_tasks(&self) -> Result<Vec<Task>> {
        let mut tasks = Vec::new();
        for path in expand_inputs(&self.inputs)? {
            tasks.extend(read_tasks(&path)?);
        }
        Ok(tasks)
    }
}

/// Team directory read from an optional JSON file
///
/// Without a file the directory is empty and nodes carry no member details.
#[derive(Debug, Clone, Default)]
pub struct JsonMemberFile {
    path: Option<PathBuf>,
}

impl JsonMemberFile {
    /// Create a directory backed by `path`
    #[must_use]
    pub const fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl MemberDirectory for JsonMemberFile {
    fn load_members(&self) -> Result<Vec<TeamMember>> {
        self.path.as_deref().map_or_else(|| Ok(Vec::new()), read_members)
    }
}
