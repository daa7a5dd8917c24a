//! Task source port
//!
//! Defines where task lists come from.

use crate::core::models::Task;
use crate::error::Result;

/// Supplier of the task list to lay out
///
/// Implementations handle fetching tasks from files, the task backend, etc.
pub trait TaskSource: Send + Sync {
    /// Load every task, in the order the board lists them
    fn load_tasks(&self) -> Result<Vec<Task>>;
}

impl TaskSource for Vec<Task> {
    fn load_tasks(&self) -> Result<Vec<Task>> {
        Ok(self.clone())
    }
}
