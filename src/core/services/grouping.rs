//! Task grouping
//!
//! Partitions a task list into per-status buckets.

use crate::core::models::{Task, TaskStatus};

/// Tasks sharing one status, in input order
#[derive(Debug, Clone)]
pub struct Bucket<'a> {
    status: TaskStatus,
    indices: Vec<usize>,
    tasks: Vec<&'a Task>,
}

impl<'a> Bucket<'a> {
    /// The status shared by every task in the bucket
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }

    /// Tasks in input order
    #[must_use]
    pub fn tasks(&self) -> &[&'a Task] {
        &self.tasks
    }

    /// Position of each task in the original input, parallel to [`Self::tasks`]
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of tasks in the bucket
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the bucket holds no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Status buckets, ordered by first appearance of each status in the input
#[derive(Debug, Clone, Default)]
pub struct StatusBuckets<'a> {
    buckets: Vec<Bucket<'a>>,
}

impl<'a> StatusBuckets<'a> {
    /// Tasks holding `status`; empty when no task has it
    #[must_use]
    pub fn get(&self, status: &TaskStatus) -> &[&'a Task] {
        self.buckets
            .iter()
            .find(|b| b.status == *status)
            .map_or(&[], |b| b.tasks.as_slice())
    }

    /// Iterate over the buckets
    pub fn iter(&self) -> std::slice::Iter<'_, Bucket<'a>> {
        self.buckets.iter()
    }

    /// Number of distinct statuses
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether there are no buckets (empty input)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl<'s, 'a> IntoIterator for &'s StatusBuckets<'a> {
    type Item = &'s Bucket<'a>;
    type IntoIter = std::slice::Iter<'s, Bucket<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Partition tasks by status
///
/// Relative input order is preserved inside each bucket. Statuses outside the
/// board's fixed set get their own bucket.
#[must_use]
pub fn group_by_status(tasks: &[Task]) -> StatusBuckets<'_> {
    let mut buckets: Vec<Bucket<'_>> = Vec::new();

    for (index, task) in tasks.iter().enumerate() {
        if let Some(bucket) = buckets.iter_mut().find(|b| b.status == task.status) {
            bucket.indices.push(index);
            bucket.tasks.push(task);
        } else {
            buckets.push(Bucket {
                status: task.status.clone(),
                indices: vec![index],
                tasks: vec![task],
            });
        }
    }

    StatusBuckets { buckets }
}
