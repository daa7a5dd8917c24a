//! Position assignment
//!
//! Every status is a column. Tasks stack downwards inside their column, with
//! odd rows shifted right so consecutive cards do not sit on one line.

use crate::core::models::{LayoutSettings, Position, Task, TaskStatus};

use super::grouping::group_by_status;

/// Coordinate of the `row`-th task (0-indexed) of a status column
#[must_use]
pub fn slot(settings: &LayoutSettings, status: &TaskStatus, row: u32) -> Position {
    let base = settings.columns.base_for(status);
    let shift = if row % 2 == 0 { 0.0 } else { settings.stagger };
    Position::new(base.x + shift, f64::from(row).mul_add(settings.row_spacing, base.y))
}

/// Assign a position to every task
///
/// The result is parallel to `tasks`: entry `i` is the position of
/// `tasks[i]`. Empty input gives an empty result.
#[must_use]
pub fn assign_positions(tasks: &[Task], settings: &LayoutSettings) -> Vec<Position> {
    let mut positions = vec![Position::default(); tasks.len()];

    for bucket in &group_by_status(tasks) {
        let mut row: u32 = 0;
        for &index in bucket.indices() {
            if let Some(position) = positions.get_mut(index) {
                *position = slot(settings, bucket.status(), row);
            }
            row = row.saturating_add(1);
        }
    }

    positions
}
