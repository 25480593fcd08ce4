// Display order for the task list. Recomputed on every render from the
// store's insertion-ordered snapshot; the result is never persisted.
use std::cmp::Ordering;

use crate::app::models::Task;

// Deterministic display order:
//   1. incomplete tasks before completed ones
//   2. incomplete: priority rank ascending, then newest first
//   3. completed: newest first (priority no longer matters once done)
// Equal timestamps fall back to id so the order is total.
pub fn order(tasks: &[Task]) -> Vec<Task> {
    let mut ordered = tasks.to_vec();
    ordered.sort_by(compare);
    ordered
}

fn compare(a: &Task, b: &Task) -> Ordering {
    if a.completed != b.completed {
        return if a.completed {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }

    let by_priority = if a.completed {
        Ordering::Equal
    } else {
        a.priority.rank().cmp(&b.priority.rank())
    };

    by_priority
        .then(b.created_at.cmp(&a.created_at))
        .then(b.id.cmp(&a.id))
}
