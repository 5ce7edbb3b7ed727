//! Filtered and ordered views over task snapshots.
//!
//! Pure functions: every view is derived from a snapshot the caller
//! obtained via `TaskStore::all()` (or built itself). No hidden state and
//! no store access, so callers own caching; the core never does.

use crate::model::{SortKey, Task, TaskState};

/// Tasks in exactly the given state, ordered by `sort`.
///
/// Ordering:
/// - `Priority`: descending priority; ties keep their relative snapshot
///   order (stable sort).
/// - `EndDate`: ascending lexicographic on the `YYYY-MM-DD` text, which
///   matches chronological order for valid dates; the empty (unset) date
///   is the lexicographically smallest value and sorts first.
/// - `Unsorted`: snapshot (enumeration) order, untouched.
pub fn list_by_state(snapshot: &[Task], state: TaskState, sort: SortKey) -> Vec<Task> {
    let mut tasks: Vec<Task> = snapshot
        .iter()
        .filter(|t| t.state == state)
        .cloned()
        .collect();
    sort_tasks(&mut tasks, sort);
    tasks
}

/// All tasks, optionally narrowed to one state, each state's slice
/// ordered by `sort`.
///
/// With no filter the result is open tasks followed by completed tasks;
/// there is no cross-state ordering guarantee beyond each side's own.
pub fn list_all(snapshot: &[Task], filter: Option<TaskState>, sort: SortKey) -> Vec<Task> {
    match filter {
        Some(state) => list_by_state(snapshot, state, sort),
        None => {
            let mut tasks = list_by_state(snapshot, TaskState::Open, sort);
            tasks.extend(list_by_state(snapshot, TaskState::Completed, sort));
            tasks
        }
    }
}

/// Order tasks in place by the given key. `sort_by` is stable, so equal
/// keys retain their relative order.
fn sort_tasks(tasks: &mut [Task], sort: SortKey) {
    match sort {
        SortKey::Priority => tasks.sort_by(|a, b| b.priority.cmp(&a.priority)),
        SortKey::EndDate => tasks.sort_by(|a, b| a.end_date.cmp(&b.end_date)),
        SortKey::Unsorted => {}
    }
}
