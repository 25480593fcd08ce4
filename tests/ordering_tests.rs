//! Display-order tests: incomplete before completed, priority rank, and
//! newest-first tie breaks.

use chrono::{Duration, TimeZone, Utc};
use todo_tui::app::models::{Priority, Task};
use todo_tui::app::ordering;

fn task(id: i64, priority: Priority, completed: bool, offset_secs: i64) -> Task {
    let base = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    Task {
        id,
        text: format!("task {id}"),
        completed,
        created_at: base + Duration::seconds(offset_secs),
        priority,
    }
}

fn ids(tasks: &[Task]) -> Vec<i64> {
    tasks.iter().map(|task| task.id).collect()
}

#[test]
fn high_first_newest_breaks_ties_completed_last() {
    let a = task(1, Priority::High, false, 1);
    let b = task(2, Priority::Medium, false, 2);
    let c = task(3, Priority::High, false, 3);
    let d = task(4, Priority::Low, true, 0);

    let ordered = ordering::order(&[a, b, c, d]);

    // HIGH incomplete first with the newer one leading, then MEDIUM, then
    // the completed task last regardless of its priority
    assert_eq!(ids(&ordered), vec![3, 1, 2, 4]);
}

#[test]
fn completed_tasks_ignore_priority() {
    let older_high = task(1, Priority::High, true, 0);
    let newer_low = task(2, Priority::Low, true, 10);

    let ordered = ordering::order(&[older_high, newer_low]);
    assert_eq!(ids(&ordered), vec![2, 1]);
}

#[test]
fn incomplete_always_precede_completed() {
    let done_high = task(1, Priority::High, true, 10);
    let open_low = task(2, Priority::Low, false, 0);

    let ordered = ordering::order(&[done_high, open_low]);
    assert_eq!(ids(&ordered), vec![2, 1]);
}

#[test]
fn equal_timestamps_fall_back_to_id() {
    let first = task(1, Priority::Medium, false, 0);
    let second = task(2, Priority::Medium, false, 0);

    let ordered = ordering::order(&[first, second]);
    assert_eq!(ids(&ordered), vec![2, 1]);
}

#[test]
fn input_slice_is_left_untouched() {
    let tasks = vec![
        task(1, Priority::Low, false, 0),
        task(2, Priority::High, false, 1),
    ];

    let ordered = ordering::order(&tasks);

    assert_eq!(ids(&ordered), vec![2, 1]);
    // Insertion order of the source is preserved
    assert_eq!(ids(&tasks), vec![1, 2]);
}

#[test]
fn empty_input_orders_to_empty() {
    assert!(ordering::order(&[]).is_empty());
}
