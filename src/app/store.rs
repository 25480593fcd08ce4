// The authoritative owner of the task collection. All mutation goes through
// here, and every mutation rewrites the full collection to storage before
// returning. Unknown ids and blank text are absorbed as silent no-ops.
use chrono::Utc;
use tracing::warn;

use crate::app::models::{Priority, Task};
use crate::app::storage::{Storage, StorageError, TODOS_STORAGE_KEY};

pub struct TodoStore<'a> {
    tasks: Vec<Task>,
    storage: &'a Storage,
}

impl<'a> TodoStore<'a> {
    // Load the persisted collection. A missing entry is a fresh start; a
    // corrupt one is logged and treated as empty for this session (the
    // corrupt row stays in storage until the next mutation overwrites it).
    pub fn load(storage: &'a Storage) -> TodoStore<'a> {
        let tasks = match storage.get_item(TODOS_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(tasks) => tasks,
                Err(source) => {
                    let err = StorageError::Corrupt {
                        key: TODOS_STORAGE_KEY,
                        source,
                    };
                    warn!(error = %err, "discarding stored tasks for this session");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(error = %StorageError::Db(err), "could not read stored tasks");
                Vec::new()
            }
        };

        TodoStore { tasks, storage }
    }

    // Read-only view in insertion order. Display order is derived
    // separately, never stored.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    // Append a new task. Blank text (after trimming) is ignored.
    pub fn add(&mut self, text: &str, priority: Priority) -> Option<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let task = Task {
            id: self.next_id(),
            text: text.to_string(),
            completed: false,
            created_at: Utc::now(),
            priority,
        };
        self.tasks.push(task);
        self.persist();
        self.tasks.last()
    }

    pub fn delete(&mut self, id: i64) {
        self.tasks.retain(|task| task.id != id);
        self.persist();
    }

    pub fn toggle_completed(&mut self, id: i64) {
        if let Some(task) = self.find_mut(id) {
            task.completed = !task.completed;
        }
        self.persist();
    }

    // Replace the text of a task. Blank text or the unchanged text leaves
    // the task as it was.
    pub fn edit_text(&mut self, id: i64, new_text: &str) {
        let new_text = new_text.trim();
        if let Some(task) = self.find_mut(id) {
            if !new_text.is_empty() && new_text != task.text {
                task.text = new_text.to_string();
            }
        }
        self.persist();
    }

    pub fn change_priority(&mut self, id: i64, priority: Priority) {
        if let Some(task) = self.find_mut(id) {
            task.priority = priority;
        }
        self.persist();
    }

    // Advance the priority one step in the High -> Medium -> Low cycle
    pub fn cycle_priority(&mut self, id: i64) {
        if let Some(task) = self.find_mut(id) {
            task.priority = task.priority.next();
        }
        self.persist();
    }

    fn find_mut(&mut self, id: i64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    // Creation-timestamp ids, bumped past the current maximum so that two
    // adds within the same millisecond stay unique and ordered
    fn next_id(&self) -> i64 {
        let floor = self.tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1;
        Utc::now().timestamp_millis().max(floor)
    }

    // Rewrite the whole collection. A failed write is logged and otherwise
    // ignored: the in-memory list stays authoritative for this session.
    fn persist(&self) {
        match serde_json::to_string(&self.tasks) {
            Ok(serialized) => {
                if let Err(err) = self.storage.set_item(TODOS_STORAGE_KEY, &serialized) {
                    warn!(error = %err, "could not persist tasks; keeping in-memory state");
                }
            }
            Err(err) => warn!(error = %err, "could not serialize tasks"),
        }
    }
}
