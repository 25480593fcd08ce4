use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use ratatui::widgets::*;

use crate::app::models::{Priority, Task};
use crate::app::ordering;
use crate::app::store::TodoStore;

use super::ui::App;

// Selection state over the ordered display view. The items are re-derived
// from the store on every refresh; the selection follows the task id, so a
// task that moves after a toggle stays selected.
pub struct TaskList {
    pub state: ListState,
    pub items: Vec<Task>,
}

impl TaskList {
    // Initialize the list with the display-ordered tasks from the store
    pub fn from_store(store: &TodoStore) -> TaskList {
        TaskList {
            state: ListState::default(),
            items: ordering::order(store.tasks()),
        }
    }

    // Re-derive the display order after a mutation, keeping the selection
    // on the same task even if it moved
    pub fn refresh(&mut self, store: &TodoStore) {
        let selected_id = self.selected_id();
        self.items = ordering::order(store.tasks());
        self.state.select(
            selected_id.and_then(|id| self.items.iter().position(|task| task.id == id)),
        );
    }

    // The id of the selected task, if any
    pub fn selected_id(&self) -> Option<i64> {
        self.state
            .selected()
            .and_then(|i| self.items.get(i))
            .map(|task| task.id)
    }

    // Get the selected task
    pub fn get_selected(&self) -> Option<&Task> {
        match self.state.selected() {
            Some(i) => self.items.get(i),
            None => None,
        }
    }

    // Move the selection to the next item
    // Coppied from original example
    pub fn next(&mut self) {
        let i = match self.state.selected() {
            Some(i) => {
                if self.items.len() == 0 || i >= self.items.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    // Move the selection to the previous item
    // Coppied from original example
    pub fn previous(&mut self) {
        let i = match self.state.selected() {
            Some(i) => {
                if self.items.len() == 0 {
                    0
                } else if i == 0 {
                    self.items.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn unselect(&mut self) {
        self.state.select(None);
    }

    // Count the tasks still to do
    pub fn count_active(&self) -> usize {
        self.items.iter().filter(|task| !task.completed).count()
    }

    // Count the completed tasks
    pub fn count_completed(&self) -> usize {
        self.items.iter().filter(|task| task.completed).count()
    }

    // Count the high-priority tasks still to do
    pub fn count_high_remaining(&self) -> usize {
        self.items
            .iter()
            .filter(|task| !task.completed && task.priority == Priority::High)
            .count()
    }
}

// Build the UI (list) for the task list
pub fn get_list_items_ui<'a>(tasks: &'a [Task]) -> Vec<ListItem<'a>> {
    tasks
        .iter()
        .map(|task| {
            let meta = task.priority.meta();

            let text_style = if task.completed {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else if task.priority == Priority::High {
                Style::default().fg(meta.color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(meta.color)
            };

            let lines = vec![
                Line::from(vec![
                    Span::from(if task.completed { "[✓] " } else { "[ ] " }),
                    Span::styled(task.text.as_str(), text_style),
                    Span::styled(
                        format!("  ({})", meta.label),
                        Style::default().fg(meta.color),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("    added {}", task.created_at.format("%d.%m.%Y %H:%M")),
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            ListItem::new(lines).style(Style::default().fg(Color::White))
        })
        .collect()
}

// Build the UI (lines) for the statistics infobox
pub fn get_statistics_ui<'a>(app: &'a App<'a>) -> Vec<Line<'a>> {
    vec![
        Line::from(format!("Total tasks: {}", app.items.items.len())),
        Line::from(format!("To do: {}", app.items.count_active())),
        Line::from(format!("Completed: {}", app.items.count_completed())),
        Line::from(format!(
            "High priority left: {}",
            app.items.count_high_remaining()
        )),
    ]
}

// Build the UI (lines) for the instructions infobox
pub fn get_instructions_ui<'a>() -> Vec<Line<'a>> {
    vec![
        "Enter - toggle to do/done".into(),
        "a - add a task".into(),
        "e - edit a task".into(),
        "p - cycle priority".into(),
        "x - delete a task".into(),
        "Up/Down - select, Left - unselect".into(),
        "q - quit".into(),
    ]
}
