use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::app::models::{Priority, Task};
use crate::app::store::TodoStore;
use derivative::Derivative;

use super::ui::App;

const TEXT_PLACEHOLDER: &str = "My new task";

// State object for the task add/edit dialog: one free-text line with a
// cursor, plus a priority field that is cycled in place
#[derive(Derivative)]
#[derivative(Default)]
pub struct TaskEditDialogState {
    pub dialog_active: bool,
    task_id: Option<i64>,
    text: String,
    #[derivative(Default(value = "Priority::Medium"))]
    priority: Priority,
    cursor_position: usize,
    hint: Option<String>,
}

impl TaskEditDialogState {
    // Opens the dialog and prepares to accept input for a new task
    pub fn create_a_new_task(&mut self) {
        *self = TaskEditDialogState::default();
        self.dialog_active = true;
    }

    // Opens the dialog prefilled with an existing task
    pub fn edit_task(&mut self, task: &Task) {
        self.dialog_active = true;
        self.task_id = Some(task.id);
        self.text = task.text.clone();
        self.priority = task.priority;
        self.cursor_position = task.text.chars().count();
        self.hint = None;
    }

    // Move the cursor one char LEFT; an underflow is prevented
    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    // Move the cursor one char RIGHT; an overflow is prevented
    pub fn move_cursor_right(&mut self) {
        self.cursor_position = (self.cursor_position + 1).min(self.text.chars().count());
    }

    // The cursor is tracked in chars; map it to a byte offset before editing
    fn byte_offset(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    // Insert a char at the cursor position
    pub fn input(&mut self, to_insert: char) {
        let at = self.byte_offset(self.cursor_position);
        self.text.insert(at, to_insert);
        self.cursor_position += 1;
    }

    // Delete the char before the cursor
    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let at = self.byte_offset(self.cursor_position - 1);
        self.text.remove(at);
        self.cursor_position -= 1;
    }

    // Step the pending priority through the High -> Medium -> Low cycle
    pub fn cycle_priority(&mut self) {
        self.priority = self.priority.next();
    }

    // Saves the task through the store and closes the dialog. Blank text is
    // rejected with a hint instead of reaching the store.
    pub fn save_task(&mut self, store: &mut TodoStore) {
        if self.text.trim().is_empty() {
            self.hint = Some("Task text cannot be empty".to_string());
            return;
        }

        match self.task_id {
            Some(id) => {
                store.edit_text(id, &self.text);
                store.change_priority(id, self.priority);
            }
            None => {
                store.add(&self.text, self.priority);
            }
        }

        self.hint = None;
        self.dialog_active = false;
    }
}

// Returns the UI content for the task edit dialog
pub fn get_task_edit_ui<'a>(app: &'a App<'a>) -> Vec<Line<'a>> {
    const GRAY_TEXT: Style = Style::new().fg(Color::Rgb(62, 62, 62));
    const WHITE_TEXT: Style = Style::new().fg(Color::White);
    const BLACK_ON_WHITE: Style = Style::new().fg(Color::Black).bg(Color::White);

    let state = &app.task_edit_dialog_state;
    let mut text = Vec::new();

    // The text input line, with the char at the cursor highlighted
    let mut spans = vec![Span::styled("Text:     ", WHITE_TEXT)];
    if state.text.is_empty() {
        // Empty input shows the placeholder, cursor on its first char
        spans.push(Span::styled(
            TEXT_PLACEHOLDER.chars().take(1).collect::<String>(),
            BLACK_ON_WHITE,
        ));
        spans.push(Span::styled(
            TEXT_PLACEHOLDER.chars().skip(1).collect::<String>(),
            GRAY_TEXT,
        ));
    } else {
        spans.push(Span::styled(
            state
                .text
                .chars()
                .take(state.cursor_position)
                .collect::<String>(),
            WHITE_TEXT,
        ));
        spans.push(Span::styled(
            state
                .text
                .chars()
                .skip(state.cursor_position)
                .take(1)
                .collect::<String>(),
            BLACK_ON_WHITE,
        ));
        spans.push(Span::styled(
            state
                .text
                .chars()
                .skip(state.cursor_position + 1)
                .collect::<String>(),
            WHITE_TEXT,
        ));

        if state.cursor_position == state.text.chars().count() {
            spans.push(Span::styled(" ", BLACK_ON_WHITE));
        }
    }
    text.push(Line::from(spans));

    // The priority line, colored by the shared metadata table
    let meta = state.priority.meta();
    text.push(Line::from(vec![
        Span::styled("Priority: ", WHITE_TEXT),
        Span::styled(meta.label, Style::new().fg(meta.color)),
    ]));

    text.push(Line::raw("\n"));

    // Display the validation hint if there is one
    match state.hint {
        Some(ref hint) => {
            text.push(Line::from(vec![Span::styled(
                hint.as_str(),
                Style::new().fg(Color::Red),
            )]));
            text.push(Line::raw("\n"));
        }
        None => {}
    }

    // Display the help text
    text.push(Line::from(vec![Span::styled(
        "\nEnter - save, Tab - priority, Esc - cancel",
        WHITE_TEXT,
    )]));

    text
}
