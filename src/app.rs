use crate::domain::{Task, UiMode};
use crate::persistence::save_tasks;
use std::path::PathBuf;

/// Input form state for adding or editing a task
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub text: String,
    /// Id of the task being edited; None when adding a new one
    pub editing_id: Option<String>,
}

/// Main application state: the task list controller.
///
/// `tasks` is the single source of truth. The UI renders a projection of it
/// and every mutation re-serializes the whole list to `tasks_path`.
pub struct AppState {
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    /// Last storage-write failure, shown in the status bar. Cleared by the
    /// next successful persist.
    pub save_error: Option<String>,
    tasks_path: PathBuf,
}

impl AppState {
    pub fn new(tasks: Vec<Task>, tasks_path: PathBuf) -> Self {
        Self {
            tasks,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            input_form: None,
            save_error: None,
            tasks_path,
        }
    }

    /// Write the full task list to storage. Every mutation goes through
    /// here; a failed write is surfaced in the status bar rather than
    /// crashing the app.
    pub fn persist(&mut self) {
        match save_tasks(&self.tasks_path, &self.tasks) {
            Ok(()) => self.save_error = None,
            Err(e) => self.save_error = Some(format!("Save failed: {}", e)),
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
        }
    }

    /// Open the input form for a new task
    pub fn start_add_task(&mut self) {
        self.input_form = Some(InputFormState {
            text: String::new(),
            editing_id: None,
        });
        self.ui_mode = UiMode::AddingTask;
    }

    /// Open the input form pre-filled with the selected task's text
    pub fn start_edit_task(&mut self) {
        if let Some(task) = self.tasks.get(self.selected_index) {
            self.input_form = Some(InputFormState {
                text: task.text.clone(),
                editing_id: Some(task.id.clone()),
            });
            self.ui_mode = UiMode::EditingTask;
        }
    }

    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            form.text.push(c);
        }
    }

    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.text.pop();
        }
    }

    /// Submit the add form. Whitespace-only text is a silent no-op: nothing
    /// is created, nothing persisted, and the form keeps its content.
    pub fn submit_add(&mut self) {
        let Some(form) = &self.input_form else {
            return;
        };

        let trimmed = form.text.trim();
        if trimmed.is_empty() {
            return;
        }

        self.tasks.push(Task::new(trimmed.to_string()));
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
        self.persist();
    }

    /// Commit the edit form into the task's text. Empty text is permitted
    /// here; only creation validates non-empty.
    pub fn commit_edit(&mut self) {
        if let Some(form) = self.input_form.take() {
            if let Some(id) = form.editing_id {
                if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                    task.text = form.text;
                }
                self.persist();
            }
        }
        self.ui_mode = UiMode::Normal;
    }

    /// Close the add form without creating anything
    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Flip the selected task between incomplete and completed
    pub fn toggle_selected(&mut self) {
        if let Some(task) = self.tasks.get_mut(self.selected_index) {
            task.toggle();
            self.persist();
        }
    }

    /// Remove the selected task permanently
    pub fn delete_selected(&mut self) {
        if self.selected_index < self.tasks.len() {
            self.tasks.remove(self.selected_index);
            // Keep the selection on a valid row
            if self.selected_index >= self.tasks.len() && self.selected_index > 0 {
                self.selected_index -= 1;
            }
            self.persist();
        }
    }
}
