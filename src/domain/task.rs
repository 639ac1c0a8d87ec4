use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do item. The in-memory list of these records is the source of
/// truth; rendering and persistence are both projections from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique identifier. Generated as a UUID v4 string at creation;
    /// restored ids are accepted verbatim, whatever their shape.
    pub id: String,
    /// User-editable text. Only creation rejects empty input; an edit may
    /// leave it empty.
    pub text: String,
    pub completed: bool,
    /// Human-readable creation time, immutable after creation.
    #[serde(rename = "timestamp")]
    pub created_at: String,
}

impl Task {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text,
            completed: false,
            created_at: Local::now().format("%Y-%m-%d %H:%M").to_string(),
        }
    }

    /// Flip the completion flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_new() {
        let task = Task::new("Buy milk".to_string());
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
        assert!(!task.id.is_empty());
        assert!(!task.created_at.is_empty());
    }

    #[test]
    fn test_task_ids_are_unique() {
        let a = Task::new("A".to_string());
        let b = Task::new("B".to_string());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_task_toggle() {
        let mut task = Task::new("Test".to_string());
        task.toggle();
        assert!(task.completed);

        // Toggling twice returns to the original state
        task.toggle();
        assert!(!task.completed);
    }

    #[test]
    fn test_timestamp_immutable_across_toggle() {
        let mut task = Task::new("Test".to_string());
        let created = task.created_at.clone();
        task.toggle();
        assert_eq!(task.created_at, created);
    }
}
