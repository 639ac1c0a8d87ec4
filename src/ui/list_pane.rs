use crate::app::AppState;
use crate::domain::Task;
use crate::ui::styles::{
    border_style, default_style, done_style, selected_style, timestamp_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Toggle indicator for a row - two mutually exclusive visual states
fn toggle_glyph(completed: bool) -> &'static str {
    if completed {
        "[✓]"
    } else {
        "[ ]"
    }
}

/// Render the task list pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = app
        .tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let line = create_task_line(task);
            let style = if idx == app.selected_index {
                selected_style()
            } else {
                default_style()
            };

            ListItem::new(line).style(style)
        })
        .collect();

    let title = format!(" Tasks ({}) ", app.tasks.len());

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

/// Create a single line for a task row
/// Format: [✓] Buy milk  2024-01-15 10:30
fn create_task_line(task: &Task) -> Line<'static> {
    let mut spans = Vec::new();

    spans.push(Span::raw(format!("{} ", toggle_glyph(task.completed))));

    let text_style = if task.completed {
        done_style()
    } else {
        default_style()
    };
    spans.push(Span::styled(task.text.clone(), text_style));

    // Timestamp label
    spans.push(Span::raw("  ".to_string()));
    spans.push(Span::styled(task.created_at.clone(), timestamp_style()));

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task_line() {
        let task = Task::new("Buy milk".to_string());
        let line = create_task_line(&task);

        let line_str = format!("{:?}", line);
        assert!(line_str.contains("Buy milk"));
        assert!(line_str.contains(&task.created_at));
        assert!(line_str.contains("[ ]"));
    }

    #[test]
    fn test_toggle_glyph_states_are_exclusive() {
        assert_eq!(toggle_glyph(false), "[ ]");
        assert_eq!(toggle_glyph(true), "[✓]");
        assert_ne!(toggle_glyph(false), toggle_glyph(true));
    }

    #[test]
    fn test_completed_task_line_shows_check() {
        let mut task = Task::new("Done thing".to_string());
        task.toggle();
        let line = create_task_line(&task);

        let line_str = format!("{:?}", line);
        assert!(line_str.contains("✓"));
    }
}
