use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the add/edit form as a modal over the list
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.input_form {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let title_text = if form.editing_id.is_some() {
            " Edit Task "
        } else {
            " Add Task "
        };

        let mut lines = Vec::new();

        lines.push(Line::raw(""));
        lines.push(Line::raw("Text:"));

        let text_line = Line::from(vec![
            Span::raw("> "),
            Span::styled(&form.text, modal_title_style()),
            Span::styled("█", modal_title_style()), // Cursor
        ]);
        lines.push(text_line);
        lines.push(Line::raw(""));

        // Instructions
        let instructions = if form.editing_id.is_some() {
            "Enter or Esc to save"
        } else {
            "Enter to add  ·  Esc to cancel"
        };
        lines.push(Line::raw(instructions));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title_text, modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
