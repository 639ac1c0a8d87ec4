use crate::app::AppState;
use crate::ui::styles::{error_style, hint_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the keybindings hint bar. Doubles as the status line when a
/// storage write has failed.
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(error) = &app.save_error {
        let paragraph = Paragraph::new(Line::raw(format!(" {}", error))).style(error_style());
        f.render_widget(paragraph, area);
        return;
    }

    let hints = Line::from(vec![
        Span::raw(" ↑/↓ select   "),
        Span::raw("Enter/Space toggle   "),
        Span::raw("a add   "),
        Span::raw("e edit   "),
        Span::raw("x delete   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
