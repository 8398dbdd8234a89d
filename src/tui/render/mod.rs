pub mod help_overlay;
pub mod note;

use ratatui::Frame;
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function: backdrop, then the floating note, then overlays
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Backdrop fill
    let bg_style = Style::default().bg(app.theme.backdrop);
    frame.render_widget(Block::default().style(bg_style), area);

    note::render_note(frame, app);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}
