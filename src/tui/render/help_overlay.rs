use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use crate::tui::app::App;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(38, 16, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.chrome;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));
    add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor", key_style, desc_style);
    add_binding(&mut lines, " spc/x", "Check / uncheck", key_style, desc_style);
    add_binding(&mut lines, " v", "Mark for deletion", key_style, desc_style);
    add_binding(&mut lines, " d", "Delete marked tasks", key_style, desc_style);
    add_binding(&mut lines, " a/i", "Type a new task", key_style, desc_style);
    add_binding(&mut lines, " Enter", "Add the typed task", key_style, desc_style);
    add_binding(&mut lines, " s", "Save tasks", key_style, desc_style);
    add_binding(&mut lines, " p", "Pin / unpin the note", key_style, desc_style);
    add_binding(&mut lines, " drag", "Move the note (unpinned)", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit", key_style, desc_style);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " ? closes this overlay",
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

fn add_binding(
    lines: &mut Vec<Line>,
    key: &str,
    desc: &str,
    key_style: Style,
    desc_style: Style,
) {
    lines.push(Line::from(vec![
        Span::styled(format!("{key:<9}"), key_style),
        Span::styled(desc.to_string(), desc_style),
    ]));
}

/// A `width` x `height` rect centered in `r`, clamped to fit
fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}
