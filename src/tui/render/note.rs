use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::app::{App, Mode, NoticeKind};
use crate::tui::theme::Theme;
use crate::tui::window::CHECKBOX_COLS;

/// Render the floating note: title bar, clock, checklist, input, status
pub fn render_note(frame: &mut Frame, app: &App) {
    let theme = if app.window.pinned {
        app.theme.dimmed()
    } else {
        app.theme.clone()
    };
    let rect = app.window.rect();
    frame.render_widget(Clear, rect);

    let mut lines: Vec<Line> = Vec::with_capacity(usize::from(rect.height));
    lines.push(title_bar_line(app, &theme, rect.width));
    lines.push(clock_line(app, &theme, rect.width));
    lines.push(Line::from(""));
    for slot in 0..app.window.list_height() {
        lines.push(task_line(app, &theme, rect.width, app.scroll + slot));
    }
    lines.push(input_line(app, &theme, rect.width));
    lines.push(status_line(app, &theme, rect.width));

    let paragraph = Paragraph::new(lines).style(Style::default().bg(theme.surface).fg(theme.text));
    frame.render_widget(paragraph, rect);
}

/// Title bar: name and dirty marker left, pin and close glyphs right.
/// The glyph columns line up with the hit regions in `NoteWindow::hit`.
fn title_bar_line(app: &App, theme: &Theme, width: u16) -> Line<'static> {
    let bg = theme.chrome;
    let width = usize::from(width);

    let mut title = String::from(" sticky");
    if app.store.is_dirty() {
        title.push_str(" *");
    }
    let pin = if app.window.pinned {
        '\u{25CF}' // ●
    } else {
        '\u{25CB}' // ○
    };
    let right = format!("{pin} \u{2715} ");

    let right_width = right.width();
    let title = truncate_to_width(&title, width.saturating_sub(right_width));
    let padding = width.saturating_sub(title.width() + right_width);

    Line::from(vec![
        Span::styled(
            title,
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ".repeat(padding), Style::default().bg(bg)),
        Span::styled(right, Style::default().fg(theme.dim).bg(bg)),
    ])
}

/// Centered date/time header
fn clock_line(app: &App, theme: &Theme, width: u16) -> Line<'static> {
    let width = usize::from(width);
    let text = truncate_to_width(&app.clock_line(), width);
    let padding = width.saturating_sub(text.width()) / 2;
    Line::from(vec![
        Span::raw(" ".repeat(padding)),
        Span::styled(text, Style::default().fg(theme.text_bright)),
    ])
}

/// One checklist row. Rows past the end of the list render blank.
fn task_line(app: &App, theme: &Theme, width: u16, index: usize) -> Line<'static> {
    let width = usize::from(width);
    let Some(task) = app.store.tasks().get(index) else {
        return Line::from("");
    };

    let is_cursor = index == app.cursor;
    let is_selected = app.selected.contains(&index);
    let row_bg = if is_cursor {
        Some(theme.cursor_bg)
    } else if is_selected {
        Some(theme.selection_bg)
    } else {
        None
    };
    let with_bg = |style: Style| match row_bg {
        Some(bg) => style.bg(bg),
        None => style,
    };

    let marker = if is_selected { '\u{25B8}' } else { ' ' };
    let prefix = format!("{marker}[{}] ", task.checkbox_char());
    let text = truncate_to_width(
        &task.text,
        width.saturating_sub(usize::from(CHECKBOX_COLS) + 1),
    );
    let padding = width.saturating_sub(prefix.width() + text.width());

    let check_style = if task.checked {
        with_bg(Style::default().fg(theme.green))
    } else {
        with_bg(Style::default().fg(theme.dim))
    };
    let text_style = if task.checked {
        with_bg(
            Style::default()
                .fg(theme.dim)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        with_bg(Style::default().fg(theme.text))
    };

    Line::from(vec![
        Span::styled(prefix, check_style),
        Span::styled(text, text_style),
        Span::styled(" ".repeat(padding), with_bg(Style::default())),
    ])
}

/// Input field: placeholder when idle, buffer with a block cursor while
/// typing
fn input_line(app: &App, theme: &Theme, width: u16) -> Line<'static> {
    let bg = theme.chrome;
    let width = usize::from(width);

    if app.input.is_empty() && app.mode != Mode::Insert {
        let placeholder = truncate_to_width(" Add a task...", width);
        let padding = width.saturating_sub(placeholder.width());
        return Line::from(vec![
            Span::styled(placeholder, Style::default().fg(theme.dim).bg(bg)),
            Span::styled(" ".repeat(padding), Style::default().bg(bg)),
        ]);
    }

    let before = &app.input[..app.input_cursor];
    let after = &app.input[app.input_cursor..];

    let mut spans = Vec::new();
    // keep the cursor on screen when the buffer outgrows the field
    let before_shown = tail_to_width(before, width.saturating_sub(3));
    spans.push(Span::styled(
        format!(" {before_shown}"),
        Style::default().fg(theme.text_bright).bg(bg),
    ));
    let mut used = 1 + before_shown.width();
    if app.mode == Mode::Insert {
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(theme.highlight).bg(bg),
        ));
        used += 1;
    }
    let after_shown = truncate_to_width(after, width.saturating_sub(used));
    used += after_shown.width();
    spans.push(Span::styled(
        after_shown,
        Style::default().fg(theme.text_bright).bg(bg),
    ));
    spans.push(Span::styled(
        " ".repeat(width.saturating_sub(used)),
        Style::default().bg(bg),
    ));
    Line::from(spans)
}

/// Status row: the active notice, or key hints for the current mode
fn status_line(app: &App, theme: &Theme, width: u16) -> Line<'static> {
    let width = usize::from(width);

    if let Some(notice) = &app.notice {
        let fg = match notice.kind {
            NoticeKind::Info => theme.green,
            NoticeKind::Warn => theme.yellow,
            NoticeKind::Error => theme.red,
        };
        let text = truncate_to_width(&format!(" {}", notice.text), width);
        return Line::from(Span::styled(text, Style::default().fg(fg)));
    }

    let hint = match app.mode {
        Mode::Navigate => " a add  spc check  d delete  s save  p pin  ? help",
        Mode::Insert => " Enter add  Esc done",
    };
    Line::from(Span::styled(
        truncate_to_width(hint, width),
        Style::default().fg(theme.dim),
    ))
}

/// Truncate `s` to at most `max` columns, appending an ellipsis when cut
fn truncate_to_width(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('\u{2026}');
    out
}

/// Keep the trailing part of `s` that fits in `max` columns
fn tail_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        out.insert(0, c);
        used += w;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_to_width("abc", 5), "abc");
        assert_eq!(truncate_to_width("abcde", 5), "abcde");
    }

    #[test]
    fn truncate_cuts_with_ellipsis() {
        assert_eq!(truncate_to_width("abcdef", 5), "abcd\u{2026}");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn truncate_counts_wide_chars() {
        // each CJK char is two columns
        assert_eq!(truncate_to_width("\u{4F60}\u{597D}\u{5417}", 5), "\u{4F60}\u{597D}\u{2026}");
    }

    #[test]
    fn tail_keeps_the_end() {
        assert_eq!(tail_to_width("abcdef", 3), "def");
        assert_eq!(tail_to_width("ab", 3), "ab");
    }
}
