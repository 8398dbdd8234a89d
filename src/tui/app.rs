use std::collections::HashSet;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use crate::io::config_io::read_config;
use crate::model::config::{DEFAULT_CLOCK_FORMAT, NoteConfig};
use crate::store::TaskStore;

use super::input;
use super::render;
use super::theme::Theme;
use super::window::NoteWindow;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Insert,
}

/// Severity of a transient status-row message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warn,
    Error,
}

/// A transient status-row message
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub at: Instant,
}

/// Minimum display time before a keypress may clear a notice
pub const NOTICE_MIN_AGE: Duration = Duration::from_secs(3);

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub window: NoteWindow,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    /// Cursor index into the task list
    pub cursor: usize,
    /// First visible task row
    pub scroll: usize,
    /// Multi-selected task indices
    pub selected: HashSet<usize>,
    /// Input field buffer and cursor (byte offset)
    pub input: String,
    pub input_cursor: usize,
    pub notice: Option<Notice>,
    pub show_help: bool,
    /// strftime format for the clock header
    pub clock_format: String,
    /// Full terminal area, updated on resize
    pub screen: Rect,
}

impl App {
    pub fn new(store: TaskStore, config: &NoteConfig, screen: Rect) -> Self {
        App {
            store,
            window: NoteWindow::new(screen),
            theme: Theme::from_config(config),
            mode: Mode::Navigate,
            should_quit: false,
            cursor: 0,
            scroll: 0,
            selected: HashSet::new(),
            input: String::new(),
            input_cursor: 0,
            notice: None,
            show_help: false,
            clock_format: config.clock_format().to_string(),
            screen,
        }
    }

    /// The clock header for the current local time. A bad configured
    /// format string falls back to the default instead of erroring.
    pub fn clock_line(&self) -> String {
        use std::fmt::Write;

        let now = Local::now();
        let mut out = String::new();
        if write!(out, "{}", now.format(&self.clock_format)).is_err() {
            out.clear();
            let _ = write!(out, "{}", now.format(DEFAULT_CLOCK_FORMAT));
        }
        out
    }

    pub fn notify(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notice = Some(Notice {
            kind,
            text: text.into(),
            at: Instant::now(),
        });
    }

    /// Clear the notice once it has been visible long enough
    pub fn clear_stale_notice(&mut self) {
        let stale = self
            .notice
            .as_ref()
            .is_some_and(|n| n.at.elapsed() >= NOTICE_MIN_AGE);
        if stale {
            self.notice = None;
        }
    }

    /// Scroll so the cursor row is on screen
    pub fn ensure_cursor_visible(&mut self) {
        let height = self.window.list_height().max(1);
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + height {
            self.scroll = self.cursor + 1 - height;
        }
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.ensure_cursor_visible();
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.store.len() {
            self.cursor += 1;
        }
        self.ensure_cursor_visible();
    }

    /// Toggle multi-selection on the cursor row
    pub fn toggle_select(&mut self) {
        if self.cursor >= self.store.len() {
            return;
        }
        if !self.selected.insert(self.cursor) {
            self.selected.remove(&self.cursor);
        }
    }

    /// Delete the selected rows. With nothing selected this warns and
    /// changes no state.
    pub fn delete_selected(&mut self) {
        if self.selected.is_empty() {
            self.notify(NoticeKind::Warn, "select a task to delete (v marks)");
            return;
        }
        let indices: Vec<usize> = self.selected.iter().copied().collect();
        self.store.remove_many(&indices);
        self.selected.clear();
        if self.cursor >= self.store.len() {
            self.cursor = self.store.len().saturating_sub(1);
        }
        self.scroll = self.scroll.min(self.cursor);
        self.ensure_cursor_visible();
    }

    /// Save the list, reporting the outcome in the status row
    pub fn save_tasks(&mut self) {
        match self.store.save() {
            Ok(()) => self.notify(NoticeKind::Info, "tasks saved"),
            Err(e) => self.notify(NoticeKind::Error, e.to_string()),
        }
    }

    /// Commit the input buffer as a new task. Whitespace-only input is
    /// silently ignored; the buffer is cleared only on a successful add.
    pub fn commit_input(&mut self) {
        if self.store.add(&self.input) {
            self.input.clear();
            self.input_cursor = 0;
            self.cursor = self.store.len() - 1;
            self.ensure_cursor_visible();
        }
    }
}

/// Run the TUI application
pub fn run(file_override: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = read_config(&cwd)?;
    let path = match file_override {
        Some(path) => path.to_path_buf(),
        None => cwd.join(config.task_file()),
    };
    let store = TaskStore::load(path)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let size = terminal.size()?;
    let screen = Rect::new(0, 0, size.width, size.height);
    let mut app = App::new(store, &config, screen);

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // The poll timeout doubles as the clock tick: the header re-renders
        // from the current time at least four times a second.
        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                Event::Resize(width, height) => {
                    app.screen = Rect::new(0, 0, width, height);
                    app.window.clamp(app.screen);
                    app.ensure_cursor_visible();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app(texts: &[&str]) -> App {
        let mut store = TaskStore::empty("unused.json");
        for text in texts {
            store.add(text);
        }
        App::new(store, &NoteConfig::default(), Rect::new(0, 0, 120, 40))
    }

    #[test]
    fn delete_with_no_selection_warns_and_keeps_tasks() {
        let mut app = test_app(&["a", "b"]);
        app.delete_selected();
        assert_eq!(app.store.len(), 2);
        let notice = app.notice.expect("expected a warning notice");
        assert_eq!(notice.kind, NoticeKind::Warn);
    }

    #[test]
    fn delete_removes_selected_rows_and_clamps_cursor() {
        let mut app = test_app(&["a", "b", "c"]);
        app.cursor = 2;
        app.selected.extend([1, 2]);
        app.delete_selected();
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.tasks()[0].text, "a");
        assert_eq!(app.cursor, 0);
        assert!(app.selected.is_empty());
    }

    #[test]
    fn commit_input_adds_and_clears_buffer() {
        let mut app = test_app(&[]);
        app.input = "buy milk".into();
        app.input_cursor = app.input.len();
        app.commit_input();
        assert_eq!(app.store.len(), 1);
        assert!(app.input.is_empty());
        assert_eq!(app.input_cursor, 0);
    }

    #[test]
    fn commit_blank_input_is_ignored_and_kept() {
        let mut app = test_app(&[]);
        app.input = "   ".into();
        app.input_cursor = 3;
        app.commit_input();
        assert_eq!(app.store.len(), 0);
        // buffer stays so the user can keep typing
        assert_eq!(app.input, "   ");
    }

    #[test]
    fn cursor_movement_scrolls_the_list() {
        let mut app = test_app(&[]);
        for i in 0..40 {
            app.store.add(&format!("task {i}"));
        }
        let height = app.window.list_height();

        for _ in 0..25 {
            app.move_cursor_down();
        }
        assert_eq!(app.cursor, 25);
        assert!(app.cursor < app.scroll + height);
        assert!(app.cursor >= app.scroll);

        for _ in 0..25 {
            app.move_cursor_up();
        }
        assert_eq!(app.cursor, 0);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn clock_line_renders_the_default_format() {
        let app = test_app(&[]);
        let line = app.clock_line();
        assert!(line.contains(':'), "expected a time in {line:?}");
    }

    #[test]
    fn clock_line_survives_a_bad_format() {
        let mut app = test_app(&[]);
        app.clock_format = "%Q bogus".into();
        assert!(!app.clock_line().is_empty());
    }

    #[test]
    fn toggle_select_marks_and_unmarks() {
        let mut app = test_app(&["a", "b"]);
        app.toggle_select();
        assert!(app.selected.contains(&0));
        app.toggle_select();
        assert!(!app.selected.contains(&0));
    }
}
