use ratatui::layout::Rect;

/// Default note size in terminal cells
pub const NOTE_WIDTH: u16 = 44;
pub const NOTE_HEIGHT: u16 = 18;

/// Rows inside the note, relative to its top edge
pub const TITLE_ROW: u16 = 0;
pub const CLOCK_ROW: u16 = 1;
pub const LIST_TOP: u16 = 3;
/// Rows below the checklist: input field and status row
pub const FOOTER_ROWS: u16 = 2;

/// Width of the checkbox cells at the left of each checklist row: ` [x] `
pub const CHECKBOX_COLS: u16 = 5;

/// What a pointer position on the note refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteHit {
    /// The pin glyph in the title bar
    Pin,
    /// The close glyph in the title bar
    Close,
    /// The rest of the title bar (the drag handle)
    TitleBar,
    /// A checklist slot (0-based from the first visible row) and whether
    /// the press landed on the checkbox cells
    Row { slot: usize, checkbox: bool },
    /// The input field
    Input,
    /// Anywhere else on the note
    Body,
}

/// Offset between the pointer and the note origin, captured on press
#[derive(Debug, Clone, Copy)]
struct DragOffset {
    dx: i32,
    dy: i32,
}

/// Pin and drag state for the floating note window.
///
/// While floating the note can be dragged by its title bar; while pinned it
/// ignores drag gestures and renders dimmed.
#[derive(Debug)]
pub struct NoteWindow {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub pinned: bool,
    drag: Option<DragOffset>,
}

impl NoteWindow {
    /// Create an unpinned note centered in `area`
    pub fn new(area: Rect) -> Self {
        let width = NOTE_WIDTH.min(area.width);
        let height = NOTE_HEIGHT.min(area.height);
        NoteWindow {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
            pinned: false,
            drag: None,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Number of checklist rows the note can show
    pub fn list_height(&self) -> usize {
        usize::from(self.height.saturating_sub(LIST_TOP + FOOTER_ROWS))
    }

    /// Flip pinned mode. Pinning cancels any in-progress drag.
    /// Returns the new pinned state.
    pub fn toggle_pin(&mut self) -> bool {
        self.pinned = !self.pinned;
        if self.pinned {
            self.drag = None;
        }
        self.pinned
    }

    /// Record the pointer offset for a title-bar press. Ignored while pinned.
    pub fn begin_drag(&mut self, column: u16, row: u16) {
        if self.pinned {
            return;
        }
        self.drag = Some(DragOffset {
            dx: i32::from(column) - i32::from(self.x),
            dy: i32::from(row) - i32::from(self.y),
        });
    }

    /// Reposition the note so the press offset is maintained under the
    /// pointer, clamped to `bounds`. No-op unless a drag is in progress.
    pub fn drag_to(&mut self, column: u16, row: u16, bounds: Rect) {
        if self.pinned {
            return;
        }
        let Some(drag) = self.drag else {
            return;
        };
        self.x = clamp_axis(i32::from(column) - drag.dx, bounds.width, self.width);
        self.y = clamp_axis(i32::from(row) - drag.dy, bounds.height, self.height);
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Keep the note fully on screen, e.g. after a terminal resize
    pub fn clamp(&mut self, bounds: Rect) {
        self.width = self.width.min(bounds.width);
        self.height = self.height.min(bounds.height);
        self.x = clamp_axis(i32::from(self.x), bounds.width, self.width);
        self.y = clamp_axis(i32::from(self.y), bounds.height, self.height);
    }

    /// Resolve a pointer position to a note region. None when outside.
    pub fn hit(&self, column: u16, row: u16) -> Option<NoteHit> {
        let rect = self.rect();
        if column < rect.x
            || column >= rect.x + rect.width
            || row < rect.y
            || row >= rect.y + rect.height
        {
            return None;
        }
        let rel_col = column - rect.x;
        let rel_row = row - rect.y;

        if rel_row == TITLE_ROW {
            return Some(if rel_col == self.width.saturating_sub(4) {
                NoteHit::Pin
            } else if rel_col == self.width.saturating_sub(2) {
                NoteHit::Close
            } else {
                NoteHit::TitleBar
            });
        }
        if rel_row >= LIST_TOP && rel_row < LIST_TOP + self.list_height() as u16 {
            return Some(NoteHit::Row {
                slot: usize::from(rel_row - LIST_TOP),
                checkbox: rel_col < CHECKBOX_COLS,
            });
        }
        if rel_row == self.height - FOOTER_ROWS {
            return Some(NoteHit::Input);
        }
        Some(NoteHit::Body)
    }
}

fn clamp_axis(pos: i32, bound: u16, size: u16) -> u16 {
    let max = i32::from(bound.saturating_sub(size));
    pos.clamp(0, max.max(0)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::new(0, 0, 120, 40)
    }

    #[test]
    fn toggle_pin_twice_restores_state() {
        let mut window = NoteWindow::new(screen());
        assert!(!window.pinned);
        assert!(window.toggle_pin());
        assert!(!window.toggle_pin());
    }

    #[test]
    fn drag_maintains_press_offset() {
        let mut window = NoteWindow::new(screen());
        window.x = 10;
        window.y = 5;

        // press 3 cells right and 0 rows down of the origin
        window.begin_drag(13, 5);
        window.drag_to(30, 12, screen());
        assert_eq!((window.x, window.y), (27, 12));

        window.drag_to(13, 5, screen());
        assert_eq!((window.x, window.y), (10, 5));
    }

    #[test]
    fn drag_without_press_is_a_no_op() {
        let mut window = NoteWindow::new(screen());
        let (x, y) = (window.x, window.y);
        window.drag_to(0, 0, screen());
        assert_eq!((window.x, window.y), (x, y));
    }

    #[test]
    fn pinned_note_ignores_drag() {
        let mut window = NoteWindow::new(screen());
        let (x, y) = (window.x, window.y);

        window.toggle_pin();
        window.begin_drag(window.x + 2, window.y);
        assert!(!window.is_dragging());
        window.drag_to(0, 0, screen());
        assert_eq!((window.x, window.y), (x, y));
    }

    #[test]
    fn pinning_cancels_an_active_drag() {
        let mut window = NoteWindow::new(screen());
        window.begin_drag(window.x + 1, window.y);
        assert!(window.is_dragging());
        window.toggle_pin();
        assert!(!window.is_dragging());
    }

    #[test]
    fn drag_is_clamped_to_bounds() {
        let mut window = NoteWindow::new(screen());
        window.begin_drag(window.x, window.y);
        window.drag_to(0, 0, screen());
        assert_eq!((window.x, window.y), (0, 0));

        window.drag_to(200, 200, screen());
        assert_eq!(window.x, 120 - window.width);
        assert_eq!(window.y, 40 - window.height);
    }

    #[test]
    fn hit_resolves_note_regions() {
        let mut window = NoteWindow::new(screen());
        window.x = 10;
        window.y = 5;

        assert_eq!(window.hit(0, 0), None);
        assert_eq!(window.hit(12, 5), Some(NoteHit::TitleBar));
        assert_eq!(window.hit(10 + window.width - 4, 5), Some(NoteHit::Pin));
        assert_eq!(window.hit(10 + window.width - 2, 5), Some(NoteHit::Close));
        assert_eq!(
            window.hit(11, 5 + LIST_TOP),
            Some(NoteHit::Row {
                slot: 0,
                checkbox: true
            })
        );
        assert_eq!(
            window.hit(10 + CHECKBOX_COLS, 5 + LIST_TOP + 2),
            Some(NoteHit::Row {
                slot: 2,
                checkbox: false
            })
        );
        assert_eq!(
            window.hit(12, 5 + window.height - FOOTER_ROWS),
            Some(NoteHit::Input)
        );
    }
}
