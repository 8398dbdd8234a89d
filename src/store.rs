use std::path::{Path, PathBuf};

use crate::io::note_io::{self, NoteError};
use crate::model::task::Task;

/// The in-memory task list and its binding to the persisted file.
///
/// The store is the single source of truth: adds, removals, and checkbox
/// toggles all go through it, and `save` serializes exactly what it holds.
/// The renderer draws the store every frame, so the screen can never drift
/// from the list.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    path: PathBuf,
    dirty: bool,
}

impl TaskStore {
    /// Create an empty store bound to `path` without touching the disk
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        TaskStore {
            tasks: Vec::new(),
            path: path.into(),
            dirty: false,
        }
    }

    /// Load the store from `path`. A missing file is the first-run state
    /// and yields an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, NoteError> {
        let path = path.into();
        let tasks = note_io::load_tasks(&path)?;
        Ok(TaskStore {
            tasks,
            path,
            dirty: false,
        })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the list has unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Append an unchecked task if `text` is non-empty after trimming.
    /// Returns whether anything was added.
    pub fn add(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.tasks.push(Task::new(text));
        self.dirty = true;
        true
    }

    /// Flip the checkbox at `index`. Out of range is a no-op.
    pub fn toggle(&mut self, index: usize) {
        if let Some(task) = self.tasks.get_mut(index) {
            task.checked = !task.checked;
            self.dirty = true;
        }
    }

    /// Set the checkbox at `index`. Out of range is a no-op; setting the
    /// state it already has does not mark the store dirty.
    pub fn set_checked(&mut self, index: usize, checked: bool) {
        if let Some(task) = self.tasks.get_mut(index)
            && task.checked != checked
        {
            task.checked = checked;
            self.dirty = true;
        }
    }

    /// Remove every listed index exactly once. Removal happens in
    /// descending order so earlier removals cannot shift later targets;
    /// duplicates and out-of-range indices are ignored. Returns the number
    /// of tasks removed.
    pub fn remove_many(&mut self, indices: &[usize]) -> usize {
        let mut sorted: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.tasks.len())
            .collect();
        sorted.sort_unstable();
        sorted.dedup();
        for &i in sorted.iter().rev() {
            self.tasks.remove(i);
        }
        if !sorted.is_empty() {
            self.dirty = true;
        }
        sorted.len()
    }

    /// Write the full list to the bound file and clear the dirty flag
    pub fn save(&mut self) -> Result<(), NoteError> {
        note_io::save_tasks(&self.path, &self.tasks)?;
        self.dirty = false;
        Ok(())
    }
}
