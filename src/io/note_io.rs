use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::task::Task;

/// Error type for note I/O operations
#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("cannot add an empty task")]
    EmptyTask,
    #[error("no task {index} (the list has {len})")]
    OutOfRange { index: usize, len: usize },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read the task file. A missing file is the expected first-run state and
/// yields an empty list; an unreadable or malformed one is an error.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>, NoteError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(NoteError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    serde_json::from_str(&text).map_err(|e| NoteError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write the full task list as pretty-printed JSON, atomically.
pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<(), NoteError> {
    let content = serde_json::to_string_pretty(tasks).map_err(|e| NoteError::Write {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    atomic_write(path, content.as_bytes()).map_err(|e| NoteError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    // parent() of a bare filename is "", which is not a usable directory
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let tasks = load_tasks(&dir.path().join("tasks.json")).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn load_malformed_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, "not json {{{").unwrap();
        match load_tasks(&path) {
            Err(NoteError::Parse { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected parse error, got {:?}", other.map(|t| t.len())),
        }
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        let tasks = vec![
            Task::new("water the plants"),
            Task {
                text: "buy milk".into(),
                checked: true,
            },
        ];
        save_tasks(&path, &tasks).unwrap();
        let loaded = load_tasks(&path).unwrap();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn save_is_pretty_printed_with_stable_key_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        save_tasks(&path, &[Task::new("one")]).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains('\n'), "expected indented output");
        let text_pos = content.find("\"text\"").unwrap();
        let checked_pos = content.find("\"checked\"").unwrap();
        assert!(text_pos < checked_pos);
    }

    #[test]
    fn save_empty_list_writes_an_empty_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        save_tasks(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn atomic_write_replaces_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        atomic_write(&path, b"hello world").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello world");

        atomic_write(&path, b"goodbye").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "goodbye");
    }
}
