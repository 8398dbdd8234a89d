use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::io::note_io::NoteError;
use crate::model::config::NoteConfig;

/// Config filename, looked up in the working directory
pub const CONFIG_FILE: &str = "sticky.toml";

/// Read sticky.toml from the given directory. A missing file yields the
/// default config; a malformed one is an error.
pub fn read_config(dir: &Path) -> Result<NoteConfig, NoteError> {
    let path = dir.join(CONFIG_FILE);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(NoteConfig::default()),
        Err(e) => return Err(NoteError::Read { path, source: e }),
    };
    toml::from_str(&text).map_err(|e| NoteError::Config { path, source: e })
}

/// Resolve the task file path: `--file` flag, then the config `file` entry,
/// then the default, the latter two relative to the working directory.
pub fn resolve_task_file(flag: Option<&Path>) -> Result<PathBuf, NoteError> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir()?;
    let config = read_config(&cwd)?;
    Ok(cwd.join(config.task_file()))
}
