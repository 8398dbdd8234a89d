use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default task file, relative to the working directory
pub const DEFAULT_TASK_FILE: &str = "tasks.json";

/// Default clock format: weekday, month day year, 12-hour time
pub const DEFAULT_CLOCK_FORMAT: &str = "%A, %B %-d %Y - %I:%M:%S %P";

/// Configuration from sticky.toml. Every field is optional; a missing
/// file means all defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteConfig {
    /// Task file path, relative to the working directory
    #[serde(default)]
    pub file: Option<String>,
    /// strftime format for the clock header
    #[serde(default)]
    pub clock_format: Option<String>,
    /// Hex color overrides, keyed by theme slot name
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl NoteConfig {
    /// The task file path, falling back to the default
    pub fn task_file(&self) -> &str {
        self.file.as_deref().unwrap_or(DEFAULT_TASK_FILE)
    }

    /// The clock format, falling back to the default
    pub fn clock_format(&self) -> &str {
        self.clock_format.as_deref().unwrap_or(DEFAULT_CLOCK_FORMAT)
    }
}
