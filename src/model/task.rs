use serde::{Deserialize, Serialize};

/// A single checklist entry.
///
/// Field order is the persisted key order: `text` before `checked`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// The checklist text
    pub text: String,
    /// Whether the box is ticked
    pub checked: bool,
}

impl Task {
    /// Create an unchecked task with the given text
    pub fn new(text: impl Into<String>) -> Self {
        Task {
            text: text.into(),
            checked: false,
        }
    }

    /// The character drawn inside the checkbox `[ ]`
    pub fn checkbox_char(&self) -> char {
        if self.checked { 'x' } else { ' ' }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_unchecked() {
        let task = Task::new("water the plants");
        assert_eq!(task.text, "water the plants");
        assert!(!task.checked);
        assert_eq!(task.checkbox_char(), ' ');
    }

    #[test]
    fn serialized_key_order_is_text_then_checked() {
        let task = Task {
            text: "buy milk".into(),
            checked: true,
        };
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"text":"buy milk","checked":true}"#);
    }
}
