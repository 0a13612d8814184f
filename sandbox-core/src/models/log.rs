use serde::{Deserialize, Serialize};

/// Who wrote a log line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    System,
    User,
}

/// A single line in the session's chat/activity log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogEntry {
    pub from: Speaker,
    pub text: String,
}

impl LogEntry {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            from: Speaker::System,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            from: Speaker::User,
            text: text.into(),
        }
    }
}
