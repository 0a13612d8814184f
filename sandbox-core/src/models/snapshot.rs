use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A copy of a project's document captured immediately before a mutation.
///
/// Snapshots are never edited after capture. `document` always holds the
/// pre-mutation value; `timestamp` is the wall-clock time shown in the
/// history panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snapshot {
    pub id: Uuid,
    pub label: String,
    pub document: String,
    pub timestamp: String,
    pub created_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn capture(label: impl Into<String>, document: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            document: document.to_owned(),
            timestamp: now.format("%H:%M:%S").to_string(),
            created_at: now,
        }
    }
}
