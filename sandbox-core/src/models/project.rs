use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::snapshot::Snapshot;
use crate::error::SandboxError;

/// A site being built in the sandbox.
///
/// The `document` is the full HTML shown in the preview. It is only ever
/// changed by approved intents or by restoring a snapshot, and it is never
/// absent while the project exists. `history` is newest-first and bounded
/// by [`crate::snapshot::HISTORY_LIMIT`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub kind: ProjectKind,
    pub document: String,
    pub history: Vec<Snapshot>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn new(name: impl Into<String>, kind: ProjectKind, document: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            document: document.into(),
            history: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn summary(&self, active: bool) -> ProjectSummary {
        ProjectSummary {
            id: self.id,
            name: self.name.clone(),
            kind: self.kind,
            snapshots: self.history.len(),
            active,
        }
    }
}

/// The starting template family a project was created from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProjectKind {
    Blank,
    Fx,
    Simple,
}

impl ProjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Fx => "fx",
            Self::Simple => "simple",
        }
    }
}

impl FromStr for ProjectKind {
    type Err = SandboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blank" => Ok(Self::Blank),
            "fx" => Ok(Self::Fx),
            "simple" => Ok(Self::Simple),
            other => Err(SandboxError::UnknownKind(other.to_string())),
        }
    }
}

/// Input for creating a new project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProjectInput {
    pub kind: ProjectKind,
}

/// Lightweight listing entry for the project sidebar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectSummary {
    pub id: Uuid,
    pub name: String,
    pub kind: ProjectKind,
    /// Number of snapshots currently held in the project's history.
    pub snapshots: usize,
    /// Whether this is the session's active project.
    pub active: bool,
}
