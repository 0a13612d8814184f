//! Request and response types for MCP tools.

use rmcp::schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use sandbox_core::{Project, Snapshot};

// ============================================================
// Request Types
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CommandRequest {
    #[schemars(
        description = "Command text, e.g. 'add about', 'add pricing', 'make fx', 'simplify' or 'autopilot'"
    )]
    pub text: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateProjectRequest {
    #[schemars(description = "Starting template family: 'blank', 'fx' or 'simple'")]
    pub kind: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ProjectRequest {
    #[schemars(description = "The UUID of the project")]
    pub project_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListSnapshotsRequest {
    #[schemars(description = "The UUID of the project whose history to list")]
    pub project_id: String,
    #[schemars(description = "Only return the 5 newest snapshots shown in the history panel")]
    #[serde(default)]
    pub panel_only: bool,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SnapshotRequest {
    #[schemars(description = "The UUID of the project that owns the snapshot")]
    pub project_id: String,
    #[schemars(description = "The UUID of the snapshot")]
    pub snapshot_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SmartSuggestRequest {
    #[schemars(description = "Depth of advice: 'light' (3 tips), 'deep' (7 tips) or 'ultra' (4 options)")]
    pub level: String,
    #[schemars(
        description = "If true, hold the tips as the pending proposal so approving logs them. Defaults to false."
    )]
    #[serde(default)]
    pub propose: bool,
}

// ============================================================
// Response Types
// ============================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ResolveResponse {
    pub matched: bool,
    pub display: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub document: String,
    pub snapshots: usize,
}

impl From<&Project> for ProjectInfo {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name.clone(),
            kind: p.kind.as_str().to_string(),
            document: p.document.clone(),
            snapshots: p.history.len(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SnapshotInfo {
    pub id: String,
    pub label: String,
    pub timestamp: String,
}

impl From<&Snapshot> for SnapshotInfo {
    fn from(s: &Snapshot) -> Self {
        Self {
            id: s.id.to_string(),
            label: s.label.clone(),
            timestamp: s.timestamp.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SnapshotListResponse {
    pub project_id: String,
    pub snapshots: Vec<SnapshotInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CancelResponse {
    /// Description of the discarded proposal, if there was one.
    pub cancelled: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub level: String,
    pub suggestions: Vec<String>,
    pub proposed: bool,
}
