use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the sandbox session.
///
/// Leaf functions (resolver, mutator, plan expansion, snapshot store) stay
/// total and never produce these; the session facade reports references to
/// things that do not exist.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SandboxError {
    #[error("Project not found: {0}")]
    ProjectNotFound(Uuid),

    #[error("Snapshot not found: {0}")]
    SnapshotNotFound(Uuid),

    #[error("No active project")]
    NoActiveProject,

    #[error("Nothing pending to approve")]
    NothingPending,

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Unknown plan: {0}")]
    UnknownPlan(String),

    #[error("Unknown project kind: {0}")]
    UnknownKind(String),

    #[error("Unknown suggestion level: {0}")]
    UnknownLevel(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

impl SandboxError {
    /// Whether the error refers to an entity that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProjectNotFound(_) | Self::SnapshotNotFound(_) | Self::NoActiveProject
        )
    }
}

pub type Result<T> = std::result::Result<T, SandboxError>;
