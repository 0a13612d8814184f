//! Bounded per-project snapshot history.
//!
//! History is stored newest-first on the [`Project`] itself. These functions
//! keep it bounded and implement restore and fork. Lookups that miss are
//! no-ops and report `None`/`false`.

use uuid::Uuid;

use crate::models::{Project, Snapshot};

/// Maximum number of snapshots retained per project.
pub const HISTORY_LIMIT: usize = 10;

/// Number of snapshots shown in the history panel.
pub const PANEL_LIMIT: usize = 5;

/// Record the project's current document under `label`.
///
/// The snapshot is prepended and the oldest entries beyond
/// [`HISTORY_LIMIT`] are dropped.
pub fn capture(project: &mut Project, label: impl Into<String>) -> Snapshot {
    let snapshot = Snapshot::capture(label, &project.document);
    project.history.insert(0, snapshot.clone());
    project.history.truncate(HISTORY_LIMIT);
    snapshot
}

pub fn find(project: &Project, snapshot_id: Uuid) -> Option<&Snapshot> {
    project.history.iter().find(|s| s.id == snapshot_id)
}

/// Roll the project's document back to a snapshot.
///
/// Does not capture a new snapshot, so history length is unchanged.
/// Returns `false` when the snapshot is not in the project's history.
pub fn restore(project: &mut Project, snapshot_id: Uuid) -> bool {
    let Some(document) = find(project, snapshot_id).map(|s| s.document.clone()) else {
        return false;
    };
    project.document = document;
    true
}

/// Create a new project seeded from one of `project`'s snapshots.
///
/// The fork gets a fresh id, the source name with a " (fork)" suffix, the
/// snapshot's document, and a history containing only that snapshot.
pub fn fork(project: &Project, snapshot_id: Uuid) -> Option<Project> {
    let snapshot = find(project, snapshot_id)?;
    let mut forked = Project::new(
        format!("{} (fork)", project.name),
        project.kind,
        snapshot.document.clone(),
    );
    forked.history = vec![snapshot.clone()];
    Some(forked)
}

/// The newest snapshots, as shown in the history panel.
pub fn recent(project: &Project) -> &[Snapshot] {
    let end = project.history.len().min(PANEL_LIMIT);
    &project.history[..end]
}
