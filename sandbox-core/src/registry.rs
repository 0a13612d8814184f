//! The set of projects and the active-project pointer.

use uuid::Uuid;

use crate::error::{Result, SandboxError};
use crate::models::{Project, ProjectKind, ProjectSummary};
use crate::templates::{BLANK_TEMPLATE, FX_TEMPLATE, SIMPLE_TEMPLATE};

/// Name of the project every session starts with.
pub const STARTER_PROJECT: &str = "My First Site";

/// Owns every project in the session, in creation order.
///
/// Projects are never removed; they live until the session ends.
#[derive(Debug, Clone, Default)]
pub struct ProjectRegistry {
    projects: Vec<Project>,
    active: Option<Uuid>,
}

impl ProjectRegistry {
    /// A registry with no projects and nothing active.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry seeded with the starter project, which is active.
    pub fn with_starter() -> Self {
        let mut registry = Self::empty();
        let starter = Project::new(STARTER_PROJECT, ProjectKind::Simple, SIMPLE_TEMPLATE);
        let id = registry.insert(starter);
        registry.active = Some(id);
        registry
    }

    /// Create a project from the toolbar's "new site" buttons and make it active.
    ///
    /// `Fx` gets the FX template; every other kind starts from the blank template.
    pub fn create(&mut self, kind: ProjectKind) -> &Project {
        let (name, document) = match kind {
            ProjectKind::Fx => ("New FX Site", FX_TEMPLATE),
            ProjectKind::Blank | ProjectKind::Simple => ("New Blank Site", BLANK_TEMPLATE),
        };
        self.create_active(Project::new(name, kind, document))
    }

    /// Insert `project` and make it the active one.
    pub fn create_active(&mut self, project: Project) -> &Project {
        let id = self.insert(project);
        self.active = Some(id);
        tracing::info!(project_id = %id, "project created");
        &self.projects[self.projects.len() - 1]
    }

    /// Insert `project` without changing the active pointer.
    pub fn insert(&mut self, project: Project) -> Uuid {
        let id = project.id;
        self.projects.push(project);
        id
    }

    pub fn get(&self, id: Uuid) -> Result<&Project> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or(SandboxError::ProjectNotFound(id))
    }

    pub fn get_mut(&mut self, id: Uuid) -> Result<&mut Project> {
        self.projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(SandboxError::ProjectNotFound(id))
    }

    pub fn active_id(&self) -> Option<Uuid> {
        self.active
    }

    pub fn active(&self) -> Result<&Project> {
        let id = self.active.ok_or(SandboxError::NoActiveProject)?;
        self.get(id)
    }

    pub fn active_mut(&mut self) -> Result<&mut Project> {
        let id = self.active.ok_or(SandboxError::NoActiveProject)?;
        self.get_mut(id)
    }

    pub fn set_active(&mut self, id: Uuid) -> Result<()> {
        self.get(id)?;
        self.active = Some(id);
        Ok(())
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn summaries(&self) -> Vec<ProjectSummary> {
        self.projects
            .iter()
            .map(|p| p.summary(Some(p.id) == self.active))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
