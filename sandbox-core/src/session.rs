//! The session facade the shell talks to.
//!
//! A [`Sandbox`] owns the project registry, the single pending proposal,
//! recent commands, the activity log and the wizard. Every operation runs to
//! completion synchronously; hosts that share a sandbox across tasks must
//! serialize access to it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::actions::{self, ActionOutcome, PaletteAction, Screen, STUCK_TIPS};
use crate::error::{Result, SandboxError};
use crate::models::{
    Intent, LogEntry, Project, ProjectKind, ProjectSummary, Snapshot, SuggestLevel,
};
use crate::recent::RecentCommands;
use crate::registry::ProjectRegistry;
use crate::resolver::{self, UNKNOWN_COMMAND_HINT};
use crate::templates::{BLANK_TEMPLATE, FX_TEMPLATE};
use crate::wizard::{Wizard, WizardChoice};
use crate::workflow::{ProposalState, ProposalWorkflow};
use crate::{advisor, snapshot};

pub const WELCOME: &str =
    "Welcome to AI Sandbox (Command Palette + Guided Wizard + Snapshots).";

/// Outcome of typing a command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Submission {
    /// Input was blank and never reached the resolver.
    Ignored,
    /// No rule matched; the hint was logged.
    Unrecognized { hint: String },
    /// The resolved intent is now pending.
    Proposed {
        intent: Intent,
        description: String,
        discarded: Option<Intent>,
    },
}

/// Result of approving the pending proposal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplyResult {
    pub project_id: Uuid,
    pub document: String,
    /// Log lines written by this approval, in order.
    pub log: Vec<String>,
    /// Advisory tips, only for `SmartSuggest`.
    pub suggestions: Vec<String>,
    pub snapshot: Option<Snapshot>,
}

/// Pending proposal as shown in the approval box.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PendingView {
    pub state: ProposalState,
    pub intent: Option<Intent>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Sandbox {
    registry: ProjectRegistry,
    workflow: ProposalWorkflow,
    recent: RecentCommands,
    log: Vec<LogEntry>,
    wizard: Wizard,
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Sandbox {
    /// A session with the starter project active.
    pub fn new() -> Self {
        Self::with_registry(ProjectRegistry::with_starter())
    }

    pub fn with_registry(registry: ProjectRegistry) -> Self {
        Self {
            registry,
            workflow: ProposalWorkflow::new(),
            recent: RecentCommands::new(),
            log: vec![LogEntry::system(WELCOME)],
            wizard: Wizard::default(),
        }
    }

    // ============================================================
    // Commands & proposals
    // ============================================================

    pub fn resolve(&self, text: &str) -> Option<Intent> {
        resolver::resolve(text)
    }

    /// Handle a typed command: log it, resolve it and propose the result.
    pub fn submit(&mut self, text: &str) -> Submission {
        let text = text.trim();
        if text.is_empty() {
            return Submission::Ignored;
        }
        self.log.push(LogEntry::user(text));

        let Some(intent) = resolver::resolve(text) else {
            self.system(UNKNOWN_COMMAND_HINT);
            return Submission::Unrecognized {
                hint: UNKNOWN_COMMAND_HINT.to_string(),
            };
        };

        self.recent.record(intent.display());
        let description = intent.describe();
        let discarded = self.replace_pending(intent.clone());
        self.system(format!("Proposed: {}", description));
        Submission::Proposed {
            intent,
            description,
            discarded,
        }
    }

    /// Make `intent` the pending proposal, silently replacing any other.
    pub fn propose(&mut self, intent: Intent) -> Result<Option<Intent>> {
        self.workflow.propose(intent)
    }

    pub fn cancel(&mut self) -> Option<Intent> {
        self.workflow.cancel()
    }

    pub fn pending(&self) -> Option<&Intent> {
        self.workflow.pending()
    }

    pub fn pending_view(&self) -> PendingView {
        let intent = self.workflow.pending().cloned();
        PendingView {
            state: self.workflow.state(),
            description: intent.as_ref().map(Intent::describe),
            intent,
        }
    }

    /// Apply the pending proposal to the active project.
    ///
    /// With no active project the proposal stays pending.
    pub fn approve(&mut self) -> Result<ApplyResult> {
        if self.workflow.pending().is_none() {
            return Err(SandboxError::NothingPending);
        }
        let project = self.registry.active_mut()?;
        let approval = self.workflow.approve(project)?;
        let project_id = project.id;
        let document = project.document.clone();

        let mut lines = Vec::new();
        match &approval.intent {
            Intent::AutopilotPlan { .. } => {
                lines.push("Autopilot executed: Basic Landing Plan.".to_string());
            }
            Intent::SmartSuggest { level, suggestions, .. } => {
                lines.push(format!("Smart suggestions ({}):", level));
                lines.extend(suggestions.iter().map(|tip| format!("• {}", tip)));
            }
            other => lines.push(format!("Applied: {}", other.describe())),
        }
        for line in &lines {
            self.system(line.clone());
        }

        Ok(ApplyResult {
            project_id,
            document,
            log: lines,
            suggestions: approval.suggestions,
            snapshot: approval.snapshot,
        })
    }

    // ============================================================
    // Recent commands
    // ============================================================

    pub fn recent_commands(&self) -> &[String] {
        self.recent.as_slice()
    }

    /// Re-propose a recent command by resolving its display text again.
    pub fn reuse_recent(&mut self, display: &str) -> Option<Intent> {
        let intent = resolver::resolve(display)?;
        self.recent.record(intent.display());
        self.system(format!("Proposed (Recent): {}", intent.describe()));
        self.replace_pending(intent.clone());
        Some(intent)
    }

    // ============================================================
    // Advisor
    // ============================================================

    /// Tips for the active project's document. Never mutates anything.
    pub fn suggest(&self, level: SuggestLevel) -> Result<Vec<String>> {
        let project = self.registry.active()?;
        Ok(advisor::suggest(level, &project.document))
    }

    /// Propose a `SmartSuggest` intent carrying tips for the active project.
    pub fn propose_suggestions(&mut self, level: SuggestLevel) -> Result<Intent> {
        let intent = Intent::smart_suggest(level, self.suggest(level)?);
        self.system(format!("Proposed: {}", intent.describe()));
        self.replace_pending(intent.clone());
        Ok(intent)
    }

    // ============================================================
    // Projects
    // ============================================================

    pub fn projects(&self) -> Vec<ProjectSummary> {
        self.registry.summaries()
    }

    pub fn project(&self, id: Uuid) -> Result<&Project> {
        self.registry.get(id)
    }

    pub fn active_project(&self) -> Result<&Project> {
        self.registry.active()
    }

    /// Create a project and switch to it, discarding any pending proposal.
    pub fn create_project(&mut self, kind: ProjectKind) -> Project {
        self.workflow.cancel();
        let project = self.registry.create(kind).clone();
        self.system(format!(
            "Created {} using {} template.",
            project.name,
            kind.as_str()
        ));
        project
    }

    /// Switch the active project, discarding any pending proposal.
    pub fn set_active(&mut self, id: Uuid) -> Result<()> {
        self.registry.set_active(id)?;
        self.workflow.cancel();
        Ok(())
    }

    // ============================================================
    // History
    // ============================================================

    pub fn history(&self, project_id: Uuid) -> Result<&[Snapshot]> {
        Ok(&self.registry.get(project_id)?.history)
    }

    /// Newest snapshots shown in the history panel.
    pub fn history_panel(&self, project_id: Uuid) -> Result<&[Snapshot]> {
        Ok(snapshot::recent(self.registry.get(project_id)?))
    }

    /// Reset a project's document to a snapshot. History is left as is.
    pub fn restore_snapshot(&mut self, project_id: Uuid, snapshot_id: Uuid) -> Result<&Project> {
        let project = self.registry.get_mut(project_id)?;
        if !snapshot::restore(project, snapshot_id) {
            tracing::warn!(%project_id, %snapshot_id, "restore target not found");
            return Err(SandboxError::SnapshotNotFound(snapshot_id));
        }
        tracing::info!(%project_id, %snapshot_id, "restored snapshot");
        self.system("Restored snapshot.");
        self.registry.get(project_id)
    }

    /// Add a new project seeded from a snapshot. The active project is unchanged.
    pub fn fork_snapshot(&mut self, project_id: Uuid, snapshot_id: Uuid) -> Result<Project> {
        let source = self.registry.get(project_id)?;
        let Some(forked) = snapshot::fork(source, snapshot_id) else {
            tracing::warn!(%project_id, %snapshot_id, "fork source not found");
            return Err(SandboxError::SnapshotNotFound(snapshot_id));
        };
        tracing::info!(%project_id, %snapshot_id, fork_id = %forked.id, "forked snapshot");
        self.registry.insert(forked.clone());
        self.system("Forked snapshot.");
        Ok(forked)
    }

    // ============================================================
    // Toolbar, palette, help
    // ============================================================

    pub fn toolbar_click(&mut self, action: &str) -> ActionOutcome {
        match action {
            "autopilot" => {
                let intent = Intent::autopilot(crate::plan::BASIC_LANDING);
                self.recent.record(intent.display());
                self.replace_pending(intent.clone());
                self.system("Autopilot proposed: Basic Landing Plan.");
                ActionOutcome::Proposed { intent }
            }
            "suggest" => match self.propose_suggestions(SuggestLevel::Light) {
                Ok(intent) => ActionOutcome::Proposed { intent },
                Err(_) => self.ignore_action(action),
            },
            "structure" => {
                self.wizard.start();
                ActionOutcome::Open {
                    screen: Screen::Wizard,
                }
            }
            other => self.ignore_action(other),
        }
    }

    pub fn palette(&self, query: &str) -> Vec<PaletteAction> {
        actions::search_palette(query)
    }

    /// Run a palette entry. Command entries replace the pending proposal
    /// without touching recent commands.
    pub fn run_palette(&mut self, id: &str) -> Result<ActionOutcome> {
        let action = actions::palette_action(id)
            .ok_or_else(|| SandboxError::UnknownAction(id.to_string()))?;
        if let Some(intent) = action.intent() {
            self.replace_pending(intent.clone());
            return Ok(ActionOutcome::Proposed { intent });
        }
        let screen = match action.id {
            "wizard" => {
                self.wizard.start();
                Screen::Wizard
            }
            _ => Screen::Help,
        };
        Ok(ActionOutcome::Open { screen })
    }

    /// Tips for the "I'm stuck" button; also written to the log.
    pub fn stuck(&mut self) -> Vec<String> {
        self.system("You pressed 'I'm Stuck'. Here's help:");
        for tip in STUCK_TIPS {
            self.system(format!("• {}", tip));
        }
        STUCK_TIPS.iter().map(|tip| tip.to_string()).collect()
    }

    // ============================================================
    // Wizard
    // ============================================================

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn start_wizard(&mut self) -> &Wizard {
        self.wizard.start();
        &self.wizard
    }

    /// Update the wizard's selections. Unknown plan ids are rejected.
    pub fn select_wizard(
        &mut self,
        kind: Option<ProjectKind>,
        plan: Option<String>,
    ) -> Result<&Wizard> {
        if let Some(plan) = plan {
            if !crate::plan::is_known(&plan) {
                return Err(SandboxError::UnknownPlan(plan));
            }
            self.wizard.plan = plan;
        }
        if let Some(kind) = kind {
            self.wizard.kind = kind;
        }
        Ok(&self.wizard)
    }

    /// Advance the wizard; on the last step this builds the project.
    pub fn wizard_next(&mut self) -> Option<Project> {
        let choice = self.wizard.next()?;
        Some(self.finish_wizard(choice))
    }

    pub fn wizard_back(&mut self) -> &Wizard {
        self.wizard.back();
        &self.wizard
    }

    fn finish_wizard(&mut self, choice: WizardChoice) -> Project {
        let (name, document) = match choice.kind {
            ProjectKind::Fx => ("Wizard FX Site", FX_TEMPLATE),
            ProjectKind::Blank | ProjectKind::Simple => ("Wizard Site", BLANK_TEMPLATE),
        };
        let project = self
            .registry
            .create_active(Project::new(name, choice.kind, document))
            .clone();

        let intent = Intent::autopilot(choice.plan);
        self.replace_pending(intent);
        self.system(format!(
            "Wizard created {}. Approve to build with Autopilot.",
            project.name
        ));
        project
    }

    // ============================================================
    // Log
    // ============================================================

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    fn system(&mut self, text: impl Into<String>) {
        self.log.push(LogEntry::system(text));
    }

    fn ignore_action(&mut self, action: &str) -> ActionOutcome {
        self.system(format!("Toolbar clicked: {}", action));
        ActionOutcome::Ignored {
            action: action.to_string(),
        }
    }

    /// Replace the pending proposal with an intent built from a fixed table.
    ///
    /// Built-in intents always reference registered templates and plans.
    fn replace_pending(&mut self, intent: Intent) -> Option<Intent> {
        self.workflow.propose(intent).unwrap_or_default()
    }
}
