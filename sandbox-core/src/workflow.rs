//! Single-slot proposal gate.
//!
//! A [`ProposalWorkflow`] holds at most one pending [`Intent`]. Nothing
//! touches a document until [`ProposalWorkflow::approve`] runs, and approval
//! always snapshots the pre-mutation document first.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SandboxError};
use crate::models::{Intent, Project, Snapshot};
use crate::{mutator, plan, snapshot, templates};

/// Observable workflow state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProposalState {
    Idle,
    Proposed,
}

/// What an approval did to the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Approval {
    pub intent: Intent,
    /// Snapshot captured before mutating. `None` for advisory intents.
    pub snapshot: Option<Snapshot>,
    /// Tips carried by an approved `SmartSuggest`.
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ProposalWorkflow {
    pending: Option<Intent>,
}

impl ProposalWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ProposalState {
        match self.pending {
            Some(_) => ProposalState::Proposed,
            None => ProposalState::Idle,
        }
    }

    pub fn pending(&self) -> Option<&Intent> {
        self.pending.as_ref()
    }

    /// Make `intent` the pending proposal, returning whatever it replaced.
    ///
    /// Intents naming an unregistered template or plan are rejected and the
    /// current proposal is kept.
    pub fn propose(&mut self, intent: Intent) -> Result<Option<Intent>> {
        validate(&intent)?;
        Ok(self.pending.replace(intent))
    }

    /// Drop the pending proposal without applying it.
    pub fn cancel(&mut self) -> Option<Intent> {
        self.pending.take()
    }

    /// Apply the pending proposal to `project` and return to idle.
    ///
    /// Mutating intents capture a snapshot of the current document, then run
    /// their primitive steps in order. Plans are expanded first. Advisory
    /// intents leave the project untouched.
    pub fn approve(&mut self, project: &mut Project) -> Result<Approval> {
        let intent = self.pending.take().ok_or(SandboxError::NothingPending)?;

        if let Intent::SmartSuggest { suggestions, .. } = &intent {
            let suggestions = suggestions.clone();
            return Ok(Approval {
                intent,
                snapshot: None,
                suggestions,
            });
        }

        let steps = match &intent {
            Intent::AutopilotPlan { plan_id, .. } => plan::expand(plan_id),
            other => vec![other.clone()],
        };

        let captured = snapshot::capture(project, intent.snapshot_label());
        project.document = mutator::apply_all(&steps, &project.document);

        tracing::info!(
            project_id = %project.id,
            steps = steps.len(),
            snapshot_id = %captured.id,
            "applied intent"
        );

        Ok(Approval {
            intent,
            snapshot: Some(captured),
            suggestions: Vec::new(),
        })
    }
}

fn validate(intent: &Intent) -> Result<()> {
    match intent {
        Intent::SetTemplate { template_id, .. } if !templates::is_known(template_id) => {
            tracing::warn!(template_id, "rejected unknown template");
            Err(SandboxError::UnknownTemplate(template_id.clone()))
        }
        Intent::AutopilotPlan { plan_id, .. } if !plan::is_known(plan_id) => {
            tracing::warn!(plan_id, "rejected unknown plan");
            Err(SandboxError::UnknownPlan(plan_id.clone()))
        }
        _ => Ok(()),
    }
}
