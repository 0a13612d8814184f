//! Two-step guided build.

use serde::{Deserialize, Serialize};

use crate::models::ProjectKind;
use crate::plan::BASIC_LANDING;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Choose the kind of site.
    Kind,
    /// Choose how the page is built.
    Plan,
}

/// Wizard selections. Finishing the wizard turns them into a new project
/// plus a pending autopilot proposal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wizard {
    pub open: bool,
    pub step: WizardStep,
    pub kind: ProjectKind,
    pub plan: String,
}

impl Default for Wizard {
    fn default() -> Self {
        Self {
            open: false,
            step: WizardStep::Kind,
            kind: ProjectKind::Simple,
            plan: BASIC_LANDING.to_string(),
        }
    }
}

/// Emitted when the last step is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardChoice {
    pub kind: ProjectKind,
    pub plan: String,
}

impl Wizard {
    /// Open the wizard with default selections.
    pub fn start(&mut self) {
        *self = Self {
            open: true,
            ..Self::default()
        };
    }

    /// Advance one step. Confirming the plan step closes the wizard and
    /// returns the final choice.
    pub fn next(&mut self) -> Option<WizardChoice> {
        if !self.open {
            return None;
        }
        match self.step {
            WizardStep::Kind => {
                self.step = WizardStep::Plan;
                None
            }
            WizardStep::Plan => {
                self.open = false;
                Some(WizardChoice {
                    kind: self.kind,
                    plan: self.plan.clone(),
                })
            }
        }
    }

    /// Go back one step, closing the wizard from the first step.
    pub fn back(&mut self) {
        match self.step {
            WizardStep::Plan => self.step = WizardStep::Kind,
            WizardStep::Kind => self.open = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_both_steps_then_finishes() {
        let mut wizard = Wizard::default();
        wizard.start();
        wizard.kind = ProjectKind::Fx;
        assert!(wizard.next().is_none());
        assert_eq!(wizard.step, WizardStep::Plan);

        let choice = wizard.next().unwrap();
        assert_eq!(choice.kind, ProjectKind::Fx);
        assert_eq!(choice.plan, BASIC_LANDING);
        assert!(!wizard.open);
    }

    #[test]
    fn back_from_first_step_closes() {
        let mut wizard = Wizard::default();
        wizard.start();
        wizard.next();
        wizard.back();
        assert_eq!(wizard.step, WizardStep::Kind);
        assert!(wizard.open);
        wizard.back();
        assert!(!wizard.open);
    }

    #[test]
    fn start_resets_selections() {
        let mut wizard = Wizard::default();
        wizard.start();
        wizard.kind = ProjectKind::Fx;
        wizard.next();
        wizard.start();
        assert_eq!(wizard.kind, ProjectKind::Simple);
        assert_eq!(wizard.step, WizardStep::Kind);
    }

    #[test]
    fn closed_wizard_does_not_advance() {
        let mut wizard = Wizard::default();
        assert!(wizard.next().is_none());
        assert_eq!(wizard.step, WizardStep::Kind);
    }
}
