//! Toolbar buttons and command-palette entries.
//!
//! Both surfaces construct the same [`Intent`] values the resolver would.

use serde::{Deserialize, Serialize};

use crate::models::Intent;
use crate::resolver;

/// A searchable command-palette entry.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PaletteAction {
    pub id: &'static str,
    pub label: &'static str,
    #[serde(skip)]
    command: Option<&'static str>,
}

const fn command(id: &'static str, label: &'static str, text: &'static str) -> PaletteAction {
    PaletteAction {
        id,
        label,
        command: Some(text),
    }
}

const fn screen(id: &'static str, label: &'static str) -> PaletteAction {
    PaletteAction {
        id,
        label,
        command: None,
    }
}

pub const PALETTE: &[PaletteAction] = &[
    command("add-about", "Add About Section", "add about"),
    command("add-pricing", "Add Pricing Section", "add pricing"),
    command("make-fx", "Switch to FX Template", "make fx"),
    command("simplify", "Switch to Simple Template", "simplify"),
    command("autopilot", "Run Autopilot", "autopilot"),
    screen("wizard", "Start Wizard"),
    screen("help", "Open Help"),
];

impl PaletteAction {
    /// The intent this entry proposes, if it is a command rather than a screen.
    pub fn intent(&self) -> Option<Intent> {
        self.command.and_then(resolver::resolve)
    }
}

/// Palette entries whose label contains `query`, ignoring case.
pub fn search_palette(query: &str) -> Vec<PaletteAction> {
    let query = query.to_lowercase();
    PALETTE
        .iter()
        .filter(|action| action.label.to_lowercase().contains(&query))
        .copied()
        .collect()
}

pub fn palette_action(id: &str) -> Option<&'static PaletteAction> {
    PALETTE.iter().find(|action| action.id == id)
}

/// UI screens the shell may need to open in response to an action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Wizard,
    Help,
}

/// Result of a toolbar click or palette selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// The action became the pending proposal.
    Proposed { intent: Intent },
    /// The shell should open a screen; no engine state changed.
    Open { screen: Screen },
    /// Nothing is wired to this action; it was only logged.
    Ignored { action: String },
}

/// Fixed tips shown by the "I'm stuck" button.
pub const STUCK_TIPS: &[&str] = &[
    "Try 'autopilot' to build a full landing page.",
    "Use the Wizard for step-by-step creation.",
    "Try 'add about' or 'add pricing'.",
    "Use History to undo safely.",
];
