use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SandboxError;
use crate::plan::BASIC_LANDING;
use crate::templates::{FX, SIMPLE};

/// A resolved, structured user request.
///
/// Intents are produced by the command resolver, toolbar, palette or wizard
/// and are held as a proposal until the user approves them. Only the first
/// three variants can change a document; [`Intent::SmartSuggest`] is advisory.
///
/// `display` is the short label tracked in recent commands. Intents produced
/// by plan expansion have an empty display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// Append `markup` to the end of the document.
    AddSection {
        markup: String,
        #[serde(default)]
        display: String,
    },
    /// Replace the whole document with a registered template.
    SetTemplate {
        template_id: String,
        #[serde(default)]
        display: String,
    },
    /// Run a named multi-step plan.
    AutopilotPlan {
        plan_id: String,
        #[serde(default)]
        display: String,
    },
    /// Surface advisory tips without mutating anything.
    SmartSuggest {
        level: SuggestLevel,
        #[serde(default)]
        suggestions: Vec<String>,
        #[serde(default)]
        display: String,
    },
}

impl Intent {
    pub fn add_section(markup: impl Into<String>, display: impl Into<String>) -> Self {
        Self::AddSection {
            markup: markup.into(),
            display: display.into(),
        }
    }

    pub fn set_template(template_id: impl Into<String>, display: impl Into<String>) -> Self {
        Self::SetTemplate {
            template_id: template_id.into(),
            display: display.into(),
        }
    }

    pub fn autopilot(plan_id: impl Into<String>) -> Self {
        Self::AutopilotPlan {
            plan_id: plan_id.into(),
            display: "autopilot".to_string(),
        }
    }

    pub fn smart_suggest(level: SuggestLevel, suggestions: Vec<String>) -> Self {
        Self::SmartSuggest {
            level,
            suggestions,
            display: format!("suggest {}", level),
        }
    }

    pub fn display(&self) -> &str {
        match self {
            Self::AddSection { display, .. }
            | Self::SetTemplate { display, .. }
            | Self::AutopilotPlan { display, .. }
            | Self::SmartSuggest { display, .. } => display,
        }
    }

    /// Human-readable summary shown in the pending-action box.
    pub fn describe(&self) -> String {
        match self {
            Self::AddSection { .. } => "Add a new designed section.".to_string(),
            Self::SetTemplate { template_id, .. } => match template_id.as_str() {
                FX => "Switch to FX template.".to_string(),
                SIMPLE => "Switch to Simple Landing template.".to_string(),
                _ => "Unknown action.".to_string(),
            },
            Self::AutopilotPlan { plan_id, .. } if plan_id == BASIC_LANDING => {
                "Run Autopilot Basic Landing Page Plan.".to_string()
            }
            Self::AutopilotPlan { .. } => "Run Autopilot Plan.".to_string(),
            Self::SmartSuggest { level, .. } => format!("Show {} smart suggestions.", level),
        }
    }

    /// Whether approving this intent changes the project document.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Self::SmartSuggest { .. })
    }

    /// Label recorded on the snapshot captured before this intent is applied.
    pub fn snapshot_label(&self) -> String {
        match self {
            Self::AutopilotPlan { .. } => "Before Autopilot".to_string(),
            other => format!("Before: {}", other.describe()),
        }
    }
}

/// How much advice the smart advisor should produce.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SuggestLevel {
    Light,
    Deep,
    Ultra,
}

impl SuggestLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Deep => "deep",
            Self::Ultra => "ultra",
        }
    }
}

impl fmt::Display for SuggestLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SuggestLevel {
    type Err = SandboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "deep" => Ok(Self::Deep),
            "ultra" => Ok(Self::Ultra),
            other => Err(SandboxError::UnknownLevel(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let intent = Intent::set_template("fx", "make fx");
        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["type"], "set_template");
        assert_eq!(json["template_id"], "fx");
    }

    #[test]
    fn deserializes_without_display() {
        let intent: Intent =
            serde_json::from_str(r#"{"type":"autopilot_plan","plan_id":"basic-landing"}"#)
                .unwrap();
        assert_eq!(intent.display(), "");
        assert_eq!(intent.describe(), "Run Autopilot Basic Landing Page Plan.");
    }

    #[test]
    fn labels_snapshots_by_variant() {
        assert_eq!(Intent::autopilot("basic-landing").snapshot_label(), "Before Autopilot");
        assert_eq!(
            Intent::add_section("<p>x</p>", "add about").snapshot_label(),
            "Before: Add a new designed section."
        );
        assert_eq!(
            Intent::set_template("simple", "simplify").snapshot_label(),
            "Before: Switch to Simple Landing template."
        );
    }

    #[test]
    fn unknown_template_describes_as_unknown_action() {
        assert_eq!(Intent::set_template("neon", "").describe(), "Unknown action.");
    }

    #[test]
    fn smart_suggest_is_advisory() {
        let intent = Intent::smart_suggest(SuggestLevel::Deep, vec![]);
        assert!(!intent.is_mutating());
        assert_eq!(intent.display(), "suggest deep");
        assert_eq!(intent.describe(), "Show deep smart suggestions.");
    }
}
