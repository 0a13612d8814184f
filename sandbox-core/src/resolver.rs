//! Maps raw command text to an [`Intent`].
//!
//! Matching is case-insensitive substring containment against a fixed,
//! ordered rule table. The first rule whose trigger appears in the text wins;
//! later rules are never consulted.

use crate::models::Intent;
use crate::plan::BASIC_LANDING;
use crate::templates::{ABOUT_SECTION, FX, PRICING_SECTION, SIMPLE};

struct Rule {
    trigger: &'static str,
    build: fn(&'static str) -> Intent,
}

const RULES: &[Rule] = &[
    Rule {
        trigger: "add about",
        build: |display| Intent::add_section(ABOUT_SECTION, display),
    },
    Rule {
        trigger: "add pricing",
        build: |display| Intent::add_section(PRICING_SECTION, display),
    },
    Rule {
        trigger: "make fx",
        build: |display| Intent::set_template(FX, display),
    },
    Rule {
        trigger: "simplify",
        build: |display| Intent::set_template(SIMPLE, display),
    },
    Rule {
        trigger: "autopilot",
        build: |display| Intent::AutopilotPlan {
            plan_id: BASIC_LANDING.to_string(),
            display: display.to_string(),
        },
    },
];

/// Hint shown when text matches no rule.
pub const UNKNOWN_COMMAND_HINT: &str =
    "Unknown. Try: 'add about', 'add pricing', 'make fx', 'simplify', or 'autopilot'.";

/// Resolve `text` to an intent, or `None` when no trigger matches.
///
/// Callers are expected to drop whitespace-only input before calling.
pub fn resolve(text: &str) -> Option<Intent> {
    let lowered = text.to_lowercase();
    let intent = RULES
        .iter()
        .find(|rule| lowered.contains(rule.trigger))
        .map(|rule| (rule.build)(rule.trigger));

    match &intent {
        Some(intent) => tracing::debug!(display = intent.display(), "resolved command"),
        None => tracing::debug!(text, "command did not resolve"),
    }
    intent
}

/// Trigger phrases in priority order.
pub fn triggers() -> impl Iterator<Item = &'static str> {
    RULES.iter().map(|rule| rule.trigger)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_case_insensitively() {
        assert_eq!(
            resolve("Please ADD ABOUT us"),
            Some(Intent::add_section(ABOUT_SECTION, "add about"))
        );
    }

    #[test]
    fn first_rule_wins() {
        let intent = resolve("make fx and add about").unwrap();
        assert_eq!(intent.display(), "add about");
    }

    #[test]
    fn pricing_outranks_template_switch() {
        let intent = resolve("simplify, then add pricing").unwrap();
        assert_eq!(intent, Intent::add_section(PRICING_SECTION, "add pricing"));
    }

    #[test]
    fn autopilot_resolves_to_basic_landing_plan() {
        assert_eq!(resolve("autopilot"), Some(Intent::autopilot(BASIC_LANDING)));
    }

    #[test]
    fn unmatched_text_resolves_to_none() {
        assert_eq!(resolve("add contact form"), None);
        assert_eq!(resolve("make it fx"), None);
    }

    #[test]
    fn triggers_are_listed_in_priority_order() {
        let order: Vec<_> = triggers().collect();
        assert_eq!(
            order,
            vec!["add about", "add pricing", "make fx", "simplify", "autopilot"]
        );
    }
}
