//! Pure document transformations.

use crate::models::Intent;
use crate::{plan, templates};

/// Apply one intent to `document` and return the resulting document.
///
/// - `AddSection` appends its markup verbatim; repeated sections are kept.
/// - `SetTemplate` replaces the document with the template's base markup,
///   or leaves it untouched when the template id is not registered.
/// - `AutopilotPlan` folds its expansion over the document.
/// - `SmartSuggest` never changes the document.
pub fn apply(intent: &Intent, document: &str) -> String {
    match intent {
        Intent::AddSection { markup, .. } => {
            let mut next = String::with_capacity(document.len() + markup.len());
            next.push_str(document);
            next.push_str(markup);
            next
        }
        Intent::SetTemplate { template_id, .. } => match templates::template(template_id) {
            Some(markup) => markup.to_string(),
            None => document.to_string(),
        },
        Intent::AutopilotPlan { plan_id, .. } => apply_all(&plan::expand(plan_id), document),
        Intent::SmartSuggest { .. } => document.to_string(),
    }
}

/// Apply `intents` left to right, each against the previous result.
pub fn apply_all(intents: &[Intent], document: &str) -> String {
    intents
        .iter()
        .fold(document.to_string(), |current, intent| apply(intent, &current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SuggestLevel;
    use crate::templates::{ABOUT_SECTION, FX_TEMPLATE, PRICING_SECTION, SIMPLE_TEMPLATE};

    #[test]
    fn add_section_appends() {
        let intent = Intent::add_section("<p>x</p>", "");
        assert_eq!(apply(&intent, "BASE"), "BASE<p>x</p>");
    }

    #[test]
    fn add_section_never_deduplicates() {
        let intent = Intent::add_section(ABOUT_SECTION, "add about");
        let twice = apply(&intent, &apply(&intent, ""));
        assert_eq!(twice.matches("<h2>About</h2>").count(), 2);
    }

    #[test]
    fn set_template_discards_prior_content() {
        let intent = Intent::set_template("fx", "make fx");
        assert_eq!(apply(&intent, "BASE<p>extra</p>"), FX_TEMPLATE);
    }

    #[test]
    fn unknown_template_leaves_document_unchanged() {
        let intent = Intent::set_template("neon", "");
        assert_eq!(apply(&intent, "BASE"), "BASE");
    }

    #[test]
    fn smart_suggest_is_identity() {
        let intent = Intent::smart_suggest(SuggestLevel::Light, vec!["tip".into()]);
        assert_eq!(apply(&intent, "BASE"), "BASE");
    }

    #[test]
    fn autopilot_ignores_starting_document() {
        let intent = Intent::autopilot("basic-landing");
        let expected = format!("{SIMPLE_TEMPLATE}{ABOUT_SECTION}{PRICING_SECTION}");
        assert_eq!(apply(&intent, "anything"), expected);
        assert_eq!(apply(&intent, ""), expected);
    }

    #[test]
    fn unknown_plan_is_a_no_op() {
        let intent = Intent::autopilot("mystery");
        assert_eq!(apply(&intent, "BASE"), "BASE");
    }
}
