//! Named plans that expand into ordered primitive intents.

use crate::models::Intent;
use crate::templates::{ABOUT_SECTION, PRICING_SECTION, SIMPLE};

pub const BASIC_LANDING: &str = "basic-landing";

/// Plan ids with a registered expansion.
pub const PLAN_IDS: &[&str] = &[BASIC_LANDING];

/// Expand `plan_id` into the primitive intents it stands for, in apply order.
///
/// Unrecognized ids expand to nothing.
pub fn expand(plan_id: &str) -> Vec<Intent> {
    match plan_id {
        BASIC_LANDING => vec![
            Intent::set_template(SIMPLE, ""),
            Intent::add_section(ABOUT_SECTION, ""),
            Intent::add_section(PRICING_SECTION, ""),
        ],
        _ => Vec::new(),
    }
}

pub fn is_known(plan_id: &str) -> bool {
    PLAN_IDS.contains(&plan_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_landing_expands_in_order() {
        let steps = expand(BASIC_LANDING);
        assert_eq!(steps.len(), 3);
        assert!(matches!(&steps[0], Intent::SetTemplate { template_id, .. } if template_id == SIMPLE));
        assert!(matches!(&steps[1], Intent::AddSection { markup, .. } if markup == ABOUT_SECTION));
        assert!(matches!(&steps[2], Intent::AddSection { markup, .. } if markup == PRICING_SECTION));
    }

    #[test]
    fn expanded_steps_are_primitive() {
        assert!(expand(BASIC_LANDING)
            .iter()
            .all(|step| !matches!(step, Intent::AutopilotPlan { .. })));
    }

    #[test]
    fn unknown_plan_expands_to_nothing() {
        assert!(expand("full-store").is_empty());
        assert!(!is_known("full-store"));
    }
}
