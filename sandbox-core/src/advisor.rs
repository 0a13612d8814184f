//! Stateless advice generated from a document.
//!
//! The advisor only reads the document. Its tips are surfaced to the user when
//! a [`crate::Intent::SmartSuggest`] proposal is approved.

use crate::models::SuggestLevel;

const LIGHT_LIMIT: usize = 3;
const DEEP_LIMIT: usize = 7;

struct SectionCheck {
    markers: &'static [&'static str],
    missing_tip: &'static str,
}

const SECTION_CHECKS: &[SectionCheck] = &[
    SectionCheck {
        markers: &["<h2>about", "about us"],
        missing_tip: "Add an About section so visitors know who is behind the site.",
    },
    SectionCheck {
        markers: &["<h2>pricing", "pricing plans"],
        missing_tip: "Add a Pricing section so visitors can compare plans.",
    },
    SectionCheck {
        markers: &["<h2>faq", "frequently asked"],
        missing_tip: "Add an FAQ section to answer common questions up front.",
    },
];

const LIGHT_TIPS: &[&str] = &[
    "Keep the headline short and specific.",
    "Place one clear call to action near the top.",
    "Trim paragraphs to two or three sentences.",
];

const DEEP_TIPS: &[&str] = &[
    "Layout: give each section a single purpose and a clear heading.",
    "Copy: lead with the benefit, then the feature.",
    "Trust: add a testimonial or client logo strip.",
    "Conversion: repeat the call to action after the pricing table.",
    "Accessibility: check heading order and colour contrast.",
    "Performance: keep hero images small and lazy-load the rest.",
    "SEO: write a page title and meta description that match the headline.",
];

const ULTRA_OPTIONS: &[&str] = &[
    "Run a full section-by-section content audit.",
    "Generate an alternative layout to compare against the current one.",
    "Draft a launch checklist for this page.",
    "Plan a follow-up page that links from this one.",
];

/// Produce ordered tips for `document` at the requested depth.
///
/// `Light` yields 3 tips and `Deep` yields 7; both list missing-section tips
/// (About, Pricing, FAQ) before boilerplate. `Ultra` yields 4 fixed meta-options.
pub fn suggest(level: SuggestLevel, document: &str) -> Vec<String> {
    let missing = missing_sections(document);
    let (fixed, limit): (&[&str], usize) = match level {
        SuggestLevel::Light => (LIGHT_TIPS, LIGHT_LIMIT),
        SuggestLevel::Deep => (DEEP_TIPS, DEEP_LIMIT),
        SuggestLevel::Ultra => {
            return ULTRA_OPTIONS.iter().map(|s| s.to_string()).collect();
        }
    };

    missing
        .into_iter()
        .chain(fixed.iter().copied())
        .take(limit)
        .map(str::to_string)
        .collect()
}

fn missing_sections(document: &str) -> Vec<&'static str> {
    let lowered = document.to_lowercase();
    SECTION_CHECKS
        .iter()
        .filter(|check| !check.markers.iter().any(|m| lowered.contains(m)))
        .map(|check| check.missing_tip)
        .collect()
}
