//! Base documents and reusable section markup.

pub const BLANK: &str = "blank";
pub const FX: &str = "fx";
pub const SIMPLE: &str = "simple";

/// Template ids accepted by [`crate::Intent::SetTemplate`].
pub const TEMPLATE_IDS: &[&str] = &[BLANK, FX, SIMPLE];

pub const BLANK_TEMPLATE: &str = r#"
    <section class="sandbox-section">
      <h1>New Project</h1>
      <p>Start building...</p>
    </section>
  "#;

pub const FX_TEMPLATE: &str = r#"
    <section class="sandbox-section">
      <header><h1>FX Site</h1></header>
    </section>
    <section class="sandbox-section">
      <h2>Live Converter</h2>
      <p>[converter placeholder]</p>
    </section>
    <section class="sandbox-section">
      <h2>Live Rates</h2>
      <p>[rates placeholder]</p>
    </section>
    <section class="sandbox-section">
      <p>About · Privacy</p>
    </section>
  "#;

pub const SIMPLE_TEMPLATE: &str = r#"
    <section class="sandbox-section">
      <header><h1>Simple Landing</h1></header>
    </section>
    <section class="sandbox-section">
      <h2>Headline</h2>
      <p>Explain your value here.</p>
    </section>
    <section class="sandbox-section">
      <p>Contact · Terms</p>
    </section>
  "#;

pub const ABOUT_SECTION: &str = r#"
        <section class="sandbox-section">
          <h2>About</h2>
          <p>Write about your project here.</p>
        </section>
      "#;

pub const PRICING_SECTION: &str = r#"
        <section class="sandbox-section">
          <h2>Pricing</h2>
          <p>Basic · Pro · Enterprise.</p>
        </section>
      "#;

/// Look up the base markup registered for `template_id`.
pub fn template(template_id: &str) -> Option<&'static str> {
    match template_id {
        BLANK => Some(BLANK_TEMPLATE),
        FX => Some(FX_TEMPLATE),
        SIMPLE => Some(SIMPLE_TEMPLATE),
        _ => None,
    }
}

pub fn is_known(template_id: &str) -> bool {
    template(template_id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_id_has_markup() {
        for id in TEMPLATE_IDS {
            assert!(template(id).is_some(), "missing markup for {id}");
        }
    }

    #[test]
    fn unknown_id_has_no_markup() {
        assert!(template("neon").is_none());
        assert!(!is_known("FX"));
    }
}
