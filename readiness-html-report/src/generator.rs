//! HTML report generator implementation.

use readiness::{AssessmentResult, CareerMatch, Recommendation};

/// Options for HTML generation.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Title for the HTML document.
    pub title: Option<String>,
    /// Whether to include default CSS styling.
    pub include_styles: bool,
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
    /// Custom CSS class prefix for all generated elements.
    pub class_prefix: String,
}

impl ReportOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            title: None,
            include_styles: true,
            full_document: true,
            class_prefix: "readiness".to_string(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable default CSS styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Generate a complete HTML document or just the report fragment.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    /// Set a custom CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }
}

/// Generate an HTML report for a result.
///
/// This is a convenience function that uses default options with the given title.
pub fn to_html(result: &AssessmentResult, title: Option<&str>) -> String {
    let mut options = ReportOptions::new();
    if let Some(t) = title {
        options.title = Some(t.to_string());
    }
    to_html_with_options(result, options)
}

/// Generate an HTML report with custom options.
pub fn to_html_with_options(result: &AssessmentResult, options: ReportOptions) -> String {
    let mut html = String::new();
    let prefix = &options.class_prefix;

    if options.full_document {
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );

        if let Some(title) = &options.title {
            html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
        }

        if options.include_styles {
            html.push_str(&generate_styles(prefix));
        }

        html.push_str("</head>\n<body>\n");
    }

    html.push_str(&format!("<main class=\"{prefix}-report\">\n"));

    if let Some(title) = &options.title {
        html.push_str(&format!(
            "  <h1 class=\"{prefix}-title\">{}</h1>\n",
            escape_html(title)
        ));
    }

    html.push_str(&generate_summary(result, prefix));
    html.push_str(&generate_wiscar(result, prefix));
    html.push_str(&generate_careers(&result.career_matches, prefix));
    html.push_str(&generate_list(
        "Key Insights",
        "insights",
        &result.insights,
        false,
        prefix,
    ));
    html.push_str(&generate_list(
        "Recommended Next Steps",
        "next-steps",
        &result.next_steps,
        true,
        prefix,
    ));
    if let Some(paths) = &result.alternative_paths {
        html.push_str(&generate_list(
            "Alternative Career Paths",
            "alternatives",
            paths,
            false,
            prefix,
        ));
    }

    html.push_str("</main>\n");

    if options.full_document {
        html.push_str("</body>\n</html>\n");
    }

    html
}

fn recommendation_class(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::Yes => "yes",
        Recommendation::Maybe => "maybe",
        Recommendation::No => "no",
    }
}

fn generate_summary(result: &AssessmentResult, prefix: &str) -> String {
    let mut html = String::new();
    let class = recommendation_class(result.recommendation);

    html.push_str(&format!(
        "  <section class=\"{prefix}-summary {prefix}-{class}\">\n"
    ));
    html.push_str(&format!(
        "    <h2 class=\"{prefix}-headline\">{}</h2>\n",
        escape_html(result.recommendation.headline())
    ));
    html.push_str(&format!(
        "    <p class=\"{prefix}-overall\">Overall Readiness Score: <strong>{}%</strong></p>\n",
        result.overall_score
    ));
    html.push_str(&format!("    <dl class=\"{prefix}-scores\">\n"));
    for (label, score) in [
        ("Psychometric Fit", result.psychometric_score),
        ("Technical Readiness", result.technical_score),
        ("WISCAR Score", result.wiscar_score()),
    ] {
        html.push_str(&format!("      <dt>{label}</dt><dd>{score}%</dd>\n"));
    }
    html.push_str("    </dl>\n");
    html.push_str("  </section>\n");

    html
}

fn generate_wiscar(result: &AssessmentResult, prefix: &str) -> String {
    let mut html = String::new();

    html.push_str(&format!("  <section class=\"{prefix}-wiscar\">\n"));
    html.push_str("    <h2>WISCAR Framework Analysis</h2>\n");
    for (dimension, score) in result.wiscar_scores.iter() {
        html.push_str(&format!(
            "    <div class=\"{prefix}-dimension\" data-dimension=\"{}\">\n",
            dimension.key()
        ));
        html.push_str(&format!(
            "      <span class=\"{prefix}-label\">{}</span>\n",
            escape_html(dimension.label())
        ));
        html.push_str(&format!(
            "      <progress max=\"100\" value=\"{score}\"></progress>\n"
        ));
        html.push_str(&format!(
            "      <span class=\"{prefix}-value\">{score}%</span>\n"
        ));
        html.push_str("    </div>\n");
    }
    html.push_str("  </section>\n");

    html
}

fn generate_careers(careers: &[CareerMatch], prefix: &str) -> String {
    let mut html = String::new();

    html.push_str(&format!("  <section class=\"{prefix}-careers\">\n"));
    html.push_str("    <h2>Career Matches</h2>\n");
    for career in careers {
        html.push_str(&format!("    <article class=\"{prefix}-career\">\n"));
        html.push_str(&format!(
            "      <h3>{} <span class=\"{prefix}-match\">{}% match</span></h3>\n",
            escape_html(career.title),
            career.match_percent
        ));
        html.push_str(&format!(
            "      <p>{}</p>\n",
            escape_html(career.description)
        ));
        html.push_str(&format!("      <ul class=\"{prefix}-skills\">\n"));
        for skill in career.required_skills {
            html.push_str(&format!("        <li>{}</li>\n", escape_html(skill)));
        }
        html.push_str("      </ul>\n");
        html.push_str("    </article>\n");
    }
    html.push_str("  </section>\n");

    html
}

fn generate_list(
    heading: &str,
    class: &str,
    items: &[&str],
    ordered: bool,
    prefix: &str,
) -> String {
    let tag = if ordered { "ol" } else { "ul" };
    let mut html = String::new();

    html.push_str(&format!("  <section class=\"{prefix}-{class}\">\n"));
    html.push_str(&format!("    <h2>{}</h2>\n", escape_html(heading)));
    html.push_str(&format!("    <{tag}>\n"));
    for item in items {
        html.push_str(&format!("      <li>{}</li>\n", escape_html(item)));
    }
    html.push_str(&format!("    </{tag}>\n"));
    html.push_str("  </section>\n");

    html
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate default CSS styles.
fn generate_styles(prefix: &str) -> String {
    format!(
        r#"  <style>
    .{prefix}-report {{
      max-width: 720px;
      margin: 2rem auto;
      padding: 1rem;
      font-family: sans-serif;
    }}
    .{prefix}-summary {{
      padding: 1rem;
      border-radius: 8px;
      background: #f5f5f5;
    }}
    .{prefix}-yes {{
      border-left: 6px solid #2e7d32;
    }}
    .{prefix}-maybe {{
      border-left: 6px solid #f9a825;
    }}
    .{prefix}-no {{
      border-left: 6px solid #c62828;
    }}
    .{prefix}-scores {{
      display: grid;
      grid-template-columns: auto auto;
      gap: 0.25rem 1rem;
    }}
    .{prefix}-dimension {{
      display: grid;
      grid-template-columns: 12rem 1fr 3rem;
      align-items: center;
      gap: 0.5rem;
      margin: 0.25rem 0;
    }}
    .{prefix}-dimension progress {{
      width: 100%;
    }}
    .{prefix}-career {{
      margin: 0.75rem 0;
      padding: 0.5rem 1rem;
      border: 1px solid #ddd;
      border-radius: 6px;
    }}
    .{prefix}-match {{
      font-weight: normal;
      color: #555;
    }}
    .{prefix}-skills {{
      display: flex;
      flex-wrap: wrap;
      gap: 0.5rem;
      padding: 0;
      list-style: none;
    }}
    .{prefix}-skills li {{
      padding: 0.1rem 0.5rem;
      background: #eee;
      border-radius: 4px;
    }}
  </style>
"#
    )
}
