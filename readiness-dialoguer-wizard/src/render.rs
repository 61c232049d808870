//! Plain-text rendering of an assessment result.

use readiness::AssessmentResult;

/// Width of a WISCAR score bar at 100%.
const BAR_WIDTH: usize = 20;

/// Skills listed per career before collapsing into "+N more".
const SKILLS_SHOWN: usize = 3;

/// Render the results page as text.
pub fn results_to_string(result: &AssessmentResult) -> String {
    let mut out = String::new();

    out.push_str("Your Medical Assistant Career Readiness Results\n\n");
    out.push_str(&format!(
        "  {} ({})\n",
        result.recommendation.headline(),
        result.recommendation
    ));
    out.push_str(&format!(
        "  Overall Readiness Score: {}%\n\n",
        result.overall_score
    ));

    out.push_str(&format!(
        "  Psychometric Fit     {:>3}%\n",
        result.psychometric_score
    ));
    out.push_str(&format!(
        "  Technical Readiness  {:>3}%\n",
        result.technical_score
    ));
    out.push_str(&format!(
        "  WISCAR Score         {:>3}%\n\n",
        result.wiscar_score()
    ));

    out.push_str("WISCAR Framework Analysis\n");
    for (dimension, score) in result.wiscar_scores.iter() {
        out.push_str(&format!(
            "  {:<22} {} {:>3}%\n",
            dimension.label(),
            bar(score),
            score
        ));
    }
    out.push('\n');

    out.push_str("Career Matches\n");
    for career in &result.career_matches {
        out.push_str(&format!(
            "  {} ({}% match)\n",
            career.title, career.match_percent
        ));
        out.push_str(&format!("    {}\n", career.description));
        out.push_str(&format!("    {}\n", skills(career.required_skills)));
    }
    out.push('\n');

    out.push_str("Key Insights\n");
    for insight in &result.insights {
        out.push_str(&format!("  - {insight}\n"));
    }
    out.push('\n');

    out.push_str("Recommended Next Steps\n");
    for (index, step) in result.next_steps.iter().enumerate() {
        out.push_str(&format!("  {}. {step}\n", index + 1));
    }

    if let Some(paths) = &result.alternative_paths {
        out.push_str("\nAlternative Career Paths\n");
        for path in paths {
            out.push_str(&format!("  - {path}\n"));
        }
    }

    out
}

fn bar(score: u8) -> String {
    let filled = usize::from(score) * BAR_WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), " ".repeat(BAR_WIDTH - filled))
}

fn skills(required: &[&str]) -> String {
    let shown = required
        .iter()
        .take(SKILLS_SHOWN)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    match required.len().checked_sub(SKILLS_SHOWN) {
        Some(rest) if rest > 0 => format!("{shown} +{rest} more"),
        _ => shown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readiness::{Answers, score};

    #[test]
    fn bar_scales_to_width() {
        assert_eq!(bar(0), format!("[{}]", " ".repeat(20)));
        assert_eq!(bar(50), format!("[{}{}]", "#".repeat(10), " ".repeat(10)));
        assert_eq!(bar(100), format!("[{}]", "#".repeat(20)));
    }

    #[test]
    fn skills_collapse_after_three() {
        assert_eq!(
            skills(&["Patient Care", "Vital Signs", "Medical Procedures", "Communication"]),
            "Patient Care, Vital Signs, Medical Procedures +1 more"
        );
        assert_eq!(skills(&["EHR Systems", "Insurance"]), "EHR Systems, Insurance");
    }

    #[test]
    fn empty_result_shows_alternative_paths() {
        let text = results_to_string(&score(&Answers::new()));
        assert!(text.contains("Alternative Paths Suggested (NO)"));
        assert!(text.contains("Overall Readiness Score: 5%"));
        assert!(text.contains("Real-World Alignment"));
        assert!(text.contains("Alternative Career Paths"));
        assert!(text.contains("  - Health Records Clerk"));
    }

    #[test]
    fn maybe_result_omits_alternative_paths() {
        let mut answers = Answers::new();
        for question in readiness::questionnaire().questions() {
            let labels = question.option_labels().len();
            let answer = readiness::Answer::from_option_index(question.kind(), labels - 1).unwrap();
            answers.insert(question.id().clone(), answer);
        }
        let text = results_to_string(&score(&answers));
        assert!(!text.contains("Alternative Career Paths"));
        assert!(text.contains("Consider with Preparation (MAYBE)"));
    }
}
