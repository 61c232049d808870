use std::fmt;

use serde::Serialize;

/// The tri-state verdict summarizing overall fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl Recommendation {
    /// The headline shown above the results.
    pub fn headline(self) -> &'static str {
        match self {
            Self::Yes => "Highly Recommended",
            Self::Maybe => "Consider with Preparation",
            Self::No => "Alternative Paths Suggested",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yes => "YES",
            Self::Maybe => "MAYBE",
            Self::No => "NO",
        })
    }
}

/// One of the six WISCAR dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl Dimension {
    pub const ALL: [Self; 6] = [
        Self::Will,
        Self::Interest,
        Self::Skill,
        Self::Cognitive,
        Self::Ability,
        Self::RealWorld,
    ];

    /// The key used for this dimension in serialized results.
    pub fn key(self) -> &'static str {
        match self {
            Self::Will => "will",
            Self::Interest => "interest",
            Self::Skill => "skill",
            Self::Cognitive => "cognitive",
            Self::Ability => "ability",
            Self::RealWorld => "realWorld",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Will => "Will & Perseverance",
            Self::Interest => "Interest & Passion",
            Self::Skill => "Current Skills",
            Self::Cognitive => "Cognitive Readiness",
            Self::Ability => "Ability to Learn",
            Self::RealWorld => "Real-World Alignment",
        }
    }
}

/// Scores (0-100) for each of the six WISCAR dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScores {
    pub will: u8,
    pub interest: u8,
    pub skill: u8,
    pub cognitive: u8,
    pub ability: u8,
    pub real_world: u8,
}

impl DimensionScores {
    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Will => self.will,
            Dimension::Interest => self.interest,
            Dimension::Skill => self.skill,
            Dimension::Cognitive => self.cognitive,
            Dimension::Ability => self.ability,
            Dimension::RealWorld => self.real_world,
        }
    }

    /// Every dimension with its score, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, u8)> + '_ {
        Dimension::ALL.into_iter().map(|d| (d, self.get(d)))
    }

    /// Unrounded mean of the six scores.
    pub fn average(&self) -> f64 {
        let total: u32 = self.iter().map(|(_, score)| u32::from(score)).sum();
        f64::from(total) / Dimension::ALL.len() as f64
    }
}

/// A suggested career with how well the answers match it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerMatch {
    pub title: &'static str,
    #[serde(rename = "match")]
    pub match_percent: u8,
    pub description: &'static str,
    pub required_skills: &'static [&'static str],
}

/// Everything computed from one completed run of the assessment.
///
/// Serializes with the field names used by the results page
/// (`overallScore`, `wiscarScores`, `careerMatches`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub overall_score: u8,
    pub recommendation: Recommendation,
    pub psychometric_score: u8,
    pub technical_score: u8,
    pub wiscar_scores: DimensionScores,
    pub insights: Vec<&'static str>,
    pub next_steps: Vec<&'static str>,
    /// Only present when the recommendation is [`Recommendation::No`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_paths: Option<Vec<&'static str>>,
    /// Sorted by match, best first.
    pub career_matches: Vec<CareerMatch>,
}

impl AssessmentResult {
    /// The WISCAR summary score shown next to the sub-scores.
    pub fn wiscar_score(&self) -> u8 {
        round_percent(self.wiscar_scores.average())
    }
}

/// Round a 0-100 value to the nearest integer percentage.
pub(crate) fn round_percent(value: f64) -> u8 {
    // Inputs are averages of 0-100 values, so the clamp only guards float noise.
    value.round().clamp(0.0, 100.0) as u8
}
