//! Fixed editorial content attached to a result: insights, next steps,
//! career descriptions and alternative paths.

use crate::{CareerMatch, DimensionScores, Recommendation};

const PSYCHOMETRIC_HIGH: &str = "You demonstrate excellent personality traits for healthcare work, showing high empathy and conscientiousness.";
const PSYCHOMETRIC_MID: &str =
    "You show good interpersonal skills that align well with patient care roles.";
const PSYCHOMETRIC_LOW: &str =
    "Consider developing stronger communication and empathy skills for patient-facing roles.";

const TECHNICAL_HIGH: &str =
    "Your medical knowledge foundation is strong, showing readiness for advanced training.";
const TECHNICAL_MID: &str = "You have basic medical knowledge but would benefit from additional study in anatomy and procedures.";
const TECHNICAL_LOW: &str = "Focus on building fundamental medical knowledge through coursework or certification programs.";

const HIGH_WILL: &str = "Your high perseverance and dedication indicate strong potential for completing challenging training programs.";
const HIGH_INTEREST: &str = "Your genuine passion for healthcare work suggests strong long-term career satisfaction potential.";

const NEXT_STEPS_YES: [&str; 4] = [
    "Enroll in a Medical Assistant certification program at an accredited institution",
    "Complete CPR/BLS certification to meet basic healthcare requirements",
    "Consider volunteering at local healthcare facilities to gain experience",
    "Network with current medical assistants to learn about day-to-day responsibilities",
];

const NEXT_STEPS_MAYBE: [&str; 4] = [
    "Take introductory courses in medical terminology and basic anatomy",
    "Shadow medical assistants to confirm your interest and aptitude",
    "Improve areas where you scored lower through targeted study or training",
    "Retake this assessment after 3-6 months of preparation",
];

const NEXT_STEPS_NO: [&str; 3] = [
    "Explore alternative healthcare roles that better match your interests and skills",
    "Consider roles in healthcare administration or health information management",
    "Develop foundational skills through volunteer work or entry-level positions",
];

/// Roles suggested when the recommendation is [`Recommendation::No`].
pub const ALTERNATIVE_PATHS: [&str; 6] = [
    "Health Information Technician",
    "Medical Receptionist",
    "Certified Nursing Assistant (CNA)",
    "Patient Support Specialist",
    "Medical Office Administrator",
    "Health Records Clerk",
];

/// Insight sentences for a set of scores, in rule order.
///
/// The psychometric and technical tiers always contribute one sentence each;
/// high will and high interest add one more each.
pub fn insights(psychometric: u8, technical: u8, wiscar: &DimensionScores) -> Vec<&'static str> {
    let mut insights = Vec::with_capacity(4);

    insights.push(match psychometric {
        80.. => PSYCHOMETRIC_HIGH,
        60.. => PSYCHOMETRIC_MID,
        _ => PSYCHOMETRIC_LOW,
    });

    insights.push(match technical {
        75.. => TECHNICAL_HIGH,
        50.. => TECHNICAL_MID,
        _ => TECHNICAL_LOW,
    });

    if wiscar.will >= 80 {
        insights.push(HIGH_WILL);
    }
    if wiscar.interest >= 80 {
        insights.push(HIGH_INTEREST);
    }

    insights
}

/// The next steps for a recommendation.
pub fn next_steps(recommendation: Recommendation) -> Vec<&'static str> {
    match recommendation {
        Recommendation::Yes => NEXT_STEPS_YES.to_vec(),
        Recommendation::Maybe => NEXT_STEPS_MAYBE.to_vec(),
        Recommendation::No => NEXT_STEPS_NO.to_vec(),
    }
}

/// Alternative paths, only offered when the recommendation is negative.
pub fn alternative_paths(recommendation: Recommendation) -> Option<Vec<&'static str>> {
    (recommendation == Recommendation::No).then(|| ALTERNATIVE_PATHS.to_vec())
}

/// A career that can be matched against a result.
#[derive(Debug, Clone, Copy)]
pub struct Career {
    pub title: &'static str,
    pub description: &'static str,
    pub required_skills: &'static [&'static str],
}

impl Career {
    /// Attach a match percentage.
    pub fn with_match(&self, match_percent: u8) -> CareerMatch {
        CareerMatch {
            title: self.title,
            match_percent,
            description: self.description,
            required_skills: self.required_skills,
        }
    }
}

pub const CLINICAL: Career = Career {
    title: "Clinical Medical Assistant",
    description: "Direct patient care, vital signs, assisting with procedures",
    required_skills: &[
        "Patient Care",
        "Vital Signs",
        "Medical Procedures",
        "Communication",
    ],
};

pub const ADMINISTRATIVE: Career = Career {
    title: "Administrative Medical Assistant",
    description: "Scheduling, EHR management, insurance processing",
    required_skills: &["EHR Systems", "Medical Coding", "Insurance", "Organization"],
};

pub const COORDINATOR: Career = Career {
    title: "Patient Coordinator",
    description: "Patient communication, appointment coordination, care navigation",
    required_skills: &[
        "Communication",
        "Organization",
        "Empathy",
        "Problem Solving",
    ],
};
