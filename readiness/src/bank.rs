//! The question bank.
//!
//! Three groups of questions are asked in a fixed order: personality and
//! interest items, medical knowledge items, and the WISCAR framework items.
//! The rest of the crate only sees the flat sequence returned by
//! [`questionnaire`].

use crate::{Question, Questionnaire};

const PRELUDE: &str = "\
Should You Become a Medical Assistant?

A medical assistant supports doctors and nurses in clinical and administrative
tasks within hospitals, clinics, or private practices. They serve as the vital
link between patients and healthcare providers.

  Clinical responsibilities: taking vital signs, preparing patients for exams,
  assisting with procedures, drawing blood samples.
  Administrative tasks: scheduling appointments, managing patient records,
  processing insurance, coordinating care.

Typical career paths:
  - Clinical Medical Assistant: direct patient care, vital signs, assisting doctors
  - Administrative Medical Assistant: scheduling, EHR management, insurance
  - Phlebotomy Technician: blood draws, lab specimen collection
  - Patient Coordinator: patient follow-ups, care coordination
  - EHR Specialist: electronic health records management

Traits that lead to success: attention to detail, empathy and communication,
ability to follow procedures, time management, adaptability, clinical knowledge.

This assessment evaluates your personality, interests, technical readiness and
learning potential across 6 skill dimensions. It takes about 20-25 minutes.";

const EPILOGUE: &str = "Assessment complete. Calculating your results...";

/// The full question bank, in the order it is asked.
pub fn questionnaire() -> Questionnaire {
    let questions = personality_questions()
        .into_iter()
        .chain(knowledge_questions())
        .chain(wiscar_questions())
        .collect();

    Questionnaire::new(questions)
        .with_prelude(PRELUDE)
        .with_epilogue(EPILOGUE)
}

/// Big Five, Holland Code and emotional stability items.
pub fn personality_questions() -> Vec<Question> {
    vec![
        Question::agreement(
            "p1",
            "I am careful to follow procedures exactly as instructed, even when I'm busy.",
            "Personality",
        )
        .with_framework("Big Five - Conscientiousness"),
        Question::agreement(
            "p2",
            "I double-check my work to ensure accuracy before submitting it.",
            "Personality",
        )
        .with_framework("Big Five - Conscientiousness"),
        Question::agreement(
            "p3",
            "I find it easy to empathize with people who are in distress or pain.",
            "Personality",
        )
        .with_framework("Big Five - Agreeableness"),
        Question::agreement(
            "p4",
            "I enjoy working as part of a healthcare team to help patients.",
            "Personality",
        )
        .with_framework("Big Five - Agreeableness"),
        Question::agreement(
            "i1",
            "I enjoy helping people solve health-related problems and concerns.",
            "Interest",
        )
        .with_framework("Holland Code - Social"),
        Question::agreement(
            "i2",
            "I am motivated by work that directly improves someone's wellbeing.",
            "Interest",
        )
        .with_framework("Holland Code - Social"),
        Question::agreement(
            "i3",
            "I prefer hands-on, practical tasks over theoretical discussions.",
            "Interest",
        )
        .with_framework("Holland Code - Realistic"),
        Question::agreement(
            "i4",
            "I enjoy working with medical equipment and tools.",
            "Interest",
        )
        .with_framework("Holland Code - Realistic"),
        Question::agreement(
            "p5",
            "I remain calm and focused when working in fast-paced, high-pressure situations.",
            "Personality",
        )
        .with_framework("Emotional Stability"),
        Question::agreement(
            "p6",
            "I can handle difficult or upset patients while maintaining professionalism.",
            "Personality",
        )
        .with_framework("Emotional Stability"),
    ]
}

/// Medical knowledge items, each with exactly one correct option.
pub fn knowledge_questions() -> Vec<Question> {
    vec![
        Question::choice(
            "t1",
            "What does the medical term 'hypertension' mean?",
            "Medical Knowledge",
            [
                "Low blood pressure",
                "High blood pressure",
                "Irregular heartbeat",
                "Chest pain",
            ],
        ),
        Question::choice(
            "t2",
            "Which of these is a normal resting heart rate for a healthy adult?",
            "Vital Signs",
            [
                "40-50 beats per minute",
                "60-100 beats per minute",
                "110-130 beats per minute",
                "140-160 beats per minute",
            ],
        ),
        Question::choice(
            "t3",
            "When taking a patient's blood pressure, the systolic pressure represents:",
            "Medical Procedures",
            [
                "Pressure when the heart is at rest",
                "Pressure when the heart contracts",
                "Average pressure over time",
                "Pressure in the lungs",
            ],
        ),
        Question::choice(
            "t4",
            "What is the most important step before any patient contact?",
            "Infection Control",
            [
                "Putting on gloves",
                "Hand hygiene/washing hands",
                "Wearing a mask",
                "Taking the patient's temperature",
            ],
        ),
        Question::choice(
            "t5",
            "A patient asks you about another patient's medical condition. What should you do?",
            "Medical Ethics",
            [
                "Share the information if they seem concerned",
                "Politely decline and explain patient confidentiality",
                "Ask the other patient for permission first",
                "Only share general, non-specific information",
            ],
        ),
        Question::choice(
            "t6",
            "If a patient needs to take 2.5ml of medication three times daily, how much medication will they need for one week?",
            "Medical Math",
            ["17.5ml", "52.5ml", "75ml", "105ml"],
        ),
        Question::choice(
            "t7",
            "Which body system is primarily responsible for transporting oxygen throughout the body?",
            "Anatomy",
            [
                "Respiratory system only",
                "Cardiovascular system only",
                "Both respiratory and cardiovascular systems",
                "Nervous system",
            ],
        ),
        Question::choice(
            "t8",
            "Are you familiar with Electronic Health Records (EHR) systems?",
            "Technology",
            [
                "Very familiar - I've used them professionally",
                "Somewhat familiar - I've seen or used them briefly",
                "Heard of them but never used one",
                "Not familiar at all",
            ],
        ),
    ]
}

/// Will, Interest, Skill, Cognitive readiness, Ability to learn and
/// Real-world alignment items.
pub fn wiscar_questions() -> Vec<Question> {
    vec![
        Question::agreement(
            "w1",
            "I finish whatever I begin, even when it becomes challenging.",
            "Will & Perseverance",
        )
        .with_framework("Grit Scale"),
        Question::agreement(
            "w2",
            "I have been obsessed with a certain idea or project for a short time but later lost interest.",
            "Will & Perseverance",
        )
        .with_framework("Grit Scale"),
        Question::agreement(
            "i5",
            "I can see myself working in healthcare for many years to come.",
            "Interest & Passion",
        )
        .with_framework("Long-term Interest"),
        Question::agreement(
            "i6",
            "When I think about helping sick or injured people, I feel energized and motivated.",
            "Interest & Passion",
        )
        .with_framework("Intrinsic Motivation"),
        Question::agreement(
            "s1",
            "I have experience in customer service or working directly with people.",
            "Current Skills",
        )
        .with_framework("Transferable Skills"),
        Question::agreement(
            "s2",
            "I am comfortable using computers and learning new software programs.",
            "Current Skills",
        )
        .with_framework("Technical Aptitude"),
        Question::agreement(
            "c1",
            "I can quickly learn and remember new medical terms and procedures.",
            "Cognitive Readiness",
        )
        .with_framework("Learning Ability"),
        Question::agreement(
            "c2",
            "I can follow complex, multi-step instructions accurately.",
            "Cognitive Readiness",
        )
        .with_framework("Working Memory"),
        Question::agreement(
            "a1",
            "When I receive feedback about my performance, I see it as an opportunity to improve.",
            "Ability to Learn",
        )
        .with_framework("Growth Mindset"),
        Question::agreement(
            "a2",
            "I believe my abilities in healthcare can be developed through effort and practice.",
            "Ability to Learn",
        )
        .with_framework("Growth Mindset"),
        Question::choice(
            "r1",
            "You notice a colleague make a small error in patient documentation. What would you most likely do?",
            "Real-World Alignment",
            [
                "Ignore it since it's minor",
                "Politely point out the error and offer to help correct it",
                "Report it to your supervisor immediately",
                "Correct it yourself without saying anything",
            ],
        )
        .with_framework("Situational Judgment"),
        Question::choice(
            "r2",
            "A patient seems anxious about an upcoming procedure. How would you most likely respond?",
            "Real-World Alignment",
            [
                "Tell them not to worry about it",
                "Listen to their concerns and provide reassurance within your scope",
                "Immediately get the doctor",
                "Change the subject to distract them",
            ],
        )
        .with_framework("Situational Judgment"),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::QuestionKind;

    #[test]
    fn bank_has_thirty_questions_in_group_order() {
        let questionnaire = questionnaire();
        assert_eq!(questionnaire.len(), 30);

        let ids: Vec<&str> = questionnaire
            .questions()
            .iter()
            .map(|q| q.id().as_str())
            .collect();
        assert_eq!(&ids[..3], &["p1", "p2", "p3"]);
        assert_eq!(ids[10], "t1");
        assert_eq!(ids[18], "w1");
        assert_eq!(ids[29], "r2");
    }

    #[test]
    fn identities_are_unique() {
        let questionnaire = questionnaire();
        let unique: HashSet<&str> = questionnaire
            .questions()
            .iter()
            .map(|q| q.id().as_str())
            .collect();
        assert_eq!(unique.len(), questionnaire.len());
    }

    #[test]
    fn choice_questions_carry_four_options() {
        for question in questionnaire().questions() {
            if let QuestionKind::Choice(choice) = question.kind() {
                assert_eq!(choice.options().len(), 4, "{}", question.id());
            }
        }
    }

    #[test]
    fn knowledge_questions_have_no_framework() {
        assert!(knowledge_questions().iter().all(|q| q.framework().is_none()));
        assert!(wiscar_questions().iter().all(|q| q.framework().is_some()));
    }
}
