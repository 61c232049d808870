//! Scoring: a pure function from answers to an [`AssessmentResult`].
//!
//! Every rule treats an unanswered question as a zero contribution, except
//! the situational items, where anything other than the best-practice option
//! (including no answer) earns partial credit.

use tracing::{debug, warn};

use crate::report::{self, ADMINISTRATIVE, CLINICAL, COORDINATOR};
use crate::result::round_percent;
use crate::{
    AnswerLookupError, Answers, AssessmentResult, CareerMatch, DimensionScores, Questionnaire,
    Recommendation,
};

/// Personality and interest items averaged into the psychometric score.
const PSYCHOMETRIC: [&str; 10] = ["p1", "p2", "p3", "p4", "p5", "p6", "i1", "i2", "i3", "i4"];

/// Knowledge items with the index of their correct option.
const ANSWER_KEY: [(&str, usize); 8] = [
    ("t1", 1),
    ("t2", 1),
    ("t3", 1),
    ("t4", 1),
    ("t5", 1),
    ("t6", 1),
    ("t7", 2),
    ("t8", 0),
];

/// Grit item phrased as a positive indicator.
const WILL: &str = "w1";
/// Grit item phrased as a negative indicator; its score is inverted.
const WILL_INVERTED: &str = "w2";
const INTEREST: [&str; 2] = ["i5", "i6"];
const SKILL: [&str; 2] = ["s1", "s2"];
const COGNITIVE: [&str; 2] = ["c1", "c2"];
const ABILITY: [&str; 2] = ["a1", "a2"];
const SITUATIONAL: [&str; 2] = ["r1", "r2"];

/// The option index that counts as best practice on situational items.
const BEST_PRACTICE: usize = 1;

const PSYCHOMETRIC_WEIGHT: f64 = 0.4;
const TECHNICAL_WEIGHT: f64 = 0.3;
const WISCAR_WEIGHT: f64 = 0.3;

/// Score a (possibly partial) set of answers.
pub fn score(answers: &Answers) -> AssessmentResult {
    let psychometric_score = psychometric(answers);
    let technical_score = technical(answers);
    let wiscar_scores = wiscar(answers);

    let overall_score = round_percent(
        f64::from(psychometric_score) * PSYCHOMETRIC_WEIGHT
            + f64::from(technical_score) * TECHNICAL_WEIGHT
            + wiscar_scores.average() * WISCAR_WEIGHT,
    );

    let recommendation = recommend(overall_score, psychometric_score, technical_score);

    debug!(
        overall_score,
        psychometric_score,
        technical_score,
        %recommendation,
        answered = answers.len(),
        "scored assessment"
    );

    AssessmentResult {
        overall_score,
        recommendation,
        psychometric_score,
        technical_score,
        wiscar_scores,
        insights: report::insights(psychometric_score, technical_score, &wiscar_scores),
        next_steps: report::next_steps(recommendation),
        alternative_paths: report::alternative_paths(recommendation),
        career_matches: career_matches(psychometric_score, technical_score, &wiscar_scores),
    }
}

/// Read raw `(question id, token)` pairs into answers for `questionnaire`.
///
/// Unknown ids and malformed tokens are logged and skipped, so they count as
/// unanswered when scored.
pub fn parse_tokens<'a, I>(questionnaire: &Questionnaire, tokens: I) -> Answers
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut answers = Answers::new();
    for (id, token) in tokens {
        match questionnaire.parse_answer(id, token) {
            Ok((id, answer)) => answers.insert(id, answer),
            Err(err) => warn!(question = id, %err, "ignoring answer"),
        }
    }
    answers
}

fn psychometric(answers: &Answers) -> u8 {
    let total: f64 = PSYCHOMETRIC
        .iter()
        .map(|id| agreement_score(answers, id))
        .sum();
    round_percent(total / PSYCHOMETRIC.len() as f64)
}

fn technical(answers: &Answers) -> u8 {
    let correct = ANSWER_KEY
        .iter()
        .filter(|(id, key)| choice(answers, id) == Some(*key))
        .count();
    round_percent(correct as f64 / ANSWER_KEY.len() as f64 * 100.0)
}

fn wiscar(answers: &Answers) -> DimensionScores {
    let pair = |ids: [&str; 2]| {
        round_percent((agreement_score(answers, ids[0]) + agreement_score(answers, ids[1])) / 2.0)
    };
    let situational = |id: &str| {
        if choice(answers, id) == Some(BEST_PRACTICE) {
            100.0
        } else {
            50.0
        }
    };

    DimensionScores {
        will: round_percent(
            (agreement_score(answers, WILL) + (100.0 - agreement_score(answers, WILL_INVERTED)))
                / 2.0,
        ),
        interest: pair(INTEREST),
        skill: pair(SKILL),
        cognitive: pair(COGNITIVE),
        ability: pair(ABILITY),
        real_world: round_percent((situational(SITUATIONAL[0]) + situational(SITUATIONAL[1])) / 2.0),
    }
}

fn recommend(overall: u8, psychometric: u8, technical: u8) -> Recommendation {
    if overall >= 75 && psychometric >= 70 && technical >= 60 {
        Recommendation::Yes
    } else if overall < 50 || psychometric < 40 {
        Recommendation::No
    } else {
        Recommendation::Maybe
    }
}

fn career_matches(psychometric: u8, technical: u8, wiscar: &DimensionScores) -> Vec<CareerMatch> {
    let mean = |a: u8, b: u8, c: u8| {
        round_percent((f64::from(a) + f64::from(b) + f64::from(c)) / 3.0)
    };

    let mut matches = vec![
        CLINICAL.with_match(mean(psychometric, technical, wiscar.real_world)),
        ADMINISTRATIVE.with_match(mean(wiscar.skill, technical, wiscar.cognitive)),
        COORDINATOR.with_match(mean(psychometric, wiscar.interest, wiscar.ability)),
    ];
    // Stable: ties keep the declared order.
    matches.sort_by(|a, b| b.match_percent.cmp(&a.match_percent));
    matches
}

/// Normalized 0-100 score of an agreement item; 0 when unanswered.
fn agreement_score(answers: &Answers, id: &str) -> f64 {
    match answers.get_agreement(id) {
        Ok(agreement) => agreement.score(),
        Err(AnswerLookupError::MissingAnswer(_)) => 0.0,
        Err(err) => {
            warn!(%err, "scoring answer as zero");
            0.0
        }
    }
}

/// Chosen option of a choice item, if it has one.
fn choice(answers: &Answers, id: &str) -> Option<usize> {
    match answers.get_choice(id) {
        Ok(index) => Some(index),
        Err(AnswerLookupError::MissingAnswer(_)) => None,
        Err(err) => {
            warn!(%err, "treating answer as unanswered");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Agreement, Answer, questionnaire};

    fn agree(ordinal: u8) -> Answer {
        Answer::Agreement(Agreement::new(ordinal).unwrap())
    }

    fn answers(pairs: &[(&str, Answer)]) -> Answers {
        let mut answers = Answers::new();
        for (id, answer) in pairs {
            answers.insert(*id, *answer);
        }
        answers
    }

    fn all_correct() -> Vec<(&'static str, Answer)> {
        ANSWER_KEY
            .iter()
            .map(|(id, key)| (*id, Answer::Choice(*key)))
            .collect()
    }

    #[test]
    fn empty_answers() {
        let result = score(&Answers::new());

        assert_eq!(result.psychometric_score, 0);
        assert_eq!(result.technical_score, 0);
        assert_eq!(
            result.wiscar_scores,
            DimensionScores {
                will: 50,
                interest: 0,
                skill: 0,
                cognitive: 0,
                ability: 0,
                real_world: 50,
            }
        );
        assert_eq!(result.overall_score, 5);
        assert_eq!(result.recommendation, Recommendation::No);
        assert!(result.alternative_paths.is_some());
    }

    #[test]
    fn will_inverts_second_item() {
        let result = score(&answers(&[("w1", agree(4)), ("w2", agree(0))]));
        assert_eq!(result.wiscar_scores.will, 100);

        let result = score(&answers(&[("w1", agree(4)), ("w2", agree(4))]));
        assert_eq!(result.wiscar_scores.will, 50);

        let result = score(&answers(&[("w1", agree(1)), ("w2", agree(3))]));
        assert_eq!(result.wiscar_scores.will, 25);
    }

    #[test]
    fn all_correct_knowledge_answers() {
        let result = score(&answers(&all_correct()));
        assert_eq!(result.technical_score, 100);
    }

    #[test]
    fn technical_counts_exact_matches_only() {
        let result = score(&answers(&[
            ("t1", Answer::Choice(1)),
            ("t7", Answer::Choice(1)),
            ("t8", Answer::Choice(0)),
        ]));
        // 2 of 8 correct
        assert_eq!(result.technical_score, 25);
    }

    #[test]
    fn technical_rounds_eighths() {
        let pairs: Vec<_> = all_correct().into_iter().take(3).collect();
        // 3/8 = 37.5
        assert_eq!(score(&answers(&pairs)).technical_score, 38);
    }

    #[test]
    fn psychometric_always_divides_by_ten() {
        let result = score(&answers(&[("p1", agree(4)), ("i4", agree(4))]));
        assert_eq!(result.psychometric_score, 20);
    }

    #[test]
    fn psychometric_ignores_wiscar_interest_items() {
        let result = score(&answers(&[("i5", agree(4)), ("i6", agree(4))]));
        assert_eq!(result.psychometric_score, 0);
        assert_eq!(result.wiscar_scores.interest, 100);
    }

    #[test]
    fn real_world_partial_credit() {
        let result = score(&answers(&[("r1", Answer::Choice(1)), ("r2", Answer::Choice(0))]));
        assert_eq!(result.wiscar_scores.real_world, 75);
    }

    #[test]
    fn real_world_only_takes_three_values() {
        let options = [None, Some(0), Some(1), Some(2), Some(3)];
        for r1 in options {
            for r2 in options {
                let mut answers = Answers::new();
                if let Some(index) = r1 {
                    answers.insert("r1", Answer::Choice(index));
                }
                if let Some(index) = r2 {
                    answers.insert("r2", Answer::Choice(index));
                }
                let real_world = score(&answers).wiscar_scores.real_world;
                assert!(
                    [50, 75, 100].contains(&real_world),
                    "r1={r1:?} r2={r2:?} gave {real_world}"
                );
            }
        }
    }

    #[test]
    fn mismatched_answer_types_score_zero() {
        let result = score(&answers(&[
            ("p1", Answer::Choice(4)),
            ("t1", agree(1)),
            ("r1", Answer::Confirm(true)),
        ]));
        assert_eq!(result.psychometric_score, 0);
        assert_eq!(result.technical_score, 0);
        assert_eq!(result.wiscar_scores.real_world, 50);
    }

    #[test]
    fn recommendation_thresholds() {
        assert_eq!(recommend(75, 70, 60), Recommendation::Yes);
        assert_eq!(recommend(85, 100, 50), Recommendation::Maybe);
        assert_eq!(recommend(74, 100, 100), Recommendation::Maybe);
        assert_eq!(recommend(49, 100, 100), Recommendation::No);
        assert_eq!(recommend(70, 39, 100), Recommendation::No);
        assert_eq!(recommend(50, 40, 0), Recommendation::Maybe);
    }

    #[test]
    fn career_ties_keep_declared_order() {
        let matches = career_matches(0, 0, &DimensionScores::default());
        let titles: Vec<&str> = matches.iter().map(|m| m.title).collect();
        assert_eq!(
            titles,
            [
                "Clinical Medical Assistant",
                "Administrative Medical Assistant",
                "Patient Coordinator"
            ]
        );
    }

    #[test]
    fn career_matches_sorted_best_first() {
        let scores = DimensionScores {
            interest: 100,
            ability: 100,
            real_world: 50,
            ..Default::default()
        };
        let matches = career_matches(0, 0, &scores);
        assert_eq!(matches[0].title, "Patient Coordinator");
        assert_eq!(matches[0].match_percent, 67);
        assert_eq!(matches[1].title, "Clinical Medical Assistant");
        assert_eq!(matches[1].match_percent, 17);
        assert_eq!(matches[2].match_percent, 0);
    }

    #[test]
    fn parse_tokens_skips_bad_input() {
        let bank = questionnaire();
        let answers = parse_tokens(
            &bank,
            [("w1", "4"), ("t1", "banana"), ("zz", "1"), ("r1", "9"), ("r2", "1")],
        );
        assert_eq!(answers.len(), 2);
        assert_eq!(answers.get_choice("r2").unwrap(), 1);
        assert!(!answers.contains("t1"));
    }

    #[test]
    fn scoring_is_deterministic() {
        let answers = answers(&[("p3", agree(2)), ("t6", Answer::Choice(1)), ("c1", agree(3))]);
        assert_eq!(score(&answers), score(&answers.clone()));
    }
}
