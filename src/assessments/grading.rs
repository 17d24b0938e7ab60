// src/assessments/grading.rs
//! Scoring for custom graded assessments

use serde_json::Value;

use super::models::{AssessmentQuestion, AssessmentResults, QuestionResponse, QuestionType};

/// Likert answers are on a five point scale
const LIKERT_SPAN: f64 = 4.0;

/// Score in `0.0..=1.0` for one answer. Questions without a correct answer
/// always score zero.
pub fn question_score(question: &AssessmentQuestion, answer: &Value) -> f64 {
    let Some(correct) = question.correct_answer.as_ref().filter(|c| !c.is_null()) else {
        return 0.0;
    };

    match question.kind {
        QuestionType::MultipleChoice | QuestionType::Boolean => {
            if answer == correct {
                1.0
            } else {
                0.0
            }
        }
        QuestionType::LikertScale => match (answer.as_f64(), correct.as_f64()) {
            (Some(a), Some(c)) => (1.0 - (a - c).abs() / LIKERT_SPAN).max(0.0),
            _ => 0.0,
        },
        QuestionType::Ranking => match (answer.as_array(), correct.as_array()) {
            (Some(given), Some(expected)) if !expected.is_empty() => {
                let matches = given
                    .iter()
                    .zip(expected.iter())
                    .filter(|(a, c)| a == c)
                    .count();
                matches as f64 / expected.len() as f64
            }
            _ => 0.0,
        },
        QuestionType::Text => 0.0,
    }
}

pub fn grade_for(percentage: u8) -> &'static str {
    match percentage {
        90.. => "A+",
        80..=89 => "A",
        70..=79 => "B+",
        60..=69 => "B",
        50..=59 => "C+",
        40..=49 => "C",
        30..=39 => "D",
        _ => "F",
    }
}

/// Weighted score over the answered questions
pub fn calculate_results(
    questions: &[AssessmentQuestion],
    responses: &[QuestionResponse],
) -> AssessmentResults {
    let mut total_score = 0.0;
    let mut max_score = 0.0;
    let mut answered = 0;

    for question in questions {
        let Some(response) = responses.iter().find(|r| r.question_id == question.id) else {
            continue;
        };
        answered += 1;
        total_score += question_score(question, &response.answer) * question.weight;
        max_score += question.weight;
    }

    let percentage = if max_score > 0.0 {
        (total_score / max_score * 100.0).round().clamp(0.0, 100.0) as u8
    } else {
        0
    };

    AssessmentResults {
        total_score,
        max_score,
        percentage,
        grade: grade_for(percentage).to_string(),
        answered,
    }
}
