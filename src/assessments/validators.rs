// src/assessments/validators.rs

use std::collections::HashSet;

use super::models::{CreateAssessmentRequest, ASSESSMENT_TYPES, DIFFICULTIES};
use crate::common::{ValidationResult, Validator};

const MIN_TIME_LIMIT_SECS: u32 = 60;

pub struct AssessmentValidator;

impl Validator<CreateAssessmentRequest> for AssessmentValidator {
    fn validate(&self, data: &CreateAssessmentRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        match data.assessment_type.as_deref() {
            None | Some("") => result.add_error("assessment_type", "Assessment type is required"),
            Some(kind) if !ASSESSMENT_TYPES.contains(&kind) => result.add_error(
                "assessment_type",
                "Assessment type must be one of: psychometric, skills, aptitude, personality, career_interest, comprehensive",
            ),
            Some(_) => {}
        }

        match data.title.as_deref().map(str::trim) {
            None | Some("") => result.add_error("title", "Title is required"),
            Some(title) => {
                let length = title.chars().count();
                if !(5..=200).contains(&length) {
                    result.add_error("title", "Title must be between 5 and 200 characters");
                }
            }
        }

        if let Some(description) = &data.description {
            if description.chars().count() > 1000 {
                result.add_error("description", "Description must be less than 1000 characters");
            }
        }

        if let Some(limit) = data.time_limit {
            if limit < MIN_TIME_LIMIT_SECS {
                result.add_error("time_limit", "Time limit must be at least 60 seconds");
            }
        }

        if let Some(difficulty) = data.difficulty.as_deref() {
            if !DIFFICULTIES.contains(&difficulty) {
                result.add_error(
                    "difficulty",
                    "Difficulty must be one of: easy, medium, hard, mixed",
                );
            }
        }

        match data.questions.as_deref() {
            None | Some([]) => result.add_error("questions", "At least one question is required"),
            Some(questions) => {
                let mut seen = HashSet::new();
                for question in questions {
                    if question.id.trim().is_empty() {
                        result.add_error("questions", "Every question needs an id");
                    } else if !seen.insert(question.id.as_str()) {
                        result.add_error(
                            "questions",
                            &format!("Duplicate question id '{}'", question.id),
                        );
                    }
                    if question.question.trim().is_empty() {
                        result.add_error(
                            "questions",
                            &format!("Question '{}' has no text", question.id),
                        );
                    }
                    if question.kind.needs_options() && question.options.is_empty() {
                        result.add_error(
                            "questions",
                            &format!("Question '{}' needs options", question.id),
                        );
                    }
                    if !(0.0..=1.0).contains(&question.weight) {
                        result.add_error(
                            "questions",
                            &format!("Question '{}' weight must be between 0 and 1", question.id),
                        );
                    }
                }
            }
        }

        result
    }
}
