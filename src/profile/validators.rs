// src/profile/validators.rs

use super::models::UpdateProfileRequest;
use crate::auth::validators::validate_name_and_phone;
use crate::common::{ValidationResult, Validator};

const MAX_LIST_ITEMS: usize = 20;
const MAX_ITEM_LENGTH: usize = 100;
const MAX_BIO_LENGTH: usize = 1000;

pub struct ProfileValidator;

fn check_list(result: &mut ValidationResult, field: &str, items: Option<&Vec<String>>) {
    let Some(items) = items else {
        return;
    };
    if items.len() > MAX_LIST_ITEMS {
        result.add_error(field, "No more than 20 entries are allowed");
    }
    if items.iter().any(|item| item.chars().count() > MAX_ITEM_LENGTH) {
        result.add_error(field, "Entries must be less than 100 characters");
    }
}

impl Validator<UpdateProfileRequest> for ProfileValidator {
    fn validate(&self, data: &UpdateProfileRequest) -> ValidationResult {
        let mut result = validate_name_and_phone(data.name.as_deref(), data.phone.as_deref());

        check_list(&mut result, "career_goals", data.career_goals.as_ref());
        check_list(&mut result, "skills", data.skills.as_ref());
        check_list(
            &mut result,
            "preferred_industries",
            data.preferred_industries.as_ref(),
        );

        if let Some(level) = &data.experience_level {
            if level.trim().is_empty() {
                result.add_error("experience_level", "Experience level cannot be empty");
            }
        }

        if let Some(bio) = &data.bio {
            if bio.chars().count() > MAX_BIO_LENGTH {
                result.add_error("bio", "Bio must be less than 1000 characters");
            }
        }

        result
    }
}
