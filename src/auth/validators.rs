// src/auth/validators.rs

use super::models::{ChangePasswordRequest, LoginRequest, RegisterRequest};
use crate::common::validation::{is_valid_email, is_valid_phone};
use crate::common::{ValidationResult, Validator};

pub const MIN_PASSWORD_LENGTH: usize = 6;

pub struct AuthValidator;

fn check_name(result: &mut ValidationResult, name: &str) {
    let length = name.trim().chars().count();
    if length < 2 || length > 100 {
        result.add_error("name", "Name must be between 2 and 100 characters");
    }
}

fn check_phone(result: &mut ValidationResult, phone: Option<&str>) {
    if let Some(phone) = phone.filter(|p| !p.trim().is_empty()) {
        if !is_valid_phone(phone) {
            result.add_error("phone", "Phone must be a 10 digit mobile number");
        }
    }
}

impl Validator<RegisterRequest> for AuthValidator {
    fn validate(&self, data: &RegisterRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        match data.name.as_deref().map(str::trim) {
            None | Some("") => result.add_error("name", "Name is required"),
            Some(name) => check_name(&mut result, name),
        }

        match data.email.as_deref().map(str::trim) {
            None | Some("") => result.add_error("email", "Email is required"),
            Some(email) if !is_valid_email(email) => {
                result.add_error("email", "Email must be a valid email address")
            }
            Some(_) => {}
        }

        match data.password.as_deref() {
            None | Some("") => result.add_error("password", "Password is required"),
            Some(password) if password.chars().count() < MIN_PASSWORD_LENGTH => result.add_error(
                "password",
                "Password must be at least 6 characters",
            ),
            Some(_) => {}
        }

        check_phone(&mut result, data.phone.as_deref());

        result
    }
}

impl Validator<LoginRequest> for AuthValidator {
    fn validate(&self, data: &LoginRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.email.as_deref().map_or(true, |e| e.trim().is_empty()) {
            result.add_error("email", "Email is required");
        }
        if data.password.as_deref().map_or(true, str::is_empty) {
            result.add_error("password", "Password is required");
        }

        result
    }
}

impl Validator<ChangePasswordRequest> for AuthValidator {
    fn validate(&self, data: &ChangePasswordRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.current_password.is_empty() {
            result.add_error("current_password", "Current password is required");
        }
        if data.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            result.add_error("new_password", "New password must be at least 6 characters");
        }

        result
    }
}

/// Shared with profile updates
pub fn validate_name_and_phone(name: Option<&str>, phone: Option<&str>) -> ValidationResult {
    let mut result = ValidationResult::new();
    if let Some(name) = name {
        check_name(&mut result, name);
    }
    check_phone(&mut result, phone);
    result
}
