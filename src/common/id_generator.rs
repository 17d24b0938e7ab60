// src/common/id_generator.rs
//! Crockford Base32 ID Generator
//!
//! Generates human-readable, prefixed IDs using Crockford Base32 encoding.
//! Format: PREFIX_XXXXXXXX (e.g., U_K7NP3XQ2 for users)
//!
//! The alphabet excludes I, L, O and U so ids survive being read aloud or
//! retyped from a screenshot.

use rand::Rng;

/// Crockford Base32 alphabet (excludes I, L, O, U to avoid confusion)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Random characters after the prefix
const ID_LENGTH: usize = 8;

/// Entity type prefixes for ID generation
#[derive(Debug, Clone, Copy)]
pub enum EntityPrefix {
    /// User account (U_)
    User,
    /// Custom graded assessment (AS_)
    Assessment,
    /// Career questionnaire submission (AR_)
    AssessmentResponse,
    /// Generated or fallback recommendation (RC_)
    Recommendation,
    /// Personality test result (PT_)
    PersonalityTest,
}

impl EntityPrefix {
    /// Get the string prefix for this entity type
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::User => "U",
            EntityPrefix::Assessment => "AS",
            EntityPrefix::AssessmentResponse => "AR",
            EntityPrefix::Recommendation => "RC",
            EntityPrefix::PersonalityTest => "PT",
        }
    }
}

/// Generate a random Crockford Base32 string of specified length
fn generate_crockford_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..32);
            CROCKFORD_ALPHABET[idx] as char
        })
        .collect()
}

/// Generate a prefixed ID using Crockford Base32 encoding
pub fn generate_id(prefix: EntityPrefix) -> String {
    format!("{}_{}", prefix.as_str(), generate_crockford_string(ID_LENGTH))
}

pub fn generate_user_id() -> String {
    generate_id(EntityPrefix::User)
}

pub fn generate_assessment_id() -> String {
    generate_id(EntityPrefix::Assessment)
}

pub fn generate_response_id() -> String {
    generate_id(EntityPrefix::AssessmentResponse)
}

pub fn generate_recommendation_id() -> String {
    generate_id(EntityPrefix::Recommendation)
}

pub fn generate_personality_test_id() -> String {
    generate_id(EntityPrefix::PersonalityTest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_id_format() {
        let user_id = generate_user_id();
        assert!(user_id.starts_with("U_"));
        assert_eq!(user_id.len(), 2 + ID_LENGTH);

        let assessment_id = generate_assessment_id();
        assert!(assessment_id.starts_with("AS_"));
        assert_eq!(assessment_id.len(), 3 + ID_LENGTH);
    }

    #[test]
    fn test_crockford_alphabet_only() {
        let id = generate_user_id();
        let random_part = &id[2..];

        for c in random_part.chars() {
            assert!(
                CROCKFORD_ALPHABET.contains(&(c as u8)),
                "Character '{}' not in Crockford alphabet",
                c
            );
        }

        assert!(!random_part.contains('I'));
        assert!(!random_part.contains('L'));
        assert!(!random_part.contains('O'));
        assert!(!random_part.contains('U'));
    }

    #[test]
    fn test_uniqueness() {
        let mut ids = HashSet::new();
        for _ in 0..1000 {
            assert!(ids.insert(generate_recommendation_id()), "Duplicate ID generated");
        }
    }

    #[test]
    fn test_all_prefixes() {
        assert!(generate_user_id().starts_with("U_"));
        assert!(generate_assessment_id().starts_with("AS_"));
        assert!(generate_response_id().starts_with("AR_"));
        assert!(generate_recommendation_id().starts_with("RC_"));
        assert!(generate_personality_test_id().starts_with("PT_"));
    }
}
