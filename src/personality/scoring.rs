// src/personality/scoring.rs
//! Trait scoring and personality profile derivation

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::models::{PersonalityProfile, TraitScore};
use super::questions::find_question;

/// Every trait a question can award, in canonical order. Ties in the
/// ranking resolve by position in this list.
pub const TRAITS: [&str; 52] = [
    "leadership", "extroversion", "teamwork", "communication",
    "focus", "independence", "support", "empathy",
    "analytical", "methodical", "creativity", "innovation",
    "collaboration", "research", "learning", "introversion",
    "energy", "organization", "planning", "adaptability",
    "flexibility", "reading", "visual", "observation",
    "kinesthetic", "practical", "social", "calmness",
    "logic", "action", "decisiveness", "support_seeking",
    "self_care", "balance", "directness", "efficiency",
    "thoroughness", "detail", "encouragement", "inclusivity",
    "intuition", "instinct", "experience", "wisdom",
    "achievement", "personal", "altruism", "service",
    "growth", "recognition", "external", "evidence",
];

pub const DEFAULT_PERSONALITY_TYPE: &str = "The Collaborator";

const ARCHETYPES: [(&str, [&str; 4]); 5] = [
    ("The Leader", ["leadership", "decisiveness", "action", "achievement"]),
    ("The Collaborator", ["teamwork", "communication", "collaboration", "empathy"]),
    ("The Analyst", ["analytical", "methodical", "research", "logic"]),
    ("The Creator", ["creativity", "innovation", "visual", "intuition"]),
    ("The Supporter", ["support", "empathy", "encouragement", "altruism"]),
];

const TOP_TRAIT_COUNT: usize = 5;
const STRENGTH_THRESHOLD: u32 = 5;
const DEVELOPMENT_THRESHOLD: u32 = 3;

/// Accumulated points for every known trait, kept in canonical order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitScores {
    values: [u32; TRAITS.len()],
}

impl Default for TraitScores {
    fn default() -> Self {
        Self {
            values: [0; TRAITS.len()],
        }
    }
}

impl TraitScores {
    pub fn get(&self, name: &str) -> u32 {
        TRAITS
            .iter()
            .position(|t| *t == name)
            .map_or(0, |idx| self.values[idx])
    }

    fn add(&mut self, name: &str, points: u32) {
        if let Some(idx) = TRAITS.iter().position(|t| *t == name) {
            self.values[idx] += points;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        TRAITS.iter().copied().zip(self.values.iter().copied())
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|v| *v == 0)
    }

    pub fn to_map(&self) -> BTreeMap<String, u32> {
        self.iter().map(|(t, v)| (t.to_string(), v)).collect()
    }
}

impl Serialize for TraitScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TRAITS.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

/// Sum the points of every chosen option. Keys are question ids, values are
/// zero-based option indexes; anything that does not resolve to an option is
/// skipped.
pub fn calculate_scores(answers: &Map<String, Value>) -> TraitScores {
    let mut scores = TraitScores::default();

    for (question_id, answer) in answers {
        let Ok(id) = question_id.trim().parse::<u32>() else {
            continue;
        };
        let Some(question) = find_question(id) else {
            continue;
        };
        let Some(index) = answer.as_u64().and_then(|i| usize::try_from(i).ok()) else {
            continue;
        };
        let Some(option) = question.options.get(index) else {
            continue;
        };

        for (name, points) in option.score {
            scores.add(name, *points);
        }
    }

    scores
}

/// Derive archetype, top traits, strengths and development areas
pub fn derive_profile(scores: &TraitScores) -> PersonalityProfile {
    let mut ranked: Vec<(&'static str, u32)> = scores.iter().collect();
    // stable sort keeps canonical order among equal scores
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(TOP_TRAIT_COUNT);

    let mut personality_type = DEFAULT_PERSONALITY_TYPE;
    let mut best_score = 0;
    for (name, traits) in ARCHETYPES {
        let score: u32 = traits.iter().map(|t| scores.get(t)).sum();
        if score > best_score {
            best_score = score;
            personality_type = name;
        }
    }

    PersonalityProfile {
        personality_type: personality_type.to_string(),
        top_traits: ranked
            .iter()
            .map(|(name, score)| TraitScore {
                name: name.to_string(),
                score: *score,
            })
            .collect(),
        strengths: ranked
            .iter()
            .filter(|(_, score)| *score > STRENGTH_THRESHOLD)
            .map(|(name, _)| name.to_string())
            .collect(),
        development_areas: scores
            .iter()
            .filter(|(_, score)| *score < DEVELOPMENT_THRESHOLD)
            .map(|(name, _)| name.to_string())
            .collect(),
    }
}
