// src/personality/questions.rs
//! The personality questionnaire. Every option awards 3 points to one trait
//! and 2 to another.

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct PersonalityQuestion {
    pub id: u32,
    pub question: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub category: &'static str,
    pub options: &'static [PersonalityOption],
}

#[derive(Debug)]
pub struct PersonalityOption {
    pub text: &'static str,
    pub score: &'static [(&'static str, u32)],
}

impl Serialize for PersonalityOption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let score: BTreeMap<&str, u32> = self.score.iter().copied().collect();
        let mut state = serializer.serialize_struct("PersonalityOption", 2)?;
        state.serialize_field("text", self.text)?;
        state.serialize_field("score", &score)?;
        state.end()
    }
}

const fn option(
    text: &'static str,
    score: &'static [(&'static str, u32)],
) -> PersonalityOption {
    PersonalityOption { text, score }
}

pub const ESTIMATED_TIME: &str = "10-15 minutes";

pub static PERSONALITY_QUESTIONS: [PersonalityQuestion; 8] = [
    PersonalityQuestion {
        id: 1,
        question: "In a group project, you prefer to:",
        kind: "single",
        category: "leadership",
        options: &[
            option("Take charge and lead the team", &[("leadership", 3), ("extroversion", 2)]),
            option("Collaborate equally with everyone", &[("teamwork", 3), ("communication", 2)]),
            option("Focus on your specific tasks", &[("focus", 3), ("independence", 2)]),
            option("Support others and help where needed", &[("support", 3), ("empathy", 2)]),
        ],
    },
    PersonalityQuestion {
        id: 2,
        question: "When facing a difficult problem, you:",
        kind: "single",
        category: "problem_solving",
        options: &[
            option("Analyze it step by step", &[("analytical", 3), ("methodical", 2)]),
            option("Brainstorm creative solutions", &[("creativity", 3), ("innovation", 2)]),
            option("Ask for help from others", &[("collaboration", 3), ("communication", 2)]),
            option("Research similar problems", &[("research", 3), ("learning", 2)]),
        ],
    },
    PersonalityQuestion {
        id: 3,
        question: "Your ideal work environment is:",
        kind: "single",
        category: "work_style",
        options: &[
            option("Quiet and focused", &[("introversion", 3), ("focus", 2)]),
            option("Dynamic and interactive", &[("extroversion", 3), ("energy", 2)]),
            option("Structured and organized", &[("organization", 3), ("planning", 2)]),
            option("Flexible and adaptable", &[("adaptability", 3), ("flexibility", 2)]),
        ],
    },
    PersonalityQuestion {
        id: 4,
        question: "When learning something new, you prefer to:",
        kind: "single",
        category: "learning_style",
        options: &[
            option("Read and study independently", &[("independence", 3), ("reading", 2)]),
            option("Watch videos and demonstrations", &[("visual", 3), ("observation", 2)]),
            option("Practice hands-on immediately", &[("kinesthetic", 3), ("practical", 2)]),
            option("Discuss with others", &[("social", 3), ("communication", 2)]),
        ],
    },
    PersonalityQuestion {
        id: 5,
        question: "In stressful situations, you:",
        kind: "single",
        category: "stress_management",
        options: &[
            option("Stay calm and think logically", &[("calmness", 3), ("logic", 2)]),
            option("Take action quickly", &[("action", 3), ("decisiveness", 2)]),
            option("Seek support from others", &[("support_seeking", 3), ("social", 2)]),
            option("Take breaks to recharge", &[("self_care", 3), ("balance", 2)]),
        ],
    },
    PersonalityQuestion {
        id: 6,
        question: "Your communication style is:",
        kind: "single",
        category: "communication",
        options: &[
            option("Direct and to the point", &[("directness", 3), ("efficiency", 2)]),
            option("Detailed and comprehensive", &[("thoroughness", 3), ("detail", 2)]),
            option("Encouraging and supportive", &[("encouragement", 3), ("empathy", 2)]),
            option("Collaborative and inclusive", &[("collaboration", 3), ("inclusivity", 2)]),
        ],
    },
    PersonalityQuestion {
        id: 7,
        question: "When making decisions, you rely most on:",
        kind: "single",
        category: "decision_making",
        options: &[
            option("Data and facts", &[("analytical", 3), ("evidence", 2)]),
            option("Intuition and gut feeling", &[("intuition", 3), ("instinct", 2)]),
            option("Others' opinions and advice", &[("collaboration", 3), ("social", 2)]),
            option("Past experiences", &[("experience", 3), ("wisdom", 2)]),
        ],
    },
    PersonalityQuestion {
        id: 8,
        question: "Your motivation comes from:",
        kind: "single",
        category: "motivation",
        options: &[
            option("Achieving personal goals", &[("achievement", 3), ("personal", 2)]),
            option("Helping others succeed", &[("altruism", 3), ("service", 2)]),
            option("Learning and growing", &[("growth", 3), ("learning", 2)]),
            option("Recognition and rewards", &[("recognition", 3), ("external", 2)]),
        ],
    },
];

pub fn find_question(id: u32) -> Option<&'static PersonalityQuestion> {
    PERSONALITY_QUESTIONS.iter().find(|q| q.id == id)
}
