// src/roadmap/models.rs

use serde::{Deserialize, Serialize};

use crate::services::InsightSchema;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub duration: String,
    pub goals: Vec<String>,
    pub skills: Vec<String>,
    pub milestones: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningResource {
    pub name: String,
    pub platform: String,
    pub focus: String,
}

/// Six month, one year and three year plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roadmap {
    pub short_term: RoadmapPhase,
    pub medium_term: RoadmapPhase,
    pub long_term: RoadmapPhase,
    pub learning_resources: Vec<LearningResource>,
}

impl InsightSchema for Roadmap {
    fn is_complete(&self) -> bool {
        [&self.short_term, &self.medium_term, &self.long_term]
            .iter()
            .all(|phase| !phase.goals.is_empty())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn resource(name: &str, platform: &str, focus: &str) -> LearningResource {
    LearningResource {
        name: name.to_string(),
        platform: platform.to_string(),
        focus: focus.to_string(),
    }
}

impl Roadmap {
    pub fn fallback() -> Self {
        Self {
            short_term: RoadmapPhase {
                duration: "6 months".to_string(),
                goals: strings(&[
                    "Complete foundational courses",
                    "Build portfolio projects",
                    "Network in industry",
                ]),
                skills: strings(&["Technical fundamentals", "Communication", "Project management"]),
                milestones: strings(&[
                    "Complete 2 online courses",
                    "Build 3 portfolio projects",
                    "Attend 5 networking events",
                ]),
            },
            medium_term: RoadmapPhase {
                duration: "1 year".to_string(),
                goals: strings(&[
                    "Gain practical experience",
                    "Specialize in chosen field",
                    "Build professional network",
                ]),
                skills: strings(&["Advanced technical skills", "Leadership", "Industry knowledge"]),
                milestones: strings(&["Complete certification", "Lead a project", "Get mentorship"]),
            },
            long_term: RoadmapPhase {
                duration: "3 years".to_string(),
                goals: strings(&["Become industry expert", "Take leadership role", "Mentor others"]),
                skills: strings(&["Expertise in domain", "Strategic thinking", "Team leadership"]),
                milestones: strings(&[
                    "Senior position",
                    "Industry recognition",
                    "Mentor junior professionals",
                ]),
            },
            learning_resources: vec![
                resource("Online Courses", "Coursera", "Technical Skills"),
                resource("Industry Certifications", "Various", "Credibility"),
                resource("Networking Events", "Meetup", "Professional Network"),
            ],
        }
    }
}

fn default_experience_level() -> String {
    "Entry Level".to_string()
}

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    #[serde(default)]
    pub career_goals: Vec<String>,
    #[serde(default)]
    pub current_skills: Vec<String>,
    #[serde(default = "default_experience_level")]
    pub experience_level: String,
}
