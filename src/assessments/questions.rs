// src/assessments/questions.rs
//! The career questionnaire. Answers are keyed by question id ("1".."8") and
//! hold the chosen option text, or a list of texts for multiple-choice
//! questions.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CareerQuestion {
    pub id: u32,
    pub question: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub category: &'static str,
    pub options: &'static [&'static str],
}

pub const ESTIMATED_TIME: &str = "15-20 minutes";

pub const EDUCATION: &str = "1";
pub const INTERESTS: &str = "2";
pub const EXPERIENCE: &str = "3";
pub const WORK_ENVIRONMENT: &str = "4";
pub const SKILLS: &str = "5";
pub const GOALS: &str = "6";
pub const LEARNING_STYLE: &str = "7";
pub const MOTIVATION: &str = "8";

pub static CAREER_QUESTIONS: [CareerQuestion; 8] = [
    CareerQuestion {
        id: 1,
        question: "What is your current education level?",
        kind: "single",
        category: "education",
        options: &[
            "High School",
            "Associate Degree",
            "Bachelor's Degree",
            "Master's Degree",
            "PhD/Doctorate",
        ],
    },
    CareerQuestion {
        id: 2,
        question: "Which of the following career fields interest you most?",
        kind: "multiple",
        category: "interests",
        options: &[
            "Technology/Software Development",
            "Healthcare",
            "Finance/Banking",
            "Education",
            "Marketing/Advertising",
            "Engineering",
            "Business/Management",
            "Arts/Design",
        ],
    },
    CareerQuestion {
        id: 3,
        question: "How many years of work experience do you have?",
        kind: "single",
        category: "experience",
        options: &[
            "0-1 years (Entry level)",
            "2-3 years (Junior)",
            "4-6 years (Mid-level)",
            "7-10 years (Senior)",
            "10+ years (Expert)",
        ],
    },
    CareerQuestion {
        id: 4,
        question: "What type of work environment do you prefer?",
        kind: "single",
        category: "work_environment",
        options: &[
            "Remote work",
            "Office-based",
            "Hybrid (mix of remote and office)",
            "Field work",
            "No preference",
        ],
    },
    CareerQuestion {
        id: 5,
        question: "Which skills do you currently possess? (Select all that apply)",
        kind: "multiple",
        category: "skills",
        options: &[
            "Programming/Coding",
            "Data Analysis",
            "Project Management",
            "Communication",
            "Leadership",
            "Problem Solving",
            "Creative Thinking",
            "Technical Writing",
        ],
    },
    CareerQuestion {
        id: 6,
        question: "What are your primary career goals?",
        kind: "multiple",
        category: "goals",
        options: &[
            "Career advancement",
            "Skill development",
            "Work-life balance",
            "Financial growth",
            "Job security",
            "Creative fulfillment",
            "Leadership opportunities",
            "Industry expertise",
        ],
    },
    CareerQuestion {
        id: 7,
        question: "How do you prefer to learn new skills?",
        kind: "single",
        category: "learning_style",
        options: &[
            "Online courses and tutorials",
            "Hands-on projects",
            "Mentorship and coaching",
            "Formal education",
            "Self-study and research",
            "Group learning and workshops",
        ],
    },
    CareerQuestion {
        id: 8,
        question: "What motivates you most in your career?",
        kind: "single",
        category: "motivation",
        options: &[
            "Financial rewards",
            "Personal growth",
            "Making an impact",
            "Recognition and status",
            "Work-life balance",
            "Creative expression",
            "Helping others",
            "Continuous learning",
        ],
    },
];
