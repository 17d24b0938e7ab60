// src/assessments/engine.rs
//! Rule-based course recommendations. Used whenever the model is unavailable
//! or its answer is rejected, so it must always produce a complete payload.

use serde_json::{Map, Value};

use super::models::{
    CareerTimeline, Course, CourseRecommendation, MarketOpportunity, WorkStyleInsights,
};
use super::questions::{EDUCATION, EXPERIENCE, INTERESTS, SKILLS, WORK_ENVIRONMENT};
use crate::common::helpers::{answer_as_list, answer_as_text};

const ENTRY_EXPERIENCE: &str = "0-1 years (Entry level)";
const MAX_SKILL_GAPS: usize = 5;
const MAX_COURSES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CareerStage {
    EntryLevel,
    Junior,
    MidLevel,
    Senior,
    Expert,
}

impl CareerStage {
    pub fn from_experience(experience: Option<&str>) -> Self {
        match experience {
            Some(ENTRY_EXPERIENCE) => CareerStage::EntryLevel,
            Some("2-3 years (Junior)") => CareerStage::Junior,
            Some("4-6 years (Mid-level)") => CareerStage::MidLevel,
            Some("7-10 years (Senior)") => CareerStage::Senior,
            _ => CareerStage::Expert,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CareerStage::EntryLevel => "Entry Level",
            CareerStage::Junior => "Junior Professional",
            CareerStage::MidLevel => "Mid-Level Professional",
            CareerStage::Senior => "Senior Professional",
            CareerStage::Expert => "Expert Level",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterestFocus {
    Technology,
    Business,
    Creative,
    Service,
}

impl InterestFocus {
    /// Count interests per group; ties go to the earlier group
    pub fn from_interests(interests: &[String]) -> Self {
        let count = |group: &[&str]| {
            interests
                .iter()
                .filter(|i| group.contains(&i.as_str()))
                .count()
        };
        let tech = count(&["Technology/Software Development", "Engineering"]);
        let business = count(&["Business/Management", "Finance/Banking", "Marketing/Advertising"]);
        let creative = count(&["Arts/Design"]);
        let service = count(&["Healthcare", "Education"]);

        if tech >= business && tech >= creative && tech >= service {
            InterestFocus::Technology
        } else if business >= creative && business >= service {
            InterestFocus::Business
        } else if creative >= service {
            InterestFocus::Creative
        } else {
            InterestFocus::Service
        }
    }

    pub fn primary(&self) -> &'static str {
        match self {
            InterestFocus::Technology => "Technology",
            InterestFocus::Business => "Business",
            InterestFocus::Creative => "Creative",
            InterestFocus::Service => "Service",
        }
    }

    pub fn secondary(&self) -> &'static str {
        match self {
            InterestFocus::Technology => "Innovation",
            InterestFocus::Business => "Leadership",
            InterestFocus::Creative => "Design",
            InterestFocus::Service => "Impact",
        }
    }

    pub fn focus(&self) -> &'static str {
        match self {
            InterestFocus::Technology => "Technical Excellence",
            InterestFocus::Business => "Strategic Thinking",
            InterestFocus::Creative => "Innovation",
            InterestFocus::Service => "Social Good",
        }
    }
}

/// Known skills split by kind
#[derive(Debug, Default)]
pub struct SkillAnalysis {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub management: Vec<String>,
}

impl SkillAnalysis {
    pub fn from_skills(skills: &[String]) -> Self {
        let pick = |group: &[&str]| -> Vec<String> {
            skills
                .iter()
                .filter(|s| group.contains(&s.as_str()))
                .cloned()
                .collect()
        };
        Self {
            technical: pick(&["Programming/Coding", "Data Analysis"]),
            soft: pick(&["Communication", "Leadership", "Problem Solving", "Creative Thinking"]),
            management: pick(&["Project Management", "Technical Writing"]),
        }
    }
}

pub fn match_score(education: Option<&str>, experience: Option<&str>, skill_count: usize) -> u8 {
    let education_bonus = match education {
        Some("Bachelor's Degree" | "Master's Degree" | "PhD/Doctorate") => 10,
        _ => 5,
    };
    let experience_bonus = if experience == Some(ENTRY_EXPERIENCE) { 5 } else { 15 };
    let skills_bonus = (skill_count * 3).min(15);

    (70 + education_bonus + experience_bonus + skills_bonus).min(95) as u8
}

pub fn skill_gaps(skills: &SkillAnalysis, focus: InterestFocus) -> Vec<String> {
    let mut gaps: Vec<&str> = Vec::new();
    if focus == InterestFocus::Technology && skills.technical.is_empty() {
        gaps.extend(["Programming Fundamentals", "Data Analysis", "System Design"]);
    }
    if focus == InterestFocus::Business && skills.management.is_empty() {
        gaps.extend(["Project Management", "Strategic Planning", "Financial Analysis"]);
    }
    if skills.soft.is_empty() {
        gaps.extend(["Communication", "Leadership", "Problem Solving"]);
    }
    gaps.truncate(MAX_SKILL_GAPS);
    gaps.into_iter().map(str::to_string).collect()
}

#[allow(clippy::too_many_arguments)]
fn course(
    title: &str,
    description: &str,
    category: &str,
    difficulty: &str,
    duration: &str,
    platform: &str,
    priority: &str,
    reason: &str,
    rating: f32,
    students: u32,
    price: &str,
    skills: &[&str],
) -> Course {
    Course {
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        difficulty: difficulty.to_string(),
        duration: duration.to_string(),
        platform: platform.to_string(),
        priority: priority.to_string(),
        reason: reason.to_string(),
        rating: Some(rating),
        students: Some(students),
        price: Some(price.to_string()),
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn courses(focus: InterestFocus, stage: CareerStage) -> Vec<Course> {
    let mut courses = Vec::new();

    match focus {
        InterestFocus::Technology => {
            let difficulty = if stage == CareerStage::EntryLevel {
                "Beginner"
            } else {
                "Intermediate"
            };
            courses.push(course(
                "Full-Stack Development Bootcamp",
                "Master modern web development with React, Node.js, and cloud technologies",
                "Technical",
                difficulty,
                "12 weeks",
                "CareerBridgeAI Academy",
                "High",
                "Essential for technology career path",
                4.8,
                15420,
                "₹45,000",
                &["JavaScript", "React", "Node.js", "Database Design", "Cloud Computing"],
            ));
            courses.push(course(
                "AI & Machine Learning Fundamentals",
                "Learn the basics of artificial intelligence and machine learning applications",
                "Emerging Tech",
                "Intermediate",
                "8 weeks",
                "TechFuture Learning",
                "High",
                "High-demand skill in current market",
                4.9,
                8930,
                "₹35,000",
                &["Python", "TensorFlow", "Data Science", "Neural Networks"],
            ));
        }
        InterestFocus::Business => {
            courses.push(course(
                "Digital Marketing & Analytics",
                "Master digital marketing strategies and data-driven decision making",
                "Business",
                "Beginner",
                "6 weeks",
                "Business Academy",
                "High",
                "Critical for modern business success",
                4.7,
                12300,
                "₹25,000",
                &["SEO", "Social Media Marketing", "Google Analytics", "Content Strategy"],
            ));
        }
        InterestFocus::Creative | InterestFocus::Service => {}
    }

    courses.push(course(
        "Leadership & Team Management",
        "Develop essential leadership skills for career advancement",
        "Soft Skills",
        "Intermediate",
        "4 weeks",
        "Leadership Institute",
        "Medium",
        "Essential for career progression",
        4.6,
        8750,
        "₹15,000",
        &["Team Building", "Conflict Resolution", "Strategic Thinking", "Communication"],
    ));

    courses.truncate(MAX_COURSES);
    courses
}

pub fn learning_path(stage: CareerStage, focus: InterestFocus) -> String {
    let area = focus.primary().to_lowercase();
    match stage {
        CareerStage::EntryLevel => format!(
            "Start with foundational skills in {}, then progress to specialized certifications and practical projects",
            area
        ),
        CareerStage::Junior => format!(
            "Focus on advanced {} skills and leadership development to prepare for senior roles",
            area
        ),
        _ => format!(
            "Concentrate on strategic thinking and industry expertise in {} to become a thought leader",
            area
        ),
    }
}

pub fn next_steps(stage: CareerStage) -> Vec<String> {
    let mut steps = vec![
        "Complete your first recommended course within 30 days",
        "Build a portfolio project showcasing your new skills",
        "Join professional communities and networking groups",
    ];
    match stage {
        CareerStage::EntryLevel => steps.extend([
            "Apply for internships or entry-level positions",
            "Create a strong LinkedIn profile",
        ]),
        CareerStage::Junior | CareerStage::MidLevel => steps.extend([
            "Seek mentorship opportunities",
            "Take on leadership roles in current projects",
        ]),
        CareerStage::Senior | CareerStage::Expert => {}
    }
    steps.into_iter().map(str::to_string).collect()
}

pub fn work_style_insights(work_environment: Option<&str>) -> WorkStyleInsights {
    let (strength, recommendation) = match work_environment {
        Some("Remote work") => (
            Some("Self-motivated and independent"),
            Some("Consider remote-first companies and digital nomad opportunities"),
        ),
        Some("Office-based") => (
            Some("Collaborative and team-oriented"),
            Some("Look for companies with strong office culture and team collaboration"),
        ),
        Some("Hybrid (mix of remote and office)") => (
            Some("Flexible and adaptable"),
            Some("Target companies offering hybrid work arrangements"),
        ),
        _ => (None, None),
    };

    WorkStyleInsights {
        work_style: work_environment.unwrap_or_default().to_string(),
        strengths: strength.into_iter().map(str::to_string).collect(),
        recommendations: recommendation.into_iter().map(str::to_string).collect(),
    }
}

pub fn market_opportunities(focus: InterestFocus) -> MarketOpportunity {
    let (growth_rate, avg_salary, job_openings, top_skills) = match focus {
        InterestFocus::Technology => (
            "+23%",
            "₹8,50,000",
            "45,000+",
            ["AI/ML", "Cloud Computing", "Cybersecurity", "Full-Stack Development"],
        ),
        InterestFocus::Business => (
            "+18%",
            "₹7,20,000",
            "32,000+",
            ["Digital Marketing", "Data Analysis", "Project Management", "Strategic Planning"],
        ),
        InterestFocus::Creative => (
            "+15%",
            "₹6,50,000",
            "28,000+",
            ["UI/UX Design", "Graphic Design", "Content Creation", "Brand Strategy"],
        ),
        InterestFocus::Service => (
            "+12%",
            "₹5,80,000",
            "38,000+",
            ["Patient Care", "Education Technology", "Healthcare Analytics", "Digital Health"],
        ),
    };

    MarketOpportunity {
        growth_rate: growth_rate.to_string(),
        avg_salary: avg_salary.to_string(),
        job_openings: job_openings.to_string(),
        top_skills: top_skills.iter().map(|s| s.to_string()).collect(),
    }
}

/// Senior and expert stages share the entry-level timeline
pub fn timeline(stage: CareerStage) -> CareerTimeline {
    let steps = match stage {
        CareerStage::Junior => [
            "Take on more responsibility in current role",
            "Seek promotion or new opportunities",
            "Become a subject matter expert in your area",
            "Consider leadership roles or advanced degrees",
        ],
        CareerStage::MidLevel => [
            "Lead a significant project or initiative",
            "Mentor junior professionals",
            "Consider management or senior individual contributor roles",
            "Become a thought leader in your industry",
        ],
        _ => [
            "Complete foundational courses and build first project",
            "Land first job or internship in your field",
            "Gain 1-2 years of professional experience",
            "Consider specialization or advanced certifications",
        ],
    };

    CareerTimeline {
        six_months: steps[0].to_string(),
        one_year: steps[1].to_string(),
        two_years: steps[2].to_string(),
        three_years: steps[3].to_string(),
    }
}

/// Build the full recommendation payload from questionnaire answers
pub fn recommend(answers: &Map<String, Value>) -> CourseRecommendation {
    let education = answer_as_text(answers.get(EDUCATION));
    let experience = answer_as_text(answers.get(EXPERIENCE));
    let work_environment = answer_as_text(answers.get(WORK_ENVIRONMENT));
    let interests = answer_as_list(answers.get(INTERESTS));
    let skills = answer_as_list(answers.get(SKILLS));

    let stage = CareerStage::from_experience(experience.as_deref());
    let focus = InterestFocus::from_interests(&interests);
    let analysis = SkillAnalysis::from_skills(&skills);

    CourseRecommendation {
        career_path: format!("Personalized {} Career Path", focus.primary()),
        skill_gaps: skill_gaps(&analysis, focus),
        courses: courses(focus, stage),
        learning_path: learning_path(stage, focus),
        next_steps: next_steps(stage),
        career_stage: Some(stage.label().to_string()),
        match_score: Some(match_score(
            education.as_deref(),
            experience.as_deref(),
            skills.len(),
        )),
        personality_insights: Some(work_style_insights(work_environment.as_deref())),
        market_opportunities: Some(market_opportunities(focus)),
        timeline: Some(timeline(stage)),
    }
}
