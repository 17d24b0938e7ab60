// src/market/data.rs
//! Static job-market tables

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SalaryBands {
    pub entry: u32,
    pub mid: u32,
    pub senior: u32,
}

#[derive(Debug, Serialize)]
pub struct IndustryTrend {
    pub growth_rate: f64,
    pub demand_skills: &'static [&'static str],
    pub salary_trends: SalaryBands,
    pub job_openings: u32,
    pub remote_percentage: u8,
}

pub static INDUSTRY_TRENDS: [(&str, IndustryTrend); 4] = [
    (
        "technology",
        IndustryTrend {
            growth_rate: 15.2,
            demand_skills: &["AI/ML", "Cloud Computing", "Cybersecurity", "Data Science"],
            salary_trends: SalaryBands { entry: 600_000, mid: 1_200_000, senior: 2_000_000 },
            job_openings: 45_000,
            remote_percentage: 65,
        },
    ),
    (
        "healthcare",
        IndustryTrend {
            growth_rate: 12.8,
            demand_skills: &["Digital Health", "Telemedicine", "Data Analytics", "Patient Care"],
            salary_trends: SalaryBands { entry: 500_000, mid: 1_000_000, senior: 1_800_000 },
            job_openings: 32_000,
            remote_percentage: 25,
        },
    ),
    (
        "finance",
        IndustryTrend {
            growth_rate: 8.5,
            demand_skills: &["Fintech", "Blockchain", "Risk Management", "Data Analysis"],
            salary_trends: SalaryBands { entry: 700_000, mid: 1_400_000, senior: 2_500_000 },
            job_openings: 28_000,
            remote_percentage: 40,
        },
    ),
    (
        "education",
        IndustryTrend {
            growth_rate: 6.3,
            demand_skills: &["EdTech", "Online Learning", "Curriculum Design", "Student Assessment"],
            salary_trends: SalaryBands { entry: 400_000, mid: 800_000, senior: 1_500_000 },
            job_openings: 18_000,
            remote_percentage: 70,
        },
    ),
];

pub fn find_industry(name: &str) -> Option<&'static IndustryTrend> {
    INDUSTRY_TRENDS
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, trend)| trend)
}

#[derive(Debug, Serialize)]
pub struct SkillDemand {
    pub skill_name: &'static str,
    pub demand_score: f64,
    pub growth_rate: f64,
    pub average_salary_impact: u32,
    pub job_titles: &'static [&'static str],
    pub industries: &'static [&'static str],
    pub date: &'static str,
}

pub static SKILL_DEMAND: [SkillDemand; 2] = [
    SkillDemand {
        skill_name: "Python",
        demand_score: 0.92,
        growth_rate: 18.5,
        average_salary_impact: 150_000,
        job_titles: &["Software Engineer", "Data Scientist", "Backend Developer"],
        industries: &["Technology", "Finance", "Healthcare"],
        date: "2024-01-01",
    },
    SkillDemand {
        skill_name: "JavaScript",
        demand_score: 0.88,
        growth_rate: 12.3,
        average_salary_impact: 120_000,
        job_titles: &["Frontend Developer", "Full Stack Developer", "Web Developer"],
        industries: &["Technology", "E-commerce", "Media"],
        date: "2024-01-01",
    },
];

/// Reference salary distribution, in rupees per year
#[derive(Debug, Serialize)]
pub struct SalaryInsight {
    pub job_title: String,
    pub location: String,
    pub experience_level: String,
    pub min_salary: u32,
    pub max_salary: u32,
    pub average_salary: u32,
    pub median_salary: u32,
    pub percentile_25: u32,
    pub percentile_75: u32,
    pub percentile_90: u32,
    pub sample_size: u32,
    pub date: &'static str,
}

impl SalaryInsight {
    pub fn reference(job_title: &str, location: &str, experience: &str) -> Self {
        Self {
            job_title: job_title.to_string(),
            location: location.to_string(),
            experience_level: experience.to_string(),
            min_salary: 400_000,
            max_salary: 800_000,
            average_salary: 600_000,
            median_salary: 580_000,
            percentile_25: 450_000,
            percentile_75: 700_000,
            percentile_90: 750_000,
            sample_size: 150,
            date: "2024-01-01",
        }
    }
}
