// src/market/models.rs

use serde::{Deserialize, Serialize};

use crate::services::InsightSchema;

/// Model-written reading of the trend tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketAnalysis {
    pub market_summary: String,
    pub emerging_opportunities: Vec<String>,
    pub skill_predictions: Vec<String>,
    pub salary_analysis: String,
    pub growth_recommendations: Vec<String>,
}

impl InsightSchema for MarketAnalysis {
    fn is_complete(&self) -> bool {
        !self.market_summary.trim().is_empty()
    }
}

impl MarketAnalysis {
    pub fn fallback() -> Self {
        Self {
            market_summary: "Strong growth across all sectors with technology leading".to_string(),
            emerging_opportunities: vec![
                "AI/ML Engineering".to_string(),
                "Cybersecurity".to_string(),
                "Digital Health".to_string(),
            ],
            skill_predictions: vec![
                "Cloud Computing".to_string(),
                "Data Science".to_string(),
                "Remote Work Skills".to_string(),
            ],
            salary_analysis: "Competitive salaries with remote work flexibility".to_string(),
            growth_recommendations: vec![
                "Upskill in emerging technologies".to_string(),
                "Develop soft skills".to_string(),
                "Build remote work capabilities".to_string(),
            ],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TrendsQuery {
    pub industry: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SkillsQuery {
    pub skills: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SalaryQuery {
    pub job_title: Option<String>,
    pub location: Option<String>,
    pub experience: Option<String>,
}
