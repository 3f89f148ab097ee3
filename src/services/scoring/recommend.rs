use crate::domain::{AccessLevel, AccessLevels, Scores, SubScores, SupportCategory};

pub const RECOMMENDATION_COUNT: usize = 3;

impl AccessLevel {
    /// Maps a severity score to an access label. High severity means poor
    /// access, so 80 yields `Critical` and 10 yields `High`.
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            AccessLevel::Critical
        } else if score >= 50.0 {
            AccessLevel::Low
        } else if score >= 25.0 {
            AccessLevel::Medium
        } else {
            AccessLevel::High
        }
    }
}

pub fn access_levels(scores: &SubScores) -> AccessLevels {
    AccessLevels {
        education: AccessLevel::from_score(scores.education),
        water: AccessLevel::from_score(scores.health * 0.5 + scores.food_security * 0.5),
        healthcare: AccessLevel::from_score(scores.health),
        food_security: AccessLevel::from_score(scores.food_security),
    }
}

impl SupportCategory {
    /// Synthetic need score for this category.
    pub fn need_score(&self, scores: &SubScores) -> f64 {
        match self {
            SupportCategory::EmergencyRelief => scores.poverty * 0.5 + scores.health * 0.5,
            SupportCategory::CleanWater => scores.health * 0.6 + scores.food_security * 0.4,
            SupportCategory::EducationPrograms => scores.education,
            SupportCategory::HealthcareServices => scores.health,
            SupportCategory::FoodSecurity => scores.food_security * 0.7 + scores.poverty * 0.3,
            SupportCategory::EconomicDevelopment => scores.economy * 0.6 + scores.poverty * 0.4,
        }
    }
}

/// Top categories by need, highest first. `overall` is carried along but the
/// current blends only read the sub-scores.
pub fn recommended_support(scores: &Scores) -> Vec<SupportCategory> {
    let mut ranked: Vec<(SupportCategory, f64)> = SupportCategory::ALL
        .iter()
        .map(|category| (*category, category.need_score(&scores.sub)))
        .collect();

    // sort_by is stable: equal needs keep declaration order
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranked
        .into_iter()
        .take(RECOMMENDATION_COUNT)
        .map(|(category, _)| category)
        .collect()
}
