use crate::domain::SubScores;

/// Dimension weights. They sum to 1.0 before amplification.
#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    pub poverty: f64,
    pub economy: f64,
    pub health: f64,
    pub education: f64,
    pub food_security: f64,
}

pub const SCORE_WEIGHTS: ScoreWeights = ScoreWeights {
    poverty: 0.40,
    economy: 0.20,
    health: 0.20,
    education: 0.10,
    food_security: 0.10,
};

/// Stretches the weighted sum so moderately bad countries read as urgent.
pub const AMPLIFICATION: f64 = 1.5;

pub fn weighted_sum(scores: &SubScores, weights: &ScoreWeights) -> f64 {
    scores.poverty * weights.poverty
        + scores.economy * weights.economy
        + scores.health * weights.health
        + scores.education * weights.education
        + scores.food_security * weights.food_security
}

/// Amplify first, then clamp at 100.
pub fn overall_score(scores: &SubScores) -> f64 {
    (weighted_sum(scores, &SCORE_WEIGHTS) * AMPLIFICATION).min(100.0)
}
