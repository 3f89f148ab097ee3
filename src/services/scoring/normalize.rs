//! Per-dimension severity sub-scores.
//!
//! Each normalizer averages only the terms whose source indicator is present.
//! With nothing to go on it returns [`NEUTRAL_SCORE`]: unknown is not good.

use crate::domain::{RawIndicators, SubScores};

pub const NEUTRAL_SCORE: f64 = 50.0;

/// GDP per capita at which the economy term reaches zero.
const GDP_CEILING_USD: f64 = 20_000.0;
/// Unemployment rate that saturates the scale.
const UNEMPLOYMENT_SATURATION: f64 = 25.0;
/// Malnutrition / stunting rate that saturates the scale.
const NUTRITION_SATURATION: f64 = 60.0;

fn average_or_neutral(terms: &[Option<f64>]) -> f64 {
    let present: Vec<f64> = terms.iter().flatten().copied().collect();
    if present.is_empty() {
        return NEUTRAL_SCORE;
    }
    present.iter().sum::<f64>() / present.len() as f64
}

fn nutrition_term(rate: f64) -> f64 {
    (rate / NUTRITION_SATURATION * 100.0).min(100.0)
}

pub fn poverty_score(indicators: &RawIndicators) -> f64 {
    average_or_neutral(&[
        indicators.poverty_rate.map(|rate| rate.min(100.0)),
        indicators.gini_index,
    ])
}

pub fn economy_score(indicators: &RawIndicators) -> f64 {
    // ln(1) = 0, so a GDP of zero lands on 100
    let gdp_term = indicators.gdp_per_capita.map(|gdp| {
        let log_share = (gdp + 1.0).ln() / GDP_CEILING_USD.ln() * 100.0;
        (100.0 - log_share).max(0.0).clamp(0.0, 100.0)
    });
    let unemployment_term = indicators
        .unemployment_rate
        .map(|rate| (rate / UNEMPLOYMENT_SATURATION * 100.0).min(100.0));

    average_or_neutral(&[gdp_term, unemployment_term])
}

pub fn health_score(indicators: &RawIndicators) -> f64 {
    // 85 years -> 0, 50 years -> 100
    let life_term = indicators
        .life_expectancy
        .map(|years| ((85.0 - years) / 35.0 * 100.0).clamp(0.0, 100.0));
    let malnutrition_term = indicators.malnutrition_rate.map(nutrition_term);
    let stunting_term = indicators.stunting_rate.map(nutrition_term);
    // 12% of GDP or more -> 0
    let expenditure_term = indicators
        .health_expenditure
        .map(|pct| ((12.0 - pct) / 12.0 * 100.0).clamp(0.0, 100.0));

    average_or_neutral(&[life_term, malnutrition_term, stunting_term, expenditure_term])
}

pub fn education_score(indicators: &RawIndicators) -> f64 {
    let literacy_term = indicators.literacy_rate.map(|rate| 100.0 - rate);
    // (7 - pct) / 0.07 is the share of the 7% target that is missing, in percent
    let expenditure_term = indicators
        .education_expenditure
        .map(|pct| ((7.0 - pct) / 0.07).max(0.0).min(100.0));

    average_or_neutral(&[literacy_term, expenditure_term])
}

pub fn food_security_score(indicators: &RawIndicators) -> f64 {
    // index >= 120 -> 0, <= 70 -> 100
    let production_term = indicators
        .food_production_index
        .map(|index| ((120.0 - index) / 50.0 * 100.0).clamp(0.0, 100.0));
    let malnutrition_term = indicators.malnutrition_rate.map(nutrition_term);

    average_or_neutral(&[production_term, malnutrition_term])
}

pub fn sub_scores(indicators: &RawIndicators) -> SubScores {
    SubScores {
        poverty: poverty_score(indicators),
        economy: economy_score(indicators),
        health: health_score(indicators),
        education: education_score(indicators),
        food_security: food_security_score(indicators),
    }
}
