//! Country vulnerability scoring.
//!
//! Every function here is pure: indicators in, scores out, no I/O. The
//! pipeline is normalize -> aggregate -> classify -> recommend, with a data
//! quality estimate alongside.

mod aggregate;
mod classify;
mod normalize;
mod quality;
mod recommend;

pub use aggregate::{overall_score, weighted_sum, ScoreWeights, AMPLIFICATION, SCORE_WEIGHTS};
pub use classify::URGENCY_THRESHOLDS;
pub use normalize::{
    economy_score, education_score, food_security_score, health_score, poverty_score,
    sub_scores, NEUTRAL_SCORE,
};
pub use quality::data_quality;
pub use recommend::{access_levels, recommended_support, RECOMMENDATION_COUNT};

use crate::domain::{CountryBasicInfo, CountryScoreRecord, RawIndicators, Scores, UrgencyLevel};
use chrono::Utc;
use rayon::prelude::*;
use tracing::debug;

pub const SCORE_SOURCE: &str = "World Bank API";

pub fn calculate_country_score(
    basic: CountryBasicInfo,
    indicators: RawIndicators,
) -> CountryScoreRecord {
    let sub = sub_scores(&indicators);
    let overall = overall_score(&sub);
    let urgency_level = UrgencyLevel::from_score(overall);
    let scores = Scores { sub, overall };

    debug!(
        "Scored {}: overall {:.1} ({})",
        basic.iso3, overall, urgency_level
    );

    CountryScoreRecord {
        access_levels: access_levels(&sub),
        recommended_support: recommended_support(&scores),
        data_quality: data_quality(&indicators),
        marker_color: urgency_level.marker_color().to_string(),
        urgency_level,
        scores,
        basic,
        indicators,
        last_updated: Utc::now(),
        source: SCORE_SOURCE.to_string(),
    }
}

/// Scores a batch of countries in parallel, preserving input order.
pub fn score_countries(
    countries: Vec<(CountryBasicInfo, RawIndicators)>,
) -> Vec<CountryScoreRecord> {
    countries
        .into_par_iter()
        .map(|(basic, indicators)| calculate_country_score(basic, indicators))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccessLevel, SupportCategory};

    fn basic(iso3: &str) -> CountryBasicInfo {
        CountryBasicInfo {
            iso3: iso3.to_string(),
            name: "Chad".to_string(),
            name_ko: "차드".to_string(),
            region: "Africa".to_string(),
            coordinates: [15.45, 18.73],
        }
    }

    fn fragile_indicators() -> RawIndicators {
        RawIndicators {
            poverty_rate: Some(38.0),
            gini_index: Some(37.5),
            gdp_per_capita: Some(700.0),
            unemployment_rate: Some(1.1),
            life_expectancy: Some(52.5),
            malnutrition_rate: Some(32.0),
            stunting_rate: Some(35.0),
            health_expenditure: Some(5.0),
            literacy_rate: Some(27.0),
            ..Default::default()
        }
    }

    #[test]
    fn record_carries_identity_and_provenance() {
        let indicators = fragile_indicators();
        let record = calculate_country_score(basic("TCD"), indicators.clone());

        assert_eq!(record.basic, basic("TCD"));
        assert_eq!(record.indicators, indicators);
        assert_eq!(record.source, "World Bank API");
        assert_eq!(record.marker_color, record.urgency_level.marker_color());
        assert_eq!(record.recommended_support.len(), 3);
        assert!((record.data_quality - 9.0 / 11.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_indicators_score_as_neutral() {
        let record = calculate_country_score(basic("XXX"), RawIndicators::default());

        assert_eq!(record.scores.sub.poverty, 50.0);
        assert_eq!(record.scores.sub.food_security, 50.0);
        assert!((record.scores.overall - 75.0).abs() < 1e-9);
        assert_eq!(record.urgency_level, UrgencyLevel::High);
        assert_eq!(record.access_levels.water, AccessLevel::Low);
        assert_eq!(record.data_quality, 0.0);
        // all blends are 50, so declaration order decides
        assert_eq!(
            record.recommended_support,
            vec![
                SupportCategory::EmergencyRelief,
                SupportCategory::CleanWater,
                SupportCategory::EducationPrograms,
            ]
        );
    }

    #[test]
    fn overall_stays_in_range() {
        let record = calculate_country_score(basic("TCD"), fragile_indicators());
        assert!((0.0..=100.0).contains(&record.scores.overall));
        assert!(record.scores.overall >= 50.0);
    }

    #[test]
    fn scoring_is_idempotent() {
        let first = calculate_country_score(basic("TCD"), fragile_indicators());
        let second = calculate_country_score(basic("TCD"), fragile_indicators());

        assert_eq!(first.scores, second.scores);
        assert_eq!(first.urgency_level, second.urgency_level);
        assert_eq!(first.access_levels, second.access_levels);
        assert_eq!(first.recommended_support, second.recommended_support);
        assert_eq!(first.data_quality, second.data_quality);
    }

    #[test]
    fn batch_scoring_preserves_order() {
        let input: Vec<_> = ["AAA", "BBB", "CCC", "DDD"]
            .iter()
            .map(|iso3| (basic(iso3), fragile_indicators()))
            .collect();

        let records = score_countries(input);
        let order: Vec<_> = records.iter().map(|r| r.iso3()).collect();
        assert_eq!(order, vec!["AAA", "BBB", "CCC", "DDD"]);
    }

    #[test]
    fn record_serializes_with_dashboard_field_names() {
        let record = calculate_country_score(basic("TCD"), fragile_indicators());
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["iso3"], "TCD");
        assert_eq!(value["nameKo"], "차드");
        assert!(value["scores"]["overall"].is_number());
        assert!(value["urgencyLevel"].is_string());
        assert!(value["accessLevels"]["foodSecurity"].is_string());
        assert_eq!(value["recommendedSupport"].as_array().map(|a| a.len()), Some(3));

        let back: CountryScoreRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back.scores, record.scores);
    }
}
