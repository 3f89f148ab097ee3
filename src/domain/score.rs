use super::country::{CountryBasicInfo, RawIndicators};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity per dimension, 0-100, higher means more need.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubScores {
    pub poverty: f64,
    pub economy: f64,
    pub health: f64,
    pub education: f64,
    pub food_security: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    #[serde(flatten)]
    pub sub: SubScores,
    pub overall: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Critical,
    High,
    Medium,
    Low,
    Stable,
}

impl UrgencyLevel {
    pub const ALL: [UrgencyLevel; 5] = [
        UrgencyLevel::Critical,
        UrgencyLevel::High,
        UrgencyLevel::Medium,
        UrgencyLevel::Low,
        UrgencyLevel::Stable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Critical => "critical",
            UrgencyLevel::High => "high",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::Low => "low",
            UrgencyLevel::Stable => "stable",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for UrgencyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UrgencyLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown urgency level: {s}"))
    }
}

/// How much access a population has to a service. `Critical` is the worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessLevel {
    Critical,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessLevels {
    pub education: AccessLevel,
    pub water: AccessLevel,
    pub healthcare: AccessLevel,
    pub food_security: AccessLevel,
}

/// Aid categories in declaration order. The order doubles as the tie-break
/// when two categories blend to the same need score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportCategory {
    #[serde(rename = "Emergency Relief")]
    EmergencyRelief,
    #[serde(rename = "Clean Water Infrastructure")]
    CleanWater,
    #[serde(rename = "Education Programs")]
    EducationPrograms,
    #[serde(rename = "Healthcare Services")]
    HealthcareServices,
    #[serde(rename = "Food Security")]
    FoodSecurity,
    #[serde(rename = "Economic Development")]
    EconomicDevelopment,
}

impl SupportCategory {
    pub const ALL: [SupportCategory; 6] = [
        SupportCategory::EmergencyRelief,
        SupportCategory::CleanWater,
        SupportCategory::EducationPrograms,
        SupportCategory::HealthcareServices,
        SupportCategory::FoodSecurity,
        SupportCategory::EconomicDevelopment,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SupportCategory::EmergencyRelief => "Emergency Relief",
            SupportCategory::CleanWater => "Clean Water Infrastructure",
            SupportCategory::EducationPrograms => "Education Programs",
            SupportCategory::HealthcareServices => "Healthcare Services",
            SupportCategory::FoodSecurity => "Food Security",
            SupportCategory::EconomicDevelopment => "Economic Development",
        }
    }
}

impl fmt::Display for SupportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryScoreRecord {
    #[serde(flatten)]
    pub basic: CountryBasicInfo,
    pub indicators: RawIndicators,
    pub scores: Scores,
    pub urgency_level: UrgencyLevel,
    pub marker_color: String,
    pub access_levels: AccessLevels,
    pub recommended_support: Vec<SupportCategory>,
    pub data_quality: f64,
    pub last_updated: DateTime<Utc>,
    pub source: String,
}

impl CountryScoreRecord {
    pub fn iso3(&self) -> &str {
        &self.basic.iso3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgency_level_parses_case_insensitively() {
        assert_eq!("Critical".parse::<UrgencyLevel>(), Ok(UrgencyLevel::Critical));
        assert_eq!(" stable ".parse::<UrgencyLevel>(), Ok(UrgencyLevel::Stable));
        assert!("severe".parse::<UrgencyLevel>().is_err());
    }

    #[test]
    fn scores_serialize_flat() {
        let scores = Scores {
            sub: SubScores {
                poverty: 1.0,
                economy: 2.0,
                health: 3.0,
                education: 4.0,
                food_security: 5.0,
            },
            overall: 6.0,
        };
        let value = serde_json::to_value(scores).unwrap();
        assert_eq!(value["foodSecurity"], 5.0);
        assert_eq!(value["overall"], 6.0);
    }

    #[test]
    fn support_category_serializes_as_label() {
        for category in SupportCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
        }
    }
}
