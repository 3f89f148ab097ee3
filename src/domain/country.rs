use serde::{Deserialize, Serialize};

/// Identity of a country as supplied by the caller. The engine passes these
/// fields through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryBasicInfo {
    pub iso3: String,
    pub name: String,
    pub name_ko: String,
    pub region: String,
    /// `[lat, lon]`
    pub coordinates: [f64; 2],
}

/// Sparse indicator record. `None` means the source had no data point, which
/// is not the same thing as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIndicators {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poverty_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gini_index: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gdp_per_capita: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unemployment_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life_expectancy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub malnutrition_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stunting_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_expenditure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literacy_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education_expenditure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_production_index: Option<f64>,
}

impl RawIndicators {
    pub const FIELD_COUNT: usize = 11;

    fn fields(&self) -> [Option<f64>; Self::FIELD_COUNT] {
        [
            self.poverty_rate,
            self.gini_index,
            self.gdp_per_capita,
            self.unemployment_rate,
            self.life_expectancy,
            self.malnutrition_rate,
            self.stunting_rate,
            self.health_expenditure,
            self.literacy_rate,
            self.education_expenditure,
            self.food_production_index,
        ]
    }

    pub fn present_count(&self) -> usize {
        self.fields().iter().filter(|f| f.is_some()).count()
    }
}

/// Input document for scoring a single country outside the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub basic_info: CountryBasicInfo,
    #[serde(default)]
    pub indicators: RawIndicators,
}
