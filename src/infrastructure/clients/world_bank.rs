use crate::domain::storage::Storage;
use crate::domain::RawIndicators;
use crate::error::{NeedMapError, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const DEFAULT_API_BASE: &str = "https://api.worldbank.org/v2";

/// How many of the most recent years to ask for per indicator.
const MOST_RECENT_VALUES: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldBankIndicator {
    PovertyRate,
    GiniIndex,
    GdpPerCapita,
    UnemploymentRate,
    LifeExpectancy,
    MalnutritionRate,
    StuntingRate,
    HealthExpenditure,
    LiteracyRate,
    EducationExpenditure,
    FoodProductionIndex,
}

impl WorldBankIndicator {
    pub const ALL: [WorldBankIndicator; 11] = [
        WorldBankIndicator::PovertyRate,
        WorldBankIndicator::GiniIndex,
        WorldBankIndicator::GdpPerCapita,
        WorldBankIndicator::UnemploymentRate,
        WorldBankIndicator::LifeExpectancy,
        WorldBankIndicator::MalnutritionRate,
        WorldBankIndicator::StuntingRate,
        WorldBankIndicator::HealthExpenditure,
        WorldBankIndicator::LiteracyRate,
        WorldBankIndicator::EducationExpenditure,
        WorldBankIndicator::FoodProductionIndex,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            WorldBankIndicator::PovertyRate => "SI.POV.DDAY",
            WorldBankIndicator::GiniIndex => "SI.POV.GINI",
            WorldBankIndicator::GdpPerCapita => "NY.GDP.PCAP.CD",
            WorldBankIndicator::UnemploymentRate => "SL.UEM.TOTL.ZS",
            WorldBankIndicator::LifeExpectancy => "SP.DYN.LE00.IN",
            WorldBankIndicator::MalnutritionRate => "SN.ITK.DEFC.ZS",
            WorldBankIndicator::StuntingRate => "SH.STA.STNT.ZS",
            WorldBankIndicator::HealthExpenditure => "SH.XPD.CHEX.GD.ZS",
            WorldBankIndicator::LiteracyRate => "SE.ADT.LITR.ZS",
            WorldBankIndicator::EducationExpenditure => "SE.XPD.TOTL.GD.ZS",
            WorldBankIndicator::FoodProductionIndex => "AG.PRD.FOOD.XD",
        }
    }

    pub fn apply(&self, indicators: &mut RawIndicators, value: Option<f64>) {
        let slot = match self {
            WorldBankIndicator::PovertyRate => &mut indicators.poverty_rate,
            WorldBankIndicator::GiniIndex => &mut indicators.gini_index,
            WorldBankIndicator::GdpPerCapita => &mut indicators.gdp_per_capita,
            WorldBankIndicator::UnemploymentRate => &mut indicators.unemployment_rate,
            WorldBankIndicator::LifeExpectancy => &mut indicators.life_expectancy,
            WorldBankIndicator::MalnutritionRate => &mut indicators.malnutrition_rate,
            WorldBankIndicator::StuntingRate => &mut indicators.stunting_rate,
            WorldBankIndicator::HealthExpenditure => &mut indicators.health_expenditure,
            WorldBankIndicator::LiteracyRate => &mut indicators.literacy_rate,
            WorldBankIndicator::EducationExpenditure => &mut indicators.education_expenditure,
            WorldBankIndicator::FoodProductionIndex => &mut indicators.food_production_index,
        };
        *slot = value;
    }
}

#[derive(Debug, Deserialize)]
pub struct Observation {
    pub date: String,
    pub value: Option<f64>,
}

/// Picks the most recent usable value out of a World Bank indicator response.
///
/// The API answers with `[page_meta, observations]`, or with a single-element
/// array carrying a `message` when the country or indicator is unknown. Both
/// an error body and a page without data yield `None`.
pub fn latest_value(body: &Value) -> Option<f64> {
    let observations = body.as_array()?.get(1)?;
    let observations: Vec<Observation> = serde_json::from_value(observations.clone()).ok()?;

    observations
        .into_iter()
        .filter(|obs| matches!(obs.value, Some(v) if v.is_finite() && v >= 0.0))
        .max_by(|a, b| a.date.cmp(&b.date))
        .and_then(|obs| obs.value)
}

pub struct WorldBankClient {
    client: Client,
    api_base: String,
    store: Arc<dyn Storage>,
    use_cache: bool,
}

impl WorldBankClient {
    pub fn new(client: Client, api_base: String, store: Arc<dyn Storage>, use_cache: bool) -> Self {
        if !use_cache {
            info!("Indicator cache disabled, every country is fetched from the API");
        }
        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            store,
            use_cache,
        }
    }

    /// Fetches all indicators for one country.
    ///
    /// Only a complete answer is cached: if any request failed or came back
    /// with a non-success status, the partial result is returned but not
    /// written, so the next run asks the API again. A failed cache write is
    /// logged and does not discard the fetched values.
    pub async fn fetch_indicators(&self, iso3: &str) -> Result<RawIndicators> {
        if self.use_cache {
            if let Some(cached) = self.store.load_indicators(iso3)? {
                info!("Using cached indicators for {}", iso3);
                return Ok(cached);
            }
        }

        let mut indicators = RawIndicators::default();
        let mut failed = 0;
        for indicator in WorldBankIndicator::ALL {
            let value = match self.fetch_indicator(iso3, indicator).await {
                Ok(value) => value,
                Err(e) => {
                    warn!("Failed to fetch {} for {}: {}", indicator.code(), iso3, e);
                    failed += 1;
                    None
                }
            };
            indicator.apply(&mut indicators, value);
        }

        info!(
            "Fetched {}/{} indicators for {}",
            indicators.present_count(),
            RawIndicators::FIELD_COUNT,
            iso3
        );

        if failed > 0 {
            warn!(
                "Not caching indicators for {}: {} request(s) failed",
                iso3, failed
            );
        } else if let Err(e) = self.store.save_indicators(iso3, &indicators) {
            warn!("Failed to cache indicators for {}: {}", iso3, e);
        }

        Ok(indicators)
    }

    async fn fetch_indicator(&self, iso3: &str, indicator: WorldBankIndicator) -> Result<Option<f64>> {
        let url = format!(
            "{}/country/{}/indicator/{}",
            self.api_base,
            iso3,
            indicator.code()
        );
        let response = self
            .client
            .get(&url)
            .query(&[
                ("format", "json".to_string()),
                ("mrv", MOST_RECENT_VALUES.to_string()),
                ("per_page", MOST_RECENT_VALUES.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NeedMapError::Api(format!("Status {}", response.status())));
        }

        let body: Value = response.json().await?;
        let value = latest_value(&body);
        if value.is_none() {
            debug!("No {} data for {}", indicator.code(), iso3);
        }

        Ok(value)
    }
}
