use crate::domain::score::{CountryScoreRecord, UrgencyLevel};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub total_countries: usize,
    pub last_updated: String,
    pub countries: Vec<CountryScoreRecord>,
    pub metadata: ManifestMetadata,
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestMetadata {
    pub urgency_counts: BTreeMap<String, usize>,
    pub average_data_quality: f64,
    pub sources: Vec<String>,
    pub version: String,
}

impl Manifest {
    pub fn new(mut countries: Vec<CountryScoreRecord>) -> Self {
        countries.sort_by(|a, b| {
            b.scores
                .overall
                .total_cmp(&a.scores.overall)
                .then_with(|| a.basic.iso3.cmp(&b.basic.iso3))
        });

        let mut urgency_counts: BTreeMap<String, usize> = UrgencyLevel::ALL
            .iter()
            .map(|level| (level.to_string(), 0))
            .collect();
        for record in &countries {
            *urgency_counts
                .entry(record.urgency_level.to_string())
                .or_default() += 1;
        }

        let average_data_quality = if countries.is_empty() {
            0.0
        } else {
            countries.iter().map(|c| c.data_quality).sum::<f64>() / countries.len() as f64
        };

        let sources: Vec<String> = countries
            .iter()
            .map(|c| c.source.clone())
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
            .collect();

        Self {
            total_countries: countries.len(),
            last_updated: Local::now().to_rfc3339(),
            countries,
            metadata: ManifestMetadata {
                urgency_counts,
                average_data_quality,
                sources,
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CountryBasicInfo, RawIndicators};
    use crate::services::scoring::calculate_country_score;

    fn record(iso3: &str, indicators: RawIndicators) -> CountryScoreRecord {
        let basic = CountryBasicInfo {
            iso3: iso3.to_string(),
            name: iso3.to_string(),
            name_ko: iso3.to_string(),
            region: "Test".to_string(),
            coordinates: [0.0, 0.0],
        };
        calculate_country_score(basic, indicators)
    }

    #[test]
    fn manifest_orders_by_overall_and_counts_levels() {
        let poor = RawIndicators {
            poverty_rate: Some(90.0),
            gini_index: Some(60.0),
            gdp_per_capita: Some(300.0),
            life_expectancy: Some(50.0),
            ..Default::default()
        };
        let rich = RawIndicators {
            poverty_rate: Some(0.5),
            gini_index: Some(25.0),
            gdp_per_capita: Some(60000.0),
            unemployment_rate: Some(3.0),
            life_expectancy: Some(84.0),
            ..Default::default()
        };

        let manifest = Manifest::new(vec![record("AAA", rich), record("BBB", poor)]);

        assert_eq!(manifest.total_countries, 2);
        assert_eq!(manifest.countries[0].basic.iso3, "BBB");
        assert_eq!(manifest.metadata.urgency_counts.len(), 5);
        assert_eq!(manifest.metadata.urgency_counts.values().sum::<usize>(), 2);
        assert_eq!(manifest.metadata.sources, vec!["World Bank API".to_string()]);
    }
}
