use crate::config::cli::Args;
use crate::domain::CountryBasicInfo;
use crate::error::{NeedMapError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod cli;

static ISO3_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}$").expect("valid iso3 pattern"));

pub struct Config {
    pub args: Args,
    pub countries: Vec<CountryBasicInfo>,
    pub http_client: Client,
}

impl Config {
    pub fn new(args: Args) -> Result<Self> {
        // Only the collection pipeline needs the country list
        let countries = if args.needs_countries() {
            load_countries(&args.countries_file)?
        } else {
            Vec::new()
        };

        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("needmap/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            args,
            countries,
            http_client,
        })
    }

    pub fn ensure_directories(&self) -> Result<()> {
        if !self.args.data_dir.exists() {
            std::fs::create_dir_all(&self.args.data_dir)?;
        }
        if !self.args.cache_dir.exists() {
            std::fs::create_dir_all(&self.args.cache_dir)?;
        }

        info!("Data and cache dirs exist");
        Ok(())
    }
}

impl Args {
    pub fn needs_countries(&self) -> bool {
        matches!(self.command, None | Some(cli::Commands::Collect))
    }
}

pub fn load_countries(path: &Path) -> Result<Vec<CountryBasicInfo>> {
    let content = std::fs::read_to_string(path)?;
    let countries: Vec<CountryBasicInfo> = serde_json::from_str(&content)?;
    let countries = validate_countries(countries)?;
    info!("Loaded {} countries from {:?}", countries.len(), path);
    Ok(countries)
}

/// Uppercases iso3 codes and rejects malformed or duplicate entries.
pub fn validate_countries(countries: Vec<CountryBasicInfo>) -> Result<Vec<CountryBasicInfo>> {
    let mut seen = HashSet::new();
    countries
        .into_iter()
        .map(|mut country| {
            country.iso3 = country.iso3.trim().to_uppercase();
            if !ISO3_PATTERN.is_match(&country.iso3) {
                return Err(NeedMapError::InvalidCountry(format!(
                    "'{}' ({}) is not a three-letter code",
                    country.iso3, country.name
                )));
            }
            if !seen.insert(country.iso3.clone()) {
                return Err(NeedMapError::InvalidCountry(format!(
                    "duplicate entry for {}",
                    country.iso3
                )));
            }
            Ok(country)
        })
        .collect()
}
