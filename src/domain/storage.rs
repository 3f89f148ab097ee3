use super::{CountryScoreRecord, Manifest, RawIndicators};
use crate::error::Result;

pub trait Storage: Send + Sync {
    fn load_indicators(&self, iso3: &str) -> Result<Option<RawIndicators>>;
    fn save_indicators(&self, iso3: &str, indicators: &RawIndicators) -> Result<()>;
    fn load_records(&self) -> Result<Vec<CountryScoreRecord>>;
    /// Inserts new records and replaces existing ones with the same `iso3`.
    fn upsert_records(&self, records: &[CountryScoreRecord]) -> Result<usize>;
    fn save_manifest(&self, manifest: &Manifest) -> Result<()>;
}

pub struct StorageKeys;

impl StorageKeys {
    // Base directories
    pub const INDICATORS_DIR: &'static str = "indicators";

    pub const COUNTRY_SCORES: &'static str = "country_scores";
    pub const MANIFEST: &'static str = "manifest";
}
