use crate::config::Config;
use crate::domain::storage::Storage;
use crate::domain::{CountryBasicInfo, CountryScoreRecord, Manifest, RawIndicators};
use crate::error::Result;
use crate::services::collection::CollectionService;
use crate::services::scoring::score_countries;
use std::sync::Arc;
use tracing::info;

pub struct CountryService {
    config: Config,
    store: Arc<dyn Storage>,
    collection: CollectionService,
}

impl CountryService {
    pub fn new(config: Config, store: Arc<dyn Storage + 'static>, collection: CollectionService) -> Self {
        Self {
            config,
            store,
            collection,
        }
    }

    pub async fn process(&self) -> Result<()> {
        info!("Starting country scoring pipeline");

        let collected = self.collection.collect_all(&self.config.countries).await?;
        info!("Indicator collection completed: {} countries", collected.len());

        let records = self.score(collected);
        info!("Scoring completed: {} records", records.len());

        let stored = self.store.upsert_records(&records)?;
        info!("Upserted {} records ({} stored in total)", records.len(), stored);

        self.save_final_manifest()?;
        info!("Processing pipeline completed successfully");

        Ok(())
    }

    fn score(&self, collected: Vec<(CountryBasicInfo, RawIndicators)>) -> Vec<CountryScoreRecord> {
        score_countries(collected)
    }

    /// The manifest covers every stored record, not only this run's.
    fn save_final_manifest(&self) -> Result<()> {
        let manifest = Manifest::new(self.store.load_records()?);
        info!(
            "Writing manifest: {} countries, average data quality {:.1}%",
            manifest.total_countries, manifest.metadata.average_data_quality
        );
        self.store.save_manifest(&manifest)?;
        Ok(())
    }
}
