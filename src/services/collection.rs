use crate::domain::{CountryBasicInfo, RawIndicators};
use crate::error::{NeedMapError, Result};
use crate::infrastructure::WorldBankClient;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio::time::{sleep, Duration};
use tracing::{info, warn};

pub struct CollectionService {
    client: Arc<WorldBankClient>,
    batch_size: usize,
    batch_delay: Duration,
}

impl CollectionService {
    pub fn new(client: WorldBankClient, batch_size: usize, batch_delay_ms: u64) -> Self {
        info!("Created new Collection Service");
        Self {
            client: Arc::new(client),
            batch_size: batch_size.max(1),
            batch_delay: Duration::from_millis(batch_delay_ms),
        }
    }

    /// Fetches indicators for every country, `batch_size` at a time, pausing
    /// between batches to stay friendly with the upstream API. A country whose
    /// fetch fails entirely is kept with empty indicators.
    pub async fn collect_all(
        &self,
        countries: &[CountryBasicInfo],
    ) -> Result<Vec<(CountryBasicInfo, RawIndicators)>> {
        let pb = ProgressBar::new(countries.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .map_err(|e| NeedMapError::Other(e.to_string()))?,
        );

        let mut collected = Vec::with_capacity(countries.len());
        let batches: Vec<&[CountryBasicInfo]> = countries.chunks(self.batch_size).collect();

        for (batch_index, batch) in batches.iter().enumerate() {
            let mut tasks = JoinSet::new();
            for (offset, country) in batch.iter().enumerate() {
                let client = Arc::clone(&self.client);
                let iso3 = country.iso3.clone();
                tasks.spawn(async move { (offset, client.fetch_indicators(&iso3).await) });
            }

            let mut results: Vec<(usize, RawIndicators)> = Vec::with_capacity(batch.len());
            while let Some(joined) = tasks.join_next().await {
                let (offset, fetched) =
                    joined.map_err(|e| NeedMapError::Other(format!("fetch task failed: {e}")))?;
                let country = &batch[offset];
                let indicators = match fetched {
                    Ok(indicators) => indicators,
                    Err(e) => {
                        warn!("Failed to collect indicators for {}: {}", country.iso3, e);
                        RawIndicators::default()
                    }
                };
                pb.set_message(format!("Collected {}", country.name));
                pb.inc(1);
                results.push((offset, indicators));
            }

            results.sort_by_key(|(offset, _)| *offset);
            collected.extend(
                results
                    .into_iter()
                    .map(|(offset, indicators)| (batch[offset].clone(), indicators)),
            );

            if batch_index + 1 < batches.len() && !self.batch_delay.is_zero() {
                sleep(self.batch_delay).await; // Rate limiting
            }
        }

        pb.finish_with_message("Done collecting indicators!");
        Ok(collected)
    }
}
