use clap::Parser;
use needmap::config::cli::{Args, Commands};
use needmap::config::Config;
use needmap::domain::storage::Storage;
use needmap::domain::ScoreRequest;
use needmap::error::{NeedMapError, Result};
use needmap::infrastructure::{FileSystemStore, WorldBankClient};
use needmap::services::collection::CollectionService;
use needmap::services::country_service::CountryService;
use needmap::services::query::RecordQuery;
use needmap::services::scoring::calculate_country_score;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let level: Level = args
        .log_level
        .parse()
        .map_err(|_| NeedMapError::Parse(format!("invalid log level: {}", args.log_level)))?;
    tracing_subscriber::fmt().with_max_level(level).init();

    let mut config = Config::new(args)?;
    let store: Arc<dyn Storage> = Arc::new(FileSystemStore::new(
        &config.args.data_dir,
        &config.args.cache_dir,
    ));

    match config.args.command.take() {
        Some(Commands::Score { input }) => score_document(&input)?,
        Some(Commands::Query {
            urgency,
            region,
            limit,
        }) => {
            let query = RecordQuery {
                urgency,
                region,
                limit,
            };
            print_records(query, store.as_ref())?;
        }
        None | Some(Commands::Collect) => {
            config.ensure_directories()?;

            let world_bank = WorldBankClient::new(
                config.http_client.clone(),
                config.args.api_base.clone(),
                store.clone(),
                !config.args.skip_cache,
            );
            let collection = CollectionService::new(
                world_bank,
                config.args.batch_size,
                config.args.batch_delay_ms,
            );

            let service = CountryService::new(config, store, collection);
            service.process().await?;
            info!("Collection completed successfully!");
        }
    }

    Ok(())
}

fn score_document(input: &Path) -> Result<()> {
    let content = std::fs::read_to_string(input)?;
    let request: ScoreRequest = serde_json::from_str(&content)?;
    let record = calculate_country_score(request.basic_info, request.indicators);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

fn print_records(query: RecordQuery, store: &dyn Storage) -> Result<()> {
    let records = query.apply(store.load_records()?);
    if records.is_empty() {
        info!("No stored records match the query");
        return Ok(());
    }

    for record in records {
        let support: Vec<String> = record
            .recommended_support
            .iter()
            .map(|c| c.to_string())
            .collect();
        println!(
            "{:<4} {:<28} {:<10} {:>6.1}  {:>5.1}%  {}",
            record.basic.iso3,
            record.basic.name,
            record.urgency_level,
            record.scores.overall,
            record.data_quality,
            support.join(", ")
        );
    }
    Ok(())
}
