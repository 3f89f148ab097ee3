use crate::domain::UrgencyLevel;
use crate::infrastructure::DEFAULT_API_BASE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Path to the country list (iso3, names, region, coordinates)
    #[arg(long, default_value = "countries.json")]
    pub countries_file: PathBuf,

    /// Directory to store scored records and the manifest
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Directory for cached indicator responses
    #[arg(long, default_value = "cache")]
    pub cache_dir: PathBuf,

    /// Base URL of the World Bank API
    #[arg(long, env = "WORLD_BANK_API", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Skip using cached data
    #[arg(long)]
    pub skip_cache: bool,

    /// Countries fetched concurrently per batch
    #[arg(long, default_value_t = 5)]
    pub batch_size: usize,

    /// Pause between batches, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub batch_delay_ms: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch indicators, score every country and write the manifest (default)
    Collect,
    /// Score a single `{basicInfo, indicators}` JSON document
    Score {
        /// Input document
        input: PathBuf,
    },
    /// List stored country records, most urgent first
    Query {
        /// Only this urgency level (critical, high, medium, low, stable)
        #[arg(long)]
        urgency: Option<UrgencyLevel>,

        /// Only this region (case-insensitive)
        #[arg(long)]
        region: Option<String>,

        /// Maximum number of records to print
        #[arg(long)]
        limit: Option<usize>,
    },
}
