//! Country vulnerability scoring.
//!
//! Collects development indicators per country, turns them into severity
//! sub-scores and an overall urgency score, and stores the resulting records
//! for a map dashboard. The scoring engine lives in [`services::scoring`] and
//! is pure; everything else is I/O around it.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod services;

#[cfg(test)]
mod test_support;

pub use domain::{CountryBasicInfo, CountryScoreRecord, RawIndicators};
pub use error::{NeedMapError, Result};
pub use services::scoring::calculate_country_score;
