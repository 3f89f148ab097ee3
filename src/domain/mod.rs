mod country;
mod manifest;
mod score;
pub mod storage;

pub use country::{CountryBasicInfo, RawIndicators, ScoreRequest};
pub use manifest::{Manifest, ManifestMetadata};
pub use score::{
    AccessLevel, AccessLevels, CountryScoreRecord, Scores, SubScores, SupportCategory,
    UrgencyLevel,
};
