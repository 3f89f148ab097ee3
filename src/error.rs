use thiserror::Error;

#[derive(Error, Debug)]
pub enum NeedMapError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("API error: {0}")]
    Api(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid country: {0}")]
    InvalidCountry(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, NeedMapError>;
