use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdboardError {
    #[error("api error ({status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),
    #[cfg(feature = "import-csv")]
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid {field}: {value:?} is not a whole number")]
    InvalidField { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, AdboardError>;
