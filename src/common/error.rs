use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Malformed TotalKg value '{value}': {source}")]
    MalformedNumber {
        value: String,
        source: std::num::ParseFloatError,
    },
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
