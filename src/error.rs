use thiserror::Error;

#[derive(Debug, Error)]
pub enum CapError {
    #[error("Unparsable input: {0}")]
    UnparsableInput(String),
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
