use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Scheduling provider returned HTTP {status}")]
    ProviderStatusError { status: u16 },

    #[error("Scheduling provider payload error: {message}")]
    ProviderPayloadError { message: String },

    #[error("Schedule record has unexpected shape: {message}")]
    DataShapeError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown specialty group: {name}")]
    UnknownGroupError { name: String },
}

pub type Result<T> = std::result::Result<T, MatchError>;
