use thiserror::Error;

#[derive(Error, Debug)]
pub enum SongError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Provider unavailable: {message}")]
    ProviderUnavailable { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Invalid configuration value for '{field}': '{value}' - {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

pub type Result<T> = std::result::Result<T, SongError>;
