use crate::domain::model::{ContentType, SongQuery};
use crate::utils::error::{Result, SongError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Turns raw form/CLI input into a `SongQuery`, rejecting it before any
/// provider is contacted.
pub fn validate_query(raw_title: &str, raw_type: &str) -> Result<SongQuery> {
    if raw_title.trim().is_empty() {
        return Err(SongError::ValidationError {
            message: "Song title is required.".to_string(),
        });
    }

    let requested = raw_type.parse::<ContentType>()?;
    SongQuery::new(raw_title, requested)
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SongError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SongError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SongError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(SongError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}
