use crate::domain::model::ContentType;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "song-scout")]
#[command(about = "Look up lyrics, chords, or tabs plus a backing track for a song")]
pub struct CliConfig {
    /// Song title to search for
    pub song: String,

    #[arg(long, value_enum, default_value_t = ContentType::Lyrics)]
    pub content_type: ContentType,

    #[arg(long, default_value = "http://127.0.0.1/song-data")]
    pub content_endpoint: String,

    #[arg(long, default_value = "http://127.0.0.1/search")]
    pub track_endpoint: String,

    /// Per-provider request timeout in seconds
    #[arg(long, default_value = "20")]
    pub timeout_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Print the outcome as JSON instead of formatted text")]
    pub json: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("content_endpoint", &self.content_endpoint)?;
        validate_url("track_endpoint", &self.track_endpoint)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
