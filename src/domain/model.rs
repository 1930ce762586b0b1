use crate::utils::error::{Result, SongError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The textual representation of a song the user can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ContentType {
    Lyrics,
    Chords,
    Tabs,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Lyrics => "lyrics",
            ContentType::Chords => "chords",
            ContentType::Tabs => "tabs",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = SongError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lyrics" => Ok(ContentType::Lyrics),
            "chords" => Ok(ContentType::Chords),
            "tabs" => Ok(ContentType::Tabs),
            other => Err(SongError::ValidationError {
                message: format!(
                    "Invalid content type '{}'. Expected one of: lyrics, chords, tabs.",
                    other
                ),
            }),
        }
    }
}

/// A validated song lookup request. Construction rejects empty titles, so a
/// `SongQuery` in hand is always safe to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongQuery {
    title: String,
    requested: ContentType,
}

impl SongQuery {
    pub fn new(title: impl Into<String>, requested: ContentType) -> Result<Self> {
        let title = title.into();
        let title = title.trim();
        if title.is_empty() {
            return Err(SongError::ValidationError {
                message: "Song title is required.".to_string(),
            });
        }
        Ok(Self {
            title: title.to_string(),
            requested,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn requested(&self) -> ContentType {
        self.requested
    }
}

/// Whatever the content provider could find. A missing field means "not
/// found", never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentResult {
    #[serde(default)]
    pub lyrics: Option<String>,
    #[serde(default)]
    pub chords: Option<String>,
    #[serde(default)]
    pub tabs: Option<String>,
}

impl ContentResult {
    pub fn get(&self, kind: ContentType) -> Option<&str> {
        match kind {
            ContentType::Lyrics => self.lyrics.as_deref(),
            ContentType::Chords => self.chords.as_deref(),
            ContentType::Tabs => self.tabs.as_deref(),
        }
    }

    pub fn any_found(&self) -> bool {
        self.lyrics.is_some() || self.chords.is_some() || self.tabs.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct BackingTrackResult {
    pub audio_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryStatus {
    Ok,
    PartialOk,
    NotFound,
    ValidationError,
    UnexpectedError,
}

/// Terminal value of a query execution: built exactly once, then handed to
/// the presentation layer as-is.
#[derive(Debug, Clone, Serialize)]
pub struct AggregatedOutcome {
    pub content: ContentResult,
    pub backing_track_url: Option<String>,
    pub requested: Option<ContentType>,
    pub status: QueryStatus,
    pub message: Option<String>,
}

impl AggregatedOutcome {
    /// Outcome for a query that never made it past validation. No provider
    /// was contacted, so content and track URL are always absent here.
    pub fn validation_failure(message: impl Into<String>) -> Self {
        Self {
            content: ContentResult::default(),
            backing_track_url: None,
            requested: None,
            status: QueryStatus::ValidationError,
            message: Some(message.into()),
        }
    }

    /// Outcome for a fault in the orchestration itself, as opposed to a
    /// single provider failing (which degrades to an absent field instead).
    pub fn unexpected(requested: Option<ContentType>, message: impl Into<String>) -> Self {
        Self {
            content: ContentResult::default(),
            backing_track_url: None,
            requested,
            status: QueryStatus::UnexpectedError,
            message: Some(message.into()),
        }
    }
}
