use crate::domain::model::{BackingTrackResult, ContentResult, ContentType};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Looks up textual song content. Returns whichever of lyrics/chords/tabs it
/// could find; errors are recoverable and degraded by the orchestrator.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn fetch(&self, title: &str, requested: ContentType) -> Result<ContentResult>;
}

/// Searches for an instrumental backing track for a song title.
#[async_trait]
pub trait BackingTrackProvider: Send + Sync {
    async fn fetch(&self, title: &str) -> Result<BackingTrackResult>;
}
