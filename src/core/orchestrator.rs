use crate::core::composer;
use crate::domain::model::{AggregatedOutcome, ContentResult, SongQuery};
use crate::domain::ports::{BackingTrackProvider, ContentProvider};
use crate::utils::error::SongError;
use crate::utils::validation::validate_query;

/// Fans a single query out to both providers, tolerates either failing, and
/// reduces what came back into one `AggregatedOutcome`. Holds no mutable
/// state, so any number of queries can run concurrently on one instance.
pub struct QueryOrchestrator<C: ContentProvider, B: BackingTrackProvider> {
    content: C,
    backing_tracks: B,
}

impl<C: ContentProvider, B: BackingTrackProvider> QueryOrchestrator<C, B> {
    pub fn new(content: C, backing_tracks: B) -> Self {
        Self {
            content,
            backing_tracks,
        }
    }

    /// Validates raw input and executes the query. Invalid input is rejected
    /// before either provider is contacted.
    pub async fn run(&self, raw_title: &str, raw_type: &str) -> AggregatedOutcome {
        let query = match validate_query(raw_title, raw_type) {
            Ok(query) => query,
            Err(error) => {
                tracing::warn!("Rejected query: {}", error);
                let message = match error {
                    SongError::ValidationError { message } => message,
                    other => other.to_string(),
                };
                return AggregatedOutcome::validation_failure(message);
            }
        };
        self.execute(&query).await
    }

    /// Dispatches both provider calls concurrently and joins them. A failed
    /// call degrades to an absent field for that provider only; it never
    /// aborts the sibling call or the query.
    pub async fn execute(&self, query: &SongQuery) -> AggregatedOutcome {
        tracing::info!(
            "Looking up {} and a backing track for \"{}\"",
            query.requested(),
            query.title()
        );

        let (content_result, track_result) = tokio::join!(
            self.content.fetch(query.title(), query.requested()),
            self.backing_tracks.fetch(query.title()),
        );

        let content = match content_result {
            Ok(content) => content,
            Err(error) => {
                tracing::warn!(
                    "Content provider failed for \"{}\", continuing without song content: {}",
                    query.title(),
                    error
                );
                ContentResult::default()
            }
        };

        let backing_track_url = match track_result {
            Ok(result) => result.audio_url,
            Err(error) => {
                tracing::warn!(
                    "Backing track provider failed for \"{}\", continuing without a track: {}",
                    query.title(),
                    error
                );
                None
            }
        };

        let requested_found = content.get(query.requested()).is_some();
        let any_content_found = content.any_found();
        let track_found = backing_track_url.is_some();

        let (status, message) = composer::compose(
            requested_found,
            any_content_found,
            track_found,
            query.requested(),
            query.title(),
        );

        tracing::debug!("Query for \"{}\" resolved as {:?}", query.title(), status);

        AggregatedOutcome {
            content,
            backing_track_url,
            requested: Some(query.requested()),
            status,
            message,
        }
    }
}
