use crate::domain::model::{ContentResult, ContentType};
use crate::domain::ports::ContentProvider;
use crate::utils::error::{Result, SongError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(20);

/// HTTP client for the song content lookup service. Posts the title and the
/// requested category and deserializes whichever of lyrics/chords/tabs the
/// service found; missing fields mean "not found".
pub struct HttpContentProvider {
    endpoint: String,
    client: Client,
}

impl HttpContentProvider {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SongError::InternalError {
                message: format!("failed to create content provider HTTP client: {}", e),
            })?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }
}

#[async_trait]
impl ContentProvider for HttpContentProvider {
    async fn fetch(&self, title: &str, requested: ContentType) -> Result<ContentResult> {
        tracing::debug!(
            "Requesting {} for \"{}\" from {}",
            requested,
            title,
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "song": title, "contentType": requested }))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Content provider response status: {}", status);
        if !status.is_success() {
            return Err(SongError::ProviderUnavailable {
                message: format!("content provider returned HTTP {}", status),
            });
        }

        let content: ContentResult = response.json().await?;
        Ok(content)
    }
}
