use crate::domain::model::BackingTrackResult;
use crate::domain::ports::BackingTrackProvider;
use crate::utils::error::{Result, SongError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

/// HTTP client for the backing track search service. The service is loose
/// about its response shape: a bare JSON string, `{"url": ...}` and
/// `{"audioUrl": ...}` are all accepted; anything else counts as no match.
pub struct HttpBackingTrackProvider {
    endpoint: String,
    client: Client,
}

impl HttpBackingTrackProvider {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SongError::InternalError {
                message: format!("failed to create backing track HTTP client: {}", e),
            })?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }
}

#[async_trait]
impl BackingTrackProvider for HttpBackingTrackProvider {
    async fn fetch(&self, title: &str) -> Result<BackingTrackResult> {
        tracing::debug!(
            "Searching backing track for \"{}\" at {}",
            title,
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "song": title }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                "Backing track search returned HTTP {} for \"{}\": {}",
                status,
                title,
                body
            );
            return Ok(BackingTrackResult::default());
        }

        let body: serde_json::Value = response.json().await?;
        let audio_url = extract_audio_url(&body);
        if audio_url.is_none() {
            tracing::warn!(
                "Unexpected backing track response shape, treating as no match: {}",
                body
            );
        }

        Ok(BackingTrackResult { audio_url })
    }
}

fn extract_audio_url(body: &serde_json::Value) -> Option<String> {
    match body {
        serde_json::Value::String(url) => Some(url.clone()),
        serde_json::Value::Object(fields) => fields
            .get("url")
            .or_else(|| fields.get("audioUrl"))
            .and_then(|value| value.as_str())
            .map(str::to_string),
        _ => None,
    }
}
