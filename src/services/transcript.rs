use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use thiserror::Error;

const DEFAULT_TIMEDTEXT_URL: &str = "https://www.youtube.com/api/timedtext";

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("API error ({status}): {message}")]
    ApiError { status: StatusCode, message: String },
    #[error("No {mode} captions in '{language}'")]
    Empty { language: String, mode: CaptionMode },
    #[error("Missing API key")]
    MissingApiKey,
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Caption source requested from a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptionMode {
    /// Human-authored captions.
    Manual,
    /// Automatically generated captions.
    Generated,
}

impl CaptionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaptionMode::Manual => "manual",
            CaptionMode::Generated => "generated",
        }
    }
}

impl fmt::Display for CaptionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Plain-text transcript for `video_id` in `language`, or an error when
    /// the provider has nothing for that combination.
    async fn fetch(
        &self,
        video_id: &str,
        language: &str,
        mode: CaptionMode,
    ) -> Result<String, ProviderError>;
}

#[derive(Debug, Deserialize)]
struct TimedTextResponse {
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

#[derive(Debug, Deserialize)]
struct TimedTextEvent {
    #[serde(default)]
    segs: Vec<TimedTextSegment>,
}

#[derive(Debug, Deserialize)]
struct TimedTextSegment {
    #[serde(default)]
    utf8: String,
}

/// Reads captions straight from YouTube's timed-text endpoint (`fmt=json3`).
#[derive(Clone)]
pub struct TimedTextProvider {
    client: Client,
    base_url: String,
}

impl TimedTextProvider {
    pub fn new(client: Client) -> Self {
        let base_url = env::var("YOUTUBE_TIMEDTEXT_URL")
            .unwrap_or_else(|_| DEFAULT_TIMEDTEXT_URL.to_string());

        Self::with_base_url(client, base_url)
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn join_events(response: TimedTextResponse) -> String {
        response
            .events
            .iter()
            .map(|event| {
                event
                    .segs
                    .iter()
                    .map(|seg| seg.utf8.as_str())
                    .collect::<String>()
                    .replace('\n', " ")
            })
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[async_trait]
impl TranscriptProvider for TimedTextProvider {
    fn name(&self) -> &'static str {
        "youtube"
    }

    async fn fetch(
        &self,
        video_id: &str,
        language: &str,
        mode: CaptionMode,
    ) -> Result<String, ProviderError> {
        let mut query = vec![("v", video_id), ("lang", language), ("fmt", "json3")];
        if mode == CaptionMode::Generated {
            query.push(("kind", "asr"));
        }

        let response = self.client.get(&self.base_url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError { status, message });
        }

        // Missing tracks come back as 200 with an empty body.
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(ProviderError::Empty {
                language: language.to_string(),
                mode,
            });
        }

        let parsed: TimedTextResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        let text = Self::join_events(parsed);
        if text.is_empty() {
            return Err(ProviderError::Empty {
                language: language.to_string(),
                mode,
            });
        }

        Ok(text)
    }
}
