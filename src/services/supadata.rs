use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::env;

use crate::services::transcript::{CaptionMode, ProviderError, TranscriptProvider};

const DEFAULT_BASE_URL: &str = "https://api.supadata.ai/v1";

#[derive(Debug, Deserialize)]
struct TranscriptResponse {
    content: TranscriptContent,
    #[serde(default)]
    lang: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TranscriptContent {
    Text(String),
    Chunks(Vec<TranscriptChunk>),
}

#[derive(Debug, Deserialize)]
struct TranscriptChunk {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Commercial transcript API. `Manual` maps to `mode=native`, `Generated` to
/// `mode=generate`.
#[derive(Clone)]
pub struct SupadataProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupadataProvider {
    pub fn new(client: Client) -> Result<Self, ProviderError> {
        let api_key = env::var("SUPADATA_API_KEY").map_err(|_| ProviderError::MissingApiKey)?;

        if api_key.is_empty() {
            return Err(ProviderError::MissingApiKey);
        }

        let base_url =
            env::var("SUPADATA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self::with_base_url(client, base_url, api_key))
    }

    pub fn with_base_url(
        client: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn mode_param(mode: CaptionMode) -> &'static str {
        match mode {
            CaptionMode::Manual => "native",
            CaptionMode::Generated => "generate",
        }
    }
}

#[async_trait]
impl TranscriptProvider for SupadataProvider {
    fn name(&self) -> &'static str {
        "supadata"
    }

    async fn fetch(
        &self,
        video_id: &str,
        language: &str,
        mode: CaptionMode,
    ) -> Result<String, ProviderError> {
        let video_url = format!("https://youtu.be/{}", video_id);

        let response = self
            .client
            .get(format!("{}/transcript", self.base_url))
            .header("x-api-key", &self.api_key)
            .query(&[
                ("url", video_url.as_str()),
                ("lang", language),
                ("text", "true"),
                ("mode", Self::mode_param(mode)),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::ACCEPTED {
            return Err(ProviderError::InvalidResponse(
                "transcript queued as an async job".to_string(),
            ));
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&error_text)
                .ok()
                .and_then(|e| e.message.or(e.error))
                .unwrap_or(error_text);
            return Err(ProviderError::ApiError { status, message });
        }

        let transcript: TranscriptResponse = response.json().await?;

        // A transcript in some other language counts as unavailable here so
        // the caller can move on to its next candidate.
        if let Some(lang) = transcript.lang.as_deref() {
            if !lang.eq_ignore_ascii_case(language) && !lang.starts_with(&format!("{}-", language)) {
                return Err(ProviderError::Empty {
                    language: language.to_string(),
                    mode,
                });
            }
        }

        let text = match transcript.content {
            TranscriptContent::Text(text) => text,
            TranscriptContent::Chunks(chunks) => chunks
                .iter()
                .map(|c| c.text.trim())
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        };

        if text.trim().is_empty() {
            return Err(ProviderError::Empty {
                language: language.to_string(),
                mode,
            });
        }

        Ok(text)
    }
}
