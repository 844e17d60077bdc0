use reqwest::Url;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::services::transcript::{CaptionMode, ProviderError, TranscriptProvider};

pub const DEFAULT_LANGUAGE: &str = "en";
pub const ALTERNATE_LANGUAGE: &str = "ar";

const SHORT_LINK_HOST: &str = "youtu.be";
const PATH_ID_PREFIXES: [&str; 3] = ["shorts", "embed", "live"];

#[derive(Debug)]
pub struct AttemptFailure {
    pub language: &'static str,
    pub mode: CaptionMode,
    pub error: ProviderError,
}

#[derive(Error, Debug)]
pub enum AcquisitionError {
    #[error("Could not extract video ID from {0:?}")]
    InvalidReference(String),
    #[error("No transcript found after {} attempts", .attempts.len())]
    NotFound { attempts: Vec<AttemptFailure> },
}

#[derive(Debug, Clone, Serialize)]
pub struct TranscriptResult {
    pub video_id: String,
    pub language_used: String,
    pub mode: CaptionMode,
    pub text: String,
}

/// Pulls the video identifier out of a short link, a watch URL, or a bare ID.
pub fn extract_video_id(reference: &str) -> Option<String> {
    let reference = reference.trim();
    if reference.is_empty() {
        return None;
    }

    if is_bare_id(reference) {
        return Some(reference.to_string());
    }

    let url = Url::parse(reference)
        .ok()
        .filter(|u| u.has_host())
        .or_else(|| Url::parse(&format!("https://{}", reference)).ok())?;

    let host = url.host_str().unwrap_or("").trim_start_matches("www.");

    let id = if host == SHORT_LINK_HOST {
        url.path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .map(str::to_string)
    } else {
        url.query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
            .or_else(|| path_id(&url))
    };

    id.filter(|id| !id.is_empty())
}

fn path_id(url: &Url) -> Option<String> {
    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());
    let prefix = segments.next()?;
    if PATH_ID_PREFIXES.contains(&prefix) {
        segments.next().map(str::to_string)
    } else {
        None
    }
}

fn is_bare_id(candidate: &str) -> bool {
    candidate.len() == 11
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Preferred language first, the other supported one second. Only an exact
/// `ar` selects Arabic first; every other value falls back to English.
pub fn candidate_languages(preferred: &str) -> [&'static str; 2] {
    if preferred == ALTERNATE_LANGUAGE {
        [ALTERNATE_LANGUAGE, DEFAULT_LANGUAGE]
    } else {
        [DEFAULT_LANGUAGE, ALTERNATE_LANGUAGE]
    }
}

#[derive(Clone)]
pub struct Acquisition {
    provider: Arc<dyn TranscriptProvider>,
}

impl Acquisition {
    pub fn new(provider: Arc<dyn TranscriptProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Walks manual captions across both candidate languages, then
    /// generated captions in the same order. First non-empty text wins.
    pub async fn fetch(
        &self,
        reference: &str,
        preferred_language: &str,
    ) -> Result<TranscriptResult, AcquisitionError> {
        let video_id = extract_video_id(reference)
            .ok_or_else(|| AcquisitionError::InvalidReference(reference.to_string()))?;

        let candidates = candidate_languages(preferred_language);
        let mut attempts = Vec::new();

        for mode in [CaptionMode::Manual, CaptionMode::Generated] {
            for language in candidates {
                debug!(%video_id, language, %mode, provider = self.provider.name(), "requesting transcript");

                let error = match self.provider.fetch(&video_id, language, mode).await {
                    Ok(text) if !text.trim().is_empty() => {
                        info!(
                            %video_id,
                            language,
                            %mode,
                            failed_attempts = attempts.len(),
                            "transcript acquired"
                        );
                        return Ok(TranscriptResult {
                            video_id,
                            language_used: language.to_string(),
                            mode,
                            text,
                        });
                    }
                    Ok(_) => ProviderError::Empty {
                        language: language.to_string(),
                        mode,
                    },
                    Err(e) => e,
                };

                warn!(%video_id, language, %mode, error = %error, "transcript attempt failed");
                attempts.push(AttemptFailure {
                    language,
                    mode,
                    error,
                });
            }
        }

        warn!(%video_id, attempts = attempts.len(), "no transcript available");
        Err(AcquisitionError::NotFound { attempts })
    }
}
