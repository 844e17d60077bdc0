use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::transcript::CaptionMode;

pub const NOT_FOUND_REASONS: [&str; 3] = [
    "Video has no captions",
    "Language not available",
    "Invalid YouTube URL",
];

#[derive(Debug, Deserialize, Validate)]
pub struct GettingScriptRequest {
    #[validate(length(min = 1, message = "input_link cannot be empty"))]
    pub input_link: String,
    #[validate(length(min = 1, message = "language cannot be empty"))]
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct ScriptResponse {
    pub status: &'static str,
    pub video_url: String,
    pub video_id: String,
    pub language: String,
    pub language_used: String,
    pub caption_mode: CaptionMode,
    pub transcript: String,
}

#[derive(Debug, Serialize)]
pub struct ScriptErrorResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub possible_reasons: Vec<&'static str>,
}

impl ScriptErrorResponse {
    pub fn new(message: impl Into<String>, possible_reasons: Vec<&'static str>) -> Self {
        Self {
            status: "error",
            message: message.into(),
            possible_reasons,
        }
    }
}
