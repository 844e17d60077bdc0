use serde::Serialize;
use serde_json::Value;

/// One gateway route and where it lands on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Script,
    Summarize,
    ExtractMainPoints,
    Chat,
}

impl Operation {
    pub fn route(&self) -> &'static str {
        match self {
            Operation::Script => "/getting_script_from_video",
            Operation::Summarize => "/summarize",
            Operation::ExtractMainPoints => "/extract_main_points",
            Operation::Chat => "/chat",
        }
    }

    pub fn backend_path(&self) -> &'static str {
        match self {
            Operation::Script => "/getting_script",
            Operation::Summarize => "/summarize",
            Operation::ExtractMainPoints => "/extract_main_points",
            Operation::Chat => "/chat",
        }
    }

    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            Operation::Script => &["input_link", "language"],
            Operation::Summarize | Operation::ExtractMainPoints => &["input_text"],
            Operation::Chat => &["input_text", "question"],
        }
    }

    /// Prefix of the single-request failure message, e.g. "Chat API failed".
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Script => "Script",
            Operation::Summarize => "Summarize",
            Operation::ExtractMainPoints => "Extract",
            Operation::Chat => "Chat",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BatchResult {
    Success { id: Value, response: Value },
    Failure { id: Value, error: String },
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub results: Vec<BatchResult>,
}

#[derive(Debug, Serialize)]
pub struct GatewayErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl GatewayErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}
