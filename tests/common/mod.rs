#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use reqwest::StatusCode;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use vidscript::services::acquisition::Acquisition;
use vidscript::services::llm::{LlmError, TextGenerator};
use vidscript::services::transcript::{CaptionMode, ProviderError, TranscriptProvider};
use vidscript::AppState;

/// Answers only for the configured (language, mode) pairs.
pub struct FakeProvider {
    hits: Vec<(&'static str, CaptionMode, &'static str)>,
    calls: AtomicUsize,
}

impl FakeProvider {
    pub fn new(hits: Vec<(&'static str, CaptionMode, &'static str)>) -> Arc<Self> {
        Arc::new(Self {
            hits,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranscriptProvider for FakeProvider {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn fetch(
        &self,
        _video_id: &str,
        language: &str,
        mode: CaptionMode,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        self.hits
            .iter()
            .find(|(lang, m, _)| *lang == language && *m == mode)
            .map(|(_, _, text)| text.to_string())
            .ok_or(ProviderError::ApiError {
                status: StatusCode::NOT_FOUND,
                message: "no captions".to_string(),
            })
    }
}

/// Returns a canned reply and keeps every prompt it was given.
pub struct FakeLlm {
    reply: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl FakeLlm {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeLlm {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().map_err(LlmError::ApiError)
    }
}

pub fn app_state(provider: Arc<FakeProvider>, llm: Arc<FakeLlm>) -> AppState {
    AppState {
        acquisition: Acquisition::new(provider),
        llm,
    }
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}
