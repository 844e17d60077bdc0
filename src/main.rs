use anyhow::Context;
use std::sync::Arc;

use vidscript::config::{http, logging, settings::ServiceSettings};
use vidscript::services::{self, acquisition::Acquisition, llm::LlmClient};
use vidscript::{service_router, shutdown_signal, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let settings = ServiceSettings::from_env()?;
    let client = http::client(settings.timeout).context("failed to build HTTP client")?;

    let provider = services::transcript_provider(settings.provider, client.clone())
        .context("failed to configure transcript provider")?;
    let llm = LlmClient::new(client).context("failed to configure LLM client")?;

    tracing::info!(
        provider = settings.provider.as_str(),
        model = llm.model(),
        timeout_secs = settings.timeout.as_secs(),
        "backend configured"
    );

    let state = AppState {
        acquisition: Acquisition::new(provider),
        llm: Arc::new(llm),
    };

    let listener = tokio::net::TcpListener::bind(settings.addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.addr))?;
    tracing::info!("backend listening on {}", settings.addr);

    axum::serve(listener, service_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
