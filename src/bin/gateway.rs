use anyhow::Context;

use vidscript::config::{http, logging, settings::GatewaySettings};
use vidscript::modules::gateway::forward::Downstream;
use vidscript::{gateway_router, shutdown_signal, GatewayState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let settings = GatewaySettings::from_env()?;
    let client = http::client(settings.timeout).context("failed to build HTTP client")?;

    let state = GatewayState {
        downstream: Downstream::new(client, settings.backend_url.clone()),
    };

    let listener = tokio::net::TcpListener::bind(settings.addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.addr))?;
    tracing::info!(
        backend = %settings.backend_url,
        "gateway listening on {}",
        settings.addr
    );

    axum::serve(listener, gateway_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
