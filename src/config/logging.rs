use tracing_subscriber::EnvFilter;

/// `RUST_LOG` overrides the default of info for this crate and tower-http,
/// warn for everything else.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("vidscript=info,gateway=info,tower_http=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
