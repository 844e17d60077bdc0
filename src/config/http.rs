use reqwest::Client;
use std::time::Duration;

/// Shared outbound client. One per process, cloned into every service that
/// makes downstream calls.
pub fn client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .user_agent(concat!("vidscript/", env!("CARGO_PKG_VERSION")))
        .build()
}
