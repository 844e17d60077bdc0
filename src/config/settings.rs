use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_SERVICE_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_GATEWAY_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} must be set")]
    Missing { var: &'static str },
    #[error("{var}={raw:?} is not a valid {expected}")]
    Invalid {
        var: &'static str,
        raw: String,
        expected: &'static str,
    },
}

/// Which transcript backend the acquisition chain talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    YouTube,
    Supadata,
}

impl ProviderKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "youtube" | "timedtext" => Some(ProviderKind::YouTube),
            "supadata" => Some(ProviderKind::Supadata),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::YouTube => "youtube",
            ProviderKind::Supadata => "supadata",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub addr: SocketAddr,
    pub provider: ProviderKind,
    pub timeout: Duration,
}

impl ServiceSettings {
    /// Env: `SERVICE_ADDR`, `TRANSCRIPT_PROVIDER` (`youtube` | `supadata`), `HTTP_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = parse_addr("SERVICE_ADDR", DEFAULT_SERVICE_ADDR)?;

        let provider = match env::var("TRANSCRIPT_PROVIDER") {
            Ok(raw) => ProviderKind::parse(&raw).ok_or(ConfigError::Invalid {
                var: "TRANSCRIPT_PROVIDER",
                raw,
                expected: "provider (youtube, supadata)",
            })?,
            Err(_) => ProviderKind::YouTube,
        };

        Ok(Self {
            addr,
            provider,
            timeout: timeout_from_env()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub addr: SocketAddr,
    pub backend_url: String,
    pub timeout: Duration,
}

impl GatewaySettings {
    /// Env: `GATEWAY_ADDR`, `BACKEND_URL`, `HTTP_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = parse_addr("GATEWAY_ADDR", DEFAULT_GATEWAY_ADDR)?;
        let backend_url = env::var("BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        if backend_url.is_empty() {
            return Err(ConfigError::Missing { var: "BACKEND_URL" });
        }

        Ok(Self {
            addr,
            backend_url,
            timeout: timeout_from_env()?,
        })
    }
}

fn parse_addr(var: &'static str, default: &str) -> Result<SocketAddr, ConfigError> {
    let raw = env::var(var).unwrap_or_else(|_| default.to_string());
    raw.parse().map_err(|_| ConfigError::Invalid {
        var,
        raw,
        expected: "socket address",
    })
}

fn timeout_from_env() -> Result<Duration, ConfigError> {
    match env::var("HTTP_TIMEOUT_SECS") {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
            _ => Err(ConfigError::Invalid {
                var: "HTTP_TIMEOUT_SECS",
                raw,
                expected: "positive number of seconds",
            }),
        },
        Err(_) => Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
    }
}
