use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::modules::gateway::schema::{BatchResult, Operation};

#[derive(Error, Debug)]
pub enum ForwardError {
    #[error("{0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Invalid JSON from backend: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    pub fn json(&self) -> Result<Value, ForwardError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// The body as JSON when it parses, otherwise as a plain string.
    pub fn details(&self) -> Value {
        self.json()
            .unwrap_or_else(|_| Value::String(self.body.clone()))
    }
}

/// Client for the backend service the gateway fronts.
#[derive(Clone)]
pub struct Downstream {
    client: Client,
    base_url: String,
}

impl Downstream {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn post(&self, path: &str, payload: &Value) -> Result<Reply, ForwardError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(path, %status, "backend replied");

        Ok(Reply { status, body })
    }
}

/// Mirrors loose truthiness: null, false, zero, and empty strings,
/// arrays or objects all count as absent.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(a)) => a.is_empty(),
        Some(Value::Object(o)) => o.is_empty(),
    }
}

/// Copies the required fields out of `item`, or names the ones that are
/// missing in declaration order.
pub fn require_fields(item: &Value, fields: &[&str]) -> Result<Value, String> {
    let missing: Vec<&str> = fields
        .iter()
        .copied()
        .filter(|field| is_blank(item.get(*field)))
        .collect();

    if !missing.is_empty() {
        return Err(format!("Missing required field(s): {}", missing.join(", ")));
    }

    let payload: Map<String, Value> = fields
        .iter()
        .filter_map(|field| item.get(*field).map(|v| (field.to_string(), v.clone())))
        .collect();

    Ok(Value::Object(payload))
}

/// Handles one batch entry. Every failure stays inside the entry.
pub async fn forward_item(downstream: &Downstream, operation: Operation, item: &Value) -> BatchResult {
    let id = item.get("id").cloned().unwrap_or(Value::Null);

    let payload = match require_fields(item, operation.required_fields()) {
        Ok(payload) => payload,
        Err(error) => return BatchResult::Failure { id, error },
    };

    let reply = match downstream.post(operation.backend_path(), &payload).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!(route = operation.route(), %id, error = %e, "batch item could not reach backend");
            return BatchResult::Failure {
                id,
                error: e.to_string(),
            };
        }
    };

    if !reply.status.is_success() {
        warn!(route = operation.route(), %id, status = %reply.status, "batch item rejected by backend");
        return BatchResult::Failure {
            id,
            error: reply.body,
        };
    }

    match reply.json() {
        Ok(response) => BatchResult::Success { id, response },
        Err(e) => BatchResult::Failure {
            id,
            error: e.to_string(),
        },
    }
}

pub async fn forward_batch(
    downstream: &Downstream,
    operation: Operation,
    items: &[Value],
) -> Vec<BatchResult> {
    let mut results = Vec::with_capacity(items.len());
    for item in items {
        results.push(forward_item(downstream, operation, item).await);
    }
    results
}
