//! HTTP client for the triage decision service.

use serde::Deserialize;
use smartriage_core::{DecisionResponse, TriageRequest};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-success status. The response body is deliberately not read.
    #[error("service returned {status}")]
    Status { status: u16 },
    #[error("malformed decision response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Body of the service's `GET /` health check.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Client for the decision service's `/triage` endpoint.
pub struct TriageClient {
    client: reqwest::Client,
    base_url: String,
}

impl TriageClient {
    /// Create a client for the given service base URL.
    ///
    /// `base_url` should be like `http://localhost:8000`; trailing slashes
    /// are removed.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit one triage request.
    ///
    /// Exactly one POST is made. No retries, no timeout.
    pub async fn submit_triage(
        &self,
        request: &TriageRequest,
    ) -> Result<DecisionResponse, ClientError> {
        let url = format!("{}/triage", self.base_url);

        info!(url = %url, esi = request.esi, "submitting triage request");
        // `.json()` sets `Content-Type: application/json`.
        let resp = self.client.post(&url).json(request).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        // Decode via serde_json so a malformed body is reported as `Decode`
        // rather than a transport error.
        let bytes = resp.bytes().await?;
        let decision: DecisionResponse = serde_json::from_slice(&bytes)?;
        info!(
            final_decision = %decision.final_decision,
            source = %decision.source,
            "received triage decision"
        );
        Ok(decision)
    }

    /// Query the service health endpoint.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = format!("{}/", self.base_url);

        debug!(url = %url, "checking service health");
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
