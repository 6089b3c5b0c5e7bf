use async_trait::async_trait;
use smartriage_core::{DecisionResponse, TriageRequest};

use crate::http::{ClientError, TriageClient};

/// Anything that turns a triage request into a decision.
///
/// [`TriageClient`] is the production implementation; tests use scripted
/// services.
#[async_trait]
pub trait DecisionService: Send + Sync {
    async fn submit_triage(&self, request: &TriageRequest)
    -> Result<DecisionResponse, ClientError>;
}

#[async_trait]
impl DecisionService for TriageClient {
    async fn submit_triage(
        &self,
        request: &TriageRequest,
    ) -> Result<DecisionResponse, ClientError> {
        TriageClient::submit_triage(self, request).await
    }
}
