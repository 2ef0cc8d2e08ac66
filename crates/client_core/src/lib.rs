use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::protocol::{OrderPayload, OrderResponse};
use thiserror::Error;
use tracing::{debug, warn};

pub mod config;
pub mod form;
pub mod validation;

pub use config::{load_settings, ClientSettings};
pub use form::{
    Field, FieldErrors, FieldValue, FormError, FormValues, OrderBanner, OrderForm,
    PendingSubmission, SubmissionId, SubmissionOutcome, SubmissionPhase, FAILURE_BANNER,
};
pub use validation::ValidationOutcome;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("order request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("order service rejected the order with status {status}")]
    Rejected { status: StatusCode },
    #[error("order service returned a malformed response: {0}")]
    MalformedResponse(#[source] reqwest::Error),
    #[error("order worker unavailable: {0}")]
    Unavailable(String),
}

/// Sends one order. Implementations must not retry.
#[async_trait]
pub trait OrderSubmitter: Send + Sync {
    async fn submit_order(&self, payload: &OrderPayload) -> Result<OrderResponse, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct HttpOrderClient {
    http: Client,
    order_url: String,
}

impl HttpOrderClient {
    pub fn new(order_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            order_url: order_url.into(),
        }
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, SubmitError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(SubmitError::Transport)?;
        Ok(Self {
            http,
            order_url: settings.order_url.clone(),
        })
    }

    pub fn order_url(&self) -> &str {
        &self.order_url
    }
}

#[async_trait]
impl OrderSubmitter for HttpOrderClient {
    async fn submit_order(&self, payload: &OrderPayload) -> Result<OrderResponse, SubmitError> {
        debug!(url = %self.order_url, toppings = payload.toppings.len(), "posting order");
        let res = self
            .http
            .post(&self.order_url)
            .json(payload)
            .send()
            .await
            .map_err(SubmitError::Transport)?;

        let status = res.status();
        if !status.is_success() {
            warn!(%status, "order service returned non-success status");
            return Err(SubmitError::Rejected { status });
        }

        res.json::<OrderResponse>()
            .await
            .map_err(SubmitError::MalformedResponse)
    }
}

/// Runs one full submission cycle against `form`: build the payload, send it
/// once, apply the result. Fails only when the form is not submittable.
pub async fn submit_order(
    form: &mut OrderForm,
    submitter: &dyn OrderSubmitter,
) -> Result<PendingSubmission, FormError> {
    let pending = form.begin_submission()?;
    let outcome = submitter.submit_order(&pending.payload).await;
    form.complete_submission(pending.id, outcome);
    Ok(pending)
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
