//! Remote text-classification models
//!
//! A [`ModelBackend`] fetches raw `{label, score}` candidates for a text; the
//! [`RemoteModelClassifier`] wraps one backend as a strategy in the arbitration
//! chain, applying the per-call timeout and candidate interpretation.

use crate::classifier::{Classifier, ClassifierTier};
use crate::config::SentimentConfig;
use crate::interpret::{interpret, rank};
use crate::observability::{MODEL_FAILURES, REMOTE_LATENCY};
use async_trait::async_trait;
use commentpulse_core::{Candidate, ClassificationOutcome, Error, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Source of raw candidates for a single model
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Request candidates for `text`. An empty candidate list is an error.
    async fn infer(&self, text: &str) -> Result<Vec<Candidate>>;

    /// Model name, used in logs and outcome sources
    fn model(&self) -> &str;
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    options: InferenceOptions,
}

#[derive(Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

/// Text-classification responses come nested per input or flat
#[derive(Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Nested(Vec<Vec<Candidate>>),
    Flat(Vec<Candidate>),
}

impl InferenceResponse {
    fn into_candidates(self) -> Vec<Candidate> {
        match self {
            Self::Nested(batches) => batches.into_iter().next().unwrap_or_default(),
            Self::Flat(candidates) => candidates,
        }
    }
}

/// HTTP backend for a hosted inference API (`POST {endpoint}/{model}`)
pub struct HttpInferenceBackend {
    client: reqwest::Client,
    model: String,
    url: String,
    api_token: Option<String>,
    wait_for_model: bool,
}

impl HttpInferenceBackend {
    pub fn new(client: reqwest::Client, endpoint: &str, model: impl Into<String>) -> Self {
        let model = model.into();
        let url = format!("{}/{}", endpoint.trim_end_matches('/'), model);
        Self {
            client,
            model,
            url,
            api_token: None,
            wait_for_model: true,
        }
    }

    /// Build a backend for `model` using the endpoint and auth from `config`
    pub fn from_config(client: reqwest::Client, config: &SentimentConfig, model: &str) -> Self {
        Self::new(client, &config.endpoint, model)
            .with_api_token(config.api_token.clone())
            .with_wait_for_model(config.wait_for_model)
    }

    pub fn with_api_token(mut self, token: Option<String>) -> Self {
        self.api_token = token;
        self
    }

    pub fn with_wait_for_model(mut self, wait: bool) -> Self {
        self.wait_for_model = wait;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ModelBackend for HttpInferenceBackend {
    async fn infer(&self, text: &str) -> Result<Vec<Candidate>> {
        let body = InferenceRequest {
            inputs: text,
            options: InferenceOptions {
                wait_for_model: self.wait_for_model,
            },
        };

        let mut request = self.client.post(&self.url).json(&body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::remote(format!("{}: request failed: {e}", self.model)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::remote(format!("{} returned {status}", self.model)));
        }

        let payload = response
            .bytes()
            .await
            .map_err(|e| Error::remote(format!("{}: failed to read response: {e}", self.model)))?;
        let candidates = serde_json::from_slice::<InferenceResponse>(&payload)?.into_candidates();

        if candidates.is_empty() {
            return Err(Error::remote(format!("{} returned no candidates", self.model)));
        }

        Ok(candidates)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// A remote model as one strategy of the arbitration chain
pub struct RemoteModelClassifier {
    backend: Arc<dyn ModelBackend>,
    timeout: Duration,
}

impl RemoteModelClassifier {
    pub fn new(backend: Arc<dyn ModelBackend>, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    fn record_failure(&self) {
        metrics::counter!(MODEL_FAILURES, "model" => self.backend.model().to_string()).increment(1);
    }
}

#[async_trait]
impl Classifier for RemoteModelClassifier {
    async fn attempt(&self, text: &str) -> Option<ClassificationOutcome> {
        let model = self.backend.model();
        let start = Instant::now();

        let candidates = match tokio::time::timeout(self.timeout, self.backend.infer(text)).await {
            Ok(Ok(candidates)) => candidates,
            Ok(Err(e)) => {
                warn!(model, error = %e, "Remote model attempt failed");
                self.record_failure();
                return None;
            }
            Err(_) => {
                warn!(
                    model,
                    error = %Error::Timeout,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Remote model attempt failed"
                );
                self.record_failure();
                return None;
            }
        };

        metrics::histogram!(REMOTE_LATENCY, "model" => model.to_string())
            .record(start.elapsed().as_micros() as f64);

        let ranked = rank(candidates);
        let (label, confidence) = interpret(text, &ranked)?;
        debug!(model, %label, confidence, "Remote model answered");

        Some(ClassificationOutcome::from_model(label, confidence, model))
    }

    fn name(&self) -> &str {
        self.backend.model()
    }

    fn tier(&self) -> ClassifierTier {
        ClassifierTier::Remote
    }
}
