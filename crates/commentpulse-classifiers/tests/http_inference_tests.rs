//! HTTP inference backend against a local mock inference service

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use commentpulse_classifiers::{
    Arbitrator, HttpInferenceBackend, LexicalScorer, ModelBackend, SentimentConfig,
};
use commentpulse_core::{Error, OutcomeSource, SentimentLabel};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Debug, Clone)]
struct RecordedRequest {
    model: String,
    authorization: Option<String>,
    body: Value,
}

#[derive(Default)]
struct MockService {
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockService {
    fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    fn calls_for(&self, model: &str) -> usize {
        self.requests.lock().iter().filter(|r| r.model == model).count()
    }
}

async fn infer(
    State(service): State<Arc<MockService>>,
    Path(model): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    service.requests.lock().push(RecordedRequest {
        model: model.clone(),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    match model.as_str() {
        "org/nested" => Json(json!([[
            {"label": "positive", "score": 0.91},
            {"label": "neutral", "score": 0.06},
            {"label": "negative", "score": 0.03}
        ]]))
        .into_response(),
        "org/flat" => Json(json!([
            {"label": "LABEL_0", "score": 0.85},
            {"label": "LABEL_1", "score": 0.10},
            {"label": "LABEL_2", "score": 0.05}
        ]))
        .into_response(),
        "org/empty" => Json(json!([])).into_response(),
        "org/garbled" => (StatusCode::OK, "model is warming up").into_response(),
        _ => (StatusCode::SERVICE_UNAVAILABLE, "unavailable").into_response(),
    }
}

/// Start the mock service, returning its `/models` endpoint
async fn spawn_service() -> (String, Arc<MockService>) {
    let service = Arc::new(MockService::default());
    let app = Router::new()
        .route("/models/*model", post(infer))
        .with_state(Arc::clone(&service));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/models"), service)
}

#[tokio::test]
async fn test_nested_response_and_request_shape() {
    let (endpoint, service) = spawn_service().await;
    let backend = HttpInferenceBackend::new(reqwest::Client::new(), &endpoint, "org/nested")
        .with_api_token(Some("hf_secret".to_string()));

    let candidates = backend.infer("great video").await.unwrap();
    assert_eq!(candidates.len(), 3);
    assert_eq!(candidates[0].label, "positive");

    let requests = service.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer hf_secret"));
    assert_eq!(
        requests[0].body,
        json!({"inputs": "great video", "options": {"wait_for_model": true}})
    );
}

#[tokio::test]
async fn test_flat_response_shape() {
    let (endpoint, service) = spawn_service().await;
    let backend = HttpInferenceBackend::new(reqwest::Client::new(), &endpoint, "org/flat")
        .with_wait_for_model(false);

    let candidates = backend.infer("meh").await.unwrap();
    assert_eq!(candidates[0].label, "LABEL_0");
    assert_eq!(service.requests()[0].authorization, None);
    assert_eq!(service.requests()[0].body["options"]["wait_for_model"], false);
}

#[tokio::test]
async fn test_failure_responses_are_errors() {
    let (endpoint, _service) = spawn_service().await;
    let client = reqwest::Client::new();

    for model in ["org/down", "org/empty"] {
        let backend = HttpInferenceBackend::new(client.clone(), &endpoint, model);
        let err = backend.infer("anything").await.unwrap_err();
        assert!(matches!(err, Error::Remote(_)), "{model}: {err}");
    }

    // a 200 with a body that is not JSON
    let garbled = HttpInferenceBackend::new(client, &endpoint, "org/garbled");
    let err = garbled.infer("anything").await.unwrap_err();
    assert!(matches!(err, Error::Serialization(_)), "{err}");
}

#[tokio::test]
async fn test_configured_chain_uses_first_healthy_model() {
    let (endpoint, service) = spawn_service().await;
    let config = SentimentConfig {
        endpoint,
        models: vec![
            "org/down".to_string(),
            "org/flat".to_string(),
            "org/nested".to_string(),
        ],
        ..SentimentConfig::default()
    };
    let arbitrator = Arbitrator::from_config(&config).unwrap();

    let outcome = arbitrator.resolve("This could have been better").await;
    assert_eq!(outcome.label, SentimentLabel::Negative);
    assert_eq!(outcome.source, OutcomeSource::Model("org/flat".to_string()));

    assert_eq!(service.calls_for("org/down"), 1);
    assert_eq!(service.calls_for("org/flat"), 1);
    assert_eq!(service.calls_for("org/nested"), 0);
}

#[tokio::test]
async fn test_configured_chain_falls_back_when_every_model_fails() {
    let (endpoint, service) = spawn_service().await;
    let config = SentimentConfig {
        endpoint,
        models: vec![
            "org/down".to_string(),
            "org/garbled".to_string(),
            "org/empty".to_string(),
        ],
        ..SentimentConfig::default()
    };
    let arbitrator = Arbitrator::from_config(&config).unwrap();
    let scorer = LexicalScorer::new().unwrap();

    let text = "I absolutely love this channel!";
    let label = arbitrator.classify(text).await;
    assert_eq!(label, scorer.classify(text));
    assert_eq!(label, SentimentLabel::Positive);
    assert_eq!(service.requests().len(), 3);

    // second call is served from the cache
    assert_eq!(arbitrator.classify(text).await, label);
    assert_eq!(service.requests().len(), 3);
}
