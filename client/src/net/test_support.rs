//! Test doubles shared by the service and session tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::config::ApiConfig;
use super::http::{ApiClient, ApiError, HttpRequest, HttpResponse, Transport};

pub const TEST_BASE_URL: &str = "https://api.example.test/v1/";

/// Transport that records every request and replays canned responses in order.
#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
}

impl RecordingTransport {
    pub fn with_responses(responses: Vec<Result<HttpResponse, ApiError>>) -> Arc<Self> {
        Arc::new(Self { requests: Mutex::new(Vec::new()), responses: Mutex::new(responses.into()) })
    }

    pub fn replying(status: u16, body: serde_json::Value) -> Arc<Self> {
        Self::with_responses(vec![Ok(HttpResponse { status, body: body.to_string() })])
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn only_request(&self) -> HttpRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {requests:?}");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse { status: 200, body: r#"{"status":"ok"}"#.to_owned() }))
    }
}

pub fn client_with(transport: &Arc<RecordingTransport>) -> ApiClient {
    ApiClient::new(ApiConfig::new(TEST_BASE_URL), transport.clone())
}

pub fn body_json(request: &HttpRequest) -> serde_json::Value {
    serde_json::from_str(request.body.as_deref().expect("request body")).expect("json body")
}

/// Build an unsigned three-segment token whose payload encodes `claims`.
pub fn token_with_claims(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
    format!("{header}.{payload}.signature")
}
