//! Mock HTTP transport for testing

use crate::errors::{OpenAIError, OpenAIResult};
use crate::transport::HttpTransport;
use async_trait::async_trait;
use http::{HeaderMap, Method};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

type Handler = Arc<dyn Fn(&str, Option<&serde_json::Value>) -> OpenAIResult<serde_json::Value> + Send + Sync>;

/// Mock HTTP transport that replays queued responses, falling back to a
/// handler that can compute a response from the request body.
#[derive(Clone)]
pub struct MockHttpTransport {
    inner: Arc<Mutex<MockHttpTransportInner>>,
}

struct MockHttpTransportInner {
    responses: VecDeque<MockResponse>,
    handler: Option<Handler>,
    requests: Vec<MockRequest>,
}

#[derive(Debug, Clone)]
pub struct MockRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub headers: HeaderMap,
}

enum MockResponse {
    Json(serde_json::Value),
    Error(OpenAIError),
}

impl MockHttpTransport {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockHttpTransportInner {
                responses: VecDeque::new(),
                handler: None,
                requests: Vec::new(),
            })),
        }
    }

    /// Add a successful JSON response
    pub fn with_json_response(self, response: serde_json::Value) -> Self {
        self.inner
            .lock()
            .unwrap()
            .responses
            .push_back(MockResponse::Json(response));
        self
    }

    /// Add an error response
    pub fn with_error_response(self, error: OpenAIError) -> Self {
        self.inner
            .lock()
            .unwrap()
            .responses
            .push_back(MockResponse::Error(error));
        self
    }

    /// Answer every request not covered by a queued response with `handler`
    pub fn with_handler<F>(self, handler: F) -> Self
    where
        F: Fn(&str, Option<&serde_json::Value>) -> OpenAIResult<serde_json::Value>
            + Send
            + Sync
            + 'static,
    {
        self.inner.lock().unwrap().handler = Some(Arc::new(handler));
        self
    }

    pub fn requests(&self) -> Vec<MockRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    /// Verify that a request was made with the given method and path
    pub fn verify_request(&self, method: Method, path: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .requests
            .iter()
            .any(|r| r.method == method && r.path == path)
    }

    /// Verify that a request was made with the given method, path, and body content
    pub fn verify_request_with_body(&self, method: Method, path: &str, body_contains: &str) -> bool {
        self.inner.lock().unwrap().requests.iter().any(|r| {
            r.method == method
                && r.path == path
                && r.body
                    .as_ref()
                    .map(|b| b.to_string().contains(body_contains))
                    .unwrap_or(false)
        })
    }

    pub fn request_count(&self) -> usize {
        self.inner.lock().unwrap().requests.len()
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        headers: HeaderMap,
    ) -> OpenAIResult<serde_json::Value> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(MockRequest {
            method,
            path: path.to_string(),
            body: body.clone(),
            headers,
        });

        match inner.responses.pop_front() {
            Some(MockResponse::Json(json)) => Ok(json),
            Some(MockResponse::Error(err)) => Err(err),
            None => match &inner.handler {
                Some(handler) => handler(path, body.as_ref()),
                None => Err(OpenAIError::Network(
                    crate::errors::NetworkError::RequestFailed(
                        "No mock response configured".to_string(),
                    ),
                )),
            },
        }
    }
}
