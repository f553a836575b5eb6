//! Integration tests using WireMock
//!
//! These run the real reqwest transport against a local mock server, covering
//! serialization, authentication headers, routing and error mapping end to end.

pub mod azure;
pub mod embeddings;
pub mod vectorize;

use integrations_openaivec::prelude::*;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockBuilder, MockServer, Request, Respond, ResponseTemplate};

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at `server` with the OpenAI provider and key `test-api-key`
pub fn openai_client(server: &MockServer) -> Arc<dyn OpenAIClient> {
    let config = OpenAIConfig::new("test-api-key").with_base_url(server.uri().parse().unwrap());
    OpenAIClientBuilder::new()
        .with_config(config)
        .build()
        .expect("Failed to build client")
}

pub fn mock_with_auth(path_matcher: &str, method_matcher: &str) -> MockBuilder {
    Mock::given(method(method_matcher))
        .and(path(path_matcher))
        .and(header("Authorization", "Bearer test-api-key"))
}

pub fn error_response(status: u16, error_body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(error_body)
}

pub fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-int",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "gpt-4o-mini-2024-07-18",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 10, "total_tokens": 20}
    })
}

/// Answers a structured minibatch request with `prefix + text` per id,
/// listing the answers in reverse id order.
pub struct ReversingResponder {
    pub prefix: &'static str,
}

impl Respond for ReversingResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        let user = body["messages"][1]["content"].as_str().unwrap();
        let envelope: serde_json::Value = serde_json::from_str(user).unwrap();

        let mut answers: Vec<serde_json::Value> = envelope["user_messages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| {
                json!({
                    "id": m["id"],
                    "text": format!("{}{}", self.prefix, m["text"].as_str().unwrap())
                })
            })
            .collect();
        answers.reverse();

        let content = json!({ "assistant_messages": answers }).to_string();
        ResponseTemplate::new(200).set_body_json(completion(&content))
    }
}

/// Embeds each input as `[len]`, listing rows in reverse index order.
pub struct ReversingEmbedder;

impl Respond for ReversingEmbedder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        let mut data: Vec<serde_json::Value> = body["input"]
            .as_array()
            .unwrap()
            .iter()
            .enumerate()
            .map(|(index, text)| {
                json!({
                    "object": "embedding",
                    "embedding": [text.as_str().unwrap().len() as f32],
                    "index": index
                })
            })
            .collect();
        data.reverse();

        ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": data,
            "model": "text-embedding-3-small",
            "usage": {"prompt_tokens": 4, "total_tokens": 4}
        }))
    }
}
