mod http_transport;
mod path_builder;
mod response_parser;

pub use http_transport::ReqwestTransport;
pub use path_builder::PathBuilder;
pub use response_parser::ResponseParser;

use crate::errors::OpenAIResult;
use async_trait::async_trait;
use http::{HeaderMap, Method};

/// JSON-over-HTTP transport used by every service.
///
/// Non-2xx responses are mapped to [`OpenAIError`](crate::errors::OpenAIError)
/// by the implementation; callers only see decoded JSON or an error.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        headers: HeaderMap,
    ) -> OpenAIResult<serde_json::Value>;
}
