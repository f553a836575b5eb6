use crate::auth::AuthManager;
use crate::client::Provider;
use crate::errors::OpenAIResult;
use crate::services::chat::{ChatCompletionRequest, ChatCompletionResponse, ChatRequestValidator};
use crate::transport::{HttpTransport, ResponseParser};
use async_trait::async_trait;
use http::Method;
use std::sync::Arc;
use tracing::instrument;

#[async_trait]
pub trait ChatCompletionService: Send + Sync {
    async fn create(&self, request: ChatCompletionRequest) -> OpenAIResult<ChatCompletionResponse>;
}

pub struct ChatCompletionServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
    provider: Provider,
}

impl ChatCompletionServiceImpl {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
        provider: Provider,
    ) -> Self {
        Self {
            transport,
            auth_manager,
            provider,
        }
    }
}

#[async_trait]
impl ChatCompletionService for ChatCompletionServiceImpl {
    #[instrument(skip(self, request), fields(model = %request.model, messages = request.messages.len()))]
    async fn create(&self, request: ChatCompletionRequest) -> OpenAIResult<ChatCompletionResponse> {
        ChatRequestValidator::validate(&request)?;

        let mut headers = http::HeaderMap::new();
        self.auth_manager.apply_auth(&mut headers).await?;

        let path = self.provider.operation_path(&request.model, "chat/completions");
        let body = serde_json::to_value(&request)?;

        let value = self
            .transport
            .request(Method::POST, &path, Some(body), headers)
            .await?;

        ResponseParser::from_value(value)
    }
}
