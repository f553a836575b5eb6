use crate::auth::AuthManager;
use crate::client::Provider;
use crate::errors::OpenAIResult;
use crate::services::embeddings::{EmbeddingsRequest, EmbeddingsRequestValidator, EmbeddingsResponse};
use crate::transport::{HttpTransport, ResponseParser};
use async_trait::async_trait;
use http::Method;
use std::sync::Arc;
use tracing::instrument;

#[async_trait]
pub trait EmbeddingsService: Send + Sync {
    async fn create(&self, request: EmbeddingsRequest) -> OpenAIResult<EmbeddingsResponse>;
}

pub struct EmbeddingsServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
    provider: Provider,
}

impl EmbeddingsServiceImpl {
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
impl EmbeddingsService for EmbeddingsServiceImpl {
    #[instrument(skip(self, request), fields(model = %request.model, inputs = request.input.len()))]
    async fn create(&self, request: EmbeddingsRequest) -> OpenAIResult<EmbeddingsResponse> {
        EmbeddingsRequestValidator::validate(&request)?;

        let mut headers = http::HeaderMap::new();
        self.auth_manager.apply_auth(&mut headers).await?;

        let path = self.provider.operation_path(&request.model, "embeddings");
        let body = serde_json::to_value(&request)?;

        let value = self
            .transport
            .request(Method::POST, &path, Some(body), headers)
            .await?;

        ResponseParser::from_value(value)
    }
}
