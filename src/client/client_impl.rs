use crate::auth::AuthManager;
use crate::client::{OpenAIClient, OpenAIConfig};
use crate::services::{
    chat::{ChatCompletionService, ChatCompletionServiceImpl},
    embeddings::{EmbeddingsService, EmbeddingsServiceImpl},
};
use crate::transport::HttpTransport;
use std::sync::Arc;

pub struct OpenAIClientImpl {
    config: OpenAIConfig,
    chat_service: ChatCompletionServiceImpl,
    embeddings_service: EmbeddingsServiceImpl,
}

impl OpenAIClientImpl {
    pub fn new(
        config: OpenAIConfig,
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
    ) -> Self {
        let chat_service = ChatCompletionServiceImpl::new(
            transport.clone(),
            auth_manager.clone(),
            config.provider.clone(),
        );

        let embeddings_service =
            EmbeddingsServiceImpl::new(transport, auth_manager, config.provider.clone());

        Self {
            config,
            chat_service,
            embeddings_service,
        }
    }
}

impl OpenAIClient for OpenAIClientImpl {
    fn chat(&self) -> &dyn ChatCompletionService {
        &self.chat_service
    }

    fn embeddings(&self) -> &dyn EmbeddingsService {
        &self.embeddings_service
    }

    fn config(&self) -> &OpenAIConfig {
        &self.config
    }
}
