mod client_impl;
mod config;
mod factory;
mod resolve;

pub use client_impl::OpenAIClientImpl;
pub use config::{OpenAIConfig, Provider};
pub use factory::OpenAIClientBuilder;
pub use resolve::{
    resolve_config, EnvSnapshot, AZURE_OPENAI_API_KEY, AZURE_OPENAI_API_VERSION,
    AZURE_OPENAI_ENDPOINT, OPENAI_API_KEY, OPENAI_BASE_URL, OPENAI_ORGANIZATION_ID,
    OPENAI_PROJECT_ID,
};

use crate::services::{chat::ChatCompletionService, embeddings::EmbeddingsService};

/// Handle to the remote model API, shared read-only by every minibatch.
pub trait OpenAIClient: Send + Sync {
    fn chat(&self) -> &dyn ChatCompletionService;
    fn embeddings(&self) -> &dyn EmbeddingsService;
    fn config(&self) -> &OpenAIConfig;
}
