pub mod auth;
pub mod client;
pub mod errors;
pub mod observability;
pub mod prompt;
pub mod services;
pub mod transport;
pub mod types;
pub mod vectorize;

#[cfg(test)]
pub mod mocks;
#[cfg(test)]
pub mod fixtures;

pub use client::{
    resolve_config, EnvSnapshot, OpenAIClient, OpenAIClientBuilder, OpenAIClientImpl,
    OpenAIConfig, Provider,
};
pub use errors::{
    ConfigurationError, CorrelationError, DecodeError, ErrorKind, OpenAIError, OpenAIResult,
    VectorizeError, VectorizeResult,
};
pub use prompt::{FewShotPrompt, FewShotPromptBuilder};
pub use vectorize::{embed, predict, BatchConfig, EmbeddingOpenAI, VectorizedOpenAI};

pub use services::{
    chat::{ChatCompletionRequest, ChatCompletionResponse, ChatCompletionService, ChatMessage},
    embeddings::{EmbeddingsRequest, EmbeddingsResponse, EmbeddingsService},
};

pub mod prelude {
    pub use crate::client::{OpenAIClient, OpenAIClientBuilder, OpenAIConfig};
    pub use crate::errors::{OpenAIError, OpenAIResult, VectorizeError, VectorizeResult};
    pub use crate::prompt::FewShotPromptBuilder;
    pub use crate::vectorize::{BatchConfig, EmbeddingOpenAI, VectorizedOpenAI};
}
