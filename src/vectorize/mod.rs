//! Order-preserving minibatch execution of LLM predictions and embeddings.
//!
//! Input is partitioned into minibatches, each minibatch is sent as one
//! remote call with request-local ids, and the answers are correlated back
//! by id and concatenated in input order.

mod config;
mod correlate;
mod dispatch;
mod embedding;
mod minibatch;
mod prediction;
mod schema;


pub use config::{BatchConfig, DEFAULT_BATCH_SIZE, DEFAULT_MAX_CONCURRENCY};
pub use correlate::correlate;
pub use dispatch::MinibatchDispatcher;
pub use embedding::EmbeddingOpenAI;
pub use minibatch::{assemble, map_with_minibatch, partition};
pub use prediction::VectorizedOpenAI;
pub use schema::{vectorize_system_message, Message, Request, Response};

use crate::client::OpenAIClient;
use crate::errors::VectorizeResult;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Applies `task_prompt` to every item with structured chat completions.
///
/// `output[p]` is the model's answer for `items[p]`.
pub async fn predict<T>(
    client: Arc<dyn OpenAIClient>,
    items: &[String],
    model_name: &str,
    task_prompt: &str,
    batch_size: usize,
) -> VectorizeResult<Vec<T>>
where
    T: DeserializeOwned + JsonSchema + Send + 'static,
{
    VectorizedOpenAI::<T>::new(client, model_name, task_prompt)
        .predict_minibatch(items, batch_size)
        .await
}

/// Embeds every item; `output[p]` is the vector of `items[p]`.
pub async fn embed(
    client: Arc<dyn OpenAIClient>,
    items: &[String],
    model_name: &str,
    batch_size: usize,
) -> VectorizeResult<Vec<Vec<f32>>> {
    EmbeddingOpenAI::new(client, model_name)
        .embed_minibatch(items, batch_size)
        .await
}
