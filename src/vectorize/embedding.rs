use crate::client::OpenAIClient;
use crate::errors::{VectorizeError, VectorizeResult};
use crate::services::embeddings::EmbeddingsRequest;
use crate::vectorize::{correlate, map_with_minibatch, BatchConfig, MinibatchDispatcher};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{instrument, warn};

/// Embeds every item of a text collection, one embeddings call per minibatch.
pub struct EmbeddingOpenAI {
    client: Arc<dyn OpenAIClient>,
    model_name: String,
    dimensions: Option<u32>,
    config: BatchConfig,
}

impl EmbeddingOpenAI {
    /// `model_name` is the deployment name when the client targets Azure.
    pub fn new(client: Arc<dyn OpenAIClient>, model_name: impl Into<String>) -> Self {
        Self {
            client,
            model_name: model_name.into(),
            dimensions: None,
            config: BatchConfig::default(),
        }
    }

    /// Replaces the batching configuration.
    pub fn with_config(mut self, config: BatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Requests vectors of `dimensions` length from models that support it.
    pub fn with_dimensions(mut self, dimensions: u32) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Embeds all of `sentences` in a single call.
    pub async fn embed(&self, sentences: Vec<String>) -> VectorizeResult<Vec<Vec<f32>>> {
        self.config.validate()?;
        if sentences.is_empty() {
            return Ok(Vec::new());
        }
        self.dispatch(0, &sentences).await
    }

    /// Embeds `sentences` in minibatches of at most `batch_size` items.
    ///
    /// Row `p` of the output is the vector for `sentences[p]`.
    pub async fn embed_minibatch(
        &self,
        sentences: &[String],
        batch_size: usize,
    ) -> VectorizeResult<Vec<Vec<f32>>> {
        self.config.clone().with_batch_size(batch_size).validate()?;
        map_with_minibatch(self, sentences, batch_size, self.config.max_concurrency).await
    }

    /// [`embed_minibatch`](Self::embed_minibatch) with the configured batch size.
    pub async fn embed_all(&self, sentences: &[String]) -> VectorizeResult<Vec<Vec<f32>>> {
        self.embed_minibatch(sentences, self.config.batch_size).await
    }
}

#[async_trait]
impl MinibatchDispatcher for EmbeddingOpenAI {
    type Output = Vec<f32>;

    #[instrument(skip(self, chunk), fields(model = %self.model_name, chunk_len = chunk.len()))]
    async fn dispatch(
        &self,
        batch_index: usize,
        chunk: &[String],
    ) -> VectorizeResult<Vec<Vec<f32>>> {
        let mut request = EmbeddingsRequest::with_multiple(self.model_name.clone(), chunk.to_vec());
        request.dimensions = self.dimensions;

        let response = self
            .client
            .embeddings()
            .create(request)
            .await
            .map_err(VectorizeError::dispatch(batch_index))?;

        let entries = response
            .data
            .into_iter()
            .map(|embedding| (embedding.index, embedding.embedding));

        correlate(chunk.len(), entries).map_err(|source| {
            warn!(error = %source, "Embedding indices do not match the minibatch");
            VectorizeError::Correlation {
                batch_index,
                source,
            }
        })
    }
}
