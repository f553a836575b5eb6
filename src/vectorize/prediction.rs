use crate::client::OpenAIClient;
use crate::errors::{VectorizeError, VectorizeResult};
use crate::services::chat::{
    decode_structured, ChatCompletionRequest, ChatMessage, ResponseFormat,
};
use crate::vectorize::{
    correlate, map_with_minibatch, vectorize_system_message, BatchConfig, MinibatchDispatcher,
    Request, Response,
};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{instrument, warn};

/// Applies one task prompt to every item of a text collection through
/// structured chat completions, one call per minibatch.
///
/// `T` is the per-item answer type. It must produce a schema accepted by
/// strict structured outputs, i.e. plain objects need
/// `#[serde(deny_unknown_fields)]` and no optional fields.
pub struct VectorizedOpenAI<T = String> {
    client: Arc<dyn OpenAIClient>,
    model_name: String,
    system_message: String,
    config: BatchConfig,
    response_format: ResponseFormat,
    _output: PhantomData<fn() -> T>,
}

impl<T> VectorizedOpenAI<T>
where
    T: DeserializeOwned + JsonSchema + Send + 'static,
{
    /// `model_name` is the deployment name when the client targets Azure.
    pub fn new(
        client: Arc<dyn OpenAIClient>,
        model_name: impl Into<String>,
        task_prompt: &str,
    ) -> Self {
        Self {
            client,
            model_name: model_name.into(),
            system_message: vectorize_system_message(task_prompt),
            config: BatchConfig::default(),
            response_format: ResponseFormat::json_schema::<Response<T>>("Response"),
            _output: PhantomData,
        }
    }

    /// Replaces the batching and sampling configuration.
    pub fn with_config(mut self, config: BatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the sampling temperature (0.0 to 2.0).
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.config.temperature = temperature;
        self
    }

    /// Sets nucleus sampling (0.0 to 1.0).
    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.config.top_p = top_p;
        self
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Sends all of `user_messages` as a single minibatch.
    pub async fn predict(&self, user_messages: Vec<String>) -> VectorizeResult<Vec<T>> {
        self.config.validate()?;
        if user_messages.is_empty() {
            return Ok(Vec::new());
        }
        self.dispatch(0, &user_messages).await
    }

    /// Sends `user_messages` in minibatches of at most `batch_size` items.
    ///
    /// The output has one entry per input, in input order.
    pub async fn predict_minibatch(
        &self,
        user_messages: &[String],
        batch_size: usize,
    ) -> VectorizeResult<Vec<T>> {
        self.config.clone().with_batch_size(batch_size).validate()?;
        map_with_minibatch(self, user_messages, batch_size, self.config.max_concurrency).await
    }

    /// [`predict_minibatch`](Self::predict_minibatch) with the configured batch size.
    pub async fn predict_all(&self, user_messages: &[String]) -> VectorizeResult<Vec<T>> {
        self.predict_minibatch(user_messages, self.config.batch_size)
            .await
    }

    fn build_request(&self, chunk: &[String]) -> serde_json::Result<ChatCompletionRequest> {
        let user_message = serde_json::to_string(&Request::from_texts(chunk))?;

        Ok(ChatCompletionRequest::new(
            self.model_name.clone(),
            vec![
                ChatMessage::system(self.system_message.clone()),
                ChatMessage::user(user_message),
            ],
        )
        .with_temperature(self.config.temperature)
        .with_top_p(self.config.top_p)
        .with_response_format(self.response_format.clone()))
    }
}

#[async_trait]
impl<T> MinibatchDispatcher for VectorizedOpenAI<T>
where
    T: DeserializeOwned + JsonSchema + Send + 'static,
{
    type Output = T;

    #[instrument(skip(self, chunk), fields(model = %self.model_name, chunk_len = chunk.len()))]
    async fn dispatch(&self, batch_index: usize, chunk: &[String]) -> VectorizeResult<Vec<T>> {
        let request = self
            .build_request(chunk)
            .map_err(|e| VectorizeError::dispatch(batch_index)(e.into()))?;

        let completion = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(VectorizeError::dispatch(batch_index))?;

        let response: Response<T> = decode_structured(&completion)
            .map_err(|e| VectorizeError::dispatch(batch_index)(e.into()))?;

        let entries = response
            .assistant_messages
            .into_iter()
            .map(|message| (message.id, message.text));

        correlate(chunk.len(), entries).map_err(|source| {
            warn!(error = %source, "Response ids do not match the minibatch");
            VectorizeError::Correlation {
                batch_index,
                source,
            }
        })
    }
}
