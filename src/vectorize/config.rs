use crate::errors::ConfigurationError;

pub const DEFAULT_BATCH_SIZE: usize = 128;
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Knobs of a mapped call. Validated before any minibatch is dispatched.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    /// Maximum number of items per minibatch
    pub batch_size: usize,
    /// Maximum number of minibatches in flight; `1` dispatches sequentially
    pub max_concurrency: usize,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            temperature: 0.0,
            top_p: 1.0,
        }
    }
}

impl BatchConfig {
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.batch_size == 0 {
            return Err(ConfigurationError::InvalidBatchSize(self.batch_size));
        }

        if self.max_concurrency == 0 {
            return Err(ConfigurationError::InvalidConcurrency(self.max_concurrency));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigurationError::InvalidParameter {
                parameter: "temperature".to_string(),
                reason: format!("must be between 0.0 and 2.0, got {}", self.temperature),
            });
        }

        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(ConfigurationError::InvalidParameter {
                parameter: "top_p".to_string(),
                reason: format!("must be between 0.0 and 1.0, got {}", self.top_p),
            });
        }

        Ok(())
    }
}
