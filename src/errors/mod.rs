mod categories;
mod error;
mod mapping;

pub use categories::{
    AuthenticationError, ConfigurationError, CorrelationError, DecodeError, NetworkError,
    RateLimitError, ServerError, ValidationError,
};
pub use error::{
    ErrorKind, OpenAIError, OpenAIResult, PromptError, PromptResult, VectorizeError,
    VectorizeResult,
};
pub use mapping::{ErrorMapper, OpenAIErrorDetail, OpenAIErrorResponse};
