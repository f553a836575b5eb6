use crate::errors::categories::{
    AuthenticationError, ConfigurationError, CorrelationError, DecodeError, NetworkError,
    RateLimitError, ServerError, ValidationError,
};
use thiserror::Error;

pub type OpenAIResult<T> = Result<T, OpenAIError>;

/// Errors raised by the client capability: transport, HTTP status mapping and
/// payload decoding.
#[derive(Error, Debug)]
pub enum OpenAIError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Rate limit error: {0}")]
    RateLimit(#[from] RateLimitError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Request error: {status_code} - {message}")]
    Request {
        status_code: u16,
        message: String,
        error_type: Option<String>,
        error_code: Option<String>,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Timeout error: {0}")]
    Timeout(String),
}

impl OpenAIError {
    pub fn rate_limit(message: impl Into<String>) -> Self {
        OpenAIError::RateLimit(RateLimitError::RateLimitExceeded {
            message: message.into(),
        })
    }

    pub fn server(message: impl Into<String>) -> Self {
        OpenAIError::Server(ServerError::InternalError(message.into()))
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        OpenAIError::Validation(ValidationError::InvalidRequest(message.into()))
    }

    pub fn is_authentication_error(&self) -> bool {
        matches!(self, OpenAIError::Authentication(_))
    }

    pub fn is_rate_limit_error(&self) -> bool {
        matches!(self, OpenAIError::RateLimit(_))
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            OpenAIError::Request { status_code, .. } => Some(*status_code),
            OpenAIError::Authentication(_) => Some(401),
            OpenAIError::RateLimit(_) => Some(429),
            OpenAIError::Server(ServerError::InternalError(_)) => Some(500),
            OpenAIError::Server(ServerError::BadGateway(_)) => Some(502),
            OpenAIError::Server(ServerError::ServiceUnavailable(_)) => Some(503),
            OpenAIError::Server(ServerError::GatewayTimeout(_)) => Some(504),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for OpenAIError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OpenAIError::Timeout(err.to_string())
        } else if err.is_connect() {
            OpenAIError::Network(NetworkError::ConnectionFailed(err.to_string()))
        } else if err.is_decode() {
            OpenAIError::Deserialization(err.to_string())
        } else {
            OpenAIError::Network(NetworkError::RequestFailed(err.to_string()))
        }
    }
}

impl From<serde_json::Error> for OpenAIError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            OpenAIError::Deserialization(err.to_string())
        } else {
            OpenAIError::Serialization(err.to_string())
        }
    }
}

impl From<url::ParseError> for OpenAIError {
    fn from(err: url::ParseError) -> Self {
        OpenAIError::Configuration(ConfigurationError::InvalidBaseUrl(err.to_string()))
    }
}

pub type VectorizeResult<T> = Result<T, VectorizeError>;

/// Coarse classification of a [`VectorizeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Dispatch,
    Correlation,
}

/// Errors surfaced by the minibatch engine.
///
/// The whole mapped call fails on the first failing minibatch; the
/// `batch_index` names the chunk (0-based, in input order) that failed.
#[derive(Error, Debug)]
pub enum VectorizeError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Dispatch error in minibatch {batch_index}: {source}")]
    Dispatch {
        batch_index: usize,
        #[source]
        source: OpenAIError,
    },

    #[error("Correlation error in minibatch {batch_index}: {source}")]
    Correlation {
        batch_index: usize,
        #[source]
        source: CorrelationError,
    },
}

impl VectorizeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VectorizeError::Configuration(_) => ErrorKind::Configuration,
            VectorizeError::Dispatch { .. } => ErrorKind::Dispatch,
            VectorizeError::Correlation { .. } => ErrorKind::Correlation,
        }
    }

    pub fn batch_index(&self) -> Option<usize> {
        match self {
            VectorizeError::Configuration(_) => None,
            VectorizeError::Dispatch { batch_index, .. }
            | VectorizeError::Correlation { batch_index, .. } => Some(*batch_index),
        }
    }

    /// Adapter for `map_err` that tags a client error with its minibatch.
    pub(crate) fn dispatch(batch_index: usize) -> impl FnOnce(OpenAIError) -> Self {
        move |source| VectorizeError::Dispatch {
            batch_index,
            source,
        }
    }
}

pub type PromptResult<T> = Result<T, PromptError>;

/// Errors raised while building or enhancing a few-shot prompt.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Purpose is required.")]
    MissingPurpose,

    #[error("At least one example is required.")]
    MissingExamples,

    #[error("At least {required} examples are required to enhance the prompt.")]
    TooFewExamples { required: usize, actual: usize },

    #[error("Failed to render prompt: {0}")]
    Render(String),

    #[error(transparent)]
    Client(#[from] OpenAIError),
}
