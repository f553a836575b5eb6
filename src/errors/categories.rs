use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),

    #[error("Missing required configuration: {0}")]
    MissingConfiguration(String),

    #[error("Invalid batch size: must be greater than 0, got {0}")]
    InvalidBatchSize(usize),

    #[error("Invalid concurrency: must be greater than 0, got {0}")]
    InvalidConcurrency(usize),

    #[error("Invalid parameter: {parameter} - {reason}")]
    InvalidParameter { parameter: String, reason: String },
}

#[derive(Error, Debug, Clone)]
pub enum AuthenticationError {
    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),

    #[error("Expired API key: {0}")]
    ExpiredApiKey(String),

    #[error("Insufficient permissions: {0}")]
    InsufficientPermissions(String),

    #[error("Invalid organization ID: {0}")]
    InvalidOrganizationId(String),

    #[error("Invalid project ID: {0}")]
    InvalidProjectId(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid parameter: {parameter} - {reason}")]
    InvalidParameter { parameter: String, reason: String },

    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: String,
        max: String,
        value: String,
    },
}

#[derive(Error, Debug, Clone)]
pub enum RateLimitError {
    #[error("Rate limit exceeded: {message}")]
    RateLimitExceeded { message: String },

    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Too many requests: {message}")]
    TooManyRequests {
        message: String,
        retry_after_secs: Option<u64>,
    },
}

impl RateLimitError {
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            RateLimitError::TooManyRequests {
                retry_after_secs, ..
            } => *retry_after_secs,
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

#[derive(Error, Debug, Clone)]
pub enum ServerError {
    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Bad gateway: {0}")]
    BadGateway(String),

    #[error("Gateway timeout: {0}")]
    GatewayTimeout(String),
}

/// Failure to turn a structured chat completion into its declared payload.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("completion contained no choices")]
    NoChoices,

    #[error("model refused to answer: {0}")]
    Refusal(String),

    #[error("completion message had no content")]
    EmptyContent,

    #[error("completion was truncated (finish_reason = length)")]
    Truncated,

    #[error("content does not match the response schema: {0}")]
    InvalidJson(String),
}

/// Mismatch between the ids sent in a minibatch and the ids the model returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CorrelationError {
    #[error("response is missing id {id} (expected ids 0..{expected_len})")]
    MissingId { id: usize, expected_len: usize },

    #[error("response contains id {id} outside of 0..{expected_len}")]
    UnexpectedId { id: usize, expected_len: usize },

    #[error("response contains id {id} more than once")]
    DuplicateId { id: usize },

    #[error("minibatch of {expected} items produced {actual} results")]
    LengthMismatch { expected: usize, actual: usize },
}
