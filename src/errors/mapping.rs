use crate::errors::{
    AuthenticationError, OpenAIError, RateLimitError, ServerError, ValidationError,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct OpenAIErrorResponse {
    pub error: OpenAIErrorDetail,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct OpenAIErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub code: Option<String>,
    pub param: Option<String>,
}

pub struct ErrorMapper;

impl ErrorMapper {
    /// Maps HTTP status code and error response to OpenAIError
    pub fn map_status_code(
        status_code: u16,
        error_response: Option<OpenAIErrorResponse>,
    ) -> OpenAIError {
        let error_detail = error_response.map(|r| r.error);
        let message = error_detail
            .as_ref()
            .map(|d| d.message.clone())
            .unwrap_or_else(|| format!("HTTP error: {}", status_code));
        let error_type = error_detail.as_ref().and_then(|d| d.error_type.clone());
        let error_code = error_detail.as_ref().and_then(|d| d.code.clone());

        match status_code {
            400 => OpenAIError::Validation(ValidationError::InvalidRequest(message)),
            401 => {
                if message.contains("expired") {
                    OpenAIError::Authentication(AuthenticationError::ExpiredApiKey(message))
                } else {
                    OpenAIError::Authentication(AuthenticationError::InvalidApiKey(message))
                }
            }
            403 => {
                if message.contains("permission") {
                    OpenAIError::Authentication(AuthenticationError::InsufficientPermissions(
                        message,
                    ))
                } else {
                    OpenAIError::Authentication(AuthenticationError::Unauthorized(message))
                }
            }
            429 => {
                if error_code.as_deref() == Some("insufficient_quota") {
                    OpenAIError::RateLimit(RateLimitError::QuotaExceeded(message))
                } else {
                    OpenAIError::RateLimit(RateLimitError::RateLimitExceeded { message })
                }
            }
            500 => OpenAIError::Server(ServerError::InternalError(message)),
            502 => OpenAIError::Server(ServerError::BadGateway(message)),
            503 => OpenAIError::Server(ServerError::ServiceUnavailable(message)),
            504 => OpenAIError::Server(ServerError::GatewayTimeout(message)),
            _ => OpenAIError::Request {
                status_code,
                message,
                error_type,
                error_code,
            },
        }
    }

    /// Maps a failed response, taking `retry-after` into account for 429s
    pub fn map_status_with_headers(
        status_code: u16,
        headers: &http::HeaderMap,
        body: &[u8],
    ) -> OpenAIError {
        let error_response = Self::parse_error_response(body);
        let error = Self::map_status_code(status_code, error_response);

        match (error, Self::extract_retry_after(headers)) {
            (OpenAIError::RateLimit(RateLimitError::RateLimitExceeded { message }), Some(secs)) => {
                OpenAIError::RateLimit(RateLimitError::TooManyRequests {
                    message,
                    retry_after_secs: Some(secs),
                })
            }
            (error, _) => error,
        }
    }

    /// Extracts retry-after header value in seconds
    pub fn extract_retry_after(headers: &http::HeaderMap) -> Option<u64> {
        headers
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
    }

    pub fn parse_error_response(body: &[u8]) -> Option<OpenAIErrorResponse> {
        serde_json::from_slice(body).ok()
    }
}
