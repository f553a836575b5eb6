use crate::errors::{ErrorMapper, OpenAIError, OpenAIResult};
use reqwest::Response;
use serde::de::DeserializeOwned;

pub struct ResponseParser;

impl ResponseParser {
    pub async fn parse_response(response: Response) -> OpenAIResult<serde_json::Value> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        if status.is_success() {
            Self::parse_json(&body)
        } else {
            Err(ErrorMapper::map_status_with_headers(
                status.as_u16(),
                &headers,
                &body,
            ))
        }
    }

    pub fn parse_json<T: DeserializeOwned>(data: &[u8]) -> OpenAIResult<T> {
        serde_json::from_slice(data).map_err(|e| {
            OpenAIError::Deserialization(format!(
                "Failed to deserialize JSON: {}. Data: {}",
                e,
                String::from_utf8_lossy(data)
            ))
        })
    }

    /// Converts a decoded JSON body into the typed response of a service
    pub fn from_value<T: DeserializeOwned>(value: serde_json::Value) -> OpenAIResult<T> {
        serde_json::from_value(value).map_err(|e| {
            OpenAIError::Deserialization(format!("Failed to deserialize response: {}", e))
        })
    }
}
