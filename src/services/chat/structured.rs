use crate::errors::DecodeError;
use crate::services::chat::{ChatCompletionResponse, FinishReason};
use serde::de::DeserializeOwned;

/// Decodes the first choice of a structured-output completion into `T`.
///
/// Each way a completion can fail to carry a usable payload maps to its own
/// [`DecodeError`] variant instead of an opaque parse failure.
pub fn decode_structured<T: DeserializeOwned>(
    response: &ChatCompletionResponse,
) -> Result<T, DecodeError> {
    let choice = response.choices.first().ok_or(DecodeError::NoChoices)?;

    if let Some(refusal) = &choice.message.refusal {
        return Err(DecodeError::Refusal(refusal.clone()));
    }

    if choice.finish_reason == Some(FinishReason::Length) {
        return Err(DecodeError::Truncated);
    }

    let content = choice
        .message
        .content
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .ok_or(DecodeError::EmptyContent)?;

    serde_json::from_str(content).map_err(|e| DecodeError::InvalidJson(e.to_string()))
}
