use crate::errors::{OpenAIError, OpenAIResult, ValidationError};
use crate::services::chat::{ChatCompletionRequest, ResponseFormat};

pub struct ChatRequestValidator;

impl ChatRequestValidator {
    pub fn validate(request: &ChatCompletionRequest) -> OpenAIResult<()> {
        if request.messages.is_empty() {
            return Err(OpenAIError::Validation(
                ValidationError::MissingRequiredField("messages".to_string()),
            ));
        }

        if request.model.is_empty() {
            return Err(OpenAIError::Validation(
                ValidationError::MissingRequiredField("model".to_string()),
            ));
        }

        if let Some(temperature) = request.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(OpenAIError::Validation(ValidationError::ValueOutOfRange {
                    field: "temperature".to_string(),
                    min: "0.0".to_string(),
                    max: "2.0".to_string(),
                    value: temperature.to_string(),
                }));
            }
        }

        if let Some(top_p) = request.top_p {
            if !(0.0..=1.0).contains(&top_p) {
                return Err(OpenAIError::Validation(ValidationError::ValueOutOfRange {
                    field: "top_p".to_string(),
                    min: "0.0".to_string(),
                    max: "1.0".to_string(),
                    value: top_p.to_string(),
                }));
            }
        }

        if let Some(ResponseFormat::JsonSchema { json_schema }) = &request.response_format {
            if json_schema.name.is_empty() {
                return Err(OpenAIError::Validation(
                    ValidationError::MissingRequiredField("response_format.json_schema.name".to_string()),
                ));
            }
        }

        Ok(())
    }
}
