mod service;
mod structured;
mod types;
mod validation;


pub use service::{ChatCompletionService, ChatCompletionServiceImpl};
pub use structured::decode_structured;
pub use types::{
    ChatCompletionChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
    ChatMessageRole, FinishReason, JsonSchemaFormat, ResponseFormat,
};
pub use validation::ChatRequestValidator;
