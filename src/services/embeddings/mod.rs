mod service;
mod types;
mod validation;


pub use service::{EmbeddingsService, EmbeddingsServiceImpl};
pub use types::{Embedding, EmbeddingInput, EmbeddingsRequest, EmbeddingsResponse};
pub use validation::EmbeddingsRequestValidator;
