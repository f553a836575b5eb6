mod api_key;

pub use api_key::{ApiKeyAuth, AuthScheme};

use crate::errors::OpenAIResult;
use async_trait::async_trait;
use http::HeaderMap;

/// Trait for managing authentication in requests
#[async_trait]
pub trait AuthManager: Send + Sync {
    /// Applies authentication headers to the request
    async fn apply_auth(&self, headers: &mut HeaderMap) -> OpenAIResult<()>;
}
