//! Mock auth manager for testing

use crate::auth::AuthManager;
use crate::errors::{AuthenticationError, OpenAIError, OpenAIResult};
use async_trait::async_trait;
use http::HeaderMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct MockAuthManager {
    fail: bool,
    calls: Arc<AtomicUsize>,
}

impl MockAuthManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call to `apply_auth` fails with `Unauthorized`
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthManager for MockAuthManager {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> OpenAIResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(OpenAIError::Authentication(AuthenticationError::Unauthorized(
                "mock auth rejected the request".to_string(),
            )));
        }
        headers.insert(
            http::header::AUTHORIZATION,
            http::HeaderValue::from_static("Bearer test-key"),
        );
        Ok(())
    }
}
