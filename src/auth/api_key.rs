use crate::auth::AuthManager;
use crate::client::{OpenAIConfig, Provider};
use crate::errors::{AuthenticationError, OpenAIError, OpenAIResult};
use async_trait::async_trait;
use http::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

/// How the API key is attached to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Bearer <key>` (OpenAI)
    Bearer,
    /// `api-key: <key>` (Azure OpenAI)
    ApiKeyHeader,
}

/// API key authentication for OpenAI and Azure OpenAI
pub struct ApiKeyAuth {
    api_key: SecretString,
    scheme: AuthScheme,
    organization_id: Option<String>,
    project_id: Option<String>,
}

impl ApiKeyAuth {
    pub fn new(api_key: impl Into<String>, scheme: AuthScheme) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            scheme,
            organization_id: None,
            project_id: None,
        }
    }

    /// Creates the authenticator matching the configured provider
    pub fn from_config(config: &OpenAIConfig) -> Self {
        let scheme = match config.provider {
            Provider::OpenAI => AuthScheme::Bearer,
            Provider::Azure { .. } => AuthScheme::ApiKeyHeader,
        };

        Self {
            api_key: config.api_key.clone(),
            scheme,
            organization_id: config.organization_id.clone(),
            project_id: config.project_id.clone(),
        }
    }

    pub fn with_organization(mut self, org_id: impl Into<String>) -> Self {
        self.organization_id = Some(org_id.into());
        self
    }

    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    fn header_value(value: &str, error: AuthenticationError) -> OpenAIResult<HeaderValue> {
        let mut header = HeaderValue::from_str(value).map_err(|_| OpenAIError::Authentication(error))?;
        header.set_sensitive(true);
        Ok(header)
    }
}

#[async_trait]
impl AuthManager for ApiKeyAuth {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> OpenAIResult<()> {
        let api_key = self.api_key.expose_secret();

        if api_key.is_empty() {
            return Err(OpenAIError::Authentication(AuthenticationError::InvalidApiKey(
                "API key is empty".to_string(),
            )));
        }

        let invalid_key =
            || AuthenticationError::InvalidApiKey("API key is not a valid header value".to_string());

        match self.scheme {
            AuthScheme::Bearer => {
                let value = Self::header_value(&format!("Bearer {}", api_key), invalid_key())?;
                headers.insert(http::header::AUTHORIZATION, value);
            }
            AuthScheme::ApiKeyHeader => {
                let value = Self::header_value(api_key, invalid_key())?;
                headers.insert("api-key", value);
            }
        }

        if let Some(org_id) = &self.organization_id {
            let value = Self::header_value(
                org_id,
                AuthenticationError::InvalidOrganizationId("Invalid organization ID format".to_string()),
            )?;
            headers.insert("OpenAI-Organization", value);
        }

        if let Some(project_id) = &self.project_id {
            let value = Self::header_value(
                project_id,
                AuthenticationError::InvalidProjectId("Invalid project ID format".to_string()),
            )?;
            headers.insert("OpenAI-Project", value);
        }

        Ok(())
    }
}
