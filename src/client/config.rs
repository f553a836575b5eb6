use crate::errors::{ConfigurationError, OpenAIResult};
use crate::transport::PathBuilder;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

/// Which flavour of the API the client talks to.
///
/// Azure OpenAI routes every operation through a deployment path and an
/// `api-version` query parameter, and authenticates with an `api-key` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provider {
    OpenAI,
    Azure { api_version: String },
}

impl Provider {
    /// Request path for `operation` (e.g. `chat/completions`) against `model`.
    ///
    /// For Azure the model name is the deployment name.
    pub fn operation_path(&self, model: &str, operation: &str) -> String {
        match self {
            Provider::OpenAI => PathBuilder::new(format!("/{operation}")).build(),
            Provider::Azure { api_version } => {
                PathBuilder::new(format!("/openai/deployments/{model}/{operation}"))
                    .query("api-version", api_version.as_str())
                    .build()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub api_key: SecretString,
    pub base_url: Url,
    pub provider: Provider,
    pub organization_id: Option<String>,
    pub project_id: Option<String>,
    pub timeout: Duration,
    pub max_connections: usize,
    pub proxy: Option<Url>,
    pub user_agent: String,
}

impl OpenAIConfig {
    /// Creates a new OpenAIConfig with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            base_url: default_base_url(),
            provider: Provider::OpenAI,
            organization_id: None,
            project_id: None,
            timeout: default_timeout(),
            max_connections: default_max_connections(),
            proxy: None,
            user_agent: default_user_agent(),
        }
    }

    /// Creates a configuration for an Azure OpenAI resource
    pub fn azure(
        api_key: impl Into<String>,
        endpoint: &str,
        api_version: impl Into<String>,
    ) -> OpenAIResult<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            ConfigurationError::InvalidBaseUrl(format!("Invalid Azure endpoint: {}", e))
        })?;

        Ok(Self {
            base_url: endpoint,
            provider: Provider::Azure {
                api_version: api_version.into(),
            },
            ..Self::new(api_key)
        })
    }

    /// Resolves a configuration from the process environment.
    ///
    /// See [`resolve_config`](crate::client::resolve_config) for the lookup order.
    pub fn from_env() -> OpenAIResult<Self> {
        crate::client::resolve_config(None, &crate::client::EnvSnapshot::from_process())
    }

    /// Validates the configuration
    pub fn validate(&self) -> OpenAIResult<()> {
        if self.api_key.expose_secret().is_empty() {
            return Err(ConfigurationError::MissingApiKey("API key is empty".to_string()).into());
        }

        if self.timeout.is_zero() {
            return Err(ConfigurationError::InvalidTimeout(
                "Timeout must be greater than 0".to_string(),
            )
            .into());
        }

        if let Provider::Azure { api_version } = &self.provider {
            if api_version.is_empty() {
                return Err(ConfigurationError::MissingConfiguration(
                    "Azure api_version must not be empty".to_string(),
                )
                .into());
            }
        }

        Ok(())
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_organization_id(mut self, org_id: impl Into<String>) -> Self {
        self.organization_id = Some(org_id.into());
        self
    }

    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_proxy(mut self, proxy: Url) -> Self {
        self.proxy = Some(proxy);
        self
    }

    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

pub(crate) fn default_base_url() -> Url {
    Url::parse("https://api.openai.com/v1").expect("static URL is valid")
}

fn default_timeout() -> Duration {
    Duration::from_secs(60)
}

fn default_max_connections() -> usize {
    100
}

fn default_user_agent() -> String {
    format!("integrations-openaivec/{}", env!("CARGO_PKG_VERSION"))
}
