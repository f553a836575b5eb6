//! Client configuration resolution.
//!
//! Resolution is a pure function of an explicit configuration (if any) and a
//! snapshot of environment variables, so it can be exercised without touching
//! the process environment.

use crate::client::OpenAIConfig;
use crate::errors::{ConfigurationError, OpenAIResult};
use std::collections::HashMap;
use std::ffi::OsString;
use url::Url;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
pub const OPENAI_ORGANIZATION_ID: &str = "OPENAI_ORGANIZATION_ID";
pub const OPENAI_PROJECT_ID: &str = "OPENAI_PROJECT_ID";
pub const AZURE_OPENAI_API_KEY: &str = "AZURE_OPENAI_API_KEY";
pub const AZURE_OPENAI_ENDPOINT: &str = "AZURE_OPENAI_ENDPOINT";
pub const AZURE_OPENAI_API_VERSION: &str = "AZURE_OPENAI_API_VERSION";

/// Immutable copy of the environment variables relevant to client setup.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Copies the process environment. Variables whose name or value is not
    /// valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        Self::from_os_vars(std::env::vars_os())
    }

    pub fn from_os_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        vars.into_iter()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Picks the client configuration.
///
/// Order: `explicit`, then `OPENAI_API_KEY` (with optional base URL,
/// organization and project), then the three `AZURE_OPENAI_*` variables
/// together. Anything else is a [`ConfigurationError::MissingApiKey`].
pub fn resolve_config(explicit: Option<OpenAIConfig>, env: &EnvSnapshot) -> OpenAIResult<OpenAIConfig> {
    if let Some(config) = explicit {
        return Ok(config);
    }

    if let Some(api_key) = env.get(OPENAI_API_KEY) {
        let mut config = OpenAIConfig::new(api_key);

        if let Some(base_url) = env.get(OPENAI_BASE_URL) {
            let url = Url::parse(base_url).map_err(|e| {
                ConfigurationError::InvalidBaseUrl(format!("Invalid {}: {}", OPENAI_BASE_URL, e))
            })?;
            config = config.with_base_url(url);
        }

        if let Some(org_id) = env.get(OPENAI_ORGANIZATION_ID) {
            config = config.with_organization_id(org_id);
        }

        if let Some(project_id) = env.get(OPENAI_PROJECT_ID) {
            config = config.with_project_id(project_id);
        }

        return Ok(config);
    }

    if let (Some(api_key), Some(endpoint), Some(api_version)) = (
        env.get(AZURE_OPENAI_API_KEY),
        env.get(AZURE_OPENAI_ENDPOINT),
        env.get(AZURE_OPENAI_API_VERSION),
    ) {
        return OpenAIConfig::azure(api_key, endpoint, api_version);
    }

    Err(ConfigurationError::MissingApiKey(format!(
        "No OpenAI credentials found. Set {} for OpenAI, or {}, {} and {} for Azure OpenAI.",
        OPENAI_API_KEY, AZURE_OPENAI_API_KEY, AZURE_OPENAI_ENDPOINT, AZURE_OPENAI_API_VERSION
    ))
    .into())
}
