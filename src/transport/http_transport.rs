use crate::client::OpenAIConfig;
use crate::errors::{ConfigurationError, NetworkError, OpenAIError, OpenAIResult};
use crate::transport::{HttpTransport, ResponseParser};
use async_trait::async_trait;
use http::{HeaderMap, Method};
use reqwest::Client;
use tracing::instrument;
use url::Url;

/// HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
    default_headers: HeaderMap,
}

impl ReqwestTransport {
    /// Creates a new ReqwestTransport from configuration
    pub fn new(config: &OpenAIConfig) -> OpenAIResult<Self> {
        let mut client_builder = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(config.max_connections)
            .user_agent(&config.user_agent);

        if let Some(proxy_url) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url.as_str()).map_err(|e| {
                ConfigurationError::InvalidBaseUrl(format!("Invalid proxy URL: {}", e))
            })?;
            client_builder = client_builder.proxy(proxy);
        }

        let client = client_builder.build().map_err(|e| {
            OpenAIError::Network(NetworkError::ConnectionFailed(format!(
                "Failed to build HTTP client: {}",
                e
            )))
        })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            default_headers: HeaderMap::new(),
        })
    }

    /// Sets default headers to include in all requests
    pub fn with_default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = headers;
        self
    }

    /// Builds a full URL from a path
    fn build_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// Merges default headers with request-specific headers
    fn merge_headers(&self, request_headers: HeaderMap) -> HeaderMap {
        let mut headers = self.default_headers.clone();
        for (key, value) in request_headers.iter() {
            headers.insert(key.clone(), value.clone());
        }
        headers
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, method, body, headers), fields(method = %method))]
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        headers: HeaderMap,
    ) -> OpenAIResult<serde_json::Value> {
        let url = self.build_url(path);

        let mut request = self
            .client
            .request(method, &url)
            .headers(self.merge_headers(headers));

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        tracing::debug!(status = response.status().as_u16(), "Response received");
        ResponseParser::parse_response(response).await
    }
}
