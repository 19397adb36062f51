use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};
use serde_json::Value;
use std::fmt;
use std::time::Duration;

use crate::config::{ApiKey, ServerConfig};
use crate::error::UpstreamError;

/// An outbound GET against the recipe API, minus the API key.
///
/// Two equal requests are interchangeable, which makes this the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Request {
    segments: Vec<String>,
    params: Vec<(String, String)>,
}

impl Request {
    /// `/recipes/complexSearch`
    pub fn complex_search() -> Self {
        Self::with_segments(["recipes", "complexSearch"])
    }

    /// `/recipes/{id}/information`; the id is a single opaque path segment
    pub fn information(id: &str) -> Self {
        Self::with_segments(["recipes", id, "information"])
    }

    fn with_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> Self {
        Request {
            segments: segments.into_iter().map(str::to_string).collect(),
            params: Vec::new(),
        }
    }

    /// Append a query parameter
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments.join("/"))?;
        if !self.params.is_empty() {
            let query = serde_urlencoded::to_string(&self.params).map_err(|_| fmt::Error)?;
            write!(f, "?{query}")?;
        }
        Ok(())
    }
}

/// The capability of performing one outbound call to the recipe API
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn get(&self, request: &Request) -> Result<Value, UpstreamError>;
}

/// HTTP client for the Spoonacular API
pub struct SpoonacularClient {
    client: Client,
    api_key: ApiKey,
    base_url: String,
}

impl SpoonacularClient {
    pub fn builder() -> SpoonacularClientBuilder {
        SpoonacularClientBuilder::default()
    }

    /// Create a client from server configuration
    pub fn from_config(config: &ServerConfig, api_key: ApiKey) -> Result<Self, UpstreamError> {
        Self::builder()
            .api_key(api_key)
            .base_url(config.base_url.clone())
            .timeout(Duration::from_secs(config.timeout))
            .build()
    }

    fn url_for(&self, request: &Request) -> Result<Url, UpstreamError> {
        // `PathSegmentsMut::extend` drops dot segments instead of encoding them.
        if let Some(dots) = request.segments().iter().find(|s| *s == "." || *s == "..") {
            return Err(UpstreamError::InvalidUrl(format!("path segment {dots:?}")));
        }

        let mut url =
            Url::parse(&self.base_url).map_err(|e| UpstreamError::InvalidUrl(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| UpstreamError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(request.segments());

        url.query_pairs_mut()
            .append_pair("apiKey", self.api_key.expose())
            .extend_pairs(request.params());

        Ok(url)
    }
}

#[async_trait]
impl Upstream for SpoonacularClient {
    async fn get(&self, request: &Request) -> Result<Value, UpstreamError> {
        let url = self.url_for(request)?;
        debug!("GET {}", request);

        // reqwest errors carry the URL, which carries the key.
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            debug!("{} answered {}", request, status);
            return Err(UpstreamError::Status(status));
        }

        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Builder for [`SpoonacularClient`]
#[derive(Debug, Default)]
pub struct SpoonacularClientBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl SpoonacularClientBuilder {
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Override the API location (proxies, tests)
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<SpoonacularClient, UpstreamError> {
        let client = Client::builder()
            .timeout(self.timeout.unwrap_or(Duration::from_secs(30)))
            .user_agent(concat!("recipe-finder/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(SpoonacularClient {
            client,
            api_key: self.api_key.unwrap_or_else(|| ApiKey::new("")),
            base_url: self
                .base_url
                .unwrap_or_else(|| "https://api.spoonacular.com".to_string()),
        })
    }
}
