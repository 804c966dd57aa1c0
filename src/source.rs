//! Page fetching.
//!
//! [`PageSource`] is the seam between the pipeline and the network: the
//! builder only ever asks for the markup behind a URL. [`HttpSource`] is
//! the real implementation on top of `reqwest`.

use crate::config::{HttpConfig, ScrapingConfig};
use crate::error::ScraperError;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use url::Url;

/// Something that can hand out the markup of a page.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches the raw markup at `url`.
    async fn fetch(&self, url: &str) -> Result<String, ScraperError>;
}

/// Builds the HTTP client used for every request.
///
/// Requests time out after `timeout_sec`; redirects follow reqwest's
/// default policy and nothing is retried.
pub fn create_http_client(config: &HttpConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_sec))
        .build()
}

/// Fetches pages over HTTP(S).
pub struct HttpSource {
    client: reqwest::Client,
    config: ScrapingConfig,
}

impl HttpSource {
    /// Creates a source with a client built from `http`.
    pub fn new(http: &HttpConfig, config: ScrapingConfig) -> Result<Self, ScraperError> {
        Ok(Self {
            client: create_http_client(http)?,
            config,
        })
    }
}

#[async_trait]
impl PageSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        let parsed = Url::parse(url).map_err(|_| ScraperError::InvalidUrl(url.to_string()))?;

        let response = self.client.get(parsed).send().await?;
        let status = response.status();

        if self.config.debug {
            eprintln!("[Fetch Debug] GET {} -> {}", url, status);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(ScraperError::NotFound(url.to_string()));
        }

        let text = response.error_for_status()?.text().await?;

        if self.config.debug {
            eprintln!("[Fetch Debug] {} bytes from {}", text.len(), url);
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_with_defaults() {
        assert!(create_http_client(&HttpConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_invalid_url_is_rejected_before_sending() {
        let source = HttpSource::new(&HttpConfig::default(), ScrapingConfig::default()).unwrap();

        let err = source.fetch("not a url").await.unwrap_err();
        assert!(matches!(err, ScraperError::InvalidUrl(u) if u == "not a url"));
    }
}
