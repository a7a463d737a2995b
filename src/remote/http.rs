use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::NewsArticle;
use crate::remote::{decode_news, RemoteError, RemoteSource};

/// Fixed news endpoint. The server always returns the full collection.
pub const NEWS_ENDPOINT: &str = "https://cbcmusic.github.io/assessment-tmp/data/data.json";

pub struct HttpRemote {
    client: Client,
    endpoint: String,
}

impl HttpRemote {
    pub fn new() -> Self {
        Self::with_endpoint(NEWS_ENDPOINT.to_string())
    }

    pub fn with_endpoint(endpoint: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .user_agent("newsreel/0.1.0")
            .build()
            .expect("Failed to build HTTP client");

        Self { client, endpoint }
    }
}

impl Default for HttpRemote {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RemoteSource for HttpRemote {
    async fn fetch_news(&self) -> Result<Vec<NewsArticle>, RemoteError> {
        tracing::debug!("GET {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|_| RemoteError::Connection)?;

        if response.status().is_server_error() {
            return Err(RemoteError::Server);
        }

        let body = response.text().await.map_err(|_| RemoteError::Parse)?;
        decode_news(&body)
    }
}
