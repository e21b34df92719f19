use crate::error::LoadTestError;
use crate::operation::Operation;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    pub status: u16,
    pub body_bytes: usize,
}

/// Sends a GET request to a fixed URL. Any non-success status is recorded as a failure.
///
/// The client owns its connection pool, sized by the run's concurrency, so separate
/// runs never share or resize a global pool.
#[derive(Debug, Clone)]
pub struct HttpOperation {
    client: Client,
    url: Url,
}

impl HttpOperation {
    pub fn new(
        url: &str,
        max_concurrency: NonZeroUsize,
        timeout: Duration,
    ) -> Result<Self, LoadTestError> {
        let url = Url::parse(url).map_err(|e| LoadTestError::InvalidUrl(format!("{url}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(LoadTestError::InvalidUrl(format!(
                "{url}: unsupported scheme '{}'",
                url.scheme()
            )));
        }
        let client = Client::builder()
            .pool_max_idle_per_host(max_concurrency.get())
            .timeout(timeout)
            .build()?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl Operation for HttpOperation {
    type Output = HttpResponse;
    type Error = String;

    async fn execute(&self, _request_id: u64) -> Result<HttpResponse, String> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = response.status();
        let body = response.bytes().await.map_err(|e| e.to_string())?;
        if !status.is_success() {
            return Err(format!("HTTP {status}"));
        }
        Ok(HttpResponse {
            status: status.as_u16(),
            body_bytes: body.len(),
        })
    }

    fn describe(&self) -> String {
        format!("GET {}", self.url)
    }
}
