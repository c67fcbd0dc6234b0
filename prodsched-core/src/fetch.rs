//! Schedule page fetching.

use std::future::Future;

use crate::error::{ScheduleError, ScheduleResult};

/// Source of raw schedule page markup.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = ScheduleResult<String>>;
}

/// Fetches pages over HTTP.
///
/// The schedule site serves UTF-8 regardless of what its headers claim,
/// so bodies are decoded as UTF-8 directly.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> ScheduleResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("prodsched/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ScheduleError::Config(format!("Could not build HTTP client: {e}")))?;

        Ok(HttpFetcher { client })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> ScheduleResult<String> {
        let fail = |reason: String| ScheduleError::Fetch {
            url: url.to_string(),
            reason,
        };

        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| fail(e.to_string()))?;

        let body = response.bytes().await.map_err(|e| fail(e.to_string()))?;

        String::from_utf8(body.to_vec()).map_err(|e| fail(format!("Body is not UTF-8: {e}")))
    }
}
