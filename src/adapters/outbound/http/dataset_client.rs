use crate::dashboard::domain::PackageRecord;
use crate::ports::outbound::{parse_dataset, DatasetSource};
use crate::shared::error::DashboardError;
use crate::shared::Result;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::CACHE_CONTROL;
use std::time::Duration;

/// HttpDatasetSource adapter for fetching the dataset over HTTP
///
/// Every load appends a fresh cache-busting query parameter and sends
/// `Cache-Control: no-store`, so a stale copy is never served between
/// scheduled refreshes. A failed fetch is reported once and retried only
/// at the next refresh cycle; there is no in-cycle retry loop.
pub struct HttpDatasetSource {
    client: reqwest::Client,
    url: String,
}

impl HttpDatasetSource {
    /// Creates a new HTTP dataset source with default configuration
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("pkgdash/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Appends the cache-busting parameter to the dataset URL
    fn cache_busted_url(&self, timestamp_millis: i64) -> String {
        if self.url.contains('?') {
            format!("{}&t={}", self.url, timestamp_millis)
        } else {
            format!("{}?t={}", self.url, timestamp_millis)
        }
    }
}

#[async_trait]
impl DatasetSource for HttpDatasetSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn load(&self) -> Result<Vec<PackageRecord>> {
        let url = self.cache_busted_url(Utc::now().timestamp_millis());

        let response = self
            .client
            .get(&url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| DashboardError::DatasetFetch {
                url: self.url.clone(),
                details: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(DashboardError::DatasetFetch {
                url: self.url.clone(),
                details: format!("server returned status {}", response.status()),
            }
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::DatasetFetch {
                url: self.url.clone(),
                details: e.to_string(),
            })?;

        parse_dataset(&body).map_err(|e| {
            DashboardError::DatasetParse {
                source_name: self.url.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
