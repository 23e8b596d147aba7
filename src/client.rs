use async_trait::async_trait;

use crate::record::{AdRecord, NewAdRecord};
use crate::{AdboardError, Result};

/// The two operations the collection endpoint exposes. `BoardClient` is the
/// production implementation; tests drive the board against fakes.
#[async_trait]
pub trait RecordsApi: Send + Sync {
    /// Read all records, in whatever order the backend returns them.
    async fn list(&self) -> Result<Vec<AdRecord>>;

    /// Create one record. Any 2xx means success; the response body is not
    /// inspected.
    async fn create(&self, record: &NewAdRecord) -> Result<()>;
}

#[async_trait]
impl<T> RecordsApi for std::sync::Arc<T>
where
    T: RecordsApi + ?Sized,
{
    async fn list(&self) -> Result<Vec<AdRecord>> {
        (**self).list().await
    }

    async fn create(&self, record: &NewAdRecord) -> Result<()> {
        (**self).create(record).await
    }
}

/// HTTP client for one collection endpoint.
#[derive(Clone)]
pub struct BoardClient {
    http: reqwest::Client,
    base_url: String,
}

impl BoardClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .build()
            .expect("reqwest client build should not fail");

        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn ads_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if base.ends_with("/api/ads") {
            base.to_string()
        } else {
            format!("{base}/api/ads")
        }
    }
}

#[async_trait]
impl RecordsApi for BoardClient {
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<AdRecord>> {
        let response = self.http.get(self.ads_url()).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AdboardError::Api { status, body: text });
        }

        let records = serde_json::from_slice(&response.bytes().await?)?;
        Ok(records)
    }

    #[tracing::instrument(skip_all, fields(date = %record.date))]
    async fn create(&self, record: &NewAdRecord) -> Result<()> {
        let response = self.http.post(self.ads_url()).json(record).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AdboardError::Api { status, body: text });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ads_url_joins_base_and_collection_path() {
        let client = BoardClient::new("http://localhost:8080");
        assert_eq!(client.ads_url(), "http://localhost:8080/api/ads");

        let trailing = BoardClient::new("http://localhost:8080/");
        assert_eq!(trailing.ads_url(), "http://localhost:8080/api/ads");

        let full = client.with_base_url("http://localhost:9090/api/ads");
        assert_eq!(full.ads_url(), "http://localhost:9090/api/ads");
    }
}
