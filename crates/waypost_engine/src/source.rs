use std::time::Duration;

use serde::de::DeserializeOwned;
use waypost_core::Cursor;

use crate::types::{map_reqwest_error, RawEntity, RawQueryResponse, SourceError};

#[derive(Debug, Clone)]
pub struct SourceSettings {
    /// Base URL of the content repository, without a trailing slash.
    pub base_url: String,
    /// Content type queried for listings and detail lookups.
    pub content_type: String,
    /// Page size requested from the source; the seed page uses it too.
    pub page_size: u32,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            content_type: "posts".to_string(),
            page_size: 3,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The content repository, specified at its interface.
#[async_trait::async_trait]
pub trait ContentSource: Send + Sync {
    /// First listing page for the configured content type.
    async fn query_by_type(&self) -> Result<RawQueryResponse, SourceError>;
    /// Continuation page; the cursor URL is requested verbatim.
    async fn query_by_cursor(&self, cursor: &Cursor) -> Result<RawQueryResponse, SourceError>;
    /// Single entity lookup; `SourceError::NotFound` when the id does not
    /// exist.
    async fn query_by_id(&self, id: &str) -> Result<RawEntity, SourceError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestContentSource {
    settings: SourceSettings,
    client: reqwest::Client,
}

impl ReqwestContentSource {
    pub fn new(settings: SourceSettings) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(map_reqwest_error)?;
        Ok(Self { settings, client })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, SourceError> {
        let response = request.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound);
        }
        if !status.is_success() {
            return Err(SourceError::Http {
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(map_reqwest_error)
    }
}

#[async_trait::async_trait]
impl ContentSource for ReqwestContentSource {
    async fn query_by_type(&self) -> Result<RawQueryResponse, SourceError> {
        let url = format!("{}/api/documents", self.settings.base_url);
        let request = self.client.get(url).query(&[
            ("type", self.settings.content_type.as_str()),
            ("page_size", &self.settings.page_size.to_string()),
        ]);
        self.get_json(request).await
    }

    async fn query_by_cursor(&self, cursor: &Cursor) -> Result<RawQueryResponse, SourceError> {
        self.get_json(self.client.get(cursor.as_str())).await
    }

    async fn query_by_id(&self, id: &str) -> Result<RawEntity, SourceError> {
        let url = format!("{}/api/documents/{}", self.settings.base_url, id);
        let request = self
            .client
            .get(url)
            .query(&[("type", self.settings.content_type.as_str())]);
        self.get_json(request).await
    }
}
