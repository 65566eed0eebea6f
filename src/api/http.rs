use std::time::Duration;

use reqwest::RequestBuilder;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

use crate::api::{
    ApiError, ApiResult, BY_CATEGORY_PATH, EXPORT_CSV_PATH, IMPORT_PATH, ImportUpload,
    LIST_PATH, ProfileApi, SEARCH_ADVANCED_PATH, STATS_PATH,
};
use crate::domain::profile::{CategorySummary, ProfileRecord, ProfileStats, SearchPage};
use crate::dto::upload::ImportResponse;

/// [`ProfileApi`] backed by `reqwest`.
#[derive(Clone, Debug)]
pub struct HttpProfileApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProfileApi {
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}{path}?{query}", self.base_url)
        }
    }

    /// Sends the request and returns the body of a successful response.
    async fn send(&self, request: RequestBuilder, endpoint: &str) -> ApiResult<Vec<u8>> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &str) -> ApiResult<T> {
        let body = self.send(self.client.get(self.url(path, query)), path).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl ProfileApi for HttpProfileApi {
    async fn search_advanced(&self, query: &str) -> ApiResult<SearchPage> {
        self.get_json(SEARCH_ADVANCED_PATH, query).await
    }

    async fn list_profiles(&self, query: &str) -> ApiResult<Vec<ProfileRecord>> {
        self.get_json(LIST_PATH, query).await
    }

    async fn profiles_by_category(&self, limit: usize) -> ApiResult<CategorySummary> {
        self.get_json(BY_CATEGORY_PATH, &format!("limit={limit}"))
            .await
    }

    async fn import_profiles(&self, upload: ImportUpload) -> ApiResult<ImportResponse> {
        let mut part = Part::bytes(upload.content).file_name(upload.file_name);
        if let Some(mime) = upload.content_type.as_deref() {
            part = part.mime_str(mime)?;
        }

        let mut request = self
            .client
            .post(self.url(IMPORT_PATH, ""))
            .multipart(Form::new().part("file", part));
        if let Some(category) = upload.category.as_deref() {
            request = request.query(&[("category", category)]);
        }

        let body = self.send(request, IMPORT_PATH).await?;
        // Any JSON body counts as success; the stats are read when present.
        let value: serde_json::Value = serde_json::from_slice(&body)?;
        Ok(serde_json::from_value(value).unwrap_or_default())
    }

    async fn export_csv(&self, query: &str) -> ApiResult<Vec<u8>> {
        self.send(
            self.client.get(self.url(EXPORT_CSV_PATH, query)),
            EXPORT_CSV_PATH,
        )
        .await
    }

    async fn stats(&self) -> ApiResult<ProfileStats> {
        self.get_json(STATS_PATH, "").await
    }
}
