//! In-memory [`ProfileApi`] for isolating services in tests.

use std::sync::Mutex;
use std::time::Duration;

use crate::api::{ApiError, ApiResult, ImportUpload, ProfileApi};
use crate::domain::profile::{CategorySummary, ProfileRecord, ProfileStats, SearchPage};
use crate::dto::upload::ImportResponse;

fn unavailable(endpoint: &str) -> ApiError {
    ApiError::Status {
        status: 503,
        endpoint: endpoint.to_string(),
    }
}

/// Canned responses plus a log of every call in the order it was made.
#[derive(Default)]
pub struct FakeProfileApi {
    pub advanced: Option<SearchPage>,
    pub list: Option<Vec<ProfileRecord>>,
    pub categories: Option<CategorySummary>,
    pub import: Option<ImportResponse>,
    pub csv: Option<Vec<u8>>,
    pub stats: Option<ProfileStats>,
    /// Queries containing this marker answer after [`FakeProfileApi::slow_delay`].
    pub slow_marker: Option<String>,
    pub slow_delay: Duration,
    pub calls: Mutex<Vec<String>>,
    pub uploads: Mutex<Vec<ImportUpload>>,
}

impl FakeProfileApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    async fn maybe_stall(&self, query: &str) {
        if let Some(marker) = &self.slow_marker {
            if query.contains(marker.as_str()) {
                tokio::time::sleep(self.slow_delay).await;
            }
        }
    }
}

pub fn record(name: &str) -> ProfileRecord {
    ProfileRecord {
        name: Some(name.to_string()),
        ..ProfileRecord::default()
    }
}

pub fn records(count: usize) -> Vec<ProfileRecord> {
    (0..count).map(|i| record(&format!("Profile {i}"))).collect()
}

impl ProfileApi for FakeProfileApi {
    async fn search_advanced(&self, query: &str) -> ApiResult<SearchPage> {
        self.record(format!("search-adv?{query}"));
        self.maybe_stall(query).await;
        self.advanced.clone().ok_or_else(|| unavailable("search-adv"))
    }

    async fn list_profiles(&self, query: &str) -> ApiResult<Vec<ProfileRecord>> {
        self.record(format!("list?{query}"));
        self.list.clone().ok_or_else(|| unavailable("list"))
    }

    async fn profiles_by_category(&self, limit: usize) -> ApiResult<CategorySummary> {
        self.record(format!("by-category?limit={limit}"));
        self.categories.clone().ok_or_else(|| unavailable("by-category"))
    }

    async fn import_profiles(&self, upload: ImportUpload) -> ApiResult<ImportResponse> {
        self.record(format!("import {}", upload.file_name));
        if let Ok(mut uploads) = self.uploads.lock() {
            uploads.push(upload);
        }
        match &self.import {
            Some(response) => Ok(ImportResponse {
                message: response.message.clone(),
                stats: response.stats,
            }),
            None => Err(unavailable("import")),
        }
    }

    async fn export_csv(&self, query: &str) -> ApiResult<Vec<u8>> {
        self.record(format!("export-csv?{query}"));
        self.csv.clone().ok_or_else(|| unavailable("export-csv"))
    }

    async fn stats(&self) -> ApiResult<ProfileStats> {
        self.record("stats".to_string());
        self.stats.ok_or_else(|| unavailable("stats"))
    }
}
