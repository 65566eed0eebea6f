//! Client side of the remote Profile Search Service.

use std::future::Future;

use crate::domain::profile::{CategorySummary, ProfileRecord, ProfileStats, SearchPage};
use crate::dto::upload::ImportResponse;

pub mod errors;
#[cfg(test)]
pub mod fake;
pub mod http;

pub use errors::{ApiError, ApiResult};
pub use http::HttpProfileApi;

/// Advanced search endpoint, relative to the service base URL.
pub const SEARCH_ADVANCED_PATH: &str = "/api/profiles/search-adv";
/// Fallback list endpoint; answers a bare array without a total.
pub const LIST_PATH: &str = "/api/profiles";
pub const BY_CATEGORY_PATH: &str = "/api/profiles/by-category";
pub const IMPORT_PATH: &str = "/api/profiles/import";
pub const EXPORT_CSV_PATH: &str = "/api/profiles/export-csv";
pub const STATS_PATH: &str = "/api/profiles/stats";

/// File forwarded to the import endpoint.
#[derive(Debug, Clone)]
pub struct ImportUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub content: Vec<u8>,
    pub category: Option<String>,
}

/// Operations offered by the Profile Search Service.
///
/// Query arguments are complete, already encoded query strings as produced by
/// [`crate::query`].
pub trait ProfileApi: Send + Sync {
    fn search_advanced(&self, query: &str) -> impl Future<Output = ApiResult<SearchPage>> + Send;

    fn list_profiles(
        &self,
        query: &str,
    ) -> impl Future<Output = ApiResult<Vec<ProfileRecord>>> + Send;

    fn profiles_by_category(
        &self,
        limit: usize,
    ) -> impl Future<Output = ApiResult<CategorySummary>> + Send;

    fn import_profiles(
        &self,
        upload: ImportUpload,
    ) -> impl Future<Output = ApiResult<ImportResponse>> + Send;

    fn export_csv(&self, query: &str) -> impl Future<Output = ApiResult<Vec<u8>>> + Send;

    fn stats(&self) -> impl Future<Output = ApiResult<ProfileStats>> + Send;
}
