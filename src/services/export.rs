use crate::api::ProfileApi;
use crate::domain::search::FilterState;
use crate::query::{QueryResult, filter_query};
use crate::services::ServiceResult;

/// Local route serving the CSV export.
pub const EXPORT_ROUTE: &str = "/profiles/export.csv";

/// Link to the CSV export of everything matching `filters`.
pub fn export_href(filters: &FilterState) -> QueryResult<String> {
    let query = filter_query(filters)?;
    if query.is_empty() {
        Ok(EXPORT_ROUTE.to_string())
    } else {
        Ok(format!("{EXPORT_ROUTE}?{query}"))
    }
}

/// Fetches the CSV export for `filters` from the search service.
pub async fn export_profiles<A>(api: &A, filters: &FilterState) -> ServiceResult<Vec<u8>>
where
    A: ProfileApi,
{
    let query = filter_query(filters)?;
    let csv = api.export_csv(&query).await.map_err(|err| {
        log::error!("Failed to export profiles: {err}");
        err
    })?;
    Ok(csv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeProfileApi;

    #[tokio::test]
    async fn export_forwards_filters_without_paging() {
        let api = FakeProfileApi {
            csv: Some(b"Profile ID,Name\n".to_vec()),
            ..FakeProfileApi::default()
        };
        let filters = FilterState {
            category: "Data & AI".to_string(),
            ..FilterState::default()
        };

        let csv = export_profiles(&api, &filters).await.unwrap();

        assert_eq!(csv, b"Profile ID,Name\n");
        assert_eq!(api.calls(), vec!["export-csv?category=Data+%26+AI"]);
        assert_eq!(export_href(&FilterState::default()).unwrap(), EXPORT_ROUTE);
    }
}
