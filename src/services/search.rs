//! Search orchestration: advanced endpoint first, list endpoint as fallback.

use crate::api::ProfileApi;
use crate::domain::profile::ProfileRecord;
use crate::domain::search::{PageSummary, SearchState, TotalCount};
use crate::query::build_query;
use crate::services::ServiceResult;

/// Result of one search round trip.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// State the search ran with, with `last_batch_count` filled in.
    pub state: SearchState,
    pub items: Vec<ProfileRecord>,
    pub total: TotalCount,
    pub summary: PageSummary,
}

/// Runs the search described by `state`.
///
/// When the advanced endpoint fails for any reason the list endpoint is
/// queried with the same parameters and the total becomes a lower bound
/// (`skip + items`). Only a failure of both endpoints is returned as an error.
pub async fn search_profiles<A>(api: &A, state: &SearchState) -> ServiceResult<SearchOutcome>
where
    A: ProfileApi,
{
    let query = build_query(&state.filters, &state.page)?;

    let (items, total) = match api.search_advanced(&query).await {
        Ok(page) => {
            let total = TotalCount::Exact(page.total);
            (page.items, total)
        }
        Err(err) => {
            log::warn!("Advanced search failed, falling back to list endpoint: {err}");
            let items = api.list_profiles(&query).await.map_err(|err| {
                log::error!("Failed to fetch profiles: {err}");
                err
            })?;
            let total = TotalCount::Approximate(state.page.skip.saturating_add(items.len()));
            (items, total)
        }
    };

    let summary = PageSummary::compute(&state.page, total, items.len());
    let state = state.clone().record_batch(items.len());

    Ok(SearchOutcome {
        state,
        items,
        total,
        summary,
    })
}
