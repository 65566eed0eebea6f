//! Canonical query strings for the remote API and for local view links.
//!
//! Keys are emitted in a fixed order (`q, role, location, skill, category`,
//! then paging keys) and empty filters are omitted.

use thiserror::Error;

use crate::domain::search::{FilterField, FilterState, PageState, SearchState};

#[derive(Debug, Error)]
#[error("failed to encode query: {0}")]
pub struct QueryError(#[from] serde_html_form::ser::Error);

pub type QueryResult<T> = Result<T, QueryError>;

fn filter_pairs(filters: &FilterState) -> Vec<(&'static str, String)> {
    FilterField::ALL
        .into_iter()
        .filter_map(|field| {
            filters
                .value(field)
                .map(|value| (field.key(), value.to_string()))
        })
        .collect()
}

/// Query string sent to the search endpoints. `skip` and `limit` are always present.
pub fn build_query(filters: &FilterState, page: &PageState) -> QueryResult<String> {
    let mut pairs = filter_pairs(filters);
    pairs.push(("skip", page.skip.to_string()));
    pairs.push(("limit", page.limit.to_string()));
    Ok(serde_html_form::to_string(&pairs)?)
}

/// Query string carrying only the filters, as used by the CSV export.
pub fn filter_query(filters: &FilterState) -> QueryResult<String> {
    Ok(serde_html_form::to_string(filter_pairs(filters))?)
}

/// Local link to the table view for `state`; `skip` is left out on the first page.
pub fn view_href(state: &SearchState) -> QueryResult<String> {
    let mut pairs = filter_pairs(&state.filters);
    if state.page.skip > 0 {
        pairs.push(("skip", state.page.skip.to_string()));
    }
    let query = serde_html_form::to_string(&pairs)?;
    if query.is_empty() {
        Ok("/".to_string())
    } else {
        Ok(format!("/?{query}"))
    }
}

/// Local link to the category view that keeps the current filters.
pub fn categories_href(filters: &FilterState) -> QueryResult<String> {
    let query = filter_query(filters)?;
    if query.is_empty() {
        Ok("/categories".to_string())
    } else {
        Ok(format!("/categories?{query}"))
    }
}
