use crate::api::ProfileApi;
use crate::domain::search::SearchState;
use crate::dto::main::{IndexPageData, ProfileRow, ViewToggle};
use crate::pagination::PageLinks;
use crate::query::view_href;
use crate::services::ServiceResult;
use crate::services::export::export_href;
use crate::services::search::search_profiles;

/// Loads the result table for the main index page.
///
/// The collection stats are fetched concurrently with the search.
pub async fn load_index_page<A>(api: &A, state: &SearchState) -> ServiceResult<IndexPageData>
where
    A: ProfileApi,
{
    let (outcome, stats) = tokio::join!(search_profiles(api, state), api.stats());
    let outcome = outcome?;

    let rows = outcome
        .items
        .iter()
        .enumerate()
        .map(|(index, record)| ProfileRow::new(index, record))
        .collect();
    let links = PageLinks::new(&outcome.state, &outcome.summary)?;
    let reset_href = view_href(&outcome.state.clone().reset())?;
    let export_href = export_href(&outcome.state.filters)?;
    let toggle = ViewToggle::new(&outcome.state)?;

    let total_profiles = match stats {
        Ok(stats) => Some(stats.total_profiles),
        Err(err) => {
            log::warn!("Failed to load profile stats: {err}");
            None
        }
    };

    Ok(IndexPageData {
        rows,
        summary: outcome.summary,
        links,
        filters: outcome.state.filters,
        reset_href,
        export_href,
        total_profiles,
        toggle,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{FakeProfileApi, records};
    use crate::domain::profile::{ProfileRecord, ProfileStats, SearchPage};
    use crate::domain::search::FilterField;

    #[tokio::test]
    async fn index_page_builds_rows_and_links() {
        let mut items = records(2);
        items[1] = ProfileRecord {
            name: Some("Grace".to_string()),
            current_role: Some("Rear Admiral and Computer Scientist".to_string()),
            skills: (1..=8).map(|i| format!("s{i}")).collect(),
            ..ProfileRecord::default()
        };
        let api = FakeProfileApi {
            advanced: Some(SearchPage { items, total: 42 }),
            stats: Some(ProfileStats { total_profiles: 900 }),
            ..FakeProfileApi::default()
        };
        let state = SearchState::default()
            .with_filter(FilterField::Query, "navy")
            .with_filter(FilterField::Skill, "cobol");

        let data = load_index_page(&api, &state).await.unwrap();

        assert_eq!(data.rows.len(), 2);
        assert_eq!(data.rows[1].key, "row-1");
        assert!(data.rows[1].role.is_truncated());
        assert_eq!(data.rows[1].skills.badges.len(), 6);
        assert_eq!(data.summary.total_pages, 3);
        assert_eq!(data.links.next.as_deref(), Some("/?q=navy&skill=cobol&skip=20"));
        assert_eq!(data.reset_href, "/?q=navy");
        assert_eq!(data.export_href, "/profiles/export.csv?q=navy&skill=cobol");
        assert_eq!(data.total_profiles, Some(900));
        assert_eq!(data.toggle.table_href, "/?q=navy&skill=cobol");
        assert_eq!(data.toggle.categories_href, "/categories?q=navy&skill=cobol");
    }

    #[tokio::test]
    async fn stats_failure_only_hides_the_figure() {
        let api = FakeProfileApi {
            advanced: Some(SearchPage::default()),
            ..FakeProfileApi::default()
        };

        let data = load_index_page(&api, &SearchState::default()).await.unwrap();

        assert!(data.rows.is_empty());
        assert_eq!(data.total_profiles, None);
    }

    #[tokio::test]
    async fn search_failure_wins_over_stats() {
        let api = FakeProfileApi {
            stats: Some(ProfileStats { total_profiles: 900 }),
            ..FakeProfileApi::default()
        };

        let result = load_index_page(&api, &SearchState::default()).await;

        assert!(result.is_err());
        assert!(api.calls().contains(&"stats".to_string()));
    }
}
