use crate::api::ProfileApi;
use crate::domain::profile::{CategorySummary, ProfileRecord};
use crate::domain::search::SearchState;
use crate::dto::categories::{CategoriesPageData, CategoryCard};
use crate::dto::main::ViewToggle;
use crate::query::view_href;
use crate::render::{TRUNCATE_AT, truncate_chars};
use crate::services::ServiceResult;

/// Number of categories shown in the summary view.
pub const CATEGORY_LIMIT: usize = 6;
/// Sample profiles shown on each card.
pub const SAMPLES_PER_CATEGORY: usize = 3;

fn sample_line(record: &ProfileRecord) -> String {
    let line = format!("{} — {}", record.name(), record.current_company());
    truncate_chars(&line, TRUNCATE_AT).unwrap_or(line)
}

/// Cards for the top categories. Each "Filter" link keeps the other filters of `state`.
fn build_cards(summary: CategorySummary, state: &SearchState) -> ServiceResult<Vec<CategoryCard>> {
    summary
        .categories
        .into_iter()
        .take(CATEGORY_LIMIT)
        .map(|(name, group)| -> ServiceResult<CategoryCard> {
            let filter_href = view_href(&state.clone().select_category(name.as_str()))?;
            let samples = group
                .profiles
                .iter()
                .take(SAMPLES_PER_CATEGORY)
                .map(sample_line)
                .collect();
            Ok(CategoryCard {
                name,
                count: group.count,
                samples,
                filter_href,
            })
        })
        .collect()
}

/// Fetches the category breakdown. Nothing is cached; every call hits the service.
pub async fn load_categories<A>(api: &A, state: &SearchState) -> ServiceResult<CategoriesPageData>
where
    A: ProfileApi,
{
    let summary = api
        .profiles_by_category(CATEGORY_LIMIT)
        .await
        .map_err(|err| {
            log::error!("Failed to fetch categories: {err}");
            err
        })?;

    Ok(CategoriesPageData {
        cards: build_cards(summary, state)?,
        toggle: ViewToggle::new(state)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{FakeProfileApi, record};
    use crate::domain::profile::CategoryGroup;
    use crate::domain::search::FilterField;

    fn group(count: usize, names: &[&str]) -> CategoryGroup {
        CategoryGroup {
            count,
            profiles: names.iter().map(|name| record(name)).collect(),
        }
    }

    #[tokio::test]
    async fn cards_are_capped_and_link_to_filtered_table() {
        let categories = (1..=8)
            .map(|i| (format!("Cat {i}"), group(100 - i, &["A", "B", "C", "D"])))
            .collect();
        let api = FakeProfileApi {
            categories: Some(CategorySummary { categories }),
            ..FakeProfileApi::default()
        };

        let data = load_categories(&api, &SearchState::default()).await.unwrap();

        assert_eq!(data.cards.len(), CATEGORY_LIMIT);
        assert_eq!(data.cards[0].name, "Cat 1");
        assert_eq!(data.cards[0].count, 99);
        assert_eq!(data.cards[0].samples, vec!["A — ", "B — ", "C — "]);
        assert_eq!(data.cards[0].filter_href, "/?category=Cat+1");
        assert_eq!(api.calls(), vec!["by-category?limit=6"]);
    }

    #[tokio::test]
    async fn filter_links_keep_current_filters() {
        let categories = vec![("Backend".to_string(), group(3, &["A"]))];
        let api = FakeProfileApi {
            categories: Some(CategorySummary { categories }),
            ..FakeProfileApi::default()
        };
        let state = SearchState::default()
            .with_filter(FilterField::Query, "rust")
            .with_filter(FilterField::Location, "Berlin")
            .with_filter(FilterField::Category, "Frontend");

        let data = load_categories(&api, &state).await.unwrap();

        assert_eq!(
            data.cards[0].filter_href,
            "/?q=rust&location=Berlin&category=Backend"
        );
        assert_eq!(data.toggle.table_href, "/?q=rust&location=Berlin&category=Frontend");
        assert_eq!(
            data.toggle.categories_href,
            "/categories?q=rust&location=Berlin&category=Frontend"
        );
    }

    #[test]
    fn long_sample_lines_are_cut() {
        let mut profile = record("Alexandria Ocasio-Something");
        profile.current_company = Some("United States Congress".to_string());

        let line = sample_line(&profile);

        assert_eq!(line.chars().count(), TRUNCATE_AT + 1);
        assert!(line.ends_with('…'));
    }

    #[tokio::test]
    async fn failure_is_reported() {
        let api = FakeProfileApi::default();

        assert!(load_categories(&api, &SearchState::default()).await.is_err());
    }
}
