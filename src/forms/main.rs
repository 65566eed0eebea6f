use serde::Deserialize;
use validator::Validate;

use crate::domain::search::{DEFAULT_PAGE_SIZE, FilterState, PageState, SearchState};

/// Query parameters of the table view.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SearchForm {
    #[validate(length(max = 200))]
    pub q: Option<String>,
    #[validate(length(max = 200))]
    pub role: Option<String>,
    #[validate(length(max = 200))]
    pub location: Option<String>,
    #[validate(length(max = 200))]
    pub skill: Option<String>,
    #[validate(length(max = 200))]
    pub category: Option<String>,
    #[validate(range(max = 1_000_000_000))]
    pub skip: Option<usize>,
}

fn trimmed(value: Option<String>) -> String {
    value.map(|s| s.trim().to_string()).unwrap_or_default()
}

impl SearchForm {
    pub fn filters(&self) -> FilterState {
        FilterState {
            q: trimmed(self.q.clone()),
            role: trimmed(self.role.clone()),
            location: trimmed(self.location.clone()),
            skill: trimmed(self.skill.clone()),
            category: trimmed(self.category.clone()),
        }
    }

    pub fn into_state(self) -> SearchState {
        let page = PageState::at(self.skip.unwrap_or(0), DEFAULT_PAGE_SIZE);
        SearchState::new(self.filters(), page)
    }
}
