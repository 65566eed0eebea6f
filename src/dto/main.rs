//! DTOs shaped for the result table template.

use serde::Serialize;

use crate::domain::profile::ProfileRecord;
use crate::domain::search::{FilterState, PageSummary, SearchState};
use crate::pagination::PageLinks;
use crate::query::{QueryResult, categories_href, view_href};
use crate::render::{SkillsCell, TextCell};

/// One table row, already cut to the inline display policy.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProfileRow {
    /// Prefix used to build unique dialog ids inside the page.
    pub key: String,
    pub profile_url: String,
    pub name: String,
    pub role: TextCell,
    pub education: TextCell,
    pub location: TextCell,
    pub category: TextCell,
    pub skills: SkillsCell,
}

impl ProfileRow {
    pub fn new(index: usize, record: &ProfileRecord) -> Self {
        Self {
            key: format!("row-{index}"),
            profile_url: record.profile_url().to_string(),
            name: record.name().to_string(),
            role: TextCell::new(record.current_role()),
            education: TextCell::new(record.first_institute()),
            location: TextCell::new(record.location()),
            category: TextCell::new(record.category()),
            skills: SkillsCell::new(&record.skills),
        }
    }
}

/// Links of the table/categories toggle; both carry the current filters.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ViewToggle {
    pub table_href: String,
    pub categories_href: String,
}

impl ViewToggle {
    pub fn new(state: &SearchState) -> QueryResult<Self> {
        Ok(Self {
            table_href: view_href(state)?,
            categories_href: categories_href(&state.filters)?,
        })
    }
}

/// Data required to render the main index template.
#[derive(Debug)]
pub struct IndexPageData {
    pub rows: Vec<ProfileRow>,
    pub summary: PageSummary,
    pub links: PageLinks,
    /// Filters echoed back into the search form.
    pub filters: FilterState,
    /// Link that clears every filter but the global query.
    pub reset_href: String,
    /// Link to the CSV export of the current filters.
    pub export_href: String,
    /// Size of the whole collection, when the stats endpoint answered.
    pub total_profiles: Option<usize>,
    pub toggle: ViewToggle,
}
