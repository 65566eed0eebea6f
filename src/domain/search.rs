//! Search state and the pure functions that update it.
//!
//! Every user action maps to a function taking the current [`SearchState`]
//! and returning the next one, so handlers and the live-search driver never
//! share mutable globals.

use serde::Serialize;

/// Page size used for the whole session.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Identifies one of the filter inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterField {
    Query,
    Role,
    Location,
    Skill,
    Category,
}

impl FilterField {
    pub const ALL: [FilterField; 5] = [
        FilterField::Query,
        FilterField::Role,
        FilterField::Location,
        FilterField::Skill,
        FilterField::Category,
    ];

    /// Query-string key of the field.
    pub const fn key(self) -> &'static str {
        match self {
            FilterField::Query => "q",
            FilterField::Role => "role",
            FilterField::Location => "location",
            FilterField::Skill => "skill",
            FilterField::Category => "category",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// Filter values; an empty string means "no constraint".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub q: String,
    pub role: String,
    pub location: String,
    pub skill: String,
    pub category: String,
}

impl FilterState {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Query => &self.q,
            FilterField::Role => &self.role,
            FilterField::Location => &self.location,
            FilterField::Skill => &self.skill,
            FilterField::Category => &self.category,
        }
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::Query => self.q = value,
            FilterField::Role => self.role = value,
            FilterField::Location => self.location = value,
            FilterField::Skill => self.skill = value,
            FilterField::Category => self.category = value,
        }
    }

    /// Returns the value of `field` or `None` when it is unset.
    pub fn value(&self, field: FilterField) -> Option<&str> {
        Some(self.get(field)).filter(|value| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        FilterField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }
}

/// Offset/limit pagination position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub skip: usize,
    pub limit: usize,
    /// Number of items returned by the most recent fetch.
    pub last_batch_count: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    pub fn new(limit: usize) -> Self {
        Self {
            skip: 0,
            limit: limit.max(1),
            last_batch_count: 0,
        }
    }

    /// Builds a position at `skip`, rounded down to a multiple of `limit`.
    pub fn at(skip: usize, limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            skip: skip - skip % limit,
            limit,
            last_batch_count: 0,
        }
    }

    /// One-based page number.
    pub fn current_page(&self) -> usize {
        (self.skip / self.limit).saturating_add(1)
    }
}

/// Total number of matches reported for a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TotalCount {
    /// Authoritative count from the advanced search endpoint.
    Exact(usize),
    /// Lower bound (`skip + items`) used when only the list endpoint answered.
    Approximate(usize),
}

impl TotalCount {
    pub fn value(self) -> usize {
        match self {
            TotalCount::Exact(total) | TotalCount::Approximate(total) => total,
        }
    }

    pub fn is_exact(self) -> bool {
        matches!(self, TotalCount::Exact(_))
    }
}

/// Pagination figures shown next to the result table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub total: usize,
    pub total_is_exact: bool,
    pub current_page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PageSummary {
    pub fn compute(page: &PageState, total: TotalCount, batch_len: usize) -> Self {
        let current_page = page.current_page();
        let total_pages = total.value().div_ceil(page.limit).max(1);
        let has_next = match total {
            TotalCount::Exact(total) => page.skip.saturating_add(page.limit) < total,
            // A short batch is taken as the last page.
            TotalCount::Approximate(_) => batch_len >= page.limit,
        };

        Self {
            total: total.value(),
            total_is_exact: total.is_exact(),
            current_page,
            total_pages,
            has_prev: page.skip != 0,
            has_next,
        }
    }
}

/// Complete UI state of a search session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub filters: FilterState,
    pub page: PageState,
}

impl SearchState {
    pub fn new(filters: FilterState, page: PageState) -> Self {
        Self { filters, page }
    }

    /// Changes one filter; the offset goes back to the first page.
    pub fn with_filter(mut self, field: FilterField, value: impl Into<String>) -> Self {
        self.filters.set(field, value);
        self.page.skip = 0;
        self
    }

    /// Re-runs the current filters from the first page.
    pub fn submit(mut self) -> Self {
        self.page.skip = 0;
        self
    }

    /// Clears role, location, skill and category. The global text query is kept.
    pub fn reset(mut self) -> Self {
        let q = std::mem::take(&mut self.filters.q);
        self.filters = FilterState {
            q,
            ..FilterState::default()
        };
        self.page.skip = 0;
        self
    }

    pub fn select_category(self, category: impl Into<String>) -> Self {
        self.with_filter(FilterField::Category, category)
    }

    pub fn record_batch(mut self, count: usize) -> Self {
        self.page.last_batch_count = count;
        self
    }

    pub fn prev_page(&self) -> Option<Self> {
        if self.page.skip == 0 {
            return None;
        }
        let mut prev = self.clone();
        prev.page.skip = self.page.skip.saturating_sub(self.page.limit);
        Some(prev)
    }

    pub fn next_page(&self, summary: &PageSummary) -> Option<Self> {
        if !summary.has_next {
            return None;
        }
        let skip = self.page.skip.checked_add(self.page.limit)?;
        let mut next = self.clone();
        next.page.skip = skip;
        Some(next)
    }

    /// Jumps to a one-based page number.
    pub fn at_page(&self, page: usize) -> Self {
        let mut state = self.clone();
        state.page.skip = page.saturating_sub(1).saturating_mul(self.page.limit);
        state
    }
}
