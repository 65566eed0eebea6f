//! DTOs used by the category summary view.

use serde::Serialize;

use crate::dto::main::ViewToggle;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryCard {
    pub name: String,
    pub count: usize,
    /// "name — company" lines, each cut to the inline display policy.
    pub samples: Vec<String>,
    /// Table view filtered by this category, from the first page.
    pub filter_href: String,
}

/// Data required to render the categories template.
#[derive(Debug)]
pub struct CategoriesPageData {
    pub cards: Vec<CategoryCard>,
    pub toggle: ViewToggle,
}
