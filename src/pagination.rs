use serde::Serialize;

use crate::domain::search::{PageSummary, SearchState};
use crate::query::{QueryResult, view_href};

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PageLink {
    pub number: usize,
    pub href: String,
    pub current: bool,
}

/// Links rendered under the result table.
///
/// Numbered pages are only offered when the total is exact; an approximate
/// total only supports stepping back and forth.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PageLinks {
    pub prev: Option<String>,
    pub next: Option<String>,
    pub pages: Vec<Option<PageLink>>,
}

impl PageLinks {
    pub fn new(state: &SearchState, summary: &PageSummary) -> QueryResult<Self> {
        let prev = state.prev_page().as_ref().map(view_href).transpose()?;
        let next = state.next_page(summary).as_ref().map(view_href).transpose()?;

        let pages = if summary.total_is_exact {
            get_pages(summary.total_pages, summary.current_page, 2, 2, 4, 2)
                .into_iter()
                .map(|page| {
                    page.map(|number| {
                        view_href(&state.at_page(number)).map(|href| PageLink {
                            number,
                            href,
                            current: number == summary.current_page,
                        })
                    })
                    .transpose()
                })
                .collect::<QueryResult<Vec<_>>>()?
        } else {
            Vec::new()
        };

        Ok(Self { prev, next, pages })
    }
}
