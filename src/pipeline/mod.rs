//! Search, filter, sort and paginate an in-memory record collection.
//!
//! Every function here is pure: records are only borrowed, and calling
//! [`view`] twice with the same arguments yields the same result.

mod filters;
mod sort;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::record::Entity;

pub use filters::{parse_date, DATE_FORMAT};
pub use sort::{sort, SortDirection, SortSpec};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 4;

/// What view of a collection to produce. Rebuilt on every interaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Query {
    pub search_text: String,
    /// Field name to accepted value. An empty value imposes no constraint.
    pub field_filters: BTreeMap<String, String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub sort: Option<SortSpec>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            field_filters: BTreeMap::new(),
            date_from: None,
            date_to: None,
            sort: None,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.field_filters.insert(field.into(), value.into());
        self
    }

    pub fn with_date_from(mut self, date: impl Into<String>) -> Self {
        self.date_from = Some(date.into());
        self
    }

    pub fn with_date_to(mut self, date: impl Into<String>) -> Self {
        self.date_to = Some(date.into());
        self
    }

    pub fn with_sort(mut self, spec: SortSpec) -> Self {
        self.sort = Some(spec);
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

/// One page of a filtered collection plus the metadata pagination controls
/// need. Serialized field names are part of the presentation contract.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResult<'a, T> {
    pub items: Vec<&'a T>,
    pub total_count: usize,
    pub total_pages: usize,
    pub page_start: usize,
    pub page_end: usize,
    /// The page actually shown, after clamping.
    pub page: usize,
    pub page_size: usize,
}

impl<T> ViewResult<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn summary(&self) -> String {
        format!(
            "Showing {}–{} of {}",
            self.page_start, self.page_end, self.total_count
        )
    }
}

/// Records matching the search text, every non-empty field filter and the
/// date range, in input order.
pub fn filter<'a, T: Entity>(records: &'a [T], query: &Query) -> Vec<&'a T> {
    let needle = query.search_text.to_lowercase();
    let bounds =
        filters::DateBounds::from_query(query.date_from.as_deref(), query.date_to.as_deref());
    records
        .iter()
        .filter(|r| needle.is_empty() || filters::matches_search(*r, &needle))
        .filter(|r| filters::matches_field_filters(*r, &query.field_filters))
        .filter(|r| bounds.admits(r.date_span()))
        .collect()
}

/// The full filtered subset in display order: [`filter`], then the query's
/// explicit sort if it has one.
pub fn select<'a, T: Entity>(records: &'a [T], query: &Query) -> Vec<&'a T> {
    let mut selected = filter(records, query);
    if let Some(spec) = query.sort.as_ref() {
        sort(&mut selected, spec);
    }
    selected
}

/// Slices one page out of `filtered`. Out-of-range pages are clamped into
/// `[1, total_pages]` and a zero page size is treated as one.
pub fn paginate<'a, T>(filtered: &[&'a T], page: usize, page_size: usize) -> ViewResult<'a, T> {
    let page_size = page_size.max(1);
    let total_count = filtered.len();
    let total_pages = total_count.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * page_size;
    let end = start.saturating_add(page_size).min(total_count);

    ViewResult {
        items: filtered[start..end].to_vec(),
        total_count,
        total_pages,
        page_start: if total_count > 0 { start + 1 } else { 0 },
        page_end: end,
        page,
        page_size,
    }
}

pub fn view<'a, T: Entity>(records: &'a [T], query: &Query) -> ViewResult<'a, T> {
    let selected = select(records, query);
    let result = paginate(&selected, query.page, query.page_size);
    trace!(
        kind = T::KIND.as_str(),
        total = result.total_count,
        page = result.page,
        pages = result.total_pages,
        "computed view"
    );
    result
}
