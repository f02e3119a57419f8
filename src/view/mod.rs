//! Credential list view-model
//!
//! Pure projection of a record snapshot into what the list renders:
//! search filter, then pagination, plus strength counts over the
//! unfiltered snapshot.

mod filter;
mod pagination;
mod stats;

pub use filter::filter_records;
pub use pagination::{
    PageItem, PageSize, PageSizeError, PageState, Pagination, page_numbers, paginate,
};
pub use stats::StrengthCounts;

use crate::record::CredentialRecord;

/// Everything the list needs to render one page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<'a> {
    /// Records on the current page, in source order.
    pub visible: Vec<&'a CredentialRecord>,
    pub pagination: Pagination,
    /// Number of records matching the search.
    pub matched: usize,
    /// Counts over the full snapshot, independent of search and page.
    pub counts: StrengthCounts,
}

impl ListView<'_> {
    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages
    }

    pub fn first_index(&self) -> usize {
        self.pagination.first_index
    }

    pub fn last_index(&self) -> usize {
        self.pagination.last_index
    }

    pub fn is_empty(&self) -> bool {
        self.matched == 0
    }

    /// Noun for the item badge ("1 item", "3 items").
    pub fn item_noun(&self) -> &'static str {
        if self.matched == 1 { "item" } else { "items" }
    }
}

/// Derives the visible page from a snapshot, a search text and a page state.
///
/// An out-of-range page is clamped, never an error.
pub fn derive<'a>(records: &'a [CredentialRecord], search: &str, page: &PageState) -> ListView<'a> {
    let filtered = filter_records(records, search);
    let pagination = paginate(filtered.len(), page.page_size().get(), page.current_page());
    let matched = filtered.len();
    let visible = filtered[pagination.range()].to_vec();

    ListView {
        visible,
        pagination,
        matched,
        counts: StrengthCounts::from_records(records),
    }
}
